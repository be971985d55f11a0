use serde::{Deserialize, Serialize};

use crate::mapper::{Mappable, ModelObject};

#[readonly::make]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Soundtrack {
    pub uri: String,
    pub name: String,

    #[serde(default)]
    pub artist: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// Seconds.
    #[serde(default)]
    pub duration: Option<f64>,
}

impl Soundtrack {
    /// "name - artist", or the bare name when the artist is unknown.
    pub fn title(&self) -> String {
        match self.artist.as_deref() {
            Some(artist) if !artist.is_empty() => format!("{} - {}", self.name, artist),
            _ => self.name.clone(),
        }
    }
}

impl Mappable for Soundtrack {}

impl ModelObject for Soundtrack {
    fn uri(&self) -> Option<&str> {
        Some(&self.uri)
    }
}
