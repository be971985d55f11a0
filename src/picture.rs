use serde::{Deserialize, Serialize};
use url::Url;

use crate::mapper::{Mappable, ModelObject};

#[readonly::make]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Picture {
    pub width: u32,
    pub height: u32,
    pub link: Url,
}

impl Mappable for Picture {}

/// All the renditions of one image (a thumbnail, an avatar, a header).
#[readonly::make]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PictureCollection {
    #[serde(default)]
    pub uri: Option<String>,

    #[serde(default)]
    pub active: bool,

    #[serde(default, rename = "type")]
    pub kind: Option<String>,

    #[serde(default)]
    pub sizes: Vec<Picture>,
}

impl PictureCollection {
    /// Smallest rendition at least `width` wide, or the largest one available.
    pub fn picture_for_width(&self, width: u32) -> Option<&Picture> {
        self.sizes
            .iter()
            .filter(|p| p.width >= width)
            .min_by_key(|p| p.width)
            .or_else(|| self.sizes.iter().max_by_key(|p| p.width))
    }
}

impl Mappable for PictureCollection {
    fn did_finish_mapping(&mut self) {
        self.sizes.sort_by_key(|p| p.width);
    }
}

impl ModelObject for PictureCollection {
    fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }
}
