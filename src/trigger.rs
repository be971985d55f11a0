use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::mapper::{Mappable, ModelObject};

/// A push notification subscription registered for a device.
#[readonly::make]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trigger {
    pub uri: String,

    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_time: Option<OffsetDateTime>,

    #[serde(default, with = "time::serde::rfc3339::option")]
    pub modified_time: Option<OffsetDateTime>,

    #[serde(default)]
    pub video_uri: Option<String>,
}

impl Mappable for Trigger {}

impl ModelObject for Trigger {
    fn uri(&self) -> Option<&str> {
        Some(&self.uri)
    }
}
