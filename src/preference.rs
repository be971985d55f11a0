use serde::{Deserialize, Serialize};

use crate::mapper::Mappable;
use crate::privacy::Privacy;

#[readonly::make]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoPreference {
    #[serde(default)]
    pub privacy: Option<Privacy>,
}

impl Mappable for VideoPreference {}

/// Defaults the user applies to new content.
#[readonly::make]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preference {
    #[serde(default)]
    pub videos: Option<VideoPreference>,
}

impl Preference {
    pub fn default_video_privacy(&self) -> Option<&Privacy> {
        self.videos.as_ref()?.privacy.as_ref()
    }
}

impl Mappable for Preference {}
