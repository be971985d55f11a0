use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use url::Url;

use crate::connection::CONNECTION_VIDEOS;
use crate::error::VimeoError;
use crate::interaction::INTERACTION_FOLLOW;
use crate::mapper::{Mappable, ModelObject};
use crate::metadata::Metadata;
use crate::picture::PictureCollection;
use crate::privacy::Privacy;
use crate::user::User;

#[readonly::make]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    pub uri: String,
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub link: Option<Url>,

    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_time: Option<OffsetDateTime>,

    #[serde(default, with = "time::serde::rfc3339::option")]
    pub modified_time: Option<OffsetDateTime>,

    #[serde(default)]
    pub user: Option<User>,

    #[serde(default)]
    pub pictures: Option<PictureCollection>,

    #[serde(default)]
    pub header: Option<PictureCollection>,

    #[serde(default)]
    pub privacy: Option<Privacy>,

    #[serde(default)]
    pub metadata: Option<Metadata>,
}

impl Channel {
    pub fn is_followed(&self) -> bool {
        self.interaction(INTERACTION_FOLLOW).map_or(false, |i| i.added)
    }

    pub fn video_count(&self) -> u64 {
        self.connection(CONNECTION_VIDEOS).map_or(0, |c| c.total())
    }
}

impl Mappable for Channel {
    fn did_finish_mapping(&mut self) {
        self.user.did_finish_mapping();
        self.pictures.did_finish_mapping();
        self.header.did_finish_mapping();
    }

    fn validate(&self) -> Result<(), VimeoError> {
        self.user.validate()?;
        self.pictures.validate()?;
        self.header.validate()
    }
}

impl ModelObject for Channel {
    fn uri(&self) -> Option<&str> {
        Some(&self.uri)
    }

    fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use crate::mapper::ObjectMapper;

    use super::*;

    #[test]
    fn channel() {
        let c: Channel = ObjectMapper::new().map_str(r#"{
            "uri": "/channels/staffpicks",
            "name": "Staff Picks",
            "created_time": "2008-07-01T00:00:00+00:00",
            "privacy": {"view": "anybody"},
            "header": {"active": true, "sizes": [
                {"width": 1920, "height": 300, "link": "https://i.vimeocdn.com/h_1920"},
                {"width": 960, "height": 150, "link": "https://i.vimeocdn.com/h_960"}
            ]},
            "metadata": {
                "connections": {"videos": {"uri": "/channels/staffpicks/videos", "options": ["GET"], "total": 9000}},
                "interactions": {"follow": {"added": false}}
            }
        }"#).unwrap();

        assert!(!c.is_followed());
        assert_eq!(c.video_count(), 9000);
        assert!(c.privacy.as_ref().unwrap().is_public());
        assert_eq!(c.header.as_ref().unwrap().sizes[0].width, 960);
    }
}
