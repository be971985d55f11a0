use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use url::Url;

use crate::connection::CONNECTION_USERS;
use crate::error::VimeoError;
use crate::interaction::INTERACTION_JOIN;
use crate::mapper::{Mappable, ModelObject};
use crate::metadata::Metadata;
use crate::picture::PictureCollection;
use crate::privacy::Privacy;
use crate::user::User;

#[readonly::make]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub uri: String,
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub link: Option<Url>,

    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_time: Option<OffsetDateTime>,

    #[serde(default)]
    pub pictures: Option<PictureCollection>,

    #[serde(default)]
    pub privacy: Option<Privacy>,

    #[serde(default)]
    pub user: Option<User>,

    #[serde(default)]
    pub metadata: Option<Metadata>,
}

impl Group {
    pub fn is_member(&self) -> bool {
        self.interaction(INTERACTION_JOIN).map_or(false, |i| i.added)
    }

    pub fn member_count(&self) -> u64 {
        self.connection(CONNECTION_USERS).map_or(0, |c| c.total())
    }
}

impl Mappable for Group {
    fn did_finish_mapping(&mut self) {
        self.user.did_finish_mapping();
        self.pictures.did_finish_mapping();
    }

    fn validate(&self) -> Result<(), VimeoError> {
        self.user.validate()?;
        self.pictures.validate()
    }
}

impl ModelObject for Group {
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
    fn membership() {
        let g: Group = ObjectMapper::new().map_str(r#"{
            "uri": "/groups/animation",
            "name": "Animation",
            "created_time": "2007-02-01T00:00:00+00:00",
            "privacy": {"view": "anybody"},
            "metadata": {
                "connections": {"users": {"uri": "/groups/animation/users", "options": ["GET"], "total": 31000}},
                "interactions": {"join": {"added": true, "added_time": "2014-09-09T09:00:00+00:00"}}
            }
        }"#).unwrap();

        assert!(g.is_member());
        assert_eq!(g.member_count(), 31000);
        assert_eq!(g.object_id(), Some("animation"));
    }

    #[test]
    fn no_metadata() {
        let g: Group = serde_json::from_str(r#"{"uri": "/groups/1", "name": "g"}"#).unwrap();
        assert!(!g.is_member());
        assert_eq!(g.member_count(), 0);
    }
}
