use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::connection::CONNECTION_REPLIES;
use crate::error::VimeoError;
use crate::mapper::{Mappable, ModelObject};
use crate::metadata::Metadata;
use crate::user::User;

#[readonly::make]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub uri: String,

    #[serde(rename = "type")]
    pub kind: String,

    pub text: String,

    #[serde(with = "time::serde::rfc3339")]
    pub created_on: OffsetDateTime,

    #[serde(default)]
    pub user: Option<User>,

    #[serde(default)]
    pub metadata: Option<Metadata>,
}

impl Comment {
    pub fn reply_count(&self) -> u64 {
        self.connection(CONNECTION_REPLIES).map_or(0, |c| c.total())
    }
}

impl Mappable for Comment {
    fn did_finish_mapping(&mut self) {
        self.text = self.text.trim().to_string();
        self.user.did_finish_mapping();
    }

    fn validate(&self) -> Result<(), VimeoError> {
        self.user.validate()
    }
}

impl ModelObject for Comment {
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
    fn comment() {
        let c: Comment = ObjectMapper::new().map_str(r#"{
            "uri": "/videos/1/comments/55",
            "type": "video",
            "text": "  nice shot \n",
            "created_on": "2015-11-20T08:30:00+00:00",
            "metadata": {
                "connections": {"replies": {"uri": "/videos/1/comments/55/replies", "options": ["GET", "POST"], "total": 3}}
            }
        }"#).unwrap();

        assert_eq!(c.text, "nice shot");
        assert_eq!(c.reply_count(), 3);
        assert_eq!(c.created_on.month(), time::Month::November);
    }
}
