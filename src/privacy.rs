use parse_display::{Display, FromStr};
use serde::{Deserialize, Serialize};

use crate::mapper::Mappable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, FromStr)]
#[serde(rename_all = "snake_case")]
#[display(style = "snake_case")]
pub enum ViewPrivacy {
    Anybody,
    Contacts,
    Disable,
    Nobody,
    Password,
    Unlisted,
    Users,
    Ptv,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, FromStr)]
#[serde(rename_all = "snake_case")]
#[display(style = "snake_case")]
pub enum EmbedPrivacy {
    Public,
    Private,
    Whitelist,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, FromStr)]
#[serde(rename_all = "snake_case")]
#[display(style = "snake_case")]
pub enum CommentPrivacy {
    Anybody,
    Contacts,
    Nobody,
    #[serde(other)]
    Unknown,
}

#[readonly::make]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Privacy {
    pub view: ViewPrivacy,

    #[serde(default)]
    pub embed: Option<EmbedPrivacy>,

    #[serde(default)]
    pub download: bool,

    #[serde(default)]
    pub add: bool,

    #[serde(default)]
    pub comments: Option<CommentPrivacy>,
}

impl Privacy {
    pub fn is_public(&self) -> bool {
        self.view == ViewPrivacy::Anybody
    }

    pub fn requires_password(&self) -> bool {
        self.view == ViewPrivacy::Password
    }

    pub fn allows_comments_from_anybody(&self) -> bool {
        self.comments == Some(CommentPrivacy::Anybody)
    }
}

impl Mappable for Privacy {}
