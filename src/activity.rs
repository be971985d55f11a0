use parse_display::{Display, FromStr};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::category::Category;
use crate::channel::Channel;
use crate::error::VimeoError;
use crate::group::Group;
use crate::mapper::{Mappable, ModelObject};
use crate::tag::Tag;
use crate::user::User;
use crate::video::Video;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, FromStr)]
#[serde(rename_all = "snake_case")]
#[display(style = "snake_case")]
pub enum ActivityType {
    Like,
    Appearance,
    Share,
    Upload,
    Tag,
    Category,
    Channel,
    Group,
    #[serde(other)]
    Unknown,
}

/// One entry of a user's feed.
#[readonly::make]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub uri: String,

    #[serde(rename = "type")]
    pub kind: ActivityType,

    #[serde(with = "time::serde::rfc3339")]
    pub time: OffsetDateTime,

    #[serde(default)]
    pub user: Option<User>,

    #[serde(default, rename = "clip")]
    pub video: Option<Video>,

    #[serde(default)]
    pub channel: Option<Channel>,

    #[serde(default)]
    pub group: Option<Group>,

    #[serde(default)]
    pub tag: Option<Tag>,

    #[serde(default)]
    pub category: Option<Category>,
}

impl Mappable for Activity {
    fn did_finish_mapping(&mut self) {
        self.user.did_finish_mapping();
        self.video.did_finish_mapping();
        self.channel.did_finish_mapping();
        self.group.did_finish_mapping();
        self.tag.did_finish_mapping();
        self.category.did_finish_mapping();
    }

    fn validate(&self) -> Result<(), VimeoError> {
        self.user.validate()?;
        self.video.validate()?;
        self.channel.validate()?;
        self.group.validate()?;
        self.tag.validate()?;
        self.category.validate()
    }
}

impl ModelObject for Activity {
    fn uri(&self) -> Option<&str> {
        Some(&self.uri)
    }
}
