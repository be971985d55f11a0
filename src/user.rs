use parse_display::{Display, FromStr};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use url::Url;

use crate::connection::{CONNECTION_FOLLOWERS, CONNECTION_VIDEOS};
use crate::error::VimeoError;
use crate::interaction::INTERACTION_FOLLOW;
use crate::mapper::{Mappable, ModelObject};
use crate::metadata::Metadata;
use crate::picture::PictureCollection;
use crate::preference::Preference;
use crate::quota::UploadQuota;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, FromStr)]
#[serde(rename_all = "snake_case")]
#[display(style = "snake_case")]
pub enum AccountType {
    Basic,
    Plus,
    Pro,
    Business,
    LivePro,
    LiveBusiness,
    LivePremium,
    Producer,
    #[serde(other)]
    Unknown,
}

impl Default for AccountType {
    fn default() -> Self {
        AccountType::Basic
    }
}

#[readonly::make]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Website {
    #[serde(default)]
    pub name: Option<String>,

    pub link: String,

    #[serde(default)]
    pub description: Option<String>,
}

#[readonly::make]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub uri: String,
    pub name: String,

    #[serde(default)]
    pub link: Option<Url>,

    #[serde(default)]
    pub location: Option<String>,

    #[serde(default)]
    pub bio: Option<String>,

    #[serde(default)]
    pub account: AccountType,

    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_time: Option<OffsetDateTime>,

    #[serde(default)]
    pub pictures: Option<PictureCollection>,

    #[serde(default)]
    pub websites: Vec<Website>,

    #[serde(default)]
    pub metadata: Option<Metadata>,

    #[serde(default)]
    pub upload_quota: Option<UploadQuota>,

    #[serde(default)]
    pub preferences: Option<Preference>,
}

impl User {
    pub fn has_paid_account(&self) -> bool {
        !matches!(self.account, AccountType::Basic | AccountType::Unknown)
    }

    pub fn is_followed(&self) -> bool {
        self.interaction(INTERACTION_FOLLOW).map_or(false, |i| i.added)
    }

    pub fn follower_count(&self) -> u64 {
        self.connection(CONNECTION_FOLLOWERS).map_or(0, |c| c.total())
    }

    pub fn video_count(&self) -> u64 {
        self.connection(CONNECTION_VIDEOS).map_or(0, |c| c.total())
    }
}

impl Mappable for User {
    fn did_finish_mapping(&mut self) {
        self.pictures.did_finish_mapping();
        self.upload_quota.did_finish_mapping();
    }

    fn validate(&self) -> Result<(), VimeoError> {
        self.pictures.validate()?;
        self.upload_quota.validate()?;
        self.preferences.validate()
    }
}

impl ModelObject for User {
    fn uri(&self) -> Option<&str> {
        Some(&self.uri)
    }

    fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }
}
