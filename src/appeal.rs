use parse_display::{Display, FromStr};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use url::Url;

use crate::mapper::{Mappable, ModelObject};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, FromStr)]
#[serde(rename_all = "snake_case")]
#[display(style = "snake_case")]
pub enum AppealStatus {
    Pending,
    Accepted,
    Rejected,
    #[serde(other)]
    Unknown,
}

/// A request to review a moderation decision on a video.
#[readonly::make]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appeal {
    pub uri: String,

    #[serde(default)]
    pub link: Option<Url>,

    pub status: AppealStatus,

    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_time: Option<OffsetDateTime>,
}

impl Appeal {
    pub fn is_resolved(&self) -> bool {
        matches!(self.status, AppealStatus::Accepted | AppealStatus::Rejected)
    }
}

impl Mappable for Appeal {}

impl ModelObject for Appeal {
    fn uri(&self) -> Option<&str> {
        Some(&self.uri)
    }
}
