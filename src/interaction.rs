use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::mapper::Mappable;

pub const INTERACTION_FOLLOW: &str = "follow";
pub const INTERACTION_JOIN: &str = "join";
pub const INTERACTION_LIKE: &str = "like";
pub const INTERACTION_WATCH_LATER: &str = "watchlater";

/// The authenticated user's relation to a resource (liked, following, ...).
#[readonly::make]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    #[serde(default)]
    pub uri: Option<String>,

    #[serde(default)]
    pub added: bool,

    #[serde(default, with = "time::serde::rfc3339::option")]
    pub added_time: Option<OffsetDateTime>,

    #[serde(default)]
    pub options: Vec<String>,
}

impl Interaction {
    pub fn can_toggle(&self) -> bool {
        self.options
            .iter()
            .any(|o| o.eq_ignore_ascii_case("PUT") || o.eq_ignore_ascii_case("DELETE"))
    }
}

impl Mappable for Interaction {}
