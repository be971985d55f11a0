use serde::{Deserialize, Serialize};

use crate::mapper::Mappable;

pub const CONNECTION_ACTIVITIES: &str = "activities";
pub const CONNECTION_ALBUMS: &str = "albums";
pub const CONNECTION_CHANNELS: &str = "channels";
pub const CONNECTION_COMMENTS: &str = "comments";
pub const CONNECTION_FEED: &str = "feed";
pub const CONNECTION_FOLLOWERS: &str = "followers";
pub const CONNECTION_FOLLOWING: &str = "following";
pub const CONNECTION_GROUPS: &str = "groups";
pub const CONNECTION_LIKES: &str = "likes";
pub const CONNECTION_PICTURES: &str = "pictures";
pub const CONNECTION_RECOMMENDATIONS: &str = "recommendations";
pub const CONNECTION_REPLIES: &str = "replies";
pub const CONNECTION_TEXT_TRACKS: &str = "texttracks";
pub const CONNECTION_USERS: &str = "users";
pub const CONNECTION_VIDEOS: &str = "videos";
pub const CONNECTION_WATCH_LATER: &str = "watchlater";

/// A link from one resource to a related collection, e.g. a video's comments.
#[readonly::make]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub uri: String,

    /// Http methods the collection accepts.
    #[serde(default)]
    pub options: Vec<String>,

    #[serde(default)]
    pub total: Option<u64>,
}

impl Connection {
    pub fn can_get(&self) -> bool {
        self.allows("GET")
    }

    pub fn can_post(&self) -> bool {
        self.allows("POST")
    }

    pub fn can_delete(&self) -> bool {
        self.allows("DELETE")
    }

    pub fn total(&self) -> u64 {
        self.total.unwrap_or(0)
    }

    fn allows(&self, method: &str) -> bool {
        self.options.iter().any(|o| o.eq_ignore_ascii_case(method))
    }
}

impl Mappable for Connection {}
