use parse_display::{Display, FromStr};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use url::Url;

use crate::category::Category;
use crate::connection::{CONNECTION_COMMENTS, CONNECTION_LIKES};
use crate::error::VimeoError;
use crate::interaction::{INTERACTION_LIKE, INTERACTION_WATCH_LATER};
use crate::mapper::{Mappable, ModelObject};
use crate::metadata::Metadata;
use crate::picture::PictureCollection;
use crate::privacy::{Privacy, ViewPrivacy};
use crate::soundtrack::Soundtrack;
use crate::tag::Tag;
use crate::user::User;
use crate::video_file::{VideoFile, VideoLog};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, FromStr)]
#[serde(rename_all = "snake_case")]
#[display(style = "snake_case")]
pub enum VideoStatus {
    Available,
    Uploading,
    Transcoding,
    TranscodeStarting,
    UploadingError,
    TranscodingError,
    QuotaExceeded,
    #[serde(other)]
    Unknown,
}

impl Default for VideoStatus {
    fn default() -> Self {
        VideoStatus::Unknown
    }
}

#[readonly::make]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Embed {
    #[serde(default)]
    pub html: Option<String>,
}

#[readonly::make]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    #[serde(default)]
    pub plays: Option<u64>,
}

#[readonly::make]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    pub uri: String,
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub link: Option<Url>,

    /// Seconds.
    #[serde(default)]
    pub duration: u64,

    #[serde(default)]
    pub width: u32,

    #[serde(default)]
    pub height: u32,

    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_time: Option<OffsetDateTime>,

    #[serde(default, with = "time::serde::rfc3339::option")]
    pub modified_time: Option<OffsetDateTime>,

    #[serde(default, with = "time::serde::rfc3339::option")]
    pub release_time: Option<OffsetDateTime>,

    #[serde(default)]
    pub language: Option<String>,

    #[serde(default)]
    pub license: Option<String>,

    #[serde(default)]
    pub privacy: Option<Privacy>,

    #[serde(default)]
    pub pictures: Option<PictureCollection>,

    #[serde(default)]
    pub files: Vec<VideoFile>,

    #[serde(default)]
    pub user: Option<User>,

    #[serde(default)]
    pub status: VideoStatus,

    #[serde(default)]
    pub content_rating: Vec<String>,

    #[serde(default)]
    pub tags: Vec<Tag>,

    #[serde(default)]
    pub categories: Vec<Category>,

    #[serde(default)]
    pub metadata: Option<Metadata>,

    #[serde(default)]
    pub embed: Option<Embed>,

    #[serde(default)]
    pub stats: Option<Stats>,

    #[serde(default)]
    pub log: Option<VideoLog>,

    #[serde(default)]
    pub soundtrack: Option<Soundtrack>,
}

impl Video {
    pub fn is_available(&self) -> bool {
        self.status == VideoStatus::Available
    }

    pub fn is_transcoding(&self) -> bool {
        matches!(self.status, VideoStatus::Transcoding | VideoStatus::TranscodeStarting)
    }

    pub fn is_uploading(&self) -> bool {
        self.status == VideoStatus::Uploading
    }

    pub fn is_failed(&self) -> bool {
        matches!(
            self.status,
            VideoStatus::UploadingError | VideoStatus::TranscodingError | VideoStatus::QuotaExceeded
        )
    }

    /// Viewing needs the owner's say-so: a password or membership of an
    /// allowed audience. `disable` and `unlisted` videos are watchable by
    /// anyone holding the link or embed, so they are not private.
    pub fn is_private(&self) -> bool {
        self.privacy.as_ref().map_or(false, |p| {
            matches!(
                p.view,
                ViewPrivacy::Nobody | ViewPrivacy::Users | ViewPrivacy::Contacts | ViewPrivacy::Password
            )
        })
    }

    /// `None` until the dimensions are known.
    pub fn aspect_ratio(&self) -> Option<f64> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        Some(self.width as f64 / self.height as f64)
    }

    pub fn like_count(&self) -> u64 {
        self.connection(CONNECTION_LIKES).map_or(0, |c| c.total())
    }

    pub fn comment_count(&self) -> u64 {
        self.connection(CONNECTION_COMMENTS).map_or(0, |c| c.total())
    }

    pub fn play_count(&self) -> u64 {
        self.stats.and_then(|s| s.plays).unwrap_or(0)
    }

    pub fn is_liked(&self) -> bool {
        self.interaction(INTERACTION_LIKE).map_or(false, |i| i.added)
    }

    pub fn is_watch_later(&self) -> bool {
        self.interaction(INTERACTION_WATCH_LATER).map_or(false, |i| i.added)
    }
}

impl Mappable for Video {
    fn did_finish_mapping(&mut self) {
        self.files.retain(|f| f.link.is_some());
        self.files.sort_by(|a, b| b.width.cmp(&a.width));

        self.pictures.did_finish_mapping();
        self.user.did_finish_mapping();
        self.categories.did_finish_mapping();
    }

    fn validate(&self) -> Result<(), VimeoError> {
        self.pictures.validate()?;
        self.user.validate()?;
        self.files.validate()?;
        self.tags.validate()?;
        self.categories.validate()?;
        self.soundtrack.validate()
    }
}

impl ModelObject for Video {
    fn uri(&self) -> Option<&str> {
        Some(&self.uri)
    }

    fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }
}
