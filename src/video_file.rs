use parse_display::{Display, FromStr};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use url::Url;

use crate::mapper::Mappable;

pub const MIME_TYPE_MP4: &str = "video/mp4";
pub const MIME_TYPE_HLS: &str = "application/x-mpegURL";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, FromStr)]
#[serde(rename_all = "snake_case")]
#[display(style = "snake_case")]
pub enum VideoQuality {
    Hls,
    Hd,
    Sd,
    Mobile,
    Source,
    #[serde(other)]
    Unknown,
}

/// Playback analytics endpoints attached to a video or file.
#[readonly::make]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoLog {
    #[serde(default)]
    pub play_link: Option<Url>,

    #[serde(default)]
    pub load_link: Option<Url>,

    #[serde(default)]
    pub like_press_link: Option<Url>,
}

impl Mappable for VideoLog {}

#[readonly::make]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoFile {
    pub quality: VideoQuality,

    #[serde(rename = "type")]
    pub mime_type: String,

    #[serde(default)]
    pub width: Option<u32>,

    #[serde(default)]
    pub height: Option<u32>,

    #[serde(default)]
    pub link: Option<Url>,

    #[serde(default, with = "time::serde::rfc3339::option")]
    pub link_expiration_time: Option<OffsetDateTime>,

    #[serde(default)]
    pub size: Option<u64>,

    #[serde(default)]
    pub md5: Option<String>,

    #[serde(default)]
    pub fps: Option<f32>,

    #[serde(default)]
    pub log: Option<VideoLog>,
}

impl VideoFile {
    /// A file without an expiration time never expires.
    pub fn is_expired_at(&self, now: OffsetDateTime) -> bool {
        self.link_expiration_time.map_or(false, |t| t <= now)
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(OffsetDateTime::now_utc())
    }

    pub fn is_mp4(&self) -> bool {
        self.mime_type.eq_ignore_ascii_case(MIME_TYPE_MP4)
    }

    pub fn is_hls(&self) -> bool {
        self.quality == VideoQuality::Hls || self.mime_type.eq_ignore_ascii_case(MIME_TYPE_HLS)
    }

    pub fn is_supported_mimetype(&self) -> bool {
        self.is_mp4() || self.is_hls()
    }

    pub fn is_downloadable(&self) -> bool {
        self.link.is_some() && self.is_mp4()
    }
}

impl Mappable for VideoFile {}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    fn file(json: &str) -> VideoFile {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn expiration() {
        let f = file(r#"{
            "quality": "hd",
            "type": "video/mp4",
            "width": 1280,
            "height": 720,
            "link": "https://player.vimeo.com/play/1?s=abc",
            "link_expiration_time": "2016-08-01T12:00:00+00:00",
            "size": 1024,
            "fps": 29.97
        }"#);

        assert!(!f.is_expired_at(datetime!(2016-08-01 11:59:59 UTC)));
        assert!(f.is_expired_at(datetime!(2016-08-01 12:00:00 UTC)));
        assert!(f.is_downloadable());
        assert!(!f.is_hls());
    }

    #[test]
    fn hls_without_expiration() {
        let f = file(r#"{
            "quality": "hls",
            "type": "application/x-mpegURL",
            "link": "https://player.vimeo.com/play/1/hls?s=abc"
        }"#);

        assert!(f.is_hls());
        assert!(f.is_supported_mimetype());
        assert!(!f.is_downloadable());
        assert!(!f.is_expired());
    }

    #[test]
    fn unsupported() {
        let f = file(r#"{"quality": "4k", "type": "video/webm"}"#);
        assert_eq!(f.quality, VideoQuality::Unknown);
        assert!(!f.is_supported_mimetype());
    }
}
