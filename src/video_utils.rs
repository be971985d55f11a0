//! Helpers for choosing a playable file and for recognising video links.

use std::sync::OnceLock;

use regex::Regex;
use time::OffsetDateTime;

use crate::video::Video;
use crate::video_file::VideoFile;

fn video_id_regex() -> &'static Regex {
    VIDEO_ID_REGEX.get_or_init(|| {
        Regex::new(r#"(?:^|[/.])(?:vimeo\.com/(?:video/|channels/[^/]+/|groups/[^/]+/videos/)?|videos/)(?P<id>[0-9]+)(?:[/?#]|$)"#).unwrap()
    })
}

static VIDEO_ID_REGEX: OnceLock<Regex> = OnceLock::new();

pub fn hls_file_for_video(video: &Video) -> Option<&VideoFile> {
    video.files.iter().find(|f| f.is_hls())
}

/// Widest unexpired mp4 that fits the screen, or the narrowest mp4 when none fits.
pub fn fallback_file_for_video(video: &Video, screen_width: u32, screen_height: u32) -> Option<&VideoFile> {
    fallback_file_at(video, screen_width, screen_height, OffsetDateTime::now_utc())
}

/// HLS when the video has it, otherwise the mp4 fallback.
pub fn preferred_file_for_video(video: &Video, screen_width: u32, screen_height: u32) -> Option<&VideoFile> {
    hls_file_for_video(video).or_else(|| fallback_file_for_video(video, screen_width, screen_height))
}

fn fallback_file_at(video: &Video, screen_width: u32, screen_height: u32, now: OffsetDateTime) -> Option<&VideoFile> {
    let max_dimension = screen_width.max(screen_height);
    let candidates = video
        .files
        .iter()
        .filter(|f| f.is_mp4() && !f.is_hls() && f.link.is_some() && !f.is_expired_at(now))
        .collect::<Vec<_>>();

    // a file of unknown width never counts as fitting
    candidates
        .iter()
        .copied()
        .filter(|f| f.width.map_or(false, |w| w <= max_dimension))
        .max_by_key(|f| f.width)
        .or_else(|| candidates.iter().copied().min_by_key(|f| f.width.unwrap_or(u32::MAX)))
}

/// Numeric id from a web, player or api link to a video.
pub fn video_id_from_url(url: &str) -> Option<&str> {
    video_id_regex()
        .captures(url)
        .and_then(|caps| caps.name("id"))
        .map(|id| id.as_str())
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use crate::mapper::ObjectMapper;

    use super::*;

    fn video() -> Video {
        ObjectMapper::new().map_str(r#"{
            "uri": "/videos/1",
            "name": "clip",
            "files": [
                {"quality": "sd", "type": "video/mp4", "width": 640, "link": "https://player.vimeo.com/play/sd"},
                {"quality": "mobile", "type": "video/mp4", "width": 480, "link": "https://player.vimeo.com/play/mobile"},
                {"quality": "hd", "type": "video/mp4", "width": 1920, "link": "https://player.vimeo.com/play/hd1080"},
                {"quality": "hd", "type": "video/mp4", "width": 1280, "link": "https://player.vimeo.com/play/hd720",
                 "link_expiration_time": "2016-01-01T00:00:00+00:00"},
                {"quality": "hls", "type": "application/x-mpegURL", "link": "https://player.vimeo.com/play/hls"}
            ]
        }"#).unwrap()
    }

    #[test]
    fn hls() {
        let v = video();
        assert_eq!(hls_file_for_video(&v).unwrap().quality.to_string(), "hls");
        assert!(preferred_file_for_video(&v, 320, 480).unwrap().is_hls());
    }

    #[test]
    fn fallback_fits_screen() {
        let v = video();
        let now = datetime!(2017-01-01 0:00 UTC);

        // the 1280 file is expired, so a 1334x750 screen gets sd
        let f = fallback_file_at(&v, 750, 1334, now).unwrap();
        assert_eq!(f.width, Some(640));

        let f = fallback_file_at(&v, 1080, 1920, now).unwrap();
        assert_eq!(f.width, Some(1920));

        let f = fallback_file_at(&v, 100, 100, now).unwrap();
        assert_eq!(f.width, Some(480));
    }

    #[test]
    fn fallback_before_expiry() {
        let v = video();
        let f = fallback_file_at(&v, 750, 1334, datetime!(2015-06-01 0:00 UTC)).unwrap();
        assert_eq!(f.width, Some(1280));
    }

    #[test]
    fn fallback_skips_hls_typed_as_mp4() {
        let v: Video = ObjectMapper::new().map_str(r#"{
            "uri": "/videos/3",
            "name": "clip",
            "files": [
                {"quality": "hls", "type": "video/mp4", "link": "https://player.vimeo.com/play/hls"},
                {"quality": "hd", "type": "video/mp4", "width": 1280, "link": "https://player.vimeo.com/play/hd"},
                {"quality": "sd", "type": "video/mp4", "width": 640, "link": "https://player.vimeo.com/play/sd"}
            ]
        }"#).unwrap();

        let f = fallback_file_for_video(&v, 100, 100).unwrap();
        assert_eq!(f.width, Some(640));
        assert!(!f.is_hls());
    }

    #[test]
    fn fallback_prefers_known_width() {
        let v: Video = ObjectMapper::new().map_str(r#"{
            "uri": "/videos/4",
            "name": "clip",
            "files": [
                {"quality": "sd", "type": "video/mp4", "link": "https://player.vimeo.com/play/unknown"},
                {"quality": "hd", "type": "video/mp4", "width": 1280, "link": "https://player.vimeo.com/play/hd"}
            ]
        }"#).unwrap();

        assert_eq!(fallback_file_for_video(&v, 100, 100).unwrap().width, Some(1280));
        assert_eq!(fallback_file_for_video(&v, 1920, 1080).unwrap().width, Some(1280));
    }

    #[test]
    fn no_files() {
        let v: Video = serde_json::from_str(r#"{"uri": "/videos/2", "name": "empty"}"#).unwrap();
        assert!(preferred_file_for_video(&v, 100, 100).is_none());
    }

    #[test]
    fn video_ids() {
        assert_eq!(video_id_from_url("https://vimeo.com/76979871"), Some("76979871"));
        assert_eq!(video_id_from_url("https://player.vimeo.com/video/848863798?h=df103ee095"), Some("848863798"));
        assert_eq!(video_id_from_url("https://vimeo.com/channels/staffpicks/12345"), Some("12345"));
        assert_eq!(video_id_from_url("/videos/42/comments"), Some("42"));
        assert_eq!(video_id_from_url("https://vimeo.com/staffpicks"), None);
        assert_eq!(video_id_from_url("https://vimeo.com/123abc"), None);
    }
}
