mod error;
mod exception;
mod mapper;
mod metadata;
mod paging;
mod config;

mod account;
mod activity;
mod appeal;
mod category;
mod channel;
mod comment;
mod connection;
mod group;
mod interaction;
mod picture;
mod preference;
mod privacy;
mod quota;
mod soundtrack;
mod tag;
mod trigger;
mod upload_ticket;
mod user;
mod video;
mod video_file;
pub mod video_utils;

pub use error::{ApiError, VimeoError};
pub use exception::{catch_exception, exception_message};
pub use mapper::{Mappable, ModelObject, ObjectMapper};
pub use metadata::Metadata;
pub use paging::{Page, Paging};
pub use config::{Configuration, DEFAULT_API_VERSION, DEFAULT_BASE_URL};

pub use account::Account;
pub use activity::{Activity, ActivityType};
pub use appeal::{Appeal, AppealStatus};
pub use category::{Category, Subcategory};
pub use channel::Channel;
pub use comment::Comment;
pub use connection::*;
pub use group::Group;
pub use interaction::*;
pub use picture::{Picture, PictureCollection};
pub use preference::{Preference, VideoPreference};
pub use privacy::{CommentPrivacy, EmbedPrivacy, Privacy, ViewPrivacy};
pub use quota::{QuantityQuota, SizeQuota, UploadQuota};
pub use soundtrack::Soundtrack;
pub use tag::Tag;
pub use trigger::Trigger;
pub use upload_ticket::{UploadTicket, UploadType};
pub use user::{AccountType, User, Website};
pub use video::{Embed, Stats, Video, VideoStatus};
pub use video_file::{VideoFile, VideoLog, VideoQuality, MIME_TYPE_HLS, MIME_TYPE_MP4};

pub use reqwest::Client;

/// `major.minor` of the crate as a number, e.g. `0.3` for version `0.3.0`.
pub const VERSION_NUMBER: f64 = {
    let major = parse_u64(env!("CARGO_PKG_VERSION_MAJOR"));
    let minor = parse_u64(env!("CARGO_PKG_VERSION_MINOR"));
    major as f64 + minor as f64 / decimal_scale(minor) as f64
};

/// What-string identifying the build, newline terminated.
pub const VERSION_STRING: &[u8] = concat!(
    "@(#)PROGRAM:VimeoNetworking  PROJECT:VimeoNetworking-",
    env!("CARGO_PKG_VERSION"),
    "\n"
)
.as_bytes();

const fn parse_u64(s: &str) -> u64 {
    let bytes = s.as_bytes();
    let mut n = 0;
    let mut i = 0;
    while i < bytes.len() {
        n = n * 10 + (bytes[i] - b'0') as u64;
        i += 1;
    }
    n
}

const fn decimal_scale(mut n: u64) -> u64 {
    let mut scale = 10;
    while n >= 10 {
        n /= 10;
        scale *= 10;
    }
    scale
}
