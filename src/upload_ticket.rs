use parse_display::{Display, FromStr};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::VimeoError;
use crate::mapper::{Mappable, ModelObject};
use crate::user::User;
use crate::video::Video;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, FromStr)]
#[serde(rename_all = "snake_case")]
#[display(style = "snake_case")]
pub enum UploadType {
    Streaming,
    Post,
    Pull,
    Tus,
    #[serde(other)]
    Unknown,
}

/// Server handed reservation for one upload.
#[readonly::make]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadTicket {
    pub uri: String,

    pub ticket_id: String,

    #[serde(default)]
    pub upload_link: Option<Url>,

    #[serde(default)]
    pub upload_link_secure: Option<Url>,

    #[serde(default)]
    pub complete_uri: Option<String>,

    #[serde(rename = "type")]
    pub upload_type: UploadType,

    #[serde(default)]
    pub user: Option<User>,

    #[serde(default)]
    pub video: Option<Video>,
}

impl UploadTicket {
    pub fn upload_link(&self) -> Option<&Url> {
        self.upload_link_secure.as_ref().or(self.upload_link.as_ref())
    }

    pub fn needs_completion(&self) -> bool {
        self.complete_uri.is_some()
    }
}

impl Mappable for UploadTicket {
    fn did_finish_mapping(&mut self) {
        self.user.did_finish_mapping();
        self.video.did_finish_mapping();
    }

    fn validate(&self) -> Result<(), VimeoError> {
        if self.ticket_id.is_empty() {
            return Err(VimeoError::InvalidModel("upload ticket without id".into()));
        }

        let needs_link = matches!(self.upload_type, UploadType::Streaming | UploadType::Post);
        if needs_link && self.upload_link().is_none() {
            return Err(VimeoError::InvalidModel(format!(
                "{} upload ticket {} has no upload link",
                self.upload_type, self.ticket_id
            )));
        }
        self.user.validate()?;
        self.video.validate()
    }
}

impl ModelObject for UploadTicket {
    fn uri(&self) -> Option<&str> {
        Some(&self.uri)
    }

    fn object_id(&self) -> Option<&str> {
        Some(&self.ticket_id)
    }
}
