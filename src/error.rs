use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum VimeoError {
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("url error: {0}")]
    Url(#[from] url::ParseError),

    #[error("invalid header value: {0}")]
    InvalidHeader(String),

    #[error("no value at key path `{0}`")]
    MissingKeyPath(String),

    #[error("api error: {0}")]
    Api(ApiError),

    #[error("unsuccessful status: {0}")]
    Status(reqwest::StatusCode),

    #[error("exception while mapping: {0}")]
    Exception(String),

    #[error("invalid model: {0}")]
    InvalidModel(String),
}

/// Error body returned by the api alongside a non-success status.
#[readonly::make]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, parse_display::Display)]
#[display("{error}")]
pub struct ApiError {
    pub error: String,

    #[serde(default)]
    pub link: Option<String>,

    #[serde(default)]
    pub developer_message: Option<String>,

    #[serde(default)]
    pub error_code: Option<u32>,
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_displays_user_message() {
        let err: ApiError = serde_json::from_str(r#"{
            "error": "The requested video couldn't be found.",
            "developer_message": "The requested video couldn't be found.",
            "error_code": 5000
        }"#).unwrap();

        assert_eq!(err.error_code, Some(5000));
        assert_eq!(err.to_string(), "The requested video couldn't be found.");
        assert_eq!(
            VimeoError::Api(err).to_string(),
            "api error: The requested video couldn't be found."
        );
    }
}
