use serde::{Deserialize, Serialize};

use crate::error::VimeoError;
use crate::mapper::Mappable;
use crate::user::User;

const BEARER: &str = "bearer";

/// An authenticated (or anonymous) session as returned by the token endpoints.
#[readonly::make]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    #[serde(default)]
    pub access_token: Option<String>,

    #[serde(default)]
    pub token_type: Option<String>,

    #[serde(default)]
    pub scope: Option<String>,

    #[serde(default)]
    pub user: Option<User>,
}

impl Account {
    pub fn is_authenticated(&self) -> bool {
        self.access_token.as_deref().map_or(false, |t| !t.is_empty())
    }

    pub fn is_authenticated_with_user(&self) -> bool {
        self.is_authenticated() && self.user.is_some()
    }

    pub fn scopes(&self) -> impl Iterator<Item = &str> {
        self.scope.as_deref().unwrap_or_default().split_whitespace()
    }

    /// Value for the `Authorization` header, `None` when not authenticated.
    pub fn authorization_header(&self) -> Option<String> {
        let token = self.access_token.as_deref().filter(|t| !t.is_empty())?;
        let token_type = match self.token_type.as_deref() {
            Some(t) if t.eq_ignore_ascii_case(BEARER) => "Bearer",
            Some(t) => t,
            None => "Bearer",
        };

        Some(format!("{} {}", token_type, token))
    }
}

impl Mappable for Account {
    fn did_finish_mapping(&mut self) {
        self.user.did_finish_mapping();
    }

    fn validate(&self) -> Result<(), VimeoError> {
        if self.is_authenticated() && self.token_type.as_deref().map_or(true, str::is_empty) {
            return Err(VimeoError::InvalidModel("access token without token type".into()));
        }
        self.user.validate()
    }
}

#[cfg(test)]
mod tests {
    use crate::mapper::ObjectMapper;

    use super::*;

    #[test]
    fn authenticated_account() {
        let account: Account = ObjectMapper::new().map_str(r#"{
            "access_token": "abc123",
            "token_type": "bearer",
            "scope": "public private upload",
            "user": {"uri": "/users/1", "name": "me"}
        }"#).unwrap();

        assert!(account.is_authenticated_with_user());
        assert_eq!(account.authorization_header().as_deref(), Some("Bearer abc123"));
        assert_eq!(account.scopes().collect::<Vec<_>>(), vec!["public", "private", "upload"]);
    }

    #[test]
    fn anonymous_account() {
        let account: Account = ObjectMapper::new().map_str(r#"{"scope": "public"}"#).unwrap();

        assert!(!account.is_authenticated());
        assert!(account.authorization_header().is_none());
    }

    #[test]
    fn invalid_nested_user() {
        let err = ObjectMapper::new()
            .map_str::<Account>(r#"{
                "access_token": "abc",
                "token_type": "bearer",
                "user": {"uri": "/users/1", "name": "me", "upload_quota": {"space": {"free": 0, "max": 1, "used": 2}}}
            }"#)
            .unwrap_err();
        assert!(matches!(err, VimeoError::InvalidModel(_)));
    }

    #[test]
    fn token_without_type() {
        let err = ObjectMapper::new()
            .map_str::<Account>(r#"{"access_token": "abc"}"#)
            .unwrap_err();
        assert!(matches!(err, VimeoError::InvalidModel(_)));
    }
}
