use std::env;

use reqwest::header::{HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client, Method, RequestBuilder};
use url::Url;

use crate::account::Account;
use crate::error::VimeoError;

pub const DEFAULT_BASE_URL: &str = "https://api.vimeo.com";
pub const DEFAULT_API_VERSION: &str = "3.2";

const ENV_BASE_URL: &str = "VIMEO_BASE_URL";
const ENV_API_VERSION: &str = "VIMEO_API_VERSION";
const ENV_CLIENT_ID: &str = "VIMEO_CLIENT_ID";
const ENV_CLIENT_SECRET: &str = "VIMEO_CLIENT_SECRET";
const ENV_SCOPE: &str = "VIMEO_SCOPE";

/// Where the api lives and which version of it responses are shaped for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    base_url: Url,
    api_version: String,
    client_id: Option<String>,
    client_secret: Option<String>,
    scope: Vec<String>,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("valid default url"),
            api_version: DEFAULT_API_VERSION.to_string(),
            client_id: None,
            client_secret: None,
            scope: vec!["public".to_string()],
        }
    }
}

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by any `VIMEO_*` variables that are set.
    pub fn from_env() -> Result<Self, VimeoError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, VimeoError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(base_url) = lookup(ENV_BASE_URL) {
            config = config.with_base_url(&base_url)?;
        }
        if let Some(version) = lookup(ENV_API_VERSION) {
            config = config.with_api_version(version);
        }
        if let Some(scope) = lookup(ENV_SCOPE) {
            config = config.with_scope(scope.split_whitespace());
        }
        config.client_id = lookup(ENV_CLIENT_ID);
        config.client_secret = lookup(ENV_CLIENT_SECRET);

        log::debug!("configuration: base url {}, api version {}", config.base_url, config.api_version);
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, VimeoError> {
        self.base_url = Url::parse(base_url)?;
        Ok(self)
    }

    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    pub fn with_client(mut self, id: impl Into<String>, secret: impl Into<String>) -> Self {
        self.client_id = Some(id.into());
        self.client_secret = Some(secret.into());
        self
    }

    pub fn with_scope<I, S>(mut self, scope: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scope = scope.into_iter().map(Into::into).collect();
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    pub fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref()
    }

    pub fn client_secret(&self) -> Option<&str> {
        self.client_secret.as_deref()
    }

    pub fn scope_string(&self) -> String {
        self.scope.join(" ")
    }

    pub fn accept_header(&self) -> String {
        format!("application/vnd.vimeo.*+json;version={}", self.api_version)
    }

    pub fn endpoint(&self, path: &str) -> Result<Url, VimeoError> {
        let url = self.base_url.join(path)?;
        Ok(url)
    }

    /// Prepares (but does not send) a request carrying the accept header and,
    /// when an authenticated account is given, its authorization.
    pub fn request(
        &self,
        client: &Client,
        method: Method,
        path: &str,
        account: Option<&Account>,
    ) -> Result<RequestBuilder, VimeoError> {
        let accept = HeaderValue::from_str(&self.accept_header())
            .map_err(|_| VimeoError::InvalidHeader(self.accept_header()))?;
        let mut builder = client.request(method, self.endpoint(path)?).header(ACCEPT, accept);

        if let Some(auth) = account.and_then(Account::authorization_header) {
            let value = HeaderValue::from_str(&auth)
                .map_err(|_| VimeoError::InvalidHeader(AUTHORIZATION.to_string()))?;
            builder = builder.header(AUTHORIZATION, value);
        }

        Ok(builder)
    }
}
