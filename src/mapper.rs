use std::any::type_name;
use std::panic::AssertUnwindSafe;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::connection::Connection;
use crate::error::{ApiError, VimeoError};
use crate::exception::catch_exception;
use crate::interaction::Interaction;
use crate::metadata::Metadata;

/// A type the [`ObjectMapper`] can build from a json payload.
pub trait Mappable: DeserializeOwned {
    /// Called once the payload has been decoded, before [`Mappable::validate`].
    fn did_finish_mapping(&mut self) {}

    fn validate(&self) -> Result<(), VimeoError> {
        Ok(())
    }
}

impl<T: Mappable> Mappable for Vec<T> {
    fn did_finish_mapping(&mut self) {
        self.iter_mut().for_each(Mappable::did_finish_mapping);
    }

    fn validate(&self) -> Result<(), VimeoError> {
        self.iter().try_for_each(Mappable::validate)
    }
}

impl<T: Mappable> Mappable for Option<T> {
    fn did_finish_mapping(&mut self) {
        if let Some(object) = self.as_mut() {
            object.did_finish_mapping();
        }
    }

    fn validate(&self) -> Result<(), VimeoError> {
        self.as_ref().map_or(Ok(()), Mappable::validate)
    }
}

/// An api resource addressed by its `uri`.
pub trait ModelObject {
    fn uri(&self) -> Option<&str>;

    fn metadata(&self) -> Option<&Metadata> {
        None
    }

    /// Last path segment of the uri, e.g. `"1234"` for `/videos/1234`.
    fn object_id(&self) -> Option<&str> {
        self.uri()?.rsplit('/').find(|s| !s.is_empty())
    }

    fn connection(&self, name: &str) -> Option<&Connection> {
        self.metadata()?.connection(name)
    }

    fn interaction(&self, name: &str) -> Option<&Interaction> {
        self.metadata()?.interaction(name)
    }
}

/// Turns server json into model objects.
///
/// When a key path is set, the mapper descends into the payload along the
/// dot separated keys before decoding, so `with_key_path("data")` maps the
/// items of a paginated response.
#[derive(Debug, Clone, Default)]
pub struct ObjectMapper {
    key_path: Option<String>,
}

impl ObjectMapper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_key_path(key_path: impl Into<String>) -> Self {
        ObjectMapper {
            key_path: Some(key_path.into()),
        }
    }

    pub fn key_path(&self) -> Option<&str> {
        self.key_path.as_deref()
    }

    pub fn apply_mapping_to_json<T: Mappable>(&self, json: &Value) -> Result<T, VimeoError> {
        log::debug!("mapping {} (key path: {:?})", type_name::<T>(), self.key_path);
        check_api_error(json)?;

        let value = self.resolve(json)?;
        let mut object = T::deserialize(value)?;

        catch_exception(AssertUnwindSafe(move || -> Result<T, VimeoError> {
            object.did_finish_mapping();
            object.validate()?;
            Ok(object)
        }))
    }

    pub fn map_collection<T: Mappable>(&self, json: &Value) -> Result<Vec<T>, VimeoError> {
        check_api_error(json)?;

        let value = self.resolve(json)?;
        if !value.is_array() {
            return Err(VimeoError::InvalidModel(format!(
                "expected an array of {}",
                type_name::<T>()
            )));
        }

        self.apply_mapping_to_json(json)
    }

    pub fn map_str<T: Mappable>(&self, s: &str) -> Result<T, VimeoError> {
        let json: Value = serde_json::from_str(s)?;
        self.apply_mapping_to_json(&json)
    }

    pub fn map_bytes<T: Mappable>(&self, bytes: &[u8]) -> Result<T, VimeoError> {
        let json: Value = serde_json::from_slice(bytes)?;
        self.apply_mapping_to_json(&json)
    }

    pub async fn map_response<T: Mappable>(&self, resp: reqwest::Response) -> Result<T, VimeoError> {
        let status = resp.status();
        let bytes = resp.bytes().await?;

        if !status.is_success() {
            log::warn!("unsuccessful status {}", status);
            return match serde_json::from_slice::<ApiError>(&bytes) {
                Ok(err) => Err(VimeoError::Api(err)),
                Err(_) => Err(VimeoError::Status(status)),
            };
        }

        self.map_bytes(&bytes)
    }

    fn resolve<'a>(&self, json: &'a Value) -> Result<&'a Value, VimeoError> {
        let Some(key_path) = self.key_path.as_deref() else {
            return Ok(json);
        };

        key_path
            .split('.')
            .filter(|k| !k.is_empty())
            .try_fold(json, |value, key| value.get(key))
            .ok_or_else(|| VimeoError::MissingKeyPath(key_path.to_string()))
    }
}

fn check_api_error(json: &Value) -> Result<(), VimeoError> {
    match api_error(json) {
        Some(err) => {
            log::warn!("api error body: {}", err);
            Err(VimeoError::Api(err))
        }
        None => Ok(()),
    }
}

fn api_error(json: &Value) -> Option<ApiError> {
    let object = json.as_object()?;
    if object.contains_key("uri") || !object.get("error")?.is_string() {
        return None;
    }

    serde_json::from_value(json.clone()).ok()
}
