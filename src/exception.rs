use std::any::Any;
use std::panic::{self, UnwindSafe};

use crate::error::VimeoError;

const UNKNOWN_EXCEPTION: &str = "unknown exception";

/// Runs `f`, turning a panic raised inside it into [`VimeoError::Exception`].
///
/// Errors returned by `f` pass through untouched.
pub fn catch_exception<F, T>(f: F) -> Result<T, VimeoError>
where
    F: FnOnce() -> Result<T, VimeoError> + UnwindSafe,
{
    match panic::catch_unwind(f) {
        Ok(result) => result,
        Err(payload) => {
            let message = exception_message(payload.as_ref());
            log::error!("caught exception: {}", message);
            Err(VimeoError::Exception(message))
        }
    }
}

pub fn exception_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        UNKNOWN_EXCEPTION.to_string()
    }
}
