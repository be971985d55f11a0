use serde::{Deserialize, Serialize};

use crate::error::VimeoError;
use crate::mapper::Mappable;

/// Whether the user may still upload in each quality this period.
#[readonly::make]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityQuota {
    #[serde(default)]
    pub hd: bool,

    #[serde(default)]
    pub sd: bool,
}

impl QuantityQuota {
    pub fn can_upload_hd(&self) -> bool {
        self.hd
    }

    pub fn can_upload_sd(&self) -> bool {
        self.sd
    }
}

impl Mappable for QuantityQuota {}

/// Storage quota in bytes.
#[readonly::make]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeQuota {
    pub free: u64,
    pub max: u64,
    pub used: u64,
}

impl SizeQuota {
    pub fn can_upload(&self, size: u64) -> bool {
        size <= self.free
    }

    pub fn used_fraction(&self) -> f64 {
        if self.max == 0 {
            return 0.0;
        }
        self.used as f64 / self.max as f64
    }
}

impl Mappable for SizeQuota {
    fn validate(&self) -> Result<(), VimeoError> {
        if self.used > self.max {
            return Err(VimeoError::InvalidModel(format!(
                "quota used {} exceeds max {}",
                self.used, self.max
            )));
        }
        Ok(())
    }
}

#[readonly::make]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadQuota {
    pub space: SizeQuota,

    #[serde(default)]
    pub quota: Option<QuantityQuota>,
}

impl UploadQuota {
    pub fn can_upload(&self, size: u64, hd: bool) -> bool {
        if !self.space.can_upload(size) {
            return false;
        }

        match self.quota {
            Some(q) if hd => q.can_upload_hd(),
            Some(q) => q.can_upload_sd(),
            None => true,
        }
    }
}

impl Mappable for UploadQuota {
    fn validate(&self) -> Result<(), VimeoError> {
        self.space.validate()
    }
}
