use serde::{Deserialize, Serialize};

use crate::error::VimeoError;
use crate::mapper::Mappable;

#[readonly::make]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paging {
    #[serde(default)]
    pub next: Option<String>,

    #[serde(default)]
    pub previous: Option<String>,

    #[serde(default)]
    pub first: Option<String>,

    #[serde(default)]
    pub last: Option<String>,
}

/// One page of a list endpoint.
#[readonly::make]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: serde::de::DeserializeOwned"))]
pub struct Page<T> {
    #[serde(default)]
    pub total: u64,

    #[serde(default = "first_page")]
    pub page: u64,

    #[serde(default)]
    pub per_page: u64,

    #[serde(default)]
    pub paging: Paging,

    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

fn first_page() -> u64 {
    1
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.paging.next.is_some()
    }

    pub fn is_last(&self) -> bool {
        !self.has_next()
    }

    pub fn into_data(self) -> Vec<T> {
        self.data
    }
}

impl<T: Mappable> Mappable for Page<T> {
    fn did_finish_mapping(&mut self) {
        self.data.did_finish_mapping();
    }

    fn validate(&self) -> Result<(), VimeoError> {
        self.data.validate()
    }
}

#[cfg(test)]
mod tests {
    use crate::connection::Connection;
    use crate::mapper::ObjectMapper;

    use super::*;

    #[test]
    fn page() {
        let page: Page<Connection> = ObjectMapper::new().map_str(r#"{
            "total": 3,
            "page": 1,
            "per_page": 2,
            "paging": {"next": "/me/feed?page=2", "previous": null, "first": "/me/feed?page=1", "last": "/me/feed?page=2"},
            "data": [
                {"uri": "/a", "options": ["GET"]},
                {"uri": "/b", "options": ["GET"]}
            ]
        }"#).unwrap();

        assert!(page.has_next());
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.into_data()[1].uri, "/b");
    }

    #[test]
    fn last_page_defaults() {
        let page: Page<Connection> = serde_json::from_str(r#"{"data": []}"#).unwrap();
        assert!(page.is_last());
        assert_eq!(page.page, 1);
    }
}
