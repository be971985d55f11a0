use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::VimeoError;
use crate::mapper::{Mappable, ModelObject};
use crate::metadata::Metadata;
use crate::picture::PictureCollection;

#[readonly::make]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subcategory {
    pub uri: String,
    pub name: String,

    #[serde(default)]
    pub link: Option<Url>,
}

#[readonly::make]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub uri: String,
    pub name: String,

    #[serde(default)]
    pub link: Option<Url>,

    #[serde(default = "top_level_default")]
    pub top_level: bool,

    #[serde(default)]
    pub pictures: Option<PictureCollection>,

    #[serde(default)]
    pub subcategories: Vec<Subcategory>,

    #[serde(default)]
    pub metadata: Option<Metadata>,
}

fn top_level_default() -> bool {
    true
}

impl Category {
    pub fn is_subcategory(&self) -> bool {
        !self.top_level
    }
}

impl Mappable for Category {
    fn did_finish_mapping(&mut self) {
        self.pictures.did_finish_mapping();
    }

    fn validate(&self) -> Result<(), VimeoError> {
        self.pictures.validate()
    }
}

impl ModelObject for Category {
    fn uri(&self) -> Option<&str> {
        Some(&self.uri)
    }

    fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category() {
        let c: Category = serde_json::from_str(r#"{
            "uri": "/categories/animation",
            "name": "Animation",
            "top_level": true,
            "subcategories": [
                {"uri": "/categories/animation/stopmotion", "name": "Stop Motion", "link": "https://vimeo.com/categories/animation/stopmotion"}
            ]
        }"#).unwrap();

        assert!(!c.is_subcategory());
        assert_eq!(c.object_id(), Some("animation"));
        assert_eq!(c.subcategories[0].name, "Stop Motion");
    }
}
