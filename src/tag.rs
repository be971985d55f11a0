use serde::{Deserialize, Serialize};

use crate::mapper::{Mappable, ModelObject};
use crate::metadata::Metadata;

#[readonly::make]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub uri: String,
    pub name: String,
    pub tag: String,
    pub canonical: String,

    #[serde(default)]
    pub metadata: Option<Metadata>,
}

impl Mappable for Tag {}

impl ModelObject for Tag {
    fn uri(&self) -> Option<&str> {
        Some(&self.uri)
    }

    fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use crate::mapper::ObjectMapper;

    use super::*;

    #[test]
    fn tag() {
        let t: Tag = ObjectMapper::new().map_str(r#"{
            "uri": "/tags/stopmotion",
            "name": "Stop Motion",
            "tag": "stop motion",
            "canonical": "stopmotion",
            "metadata": {"connections": {"videos": {"uri": "/tags/stopmotion/videos", "options": ["GET"], "total": 80}}}
        }"#).unwrap();

        assert_eq!(t.canonical, "stopmotion");
        assert_eq!(t.object_id(), Some("stopmotion"));
        assert_eq!(t.connection("videos").unwrap().total(), 80);
    }
}
