use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::connection::Connection;
use crate::interaction::Interaction;

#[readonly::make]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub connections: HashMap<String, Connection>,

    #[serde(default)]
    pub interactions: HashMap<String, Interaction>,
}

impl Metadata {
    pub fn connection(&self, name: &str) -> Option<&Connection> {
        self.connections.get(name)
    }

    pub fn interaction(&self, name: &str) -> Option<&Interaction> {
        self.interactions.get(name)
    }
}
