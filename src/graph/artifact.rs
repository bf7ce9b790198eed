use crate::error::GraphError;
use crate::node::NodeMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A compiled bot as it is persisted next to the chatbot record.
///
/// The on-disk shape is the bare node map, `{ "<nodeId>": { ... } }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompiledBot {
    pub node_map: NodeMap,
}

impl CompiledBot {
    pub fn new(node_map: NodeMap) -> Self {
        Self { node_map }
    }

    pub fn to_json(&self) -> Result<String, GraphError> {
        serde_json::to_string_pretty(self).map_err(|e| GraphError::Serialize(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, GraphError> {
        serde_json::from_str(json).map_err(|e| GraphError::JsonParse(e.to_string()))
    }

    /// Writes the node map as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), GraphError> {
        let path = path.as_ref();
        let json = self.to_json()?;
        fs::write(path, json).map_err(|e| GraphError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, GraphError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| GraphError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&json)
    }
}
