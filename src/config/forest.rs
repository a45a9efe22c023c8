//! Declarative forest description structures

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One condition in a forest description.
///
/// `predicate` names a predicate binding; `observers` name observer bindings.
/// Children declared under `on_true` run when this condition holds, children
/// under `on_false` when it does not.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeConfig {
    pub predicate: String,
    #[serde(default)]
    pub observers: Vec<String>,
    #[serde(default)]
    pub on_true: Vec<NodeConfig>,
    #[serde(default)]
    pub on_false: Vec<NodeConfig>,
}

/// A whole forest description: root conditions in evaluation order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ForestConfig {
    #[serde(default)]
    pub roots: Vec<NodeConfig>,
}

impl ForestConfig {
    /// Parses a forest description from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
