use super::Input;
use crate::engine::Action;
use crate::error::LoadError;
use serde::{Deserialize, Serialize};
use std::fs;

/// An input paired with the action to run on it, as stored in scenario files.
///
/// ```json
/// {
///   "input": [{"id": "a", "value": 10}, {"id": "b", "value": 20}],
///   "action": {"structure": "array", "op": "delete", "index": 0}
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Scenario {
    pub input: Input,
    pub action: Action,
}

impl Scenario {
    pub fn new(input: Input, action: Action) -> Self {
        Self { input, action }
    }

    /// Load a scenario from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, LoadError> {
        let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, LoadError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
