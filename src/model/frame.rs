use super::{Element, LinkStatus, Value};
use crate::highlight::ActionTag;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Ordered so that two identical traces serialize identically.
pub type Variables = BTreeMap<String, Value>;

/// A structural relationship between two elements of the same frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub key: String,
    pub source_id: String,
    pub target_id: String,
    pub status: Option<LinkStatus>,
}

impl Link {
    pub fn new(source_id: impl Into<String>, target_id: impl Into<String>) -> Self {
        let source_id = source_id.into();
        let target_id = target_id.into();
        Self {
            key: Self::key_for(&source_id, &target_id),
            source_id,
            target_id,
            status: None,
        }
    }

    pub fn key_for(source_id: &str, target_id: &str) -> String {
        format!("{}->{}", source_id, target_id)
    }
}

/// One immutable snapshot of an animation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub step_number: usize,
    pub description: String,
    pub elements: Vec<Element>,
    pub links: Vec<Link>,
    pub action_tag: Option<ActionTag>,
    pub variables: Variables,
}

impl Frame {
    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub fn link(&self, source_id: &str, target_id: &str) -> Option<&Link> {
        self.links
            .iter()
            .find(|l| l.source_id == source_id && l.target_id == target_id)
    }

    pub fn variable(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Values of all box elements in layout order, skipping pointers and nodes.
    pub fn box_values(&self) -> Vec<Option<f64>> {
        self.elements
            .iter()
            .filter(|e| e.is_box())
            .map(|e| e.value)
            .collect()
    }
}
