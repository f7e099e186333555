use crate::error::LoadError;
use crate::model::Position;
use serde::{Deserialize, Serialize};
use std::fs;

/// Geometry used to position elements. Every field has a default, so a
/// partial JSON object is enough to override a single value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Top-left anchor of the first element.
    pub origin: Position,
    /// Width of an array/stack/queue slot.
    pub box_width: f64,
    /// Height of an array/stack/queue slot.
    pub box_height: f64,
    /// Gap between adjacent slots.
    pub box_gap: f64,
    /// Radius of list, tree and graph nodes.
    pub node_radius: f64,
    /// Horizontal distance between neighbouring list or tree nodes.
    pub node_spacing: f64,
    /// Vertical distance between tree levels.
    pub level_height: f64,
    /// Vertical offset of pointer markers from the element they mark.
    pub pointer_offset: f64,
    /// Radius of the circle used when a graph node has no coordinates.
    pub graph_radius: f64,
    /// Edge length of a grid cell.
    pub cell_size: f64,
    /// Scale group assigned to array slots when bar-chart mode is enabled.
    pub scale_group: Option<String>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            origin: Position::new(40.0, 40.0),
            box_width: 48.0,
            box_height: 48.0,
            box_gap: 8.0,
            node_radius: 20.0,
            node_spacing: 72.0,
            level_height: 80.0,
            pointer_offset: 44.0,
            graph_radius: 160.0,
            cell_size: 36.0,
            scale_group: None,
        }
    }
}

impl LayoutConfig {
    /// Load a layout from a JSON file. Missing fields keep their defaults.
    pub fn from_file(path: &str) -> Result<Self, LoadError> {
        let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        serde_json::from_str(json).map_err(LoadError::from)
    }

    /// Position of the `index`-th slot in a horizontal row.
    pub fn slot(&self, index: usize) -> Position {
        self.origin
            .offset(index as f64 * (self.box_width + self.box_gap), 0.0)
    }

    /// Position of the `index`-th node in a horizontal chain.
    pub fn chain(&self, index: usize) -> Position {
        self.origin.offset(
            self.node_radius + index as f64 * self.node_spacing,
            self.pointer_offset + self.node_radius,
        )
    }
}
