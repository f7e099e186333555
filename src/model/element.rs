use super::Status;
use serde::{Deserialize, Serialize};

pub type ElementId = String;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// The geometry specific to each kind of element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    /// A circle that may point at other nodes by id.
    Node {
        radius: f64,
        targets: Vec<ElementId>,
    },
    /// A rectangular slot. `scale_group` enables bar-chart rendering.
    Box {
        width: f64,
        height: f64,
        scale_group: Option<String>,
    },
    /// A labelled marker such as `head`, `top` or `null`.
    Pointer,
}

/// A single visual entity inside a frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: ElementId,
    pub value: Option<f64>,
    pub position: Position,
    pub status: Status,
    pub description: String,
    #[serde(flatten)]
    pub shape: Shape,
}

impl Element {
    pub fn node(id: impl Into<ElementId>, value: Option<f64>, position: Position, radius: f64) -> Self {
        Self {
            id: id.into(),
            value,
            position,
            status: Status::default(),
            description: String::new(),
            shape: Shape::Node {
                radius,
                targets: Vec::new(),
            },
        }
    }

    pub fn boxed(
        id: impl Into<ElementId>,
        value: Option<f64>,
        position: Position,
        width: f64,
        height: f64,
    ) -> Self {
        Self {
            id: id.into(),
            value,
            position,
            status: Status::default(),
            description: String::new(),
            shape: Shape::Box {
                width,
                height,
                scale_group: None,
            },
        }
    }

    pub fn pointer(id: impl Into<ElementId>, label: impl Into<String>, position: Position) -> Self {
        Self {
            id: id.into(),
            value: None,
            position,
            status: Status::default(),
            description: label.into(),
            shape: Shape::Pointer,
        }
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Appends an outgoing relation. Has no effect on boxes and pointers.
    pub fn with_target(mut self, target: impl Into<ElementId>) -> Self {
        if let Shape::Node { targets, .. } = &mut self.shape {
            targets.push(target.into());
        }
        self
    }

    pub fn with_scale_group(mut self, group: impl Into<String>) -> Self {
        if let Shape::Box { scale_group, .. } = &mut self.shape {
            *scale_group = Some(group.into());
        }
        self
    }

    pub fn targets(&self) -> &[ElementId] {
        match &self.shape {
            Shape::Node { targets, .. } => targets,
            _ => &[],
        }
    }

    pub fn is_node(&self) -> bool {
        matches!(self.shape, Shape::Node { .. })
    }

    pub fn is_box(&self) -> bool {
        matches!(self.shape, Shape::Box { .. })
    }
}
