use serde::{Deserialize, Serialize};
use std::fmt;

/// Visual state of an element.
///
/// The five built-in tags are what every simulator uses by default. Anything
/// else travels as `Custom` so renderers can fall back gracefully.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Status {
    #[default]
    Unfinished,
    Prepare,
    Target,
    Complete,
    Inactive,
    Custom(String),
}

impl Status {
    /// Processed node in a graph or grid search.
    pub fn visited() -> Self {
        Status::Custom("visited".to_string())
    }

    /// Impassable grid cell.
    pub fn wall() -> Self {
        Status::Custom("wall".to_string())
    }

    pub fn as_str(&self) -> &str {
        match self {
            Status::Unfinished => "unfinished",
            Status::Prepare => "prepare",
            Status::Target => "target",
            Status::Complete => "complete",
            Status::Inactive => "inactive",
            Status::Custom(tag) => tag,
        }
    }

    pub fn is_builtin(&self) -> bool {
        !matches!(self, Status::Custom(_))
    }
}

impl From<String> for Status {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "unfinished" => Status::Unfinished,
            "prepare" => Status::Prepare,
            "target" => Status::Target,
            "complete" => Status::Complete,
            "inactive" => Status::Inactive,
            _ => Status::Custom(tag),
        }
    }
}

impl From<&str> for Status {
    fn from(tag: &str) -> Self {
        Status::from(tag.to_string())
    }
}

impl From<Status> for String {
    fn from(status: Status) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Highlight state of a structural link, accumulated across a trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkStatus {
    /// Edge currently being examined.
    Path,
    /// Edge that discovered its target.
    Visited,
    /// Edge on the final answer path.
    Complete,
}

impl fmt::Display for LinkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkStatus::Path => f.write_str("path"),
            LinkStatus::Visited => f.write_str("visited"),
            LinkStatus::Complete => f.write_str("complete"),
        }
    }
}
