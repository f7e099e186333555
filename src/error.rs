use thiserror::Error;

/// Reasons an input cannot be traced. `generate_frames` turns any of these
/// into an empty frame vector; `Engine::try_generate` hands them back.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("Action '{action}' expects {expected} input, but received {found}")]
    ShapeMismatch {
        action: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Graph input has no nodes")]
    EmptyGraph,

    #[error("Graph input has no edges list")]
    MissingEdges,

    #[error("Edge '{source_id}' -> '{target_id}' references an unknown node")]
    DanglingEdge {
        source_id: String,
        target_id: String,
    },

    #[error("Node '{0}' not found in the input")]
    UnknownNode(String),

    #[error("Record id '{0}' appears more than once")]
    DuplicateId(String),

    #[error("Grid column count must be positive")]
    ZeroColumns,

    #[error("Cannot run {0} on an empty structure")]
    EmptyStructure(&'static str),
}

/// Errors raised while loading scenario or layout files from disk.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Could not read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}
