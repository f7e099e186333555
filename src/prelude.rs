//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the kiseki crate.
//! Import this module to get access to the core functionality without having
//! to import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use kiseki::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let scenario = Scenario::from_file("path/to/scenario.json")?;
//! let layout = LayoutConfig::from_file("path/to/layout.json")?;
//!
//! let engine = Engine::builder().layout(layout).build();
//! let frames = engine.try_generate(&scenario.input, &scenario.action)?;
//!
//! println!("{}", TraceFormatter::format_frames(&frames, Some(scenario.action.operation())));
//! # Ok(())
//! # }
//! ```

// Frame generation
pub use crate::engine::{
    Action, Algorithm, ArrayOp, BstOp, Engine, EngineBuilder, GraphAction, GridAction, ListAction, ListOp, QueueOp,
    StackOp, generate_frames,
};
pub use crate::tree::TraversalOrder;

// Input data
pub use crate::data::{EdgeRecord, GraphNodeRecord, GraphRecord, Input, Record, Scenario};

// Frame model
pub use crate::model::{Element, Frame, Link, LinkStatus, Palette, Position, Shape, Status, Value};

// Layout and pseudocode highlighting
pub use crate::highlight::{ActionTag, Operation};
pub use crate::layout::LayoutConfig;

// Error types
pub use crate::error::{InputError, LoadError};

// Trace formatting
pub use crate::trace::TraceFormatter;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
