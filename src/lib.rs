//! # Kiseki - Deterministic Execution Traces for Data-Structure Visualizers
//!
//! **Kiseki** turns a data-structure operation into the ordered sequence of
//! frames a visualizer animates. Each frame is a complete, immutable snapshot:
//! positioned elements with a visual status, the links between them, the
//! pseudocode step being executed and the algorithm's live variables.
//!
//! ## Core Workflow
//!
//! The engine is a pure function of its input. Nothing is mutated in place and
//! the same input always yields the same frames, so traces can be cached,
//! diffed or replayed without a running simulator.
//!
//! 1.  **Describe the input**: a flat list of [`data::Record`]s (arrays, lists,
//!     stacks, queues, trees, grids) or a [`data::GraphRecord`].
//! 2.  **Pick an action**: an [`engine::Action`] names the structure and the
//!     operation, e.g. `{"structure": "bst", "op": "insert", "value": 40}`.
//! 3.  **Generate**: [`engine::generate_frames`] (or an [`engine::Engine`] with
//!     a custom [`layout::LayoutConfig`]) returns the frames.
//! 4.  **Render**: map each frame's `action_tag` to pseudocode lines with
//!     [`highlight::Operation::code_lines`], and statuses to colors with
//!     [`model::Palette`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use kiseki::prelude::*;
//!
//! fn main() -> Result<()> {
//!     // A BST built from [50, 30, 70] by repeated insertion.
//!     let input = Input::from_values(&[50.0, 30.0, 70.0]);
//!     let action = Action::Bst(BstOp::Insert { value: 40.0 });
//!
//!     let frames = generate_frames(&input, &action);
//!     let operation = action.operation();
//!
//!     for frame in &frames {
//!         let lines = frame
//!             .action_tag
//!             .and_then(|tag| operation.code_lines(tag))
//!             .unwrap_or_default();
//!         println!("[{}] {} (lines {:?})", frame.step_number, frame.description, lines);
//!     }
//!
//!     // Or load a scenario from disk and print a text transcript.
//!     let scenario = Scenario::from_file("data/scenario.json")?;
//!     let engine = Engine::builder().build();
//!     let frames = engine.try_generate(&scenario.input, &scenario.action)?;
//!     println!("{}", TraceFormatter::format_frames(&frames, Some(scenario.action.operation())));
//!
//!     Ok(())
//! }
//! ```

pub mod data;
pub mod engine;
pub mod error;
pub mod frame;
pub mod graph;
pub mod highlight;
pub mod layout;
pub mod linear;
pub mod model;
pub mod prelude;
pub mod trace;
pub mod tree;
