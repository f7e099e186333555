pub mod builder;
pub mod labels;
pub mod tracker;

pub use builder::*;
pub use labels::*;
pub use tracker::*;
