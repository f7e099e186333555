pub mod model;
pub mod scenario;

pub use model::*;
pub use scenario::Scenario;
