pub mod element;
pub mod frame;
pub mod palette;
pub mod status;
pub mod value;

pub use element::*;
pub use frame::*;
pub use palette::*;
pub use status::*;
pub use value::*;
