pub mod filters;
pub mod refresh;

pub use filters::*;
pub use refresh::*;
