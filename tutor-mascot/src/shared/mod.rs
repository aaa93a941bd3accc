pub mod errors;
pub mod mouth;

pub use errors::*;
pub use mouth::*;
