pub mod chat;
pub mod input;
pub mod mascot;
pub mod speech;

pub use chat::*;
pub use input::*;
pub use mascot::*;
pub use speech::*;
