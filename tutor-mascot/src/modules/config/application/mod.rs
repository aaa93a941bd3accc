// Config Application Layer

mod loader;

pub use loader::{keys, ConfigLoader};
