// Config Infrastructure Layer

mod env_source;
mod memory_source;

pub use env_source::EnvConfigSource;
pub use memory_source::InMemoryConfigSource;
