// Config Domain Layer

pub mod entities;
pub mod value_objects;

pub use entities::{
    ApiConfig, AppConfig, MascotConfig, SpeechConfig, DEFAULT_API_BASE, DEFAULT_INITIAL_INPUT,
};
pub use value_objects::{ExchangePolicy, Switch};
