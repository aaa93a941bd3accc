// Speech Application Layer

mod input;
mod output;

pub use input::SpeechInputService;
pub use output::SpeechOutputService;
