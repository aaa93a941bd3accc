// Speech Infrastructure Layer
// 语音端口的具体适配器

mod command;
mod scripted;
mod unavailable;

pub use command::{CommandRecognizer, CommandSpec, CommandSynthesizer, LOCALE_ENV};
pub use scripted::{PlaybackEntry, ScriptedRecognizer, ScriptedSynthesizer};
pub use unavailable::{UnavailableRecognizer, UnavailableSynthesizer};
