// Mascot Infrastructure Layer

mod terminal;

pub use terminal::TerminalRenderer;
