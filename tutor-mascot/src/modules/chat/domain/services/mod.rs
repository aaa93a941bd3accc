// Domain Services

mod emotion_analyzer;

pub use emotion_analyzer::EmotionAnalyzer;
