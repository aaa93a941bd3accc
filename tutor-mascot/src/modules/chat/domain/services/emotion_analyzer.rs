use super::super::value_objects::{EmotionTag, KnownEmotion};

const THINKING_KEYWORDS: &[&str] = &["let us think", "let's think", "step by step", "hmm", "consider"];
const HAPPY_KEYWORDS: &[&str] = &["great", "awesome", "nice job", "well done", "happy to"];

/// 情感分析服务
///
/// 领域服务：当远端回复缺少情感标签时，按服务端相同的关键词规则在本地推断
#[derive(Debug, Clone, Default)]
pub struct EmotionAnalyzer;

impl EmotionAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// 分析文本的情感
    pub fn analyze(&self, text: &str) -> KnownEmotion {
        let lower = text.to_lowercase();

        if THINKING_KEYWORDS.iter().any(|k| lower.contains(k)) {
            return KnownEmotion::Thinking;
        }

        if HAPPY_KEYWORDS.iter().any(|k| lower.contains(k)) {
            return KnownEmotion::Happy;
        }

        KnownEmotion::Explaining
    }

    /// 服务端给出的标签原样使用（包括空字符串），缺少该字段时才在本地推断
    pub fn resolve(&self, received: Option<&str>, text: &str) -> EmotionTag {
        match received {
            Some(tag) => EmotionTag::new(tag),
            None => self.analyze(text).into(),
        }
    }
}
