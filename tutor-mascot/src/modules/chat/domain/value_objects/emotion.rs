use serde::{Deserialize, Serialize};
use std::fmt;

/// 默认情感标签
pub const DEFAULT_EMOTION: &str = "explaining";

/// 情感标签
///
/// 值对象：由远端响应提供的自由字符串，用作吉祥物表情的样式键。
/// 不做大小写转换和校验，收到什么就原样保存什么。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmotionTag(String);

impl EmotionTag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 对应的已知情感（未知标签返回 None）
    pub fn known(&self) -> Option<KnownEmotion> {
        KnownEmotion::all()
            .iter()
            .copied()
            .find(|known| known.as_str() == self.0)
    }
}

impl Default for EmotionTag {
    fn default() -> Self {
        Self(DEFAULT_EMOTION.to_string())
    }
}

impl fmt::Display for EmotionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EmotionTag {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for EmotionTag {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// 已知的情感类型
///
/// 远端服务目前只会返回 explaining / happy / thinking，
/// excited 是前端额外准备的表情。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownEmotion {
    /// 讲解
    Explaining,
    /// 开心
    Happy,
    /// 思考
    Thinking,
    /// 兴奋
    Excited,
}

impl KnownEmotion {
    /// 获取所有已知的情感类型
    pub fn all() -> &'static [KnownEmotion] {
        &[
            KnownEmotion::Explaining,
            KnownEmotion::Happy,
            KnownEmotion::Thinking,
            KnownEmotion::Excited,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            KnownEmotion::Explaining => "explaining",
            KnownEmotion::Happy => "happy",
            KnownEmotion::Thinking => "thinking",
            KnownEmotion::Excited => "excited",
        }
    }
}

impl From<KnownEmotion> for EmotionTag {
    fn from(emotion: KnownEmotion) -> Self {
        Self::new(emotion.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_emotion() {
        assert_eq!(EmotionTag::default().as_str(), "explaining");
    }

    #[test]
    fn test_tag_is_kept_verbatim() {
        let tag = EmotionTag::from("Confused-ish");
        assert_eq!(tag.as_str(), "Confused-ish");
        assert!(tag.known().is_none());
    }

    #[test]
    fn test_known_lookup_is_case_sensitive() {
        assert_eq!(EmotionTag::from("happy").known(), Some(KnownEmotion::Happy));
        assert_eq!(EmotionTag::from("HAPPY").known(), None);
    }
}
