// Speech Domain
//
// 语音合成与识别的值对象

use serde::{Deserialize, Serialize};

/// 默认识别语言
pub const DEFAULT_LOCALE: &str = "en-US";

/// 一次语音合成任务
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Utterance {
    pub text: String,
}

impl Utterance {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// 识别参数
///
/// 固定为单一最佳结果：不要中间结果，不要候选
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognitionSettings {
    pub locale: String,
    pub interim_results: bool,
    pub max_alternatives: u32,
}

impl RecognitionSettings {
    pub fn for_locale(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            ..Self::default()
        }
    }
}

impl Default for RecognitionSettings {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            interim_results: false,
            max_alternatives: 1,
        }
    }
}

/// 一次识别会话的结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "camelCase")]
pub enum CaptureOutcome {
    /// 识别到文本
    Transcript(String),
    /// 结束但没有文本（静音、主动结束）
    Ended,
    /// 识别出错
    Failed(String),
    /// 平台不支持语音识别
    Unsupported,
    /// 已有识别会话在进行，本次请求被拒绝
    AlreadyActive,
}

impl CaptureOutcome {
    pub fn transcript(&self) -> Option<&str> {
        match self {
            CaptureOutcome::Transcript(text) => Some(text),
            _ => None,
        }
    }
}
