// Speech Ports
//
// 平台语音能力的抽象接口；生产环境绑定本机命令，测试使用脚本化实现

use async_trait::async_trait;
use thiserror::Error;

use super::domain::{RecognitionSettings, Utterance};

/// 语音错误类型
#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("Speech capability unavailable: {0}")]
    Unavailable(String),

    #[error("Speech process failed: {0}")]
    Process(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// 语音合成端口
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// 平台是否具备语音合成能力
    fn is_available(&self) -> bool;

    /// 朗读一段文本，播放结束后返回
    async fn speak(&self, utterance: &Utterance) -> Result<(), SpeechError>;
}

/// 语音识别端口
#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    /// 平台是否具备语音识别能力
    fn is_available(&self) -> bool;

    /// 捕获一句话
    ///
    /// `Ok(None)` 表示识别结束但没有得到文本
    async fn recognize(&self, settings: &RecognitionSettings)
        -> Result<Option<String>, SpeechError>;
}
