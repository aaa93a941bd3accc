// 脚本化语音适配器
//
// 用于测试和无音频环境：合成器记录播放日志，识别器按顺序返回预设结果

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use super::super::domain::{RecognitionSettings, Utterance};
use super::super::ports::{SpeechError, SpeechRecognizer, SpeechSynthesizer};

/// 合成器播放日志条目
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackEntry {
    Started(String),
    Finished(String),
}

/// 脚本化语音合成器
#[derive(Default)]
pub struct ScriptedSynthesizer {
    duration: Duration,
    fail: bool,
    log: Mutex<Vec<PlaybackEntry>>,
}

impl ScriptedSynthesizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// 每次播放持续的时间
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// 每次播放都以错误结束
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    pub fn log(&self) -> Vec<PlaybackEntry> {
        self.log.lock().map(|log| log.clone()).unwrap_or_default()
    }

    /// 已经开始播放的文本
    pub fn spoken(&self) -> Vec<String> {
        self.log()
            .into_iter()
            .filter_map(|entry| match entry {
                PlaybackEntry::Started(text) => Some(text),
                PlaybackEntry::Finished(_) => None,
            })
            .collect()
    }

    fn record(&self, entry: PlaybackEntry) {
        if let Ok(mut log) = self.log.lock() {
            log.push(entry);
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for ScriptedSynthesizer {
    fn is_available(&self) -> bool {
        true
    }

    async fn speak(&self, utterance: &Utterance) -> Result<(), SpeechError> {
        self.record(PlaybackEntry::Started(utterance.text.clone()));

        if !self.duration.is_zero() {
            tokio::time::sleep(self.duration).await;
        }

        self.record(PlaybackEntry::Finished(utterance.text.clone()));

        if self.fail {
            Err(SpeechError::Process("scripted failure".to_string()))
        } else {
            Ok(())
        }
    }
}

/// 脚本化语音识别器
#[derive(Default)]
pub struct ScriptedRecognizer {
    delay: Duration,
    script: Mutex<VecDeque<Result<Option<String>, SpeechError>>>,
    seen_settings: Mutex<Vec<RecognitionSettings>>,
}

impl ScriptedRecognizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// 每次识别持续的时间
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn push_transcript(&self, text: impl Into<String>) -> &Self {
        self.push(Ok(Some(text.into())))
    }

    pub fn push_silence(&self) -> &Self {
        self.push(Ok(None))
    }

    pub fn push_error(&self, error: SpeechError) -> &Self {
        self.push(Err(error))
    }

    fn push(&self, result: Result<Option<String>, SpeechError>) -> &Self {
        if let Ok(mut script) = self.script.lock() {
            script.push_back(result);
        }
        self
    }

    /// 每次识别收到的参数
    pub fn seen_settings(&self) -> Vec<RecognitionSettings> {
        self.seen_settings
            .lock()
            .map(|seen| seen.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl SpeechRecognizer for ScriptedRecognizer {
    fn is_available(&self) -> bool {
        true
    }

    async fn recognize(
        &self,
        settings: &RecognitionSettings,
    ) -> Result<Option<String>, SpeechError> {
        if let Ok(mut seen) = self.seen_settings.lock() {
            seen.push(settings.clone());
        }

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        self.script
            .lock()
            .ok()
            .and_then(|mut script| script.pop_front())
            .unwrap_or(Ok(None))
    }
}
