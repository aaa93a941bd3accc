use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tracing::{debug, error, warn};

use crate::infrastructure::{AppEvent, EventBus};

use super::super::domain::Utterance;
use super::super::ports::SpeechSynthesizer;

/// 朗读状态守卫
///
/// 创建时把 speaking 置为 true，析构时恢复为 false 并发布结束事件，
/// 保证任何路径下标志都不会卡在 true。
struct SpeakingGuard<'a> {
    speaking: &'a watch::Sender<bool>,
    events: &'a EventBus,
}

impl<'a> SpeakingGuard<'a> {
    fn start(speaking: &'a watch::Sender<bool>, events: &'a EventBus, text: &str) -> Self {
        speaking.send_replace(true);
        events.publish(AppEvent::SpeechStarted {
            text: text.to_string(),
        });
        Self { speaking, events }
    }
}

impl Drop for SpeakingGuard<'_> {
    fn drop(&mut self) {
        self.speaking.send_replace(false);
        self.events.publish(AppEvent::SpeechEnded);
    }
}

/// 语音输出服务
///
/// `speak` 只负责入队；后台任务逐条播放，后一条必须等前一条结束后才开始。
/// 平台没有语音合成能力时 `speak` 静默忽略。
#[derive(Clone)]
pub struct SpeechOutputService {
    queue: Option<mpsc::UnboundedSender<Utterance>>,
    speaking: watch::Receiver<bool>,
}

impl SpeechOutputService {
    /// 创建服务并启动播放任务（需要在 tokio 运行时内调用）
    pub fn new(synthesizer: Arc<dyn SpeechSynthesizer>, events: EventBus) -> Self {
        let (speaking_tx, speaking_rx) = watch::channel(false);

        if !synthesizer.is_available() {
            debug!("Speech synthesis unavailable, output is a no-op");
            return Self {
                queue: None,
                speaking: speaking_rx,
            };
        }

        let (queue_tx, queue_rx) = mpsc::unbounded_channel();
        tokio::spawn(playback_loop(synthesizer, queue_rx, speaking_tx, events));

        Self {
            queue: Some(queue_tx),
            speaking: speaking_rx,
        }
    }

    /// 朗读文本（入队）
    pub fn speak(&self, text: impl Into<String>) {
        let Some(queue) = &self.queue else {
            return;
        };

        if queue.send(Utterance::new(text)).is_err() {
            warn!("Speech playback task has stopped, utterance dropped");
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.queue.is_some()
    }

    pub fn is_speaking(&self) -> bool {
        *self.speaking.borrow()
    }

    /// 订阅 speaking 标志
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.speaking.clone()
    }
}

async fn playback_loop(
    synthesizer: Arc<dyn SpeechSynthesizer>,
    mut queue: mpsc::UnboundedReceiver<Utterance>,
    speaking: watch::Sender<bool>,
    events: EventBus,
) {
    while let Some(utterance) = queue.recv().await {
        let _guard = SpeakingGuard::start(&speaking, &events, &utterance.text);

        // 放到独立任务里执行，适配器 panic 时也能走到守卫的析构
        let synthesizer = synthesizer.clone();
        let job = tokio::spawn(async move { synthesizer.speak(&utterance).await });

        match job.await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => warn!("Speech synthesis failed: {}", e),
            Err(e) => error!("Speech synthesis task aborted: {}", e),
        }
    }

    debug!("Speech playback loop finished");
}
