// 本机命令语音适配器
//
// 语音合成调用系统自带的 TTS 命令（say / espeak-ng / espeak / spd-say），
// 语音识别调用用户配置的外部识别命令，标准输出的第一行非空文本即识别结果。

use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info};

use super::super::domain::{RecognitionSettings, Utterance};
use super::super::ports::{SpeechError, SpeechRecognizer, SpeechSynthesizer};

/// 自动探测的 TTS 命令，按优先级排列
const SYNTHESIZER_CANDIDATES: &[&str] = &["say", "espeak-ng", "espeak", "spd-say"];

/// 传递给识别命令的语言环境变量
pub const LOCALE_ENV: &str = "TUTOR_LOCALE";

/// 解析后的命令行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    /// 按空白拆分命令行（不支持引号）
    pub fn parse(command_line: &str) -> Option<Self> {
        let mut parts = command_line.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self {
            program,
            args: parts.collect(),
        })
    }

    fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args).kill_on_drop(true);
        command
    }
}

/// 在 PATH 中查找可执行文件
fn find_on_path(name: &str) -> bool {
    let Some(paths) = std::env::var_os("PATH") else {
        return false;
    };

    std::env::split_paths(&paths).any(|dir| {
        let candidate = dir.join(name);
        is_executable(&candidate) || is_executable(&candidate.with_extension("exe"))
    })
}

fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// 命令行语音合成器
pub struct CommandSynthesizer {
    spec: Option<CommandSpec>,
}

impl CommandSynthesizer {
    /// 使用配置的命令；未配置时探测系统 TTS
    pub fn from_config(configured: Option<&str>) -> Self {
        let spec = match configured {
            Some(line) => CommandSpec::parse(line),
            None => SYNTHESIZER_CANDIDATES
                .iter()
                .find(|name| find_on_path(name))
                .and_then(|name| CommandSpec::parse(name)),
        };

        match &spec {
            Some(spec) => info!("Speech synthesis via `{}`", spec.program),
            None => info!("No speech synthesis command found, speech output disabled"),
        }

        Self { spec }
    }

    pub fn spec(&self) -> Option<&CommandSpec> {
        self.spec.as_ref()
    }
}

#[async_trait]
impl SpeechSynthesizer for CommandSynthesizer {
    fn is_available(&self) -> bool {
        self.spec.is_some()
    }

    async fn speak(&self, utterance: &Utterance) -> Result<(), SpeechError> {
        let spec = self
            .spec
            .as_ref()
            .ok_or_else(|| SpeechError::Unavailable("no synthesis command".to_string()))?;

        debug!("Speaking {} chars via {}", utterance.text.len(), spec.program);

        let output = spec
            .command()
            .arg(&utterance.text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .await?;

        if output.status.success() {
            Ok(())
        } else {
            Err(SpeechError::Process(format!(
                "{} exited with {}: {}",
                spec.program,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )))
        }
    }
}

/// 命令行语音识别器
///
/// 只在显式配置了识别命令时可用
pub struct CommandRecognizer {
    spec: Option<CommandSpec>,
}

impl CommandRecognizer {
    pub fn from_config(configured: Option<&str>) -> Self {
        Self {
            spec: configured.and_then(CommandSpec::parse),
        }
    }
}

#[async_trait]
impl SpeechRecognizer for CommandRecognizer {
    fn is_available(&self) -> bool {
        self.spec.is_some()
    }

    async fn recognize(
        &self,
        settings: &RecognitionSettings,
    ) -> Result<Option<String>, SpeechError> {
        let spec = self
            .spec
            .as_ref()
            .ok_or_else(|| SpeechError::Unavailable("no recognition command".to_string()))?;

        debug!("Starting recognition via {} ({})", spec.program, settings.locale);

        let output = spec
            .command()
            .env(LOCALE_ENV, &settings.locale)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await?;

        if !output.status.success() {
            return Err(SpeechError::Process(format!(
                "{} exited with {}: {}",
                spec.program,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(stdout
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .map(str::to_string))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_spec_parse() {
        let spec = CommandSpec::parse("espeak -v en-us").unwrap();
        assert_eq!(spec.program, "espeak");
        assert_eq!(spec.args, vec!["-v", "en-us"]);
        assert!(CommandSpec::parse("   ").is_none());
    }

    #[test]
    fn test_recognizer_unavailable_without_command() {
        assert!(!CommandRecognizer::from_config(None).is_available());
        assert!(CommandRecognizer::from_config(Some("my-stt")).is_available());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_recognizer_reads_first_non_empty_line() {
        let recognizer = CommandRecognizer::from_config(Some("printf \\nhello\\nworld"));
        let text = recognizer
            .recognize(&RecognitionSettings::default())
            .await
            .unwrap();
        assert_eq!(text.as_deref(), Some("hello"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_recognizer_failure_is_an_error() {
        let recognizer = CommandRecognizer::from_config(Some("false"));
        let result = recognizer.recognize(&RecognitionSettings::default()).await;
        assert!(matches!(result, Err(SpeechError::Process(_))));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_configured_synthesizer_runs_command() {
        let synthesizer = CommandSynthesizer::from_config(Some("true"));
        assert!(synthesizer.is_available());
        synthesizer.speak(&Utterance::new("hello")).await.unwrap();
    }
}
