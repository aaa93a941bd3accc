// Input Parsing - 终端输入解析
//
// 一行输入对应一个界面动作；以 `/` 开头的是命令，其余替换待发送输入

use thiserror::Error;

use crate::modules::chat::Operation;

/// 界面动作
#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    /// 替换待发送输入
    SetInput(String),
    /// 提交一次交换；未给出文本时提交待发送输入
    Submit {
        operation: Operation,
        text: Option<String>,
    },
    /// 开始一次语音识别
    Capture,
    /// 指针移动到 (x, y)
    Look { x: f32, y: f32 },
    Health,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("Unknown command: {0} (try /help)")]
    UnknownCommand(String),

    #[error("Invalid argument for {command}: {reason}")]
    InvalidArgument {
        command: &'static str,
        reason: String,
    },
}

impl UiAction {
    /// 解析一行输入；空行返回 None
    pub fn parse(line: &str) -> Result<Option<Self>, InputError> {
        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            return Ok(None);
        }

        let Some(command) = line.trim_start().strip_prefix('/') else {
            return Ok(Some(UiAction::SetInput(line.to_string())));
        };

        let (name, rest) = match command.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (command, ""),
        };

        let action = match name {
            "query" => UiAction::Submit {
                operation: Operation::Query,
                text: non_empty(rest),
            },
            "chat" => UiAction::Submit {
                operation: Operation::Chat,
                text: non_empty(rest),
            },
            "mic" => UiAction::Capture,
            "look" => parse_look(rest)?,
            "health" => UiAction::Health,
            "show" => UiAction::Show,
            "help" => UiAction::Help,
            "quit" | "exit" => UiAction::Quit,
            other => return Err(InputError::UnknownCommand(format!("/{}", other))),
        };

        Ok(Some(action))
    }
}

fn non_empty(text: &str) -> Option<String> {
    (!text.is_empty()).then(|| text.to_string())
}

fn parse_look(args: &str) -> Result<UiAction, InputError> {
    let invalid = |reason: String| InputError::InvalidArgument {
        command: "/look",
        reason,
    };

    let coords: Vec<&str> = args.split_whitespace().collect();
    let [x, y] = coords.as_slice() else {
        return Err(invalid(format!("expected two numbers, got {:?}", args)));
    };

    let x = x
        .parse::<f32>()
        .map_err(|e| invalid(format!("x: {}", e)))?;
    let y = y
        .parse::<f32>()
        .map_err(|e| invalid(format!("y: {}", e)))?;

    Ok(UiAction::Look { x, y })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_line_sets_input() {
        assert_eq!(
            UiAction::parse("  what is a hypotenuse?\n").unwrap(),
            Some(UiAction::SetInput("  what is a hypotenuse?".to_string()))
        );
        assert_eq!(UiAction::parse("   \n").unwrap(), None);
    }

    #[test]
    fn test_submit_commands() {
        assert_eq!(
            UiAction::parse("/query").unwrap(),
            Some(UiAction::Submit {
                operation: Operation::Query,
                text: None
            })
        );
        assert_eq!(
            UiAction::parse("/chat  and the legs?  ").unwrap(),
            Some(UiAction::Submit {
                operation: Operation::Chat,
                text: Some("and the legs?".to_string())
            })
        );
    }

    #[test]
    fn test_simple_commands() {
        assert_eq!(UiAction::parse("/mic").unwrap(), Some(UiAction::Capture));
        assert_eq!(UiAction::parse("/health").unwrap(), Some(UiAction::Health));
        assert_eq!(UiAction::parse("/show").unwrap(), Some(UiAction::Show));
        assert_eq!(UiAction::parse("/help").unwrap(), Some(UiAction::Help));
        assert_eq!(UiAction::parse("/quit").unwrap(), Some(UiAction::Quit));
    }

    #[test]
    fn test_look_arguments() {
        assert_eq!(
            UiAction::parse("/look 10 90.5").unwrap(),
            Some(UiAction::Look { x: 10.0, y: 90.5 })
        );
        assert!(matches!(
            UiAction::parse("/look 10"),
            Err(InputError::InvalidArgument { command: "/look", .. })
        ));
        assert!(UiAction::parse("/look left up").is_err());
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            UiAction::parse("/dance"),
            Err(InputError::UnknownCommand("/dance".to_string()))
        );
    }
}
