// Config Value Objects
//
// 配置相关的值对象定义

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 交换调度策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExchangePolicy {
    /// 提交即发送，多个请求可以同时在途，响应按到达顺序写入
    #[default]
    Concurrent,
    /// 单槽队列，同一时间只有一个请求在途
    Serialized,
}

impl ExchangePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExchangePolicy::Concurrent => "concurrent",
            ExchangePolicy::Serialized => "serialized",
        }
    }
}

impl FromStr for ExchangePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "concurrent" => Ok(ExchangePolicy::Concurrent),
            "serialized" | "serial" => Ok(ExchangePolicy::Serialized),
            other => Err(format!("unknown exchange policy: {}", other)),
        }
    }
}

/// 开关值（on/off、true/false、1/0）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Switch(pub bool);

impl FromStr for Switch {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "on" | "true" | "1" | "yes" => Ok(Switch(true)),
            "off" | "false" | "0" | "no" => Ok(Switch(false)),
            other => Err(format!("expected on/off, got {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exchange_policy_from_str() {
        assert_eq!("concurrent".parse(), Ok(ExchangePolicy::Concurrent));
        assert_eq!("Serialized".parse(), Ok(ExchangePolicy::Serialized));
        assert!("queue".parse::<ExchangePolicy>().is_err());
    }

    #[test]
    fn test_switch_from_str() {
        assert_eq!("off".parse(), Ok(Switch(false)));
        assert_eq!("TRUE".parse(), Ok(Switch(true)));
        assert!("maybe".parse::<Switch>().is_err());
    }
}
