// Config Source Port
//
// 配置来源端口：按键读取原始字符串

use thiserror::Error;

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value} ({reason})")]
    Invalid {
        key: String,
        value: String,
        reason: String,
    },
}

/// 配置来源
pub trait ConfigSource: Send + Sync {
    /// 读取原始值；空字符串视为未设置
    fn get(&self, key: &str) -> Option<String>;
}
