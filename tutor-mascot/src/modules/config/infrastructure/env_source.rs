// Environment Config Source
//
// 启动时一次性读取进程环境变量

use std::collections::HashMap;

use crate::modules::config::ports::ConfigSource;

/// 环境变量配置来源
///
/// 构造时对环境做快照，之后不再读取进程环境
#[derive(Debug, Clone)]
pub struct EnvConfigSource {
    values: HashMap<String, String>,
}

impl EnvConfigSource {
    pub fn capture() -> Self {
        Self {
            values: std::env::vars().collect(),
        }
    }
}

impl ConfigSource for EnvConfigSource {
    fn get(&self, key: &str) -> Option<String> {
        self.values
            .get(key)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }
}
