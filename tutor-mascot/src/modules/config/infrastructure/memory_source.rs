// In-Memory Config Source
//
// 基于内存的配置来源（用于测试）

use std::collections::HashMap;

use crate::modules::config::ports::ConfigSource;

/// 内存配置来源
#[derive(Debug, Clone, Default)]
pub struct InMemoryConfigSource {
    values: HashMap<String, String>,
}

impl InMemoryConfigSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl ConfigSource for InMemoryConfigSource {
    fn get(&self, key: &str) -> Option<String> {
        self.values
            .get(key)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }
}
