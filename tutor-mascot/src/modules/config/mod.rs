// Config Module
//
// 配置管理模块，采用六边形架构
//
// 层次结构:
// - domain: 领域层，包含配置实体和值对象
// - ports: 端口层，定义配置来源的抽象接口
// - infrastructure: 基础设施层，环境变量与内存配置来源
// - application: 应用层，配置加载

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

// 重新导出常用类型
pub use application::{keys, ConfigLoader};
pub use domain::{ApiConfig, AppConfig, ExchangePolicy, MascotConfig, SpeechConfig};
pub use infrastructure::{EnvConfigSource, InMemoryConfigSource};
pub use ports::{ConfigError, ConfigSource};

/// Config 模块容器
///
/// 启动时加载一次，之后只读
pub struct ConfigModule {
    config: AppConfig,
}

impl ConfigModule {
    /// 从进程环境加载
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(&EnvConfigSource::capture())
    }

    /// 从指定来源加载
    pub fn from_source(source: &dyn ConfigSource) -> Result<Self, ConfigError> {
        Ok(Self {
            config: ConfigLoader::new(source).load()?,
        })
    }

    pub fn with_config(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn into_config(self) -> AppConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_module_from_source() {
        let source = InMemoryConfigSource::new().with(keys::LOCALE, "en-GB");
        let module = ConfigModule::from_source(&source).unwrap();
        assert_eq!(module.config().speech.locale, "en-GB");
        assert_eq!(module.into_config().api.base_url, "http://localhost:8000");
    }
}
