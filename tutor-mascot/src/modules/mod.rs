// Modules Layer - 业务模块
//
// 按照六边形架构组织的业务模块：
// - chat: 对话模块，处理会话、远端问答和情感标签
// - config: 配置模块，启动时从环境读取
// - speech: 语音模块，语音合成与识别
// - mascot: 吉祥物展示模块

pub mod chat;
pub mod config;
pub mod mascot;
pub mod speech;

pub use chat::ChatModule;
pub use config::ConfigModule;
pub use mascot::MascotPresenter;
pub use speech::SpeechModule;
