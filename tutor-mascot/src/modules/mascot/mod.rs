// Mascot Module - 吉祥物展示模块
//
// - domain: 外观变体、视线偏移、渲染模型
// - application: 根据应用事件维护展示状态
// - infrastructure: 终端渲染器

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::MascotPresenter;
pub use domain::{GazeOffset, MascotFace, MascotVariant};
pub use infrastructure::TerminalRenderer;
