// Adapters
// 端口的具体适配器

pub mod remote;
