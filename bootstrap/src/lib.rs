//! hissab-bootstrap - 统一启动骨架
//!
//! 配置加载、日志初始化、存储后端装配

mod infrastructure;
pub mod metrics;
mod runtime;
mod starter;

pub use infrastructure::*;
pub use runtime::*;
pub use starter::*;
