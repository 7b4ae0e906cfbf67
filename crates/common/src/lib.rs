//! common - 通用类型和工具库

pub mod sequence;
pub mod types;
pub mod utils;

pub use sequence::*;
pub use types::*;
pub use utils::*;
