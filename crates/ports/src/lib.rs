//! ports - 抽象 trait 层
//!
//! 定义记录存储与键值存储的抽象接口

mod key_value;
mod repository;

pub use key_value::*;
pub use repository::*;
