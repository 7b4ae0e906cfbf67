//! domain-core - 跨 context 的领域核心类型
//!
//! 实体/记录 trait 与金额值对象

mod entity;
mod money;

pub use entity::*;
pub use money::*;
