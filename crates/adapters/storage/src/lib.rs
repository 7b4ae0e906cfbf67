//! hissab-adapter-storage - 存储适配器
//!
//! 内存记录存储、内存键值存储、JSON 文件键值存储

mod file;
mod memory;

pub use file::*;
pub use memory::*;
