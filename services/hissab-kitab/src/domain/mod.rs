//! 领域层
//!
//! 包含业务实体、枚举、值对象、视图和仓储接口

pub mod entities;
pub mod enums;
pub mod repositories;
pub mod value_objects;
pub mod views;

pub use entities::*;
pub use enums::*;
pub use repositories::*;
pub use value_objects::*;
pub use views::*;
