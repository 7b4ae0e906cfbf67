//! 实体定义

mod production_record;
mod sale_record;
mod transaction;
mod user_profile;

pub use production_record::*;
pub use sale_record::*;
pub use transaction::*;
pub use user_profile::*;
