//! 枚举定义

mod lot_size;
mod production_status;
mod sale_status;
mod transaction_kind;
mod user_role;

pub use lot_size::*;
pub use production_status::*;
pub use sale_status::*;
pub use transaction_kind::*;
pub use user_role::*;
