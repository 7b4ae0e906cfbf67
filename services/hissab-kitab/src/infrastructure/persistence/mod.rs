//! 持久化实现

mod profile_store;
mod seed;

pub use profile_store::*;
pub use seed::*;
