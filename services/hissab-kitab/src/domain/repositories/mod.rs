//! 仓储接口

mod profile_repository;

pub use profile_repository::*;
