//! HissabKitab 记账核心

pub mod application;
pub mod domain;
pub mod forms;
pub mod infrastructure;
