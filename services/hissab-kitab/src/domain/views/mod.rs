//! 概览视图

mod overview;

pub use overview::*;
