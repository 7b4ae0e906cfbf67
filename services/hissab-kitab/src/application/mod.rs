//! 应用层

mod handler;
mod latency;
mod notices;

pub use handler::*;
pub use latency::*;
