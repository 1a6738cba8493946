//! 业务逻辑服务层

mod draw_service;
mod local_engine;

pub use draw_service::{dispatch, DrawService};
pub use local_engine::{EngineConfig, LocalDrawEngine};
