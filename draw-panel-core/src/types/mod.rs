//! 类型定义模块

mod draw;
mod mode;
mod range;

pub use draw::{DrawPhase, DrawRequest};
pub use mode::{DrawMode, ModeSelector};
pub use range::{RangeField, RangeLimits, RangePair};
