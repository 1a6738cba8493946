//! Draw Panel Core Library
//!
//! Platform-independent state of the draw panel:
//! - Mode selector (`IdMode` / `PlaneMode`)
//! - Range coordinator for the id range and the seat grid
//! - Draw trigger state machine and its result/error projection
//! - The `DrawService` boundary plus a local engine implementing it
//!
//! Front ends own rendering and input; they feed [`PanelEvent`]s into a
//! [`DrawPanel`] and run the returned [`DrawRequest`]s through a
//! [`DrawService`].

pub mod display;
pub mod error;
pub mod input;
pub mod panel;
pub mod services;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use display::DrawDisplay;
pub use error::{DrawError, DrawResult};
pub use input::SpinnerSpec;
pub use panel::{DrawPanel, PanelEvent};
pub use services::{dispatch, DrawService, EngineConfig, LocalDrawEngine};
pub use types::{DrawMode, DrawPhase, DrawRequest, ModeSelector, RangeField, RangeLimits, RangePair};
