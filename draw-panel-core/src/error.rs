//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Error returned across the draw-service boundary
///
/// The `Display` form is what the panel shows in its error banner.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum DrawError {
    /// Lower id is not strictly below the upper id
    #[error("最小ID({min})必须小于最大ID({max})")]
    InvalidRange { min: u32, max: u32 },

    /// Fewer distinct ids than the engine's candidate pool needs
    #[error("ID范围太小，至少需要{required}个不同的ID")]
    RangeTooSmall { required: u32 },

    /// Grid with no rows or no columns
    #[error("网格无效: {rows}行{cols}列")]
    InvalidGrid { rows: u32, cols: u32 },

    /// The invoke bridge between the panel and the draw service is gone
    #[error("invoke bridge unavailable: {0}")]
    BridgeUnavailable(String),

    /// The draw task panicked
    #[error("内部错误: 程序发生panic")]
    Internal,

    /// Free-form failure reported by a remote collaborator
    #[error("{0}")]
    Remote(String),
}

impl DrawError {
    /// Whether it is expected behavior (bad arguments, etc.), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::InvalidRange { .. } | Self::RangeTooSmall { .. } | Self::InvalidGrid { .. }
        )
    }

    /// Whether the failure text points at a missing or misconfigured invoke bridge
    #[must_use]
    pub fn is_bridge_failure(&self) -> bool {
        looks_like_bridge_failure(&self.to_string())
    }
}

/// Heuristic over an error's textual form: an `undefined` reference or the
/// name of the invocation primitive means the bridge itself is unavailable.
pub fn looks_like_bridge_failure(message: &str) -> bool {
    message.contains("undefined") || message.contains("invoke")
}

/// Core layer Result type alias
pub type DrawResult<T> = std::result::Result<T, DrawError>;
