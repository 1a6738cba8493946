//! Result/error display projection
//!
//! Everything the panel shows about a draw is derived from [`DrawPhase`];
//! the display keeps no state of its own.

use crate::types::DrawPhase;

/// 等待抽取
pub const WAITING_TEXT: &str = "等待抽取...";
/// 抽取中
pub const DRAWING_TEXT: &str = "抽取中...";
/// 抽取失败
pub const FAILED_TEXT: &str = "抽取失败";

/// Texts rendered for one observation of the draw phase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawDisplay {
    /// Status line, always shown
    pub status_line: String,
    /// Error banner, only present after a failed draw
    pub error_banner: Option<String>,
    /// Whether the draw button accepts clicks
    pub trigger_enabled: bool,
}

impl DrawDisplay {
    pub fn project(phase: &DrawPhase) -> Self {
        let (status_line, error_banner) = match phase {
            DrawPhase::Idle => (WAITING_TEXT.to_string(), None),
            DrawPhase::InFlight => (DRAWING_TEXT.to_string(), None),
            DrawPhase::Succeeded(value) => (format!("结果: {value}"), None),
            DrawPhase::Failed(message) => (FAILED_TEXT.to_string(), Some(format!("错误: {message}"))),
        };

        Self {
            status_line,
            error_banner,
            trigger_enabled: !phase.is_in_flight(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_and_in_flight() {
        let idle = DrawDisplay::project(&DrawPhase::Idle);
        assert_eq!(idle.status_line, "等待抽取...");
        assert_eq!(idle.error_banner, None);
        assert!(idle.trigger_enabled);

        let busy = DrawDisplay::project(&DrawPhase::InFlight);
        assert_eq!(busy.status_line, "抽取中...");
        assert_eq!(busy.error_banner, None);
        assert!(!busy.trigger_enabled);
    }

    #[test]
    fn success_is_prefixed() {
        let shown = DrawDisplay::project(&DrawPhase::Succeeded("17".into()));
        assert_eq!(shown.status_line, "结果: 17");
        assert_eq!(shown.error_banner, None);
        assert!(shown.trigger_enabled);
    }

    #[test]
    fn failure_shows_banner() {
        let shown = DrawDisplay::project(&DrawPhase::Failed("network unreachable".into()));
        assert_eq!(shown.status_line, "抽取失败");
        assert_eq!(shown.error_banner.as_deref(), Some("错误: network unreachable"));
        assert!(shown.trigger_enabled);
    }
}
