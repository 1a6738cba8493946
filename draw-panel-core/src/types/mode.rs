//! Draw mode and its exclusive selector

use serde::{Deserialize, Serialize};

/// 抽取模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DrawMode {
    /// 按学号区间抽取
    #[default]
    IdMode,
    /// 按座位网格抽取
    PlaneMode,
}

impl DrawMode {
    /// 获取所有模式（按切换按钮的显示顺序）
    pub fn all() -> &'static [DrawMode] {
        &[DrawMode::IdMode, DrawMode::PlaneMode]
    }

    /// 另一个模式
    #[must_use]
    pub fn other(self) -> DrawMode {
        match self {
            DrawMode::IdMode => DrawMode::PlaneMode,
            DrawMode::PlaneMode => DrawMode::IdMode,
        }
    }

    /// Wire name used by the toggle (`idMode` / `planeMode`)
    pub fn key(self) -> &'static str {
        match self {
            DrawMode::IdMode => "idMode",
            DrawMode::PlaneMode => "planeMode",
        }
    }
}

/// Exclusive two-state toggle
///
/// Deselecting the active button reports `None`; the selector keeps the
/// previous mode so that exactly one mode is always active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModeSelector {
    current: DrawMode,
}

impl ModeSelector {
    pub fn new(initial: DrawMode) -> Self {
        Self { current: initial }
    }

    /// Currently active mode
    pub fn current(&self) -> DrawMode {
        self.current
    }

    /// Apply a toggle change. Returns `true` when the active mode changed.
    pub fn set_mode(&mut self, new_mode: Option<DrawMode>) -> bool {
        match new_mode {
            Some(mode) if mode != self.current => {
                self.current = mode;
                true
            }
            _ => false,
        }
    }

    /// Select the mode that is not active
    pub fn toggle(&mut self) -> DrawMode {
        self.current = self.current.other();
        self.current
    }
}
