//! 焦点状态定义

use draw_panel_core::RangeField;

/// 面板上可获得焦点的控件，按 Tab 顺序排列
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusField {
    /// 模式切换按钮
    #[default]
    ModeToggle,
    /// 下限输入框（最小学号 / 行）
    Lower,
    /// 上限输入框（最大学号 / 列）
    Upper,
    /// 抽取按钮
    DrawButton,
}

impl FocusField {
    /// 下一个控件
    pub fn next(self) -> Self {
        match self {
            FocusField::ModeToggle => FocusField::Lower,
            FocusField::Lower => FocusField::Upper,
            FocusField::Upper => FocusField::DrawButton,
            FocusField::DrawButton => FocusField::ModeToggle,
        }
    }

    /// 上一个控件
    pub fn prev(self) -> Self {
        match self {
            FocusField::ModeToggle => FocusField::DrawButton,
            FocusField::Lower => FocusField::ModeToggle,
            FocusField::Upper => FocusField::Lower,
            FocusField::DrawButton => FocusField::Upper,
        }
    }

    /// 焦点所在的输入框对应区间的哪一端
    pub fn range_field(self) -> Option<RangeField> {
        match self {
            FocusField::Lower => Some(RangeField::Lower),
            FocusField::Upper => Some(RangeField::Upper),
            _ => None,
        }
    }

    /// 是否是输入框
    pub fn is_spinner(self) -> bool {
        self.range_field().is_some()
    }
}
