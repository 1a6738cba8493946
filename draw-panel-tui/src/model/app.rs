//! 应用主状态结构

use draw_panel_core::DrawPanel;

use super::{FocusField, NumberSpinner};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点控件
    pub focus: FocusField,

    /// 抽取面板状态（模式、区间、抽取阶段）
    pub panel: DrawPanel,

    /// 正在编辑的输入框
    pub editing: Option<NumberSpinner>,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 是否显示帮助弹窗
    pub show_help: bool,
}

impl App {
    /// 创建新的应用实例
    pub fn new() -> Self {
        Self {
            should_quit: false,
            focus: FocusField::default(),
            panel: DrawPanel::new(),
            editing: None,
            status_message: None,
            show_help: false,
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
