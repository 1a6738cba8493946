//! 应用主消息枚举

use draw_panel_core::DrawResult;

use super::PanelMessage;

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 焦点移到下一个控件
    FocusNext,

    /// 焦点移到上一个控件
    FocusPrev,

    /// 面板控件相关消息
    Panel(PanelMessage),

    /// 后台抽取任务返回结果
    DrawFinished(DrawResult<String>),

    /// 显示帮助
    ShowHelp,

    /// 关闭帮助
    CloseHelp,

    /// 清除状态消息
    ClearStatus,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
