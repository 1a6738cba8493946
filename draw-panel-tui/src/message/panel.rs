//! 面板控件消息

use draw_panel_core::DrawMode;

/// 面板控件消息
///
/// 作用于当前焦点所在的控件；`ToggleMode` 与 `Draw` 在任何焦点下都可用。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelMessage {
    /// 切换到另一种模式
    ToggleMode,

    /// 点击某个模式按钮；再次点击已选中的按钮时为 None
    SelectMode(Option<DrawMode>),

    /// 输入框加一
    StepUp,

    /// 输入框减一
    StepDown,

    /// 输入框键入一位数字
    InputDigit(char),

    /// 输入框删除一位
    Backspace,

    /// 提交输入框内容
    CommitInput,

    /// 放弃输入框内容
    CancelInput,

    /// 点击抽取按钮
    Draw,
}
