//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event → Update 之间的桥梁
//! 所有的用户操作和后台结果都通过 Message 来表达。
//! 相当于将形形色色的 Events 翻译成 Update 能够看懂的 Messages
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // AppMessage 主消息
//!         mod panel;          // PanelMessage 面板控件子消息
//!
//!
//!     主消息：
//!         pub enum AppMessage {
//!             Quit,                               // 退出应用
//!             FocusNext, FocusPrev,               // Tab / Shift+Tab
//!             Panel(PanelMessage),                // 面板控件子消息
//!             DrawFinished(DrawResult<String>),   // 后台抽取结果（来自 DrawDispatcher）
//!             ShowHelp, CloseHelp,                // 帮助弹窗
//!             ClearStatus,                        // 清除状态栏消息
//!             Noop,                               // 无操作，用于代替 Option::None
//!         }
//!
//!
//!     DrawFinished 不由按键产生：
//!         app.rs 每轮循环从 DrawDispatcher 取出已完成的抽取结果，
//!         包装成 AppMessage::DrawFinished 交给 Update 层。
//!

mod app;
mod panel;

pub use app::AppMessage;
pub use panel::PanelMessage;
