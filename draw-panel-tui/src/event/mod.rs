//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event, poll_event};
//!
//!
//!     其中有：
//!         · poll_event      事件轮询，受 ~/app.rs 调用，最长等待 timeout
//!
//!         · handle_event    事件分发
//!
//!             当接收到键盘事件时，转入 handle_key_event()
//!             判断顺序：
//!                 - Ctrl+C 无论何时都退出
//!                 - 帮助弹窗打开时，只处理关闭弹窗的按键
//!                 - Tab / Shift+Tab 移动焦点
//!                 - 焦点在输入框上时，数字 / ↑↓ / 退格 / Enter / Esc 交给输入框
//!                 - 全局快捷键：q 退出，? 帮助，m 切换模式，d 抽取
//!                 - 其余按键按焦点分发到模式按钮或抽取按钮
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 按键映射
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     焦点              按键              消息
//!     ───────────────   ───────────────   ─────────────────────────────────
//!     模式按钮          ← / →             PanelMessage::SelectMode(..)
//!     模式按钮          Space / Enter     PanelMessage::ToggleMode
//!     输入框            ↑ / ↓             PanelMessage::StepUp / StepDown
//!     输入框            0-9               PanelMessage::InputDigit(c)
//!     输入框            Backspace         PanelMessage::Backspace
//!     输入框            Enter             PanelMessage::CommitInput
//!     输入框            Esc               PanelMessage::CancelInput
//!     抽取按钮          Space / Enter     PanelMessage::Draw
//!     任意              m                 PanelMessage::ToggleMode
//!     任意              d                 PanelMessage::Draw
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
