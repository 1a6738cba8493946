//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 这一层只包含数据结构；面板本身的规则（区间修复、抽取状态机）
//! 在 draw-panel-core 的 DrawPanel 中，所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 焦点状态（模式切换 / 输入框 / 抽取按钮）
//!         mod spinner;        // 数字输入框的编辑缓冲区
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         pub struct App {
//!             pub should_quit: bool,                  // 退出标志
//!             pub focus: FocusField,                  // 当前焦点
//!             pub panel: DrawPanel,                   // 模式 + 两组区间 + 抽取阶段
//!             pub editing: Option<NumberSpinner>,     // 正在编辑的输入框
//!             pub status_message: Option<String>,     // 状态栏消息
//!             pub show_help: bool,                    // 帮助弹窗
//!         }
//!
//!     使用：
//!         - 在 main.rs 中创建：let mut app = model::App::new();
//!         - 在 update/mod.rs 中修改：app.panel.apply(PanelEvent::ClickDraw);
//!         - 在 view/layout.rs 中读取：pub fn render(app: &App, ...)
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、焦点管理（FocusField）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     模式切换 → 下限输入框 → 上限输入框 → 抽取按钮 → 模式切换 ...
//!
//!     数据流：
//!         用户按 Tab / Shift+Tab
//!             ↓
//!         event/handler.rs 返回 AppMessage::FocusNext / FocusPrev
//!             ↓
//!         update/mod.rs 先提交正在编辑的输入框，再移动焦点
//!             ↓
//!         view 层根据 app.focus 设置边框颜色
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、数字输入框（NumberSpinner）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     用户键入数字
//!         ↓
//!     NumberSpinner.buffer 累积输入
//!         ↓
//!     Enter 或离开输入框时提交，按 SpinnerSpec 的上下限校验
//!         ↓
//!     Some(v) → DrawPanel 更新区间（必要时自动修复上限）
//!     None    → 被忽略
//!

mod app;
mod focus;
mod spinner;

pub use app::App;
pub use focus::FocusField;
pub use spinner::NumberSpinner;
