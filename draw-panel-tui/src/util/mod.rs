//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! Util 层提供与业务逻辑无关的基础设施代码：
//! 终端的初始化和恢复，以及日志文件的初始化。
//!
//!
//! 有模块结构：
//!     src/util/mod.rs
//!         mod logging;        // 日志（写入缓存目录下的文件）
//!         mod terminal;       // 终端初始化和恢复
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、终端
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     pub type Term = Terminal<CrosstermBackend<Stdout>>;
//!
//!     · Raw Mode（原始模式）
//!         - 关闭行缓冲：无需按 Enter，每个按键立即生效
//!         - 关闭字符回显
//!         - 捕获 Ctrl+C、箭头键等特殊键
//!
//!     · Alternate Screen（备用屏幕）
//!         - TUI 在备用屏幕运行，退出后恢复主屏幕内容
//!
//!     注意：无论程序是正常退出还是发生错误，都必须调用 restore_terminal！
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、日志
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     终端被 TUI 占用，日志不能输出到 stdout / stderr。
//!
//!         init_logging(&config.log_level)
//!             ↓
//!         tracing-subscriber fmt layer → ~/.cache/draw-panel-tui/draw-panel.log
//!             ↑
//!         core 库中的 log::info! / log::warn! 经 tracing-log 桥接进来
//!
//!     日志初始化失败不会阻止程序运行，只在状态栏提示。
//!

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
