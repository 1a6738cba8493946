//!
//! src/backend/mod.rs
//! Backend 层：业务服务
//!
//! Backend 层与 UI 完全解耦。
//! 抽取本身由 draw-panel-core 的 DrawService 完成，这一层负责把它接到同步的主循环上，
//! 并读取启动配置。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config_service;         // 配置服务（只读 JSON 文件）
//!         mod draw_dispatcher;        // 抽取任务调度（tokio 运行时 + 通道）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、抽取任务调度（DrawDispatcher）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     用户按下 “抽！”
//!         ↓
//!     Update 层返回 Command::Draw(request)
//!         ↓
//!     app.rs 调用 dispatcher.dispatch(request)
//!         ↓
//!     tokio 任务中调用 DrawService::draw_id / draw_plane
//!         ↓
//!     结果写入本次抽取的 oneshot 通道
//!         ↓
//!     app.rs 下一轮循环 try_recv()，包装为 AppMessage::DrawFinished
//!         ↓
//!     Update 层更新 DrawPanel，View 层重新渲染
//!
//!     异常情况：
//!         - 任务 panic                      → DrawError::Internal
//!         - 任务未送出结果就被丢弃（取消、运行时关闭）
//!                                           → DrawError::BridgeUnavailable
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、配置服务（LocalConfigService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     存储位置：~/.config/draw-panel-tui/config.json
//!
//!         - 文件不存在：使用默认配置
//!         - 文件无法解析：main.rs 使用默认配置，并在日志中记录警告
//!         - 面板从不写回配置
//!

mod config_service;
mod draw_dispatcher;

pub use config_service::{AppConfig, ConfigService, LocalConfigService};
pub use draw_dispatcher::DrawDispatcher;
