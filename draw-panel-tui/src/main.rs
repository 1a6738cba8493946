//! Draw Panel TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 抽取调度与配置 (`backend/`)
//!
//!
//! main.rs
//! 程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     LocalConfigService.load()   // 读取配置，失败时使用默认配置
//!     init_logging()              // 日志写入缓存目录下的文件
//!     set_theme_index()           // 应用配置中的主题
//!     Runtime::new()              // 抽取任务运行在 tokio 运行时中
//!     init_terminal()             // 初始化终端
//!     app::run()                  // 运行 app.rs 主循环
//!     restore_terminal()          // 无论成功与否，都恢复终端
//!
//! }

mod app;
mod backend;
mod event;
mod message;
mod model;
mod texts;
mod update;
mod util;
mod view;

use std::sync::Arc;

use anyhow::Result;
use draw_panel_core::{DrawService, LocalDrawEngine};
use tokio::runtime::Builder;

use backend::{AppConfig, ConfigService, DrawDispatcher, LocalConfigService};
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<()> {
    // 1. 读取配置
    let config_service = LocalConfigService::new();
    let (config, config_error) = match config_service.load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // 2. 初始化日志（失败不影响运行）
    let log_error = init_logging(&config.log_level).err();
    tracing::info!("Starting draw panel TUI");
    if let Some(e) = &config_error {
        log::warn!("Using default config: {e:#}");
    }

    // 3. 主题
    view::theme::set_theme_index(config.theme.index());

    // 4. 抽取服务
    let runtime = Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("draw-worker")
        .enable_all()
        .build()?;
    let engine: Arc<dyn DrawService> = Arc::new(LocalDrawEngine::new(config.engine.clone()));
    let mut dispatcher = DrawDispatcher::new(runtime.handle().clone(), engine);

    // 5. 创建应用实例
    let mut app = model::App::new();
    if let Some(e) = log_error {
        app.set_status(format!("日志初始化失败: {e}"));
    }

    // 6. 运行主循环，之后无论成功失败都恢复终端
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app, &mut dispatcher);
    restore_terminal(&mut terminal)?;

    tracing::info!("Draw panel TUI exited");
    result
}
