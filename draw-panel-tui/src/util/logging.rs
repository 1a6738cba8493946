//! 日志初始化
//!
//! TUI 占用整个终端，日志只能写入文件：
//! `<cache_dir>/draw-panel-tui/draw-panel.log`

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 日志文件名
const LOG_FILE: &str = "draw-panel.log";

/// 获取日志目录路径
pub fn get_log_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("draw-panel-tui")
}

/// 构造过滤器；无法解析的级别按 info 处理
fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// 初始化日志，返回日志文件路径
///
/// `log` 宏产生的记录经 tracing-subscriber 的 tracing-log 桥接一并写入。
pub fn init_logging(level: &str) -> Result<PathBuf> {
    let dir = get_log_dir();
    fs::create_dir_all(&dir)?;

    let path = dir.join(LOG_FILE);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .with(build_filter(level))
        .try_init()?;

    Ok(path)
}
