//! 测试辅助模块
//!
//! 提供 mock 实现，便于在不依赖真实抽取引擎的情况下测试面板逻辑。

use std::cell::RefCell;
use std::collections::VecDeque;
use std::sync::Once;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::DrawResult;
use crate::services::DrawService;

// ===== MockDrawService =====

/// 按顺序返回预设结果，并记录每一次调用
pub struct MockDrawService {
    outcomes: RwLock<VecDeque<DrawResult<String>>>,
    calls: RwLock<Vec<String>>,
}

impl MockDrawService {
    pub fn new() -> Self {
        Self {
            outcomes: RwLock::new(VecDeque::new()),
            calls: RwLock::new(Vec::new()),
        }
    }

    /// 追加下一次调用的返回值
    pub async fn push_outcome(&self, outcome: DrawResult<String>) {
        self.outcomes.write().await.push_back(outcome);
    }

    /// 已发生的调用，形如 `draw_id(1, 50)`
    pub async fn calls(&self) -> Vec<String> {
        self.calls.read().await.clone()
    }

    async fn next(&self, call: String) -> DrawResult<String> {
        self.calls.write().await.push(call);
        // 未预设时默认返回 "1"
        self.outcomes
            .write()
            .await
            .pop_front()
            .unwrap_or_else(|| Ok("1".to_string()))
    }
}

#[async_trait]
impl DrawService for MockDrawService {
    async fn draw_id(&self, min_id: u32, max_id: u32) -> DrawResult<String> {
        self.next(format!("draw_id({min_id}, {max_id})")).await
    }

    async fn draw_plane(&self, row_num: u32, col_num: u32) -> DrawResult<String> {
        self.next(format!("draw_plane({row_num}, {col_num})")).await
    }
}

// ===== Log capture =====

thread_local! {
    static CAPTURED: RefCell<Vec<(log::Level, String)>> = const { RefCell::new(Vec::new()) };
}

/// 把日志记录到当前线程的缓冲区，并行测试之间互不干扰
struct CaptureLogger;

impl log::Log for CaptureLogger {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        CAPTURED.with(|captured| {
            captured
                .borrow_mut()
                .push((record.level(), record.args().to_string()));
        });
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static INSTALL: Once = Once::new();

/// 执行 `f`，返回其间当前线程写出的日志（级别，内容）
pub fn capture_logs(f: impl FnOnce()) -> Vec<(log::Level, String)> {
    INSTALL.call_once(|| {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(log::LevelFilter::Trace);
        }
    });

    CAPTURED.with(|captured| captured.borrow_mut().clear());
    f();
    CAPTURED.with(|captured| captured.take())
}
