//! 抽取任务调度
//!
//! 主循环是同步的，抽取服务是异步的。DrawDispatcher 把请求放到 tokio
//! 运行时中执行，每次抽取各用一个 oneshot 通道送回结果；主循环每轮调用
//! `try_recv` 取出。

use std::collections::VecDeque;
use std::sync::Arc;

use draw_panel_core::{dispatch, DrawError, DrawRequest, DrawResult, DrawService};
use tokio::runtime::Handle;
use tokio::sync::oneshot::{self, error::TryRecvError};

/// 结果通道在送达前被关闭（任务被取消、运行时已关闭）
fn bridge_gone() -> DrawError {
    DrawError::BridgeUnavailable("draw task ended without delivering a result".to_string())
}

/// 抽取任务调度器
pub struct DrawDispatcher {
    handle: Handle,
    service: Arc<dyn DrawService>,
    pending: VecDeque<oneshot::Receiver<DrawResult<String>>>,
}

impl DrawDispatcher {
    pub fn new(handle: Handle, service: Arc<dyn DrawService>) -> Self {
        Self {
            handle,
            service,
            pending: VecDeque::new(),
        }
    }

    /// 在后台执行一次抽取
    ///
    /// 每次抽取都会恰好得到一个结果：
    /// 任务 panic 映射为 `DrawError::Internal`；任务在送出结果前被丢弃
    /// （取消、运行时关闭）时，`try_recv` 得到 `DrawError::BridgeUnavailable`。
    pub fn dispatch(&mut self, request: DrawRequest) {
        let (tx, rx) = oneshot::channel();
        self.pending.push_back(rx);

        let service = Arc::clone(&self.service);
        let handle = self.handle.clone();

        self.handle.spawn(async move {
            let task = handle.spawn(async move { dispatch(service.as_ref(), &request).await });
            let outcome = match task.await {
                Ok(outcome) => outcome,
                Err(e) if e.is_panic() => {
                    log::error!("Draw task panicked");
                    Err(DrawError::Internal)
                }
                Err(e) => Err(DrawError::BridgeUnavailable(e.to_string())),
            };

            if tx.send(outcome).is_err() {
                log::warn!("Draw outcome dropped: the UI loop is gone");
            }
        });
    }

    /// 取出最早一次抽取的结果（尚未完成则返回 None）
    pub fn try_recv(&mut self) -> Option<DrawResult<String>> {
        let rx = self.pending.front_mut()?;
        let outcome = match rx.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Closed) => Err(bridge_gone()),
        };
        self.pending.pop_front();
        Some(outcome)
    }

    /// 等待最早一次抽取的结果
    #[cfg(test)]
    pub async fn next_outcome(&mut self) -> Option<DrawResult<String>> {
        let rx = self.pending.pop_front()?;
        Some(rx.await.unwrap_or_else(|_| Err(bridge_gone())))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::time::Duration;

    use async_trait::async_trait;
    use draw_panel_core::{EngineConfig, LocalDrawEngine};
    use tokio::runtime::Runtime;

    use super::*;

    /// 按顺序返回预设结果的服务
    struct ScriptedService {
        outcome: Mutex<Option<DrawResult<String>>>,
    }

    impl ScriptedService {
        fn returning(outcome: DrawResult<String>) -> Arc<Self> {
            Arc::new(Self {
                outcome: Mutex::new(Some(outcome)),
            })
        }

        fn next(&self) -> DrawResult<String> {
            self.outcome
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Err(DrawError::Remote("exhausted".into())))
        }
    }

    #[async_trait]
    impl DrawService for ScriptedService {
        async fn draw_id(&self, _min_id: u32, _max_id: u32) -> DrawResult<String> {
            self.next()
        }

        async fn draw_plane(&self, _row_num: u32, _col_num: u32) -> DrawResult<String> {
            self.next()
        }
    }

    /// 一调用就 panic 的服务
    struct PanickingService;

    #[async_trait]
    impl DrawService for PanickingService {
        async fn draw_id(&self, _min_id: u32, _max_id: u32) -> DrawResult<String> {
            panic!("engine exploded")
        }

        async fn draw_plane(&self, _row_num: u32, _col_num: u32) -> DrawResult<String> {
            panic!("engine exploded")
        }
    }

    fn dispatcher(rt: &Runtime, service: Arc<dyn DrawService>) -> DrawDispatcher {
        DrawDispatcher::new(rt.handle().clone(), service)
    }

    #[test]
    fn delivers_success() {
        let rt = Runtime::new().unwrap();
        let mut dispatcher = dispatcher(&rt, ScriptedService::returning(Ok("17".into())));

        dispatcher.dispatch(DrawRequest::Id { min_id: 1, max_id: 50 });
        let outcome = tokio_test::block_on(dispatcher.next_outcome());
        assert_eq!(outcome, Some(Ok("17".into())));
    }

    #[test]
    fn delivers_failure_unchanged() {
        let rt = Runtime::new().unwrap();
        let failure = DrawError::Remote("network unreachable".into());
        let mut dispatcher = dispatcher(&rt, ScriptedService::returning(Err(failure.clone())));

        dispatcher.dispatch(DrawRequest::Plane { row_num: 6, col_num: 8 });
        let outcome = tokio_test::block_on(dispatcher.next_outcome());
        assert_eq!(outcome, Some(Err(failure)));
    }

    #[test]
    fn panic_becomes_internal_error() {
        let rt = Runtime::new().unwrap();
        let mut dispatcher = dispatcher(&rt, Arc::new(PanickingService));

        dispatcher.dispatch(DrawRequest::Id { min_id: 1, max_id: 50 });
        let outcome = tokio_test::block_on(dispatcher.next_outcome());
        assert_eq!(outcome, Some(Err(DrawError::Internal)));
    }

    #[test]
    fn local_engine_draws_inside_range() {
        let rt = Runtime::new().unwrap();
        let engine = Arc::new(LocalDrawEngine::new(EngineConfig::default()));
        let mut dispatcher = dispatcher(&rt, engine);

        dispatcher.dispatch(DrawRequest::Id { min_id: 10, max_id: 12 });
        let outcome = tokio_test::block_on(dispatcher.next_outcome());
        let drawn: u32 = outcome.unwrap().unwrap().parse().unwrap();
        assert!((10..=12).contains(&drawn));
    }

    /// 永远不返回的服务
    struct PendingService;

    #[async_trait]
    impl DrawService for PendingService {
        async fn draw_id(&self, _min_id: u32, _max_id: u32) -> DrawResult<String> {
            std::future::pending().await
        }

        async fn draw_plane(&self, _row_num: u32, _col_num: u32) -> DrawResult<String> {
            std::future::pending().await
        }
    }

    #[test]
    fn runtime_shutdown_reports_bridge_failure() {
        let rt = Runtime::new().unwrap();
        let mut dispatcher = dispatcher(&rt, Arc::new(PendingService));

        dispatcher.dispatch(DrawRequest::Id { min_id: 1, max_id: 50 });
        assert_eq!(dispatcher.try_recv(), None);

        rt.shutdown_timeout(Duration::from_millis(200));
        let outcome = dispatcher.try_recv();
        let Some(Err(err)) = outcome else {
            panic!("expected a failure, got {outcome:?}");
        };
        assert!(matches!(err, DrawError::BridgeUnavailable(_)));
        assert!(err.is_bridge_failure());
        assert_eq!(dispatcher.try_recv(), None);
    }

    #[test]
    fn task_dropped_before_running_reports_bridge_failure() {
        let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
        let mut dispatcher = dispatcher(&rt, ScriptedService::returning(Ok("17".into())));

        // 单线程运行时只在 block_on 时推进任务，这里直接丢弃
        dispatcher.dispatch(DrawRequest::Id { min_id: 1, max_id: 50 });
        drop(rt);

        assert_eq!(dispatcher.try_recv(), Some(Err(bridge_gone())));
    }

    #[test]
    fn outcomes_arrive_in_dispatch_order() {
        let rt = Runtime::new().unwrap();
        let engine = Arc::new(LocalDrawEngine::new(EngineConfig::default()));
        let mut dispatcher = dispatcher(&rt, engine);

        dispatcher.dispatch(DrawRequest::Id { min_id: 5, max_id: 5 });
        dispatcher.dispatch(DrawRequest::Plane { row_num: 1, col_num: 1 });

        let first = tokio_test::block_on(dispatcher.next_outcome());
        assert_eq!(first, Some(Err(DrawError::InvalidRange { min: 5, max: 5 })));
        let second = tokio_test::block_on(dispatcher.next_outcome());
        assert_eq!(second, Some(Ok("1行1列".into())));
    }

    #[test]
    fn try_recv_is_empty_before_dispatch() {
        let rt = Runtime::new().unwrap();
        let mut dispatcher = dispatcher(&rt, ScriptedService::returning(Ok("1".into())));
        assert_eq!(dispatcher.try_recv(), None);
    }
}
