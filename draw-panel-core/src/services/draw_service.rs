//! Remote draw boundary

use async_trait::async_trait;

use crate::error::DrawResult;
use crate::types::DrawRequest;

/// 抽取服务 trait
///
/// The panel only builds arguments and renders the outcome; choosing the id
/// or the grid cell belongs to the implementation behind this trait.
#[async_trait]
pub trait DrawService: Send + Sync {
    /// Select one id from `[min_id, max_id]`
    async fn draw_id(&self, min_id: u32, max_id: u32) -> DrawResult<String>;

    /// Select one cell from a `row_num` x `col_num` grid
    async fn draw_plane(&self, row_num: u32, col_num: u32) -> DrawResult<String>;
}

/// Invoke the operation matching `request`
pub async fn dispatch(service: &dyn DrawService, request: &DrawRequest) -> DrawResult<String> {
    log::debug!("Invoking {} with {request:?}", request.operation());
    match *request {
        DrawRequest::Id { min_id, max_id } => service.draw_id(min_id, max_id).await,
        DrawRequest::Plane { row_num, col_num } => service.draw_plane(row_num, col_num).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DrawError;
    use crate::test_utils::MockDrawService;

    #[tokio::test]
    async fn id_request_calls_draw_id() {
        let svc = MockDrawService::new();
        svc.push_outcome(Ok("17".to_string())).await;

        let out = dispatch(&svc, &DrawRequest::Id { min_id: 1, max_id: 50 }).await;

        assert_eq!(out, Ok("17".to_string()));
        assert_eq!(svc.calls().await, vec!["draw_id(1, 50)".to_string()]);
    }

    #[tokio::test]
    async fn plane_request_calls_draw_plane() {
        let svc = MockDrawService::new();
        svc.push_outcome(Err(DrawError::Remote("network unreachable".into())))
            .await;

        let out = dispatch(&svc, &DrawRequest::Plane { row_num: 6, col_num: 8 }).await;

        assert_eq!(out, Err(DrawError::Remote("network unreachable".into())));
        assert_eq!(svc.calls().await, vec!["draw_plane(6, 8)".to_string()]);
    }
}
