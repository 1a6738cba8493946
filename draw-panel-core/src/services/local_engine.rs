//! 本地抽取引擎
//!
//! In-process engine behind [`DrawService`]: validates arguments, picks
//! uniformly and formats the outcome as `17` or `3行5列`.

use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{DrawError, DrawResult};
use crate::services::DrawService;

/// 引擎参数
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    /// 最小候选池大小
    pub min_pool_size: u32,
    /// 模拟延迟（毫秒）
    pub latency_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_pool_size: 3,
            latency_ms: 0,
        }
    }
}

/// Local draw engine
#[derive(Debug, Clone, Default)]
pub struct LocalDrawEngine {
    config: EngineConfig,
}

impl LocalDrawEngine {
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    async fn simulate_latency(&self) {
        if self.config.latency_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.config.latency_ms)).await;
        }
    }

    fn validate_id_range(&self, min_id: u32, max_id: u32) -> DrawResult<()> {
        if min_id >= max_id {
            return Err(DrawError::InvalidRange {
                min: min_id,
                max: max_id,
            });
        }
        if (max_id - min_id).saturating_add(1) < self.config.min_pool_size {
            return Err(DrawError::RangeTooSmall {
                required: self.config.min_pool_size,
            });
        }
        Ok(())
    }
}

fn pick(low: u32, high: u32) -> u32 {
    rand::rng().random_range(low..=high)
}

#[async_trait]
impl DrawService for LocalDrawEngine {
    async fn draw_id(&self, min_id: u32, max_id: u32) -> DrawResult<String> {
        self.validate_id_range(min_id, max_id)?;
        self.simulate_latency().await;

        let id = pick(min_id, max_id);
        log::info!("draw_id({min_id}, {max_id}) -> {id}");
        Ok(id.to_string())
    }

    async fn draw_plane(&self, row_num: u32, col_num: u32) -> DrawResult<String> {
        if row_num == 0 || col_num == 0 {
            return Err(DrawError::InvalidGrid {
                rows: row_num,
                cols: col_num,
            });
        }
        self.simulate_latency().await;

        let (row, col) = (pick(1, row_num), pick(1, col_num));
        log::info!("draw_plane({row_num}, {col_num}) -> ({row}, {col})");
        Ok(format!("{row}行{col}列"))
    }
}
