//! 抽取请求与抽取阶段

use serde::{Deserialize, Serialize};

use super::{DrawMode, RangePair};

/// Arguments of one remote draw call
///
/// Serialized with the named arguments the remote operations expect
/// (`minId`/`maxId` or `rowNum`/`colNum`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DrawRequest {
    #[serde(rename_all = "camelCase")]
    Id { min_id: u32, max_id: u32 },
    #[serde(rename_all = "camelCase")]
    Plane { row_num: u32, col_num: u32 },
}

impl DrawRequest {
    /// Build the request for `mode` from the matching range pair
    pub fn for_mode(mode: DrawMode, id_range: &RangePair, plane_range: &RangePair) -> Self {
        match mode {
            DrawMode::IdMode => DrawRequest::Id {
                min_id: id_range.lower(),
                max_id: id_range.upper(),
            },
            DrawMode::PlaneMode => DrawRequest::Plane {
                row_num: plane_range.lower(),
                col_num: plane_range.upper(),
            },
        }
    }

    /// Name of the remote operation
    pub fn operation(&self) -> &'static str {
        match self {
            DrawRequest::Id { .. } => "draw_id",
            DrawRequest::Plane { .. } => "draw_plane",
        }
    }
}

/// 抽取阶段
///
/// `Succeeded` and `Failed` stay until the next draw starts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DrawPhase {
    /// 尚未抽取
    #[default]
    Idle,
    /// 等待远端返回
    InFlight,
    /// 抽取成功，携带结果文本
    Succeeded(String),
    /// 抽取失败，携带错误文本
    Failed(String),
}

impl DrawPhase {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, DrawPhase::InFlight)
    }

    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            DrawPhase::Idle => "Idle",
            DrawPhase::InFlight => "InFlight",
            DrawPhase::Succeeded(_) => "Succeeded",
            DrawPhase::Failed(_) => "Failed",
        }
    }
}
