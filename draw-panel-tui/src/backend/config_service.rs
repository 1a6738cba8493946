//! 配置服务
//!
//! 配置文件：`<config_dir>/draw-panel-tui/config.json`，所有字段均可省略。
//!
//! ```json
//! {
//!     "theme": "light",
//!     "logLevel": "debug",
//!     "engine": { "minPoolSize": 3, "latencyMs": 200 }
//! }
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use draw_panel_core::EngineConfig;
use serde::Deserialize;

use crate::view::theme::Theme;

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    pub theme: Theme,
    pub log_level: String,
    pub engine: EngineConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            log_level: "info".to_string(),
            engine: EngineConfig::default(),
        }
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;
}

/// 获取配置目录路径
pub fn get_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("draw-panel-tui")
}

/// 本地配置服务（只读）
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    pub fn new() -> Self {
        Self::with_path(get_config_dir().join("config.json"))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    /// 文件不存在时返回默认配置；文件内容无法解析时返回错误
    fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            return Ok(AppConfig::default());
        }

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        parse_config(&content).with_context(|| format!("malformed config {}", self.path.display()))
    }
}

/// 解析配置文件内容
pub fn parse_config(content: &str) -> Result<AppConfig> {
    Ok(serde_json::from_str(content)?)
}
