//! 配置文件 (~/.config/jlpt-jokes/config.toml)
//!
//! 所有字段可选，缺省时使用内置默认值。

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::info;

use crate::browser::DEFAULT_NEWEST_WINDOW_DAYS;
use crate::error::{AppError, Result};
use crate::models::ViewMode;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// 替代内置数据集的 JSON 文件
    pub dataset: Option<PathBuf>,
    pub default_view: ViewMode,
    pub newest_window_days: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset: None,
            default_view: ViewMode::Featured,
            newest_window_days: DEFAULT_NEWEST_WINDOW_DAYS,
        }
    }
}

/// 默认配置文件路径
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("jlpt-jokes").join("config.toml"))
}

/// 从默认位置加载配置，文件不存在时返回默认值
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    load_config_file(path)
}

/// 从用户指定的 TOML 文件加载配置，文件必须存在
pub fn load_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    let mut config: Config = toml::from_str(&content).map_err(|source| AppError::Config {
        path: path.to_path_buf(),
        source,
    })?;

    // 窗口至少一天
    config.newest_window_days = config.newest_window_days.max(1);

    info!(path = %path.display(), "config loaded");
    Ok(config)
}
