pub mod display;
pub mod logger;
pub mod render;

pub use display::{DisplayConfig, MAX_SURFACE_SIDE};
pub use logger::LogConfig;
pub use render::{FigSize, RenderMode, RenderOptions, RenderOptionsBuilder};

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 全局配置結構
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub log: LogConfig,
}

impl Config {
    pub fn new() -> Self {
        Config::default()
    }

    /// 從 TOML 字串解析，缺少的欄位使用預設值
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// 從 TOML 檔案載入
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

/// 配置構建器
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        ConfigBuilder {
            config: Config::new(),
        }
    }

    pub fn display_config(mut self, config: DisplayConfig) -> Self {
        self.config.display = config;
        self
    }

    pub fn log_config(mut self, config: LogConfig) -> Self {
        self.config.log = config;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        ConfigBuilder::new()
    }
}
