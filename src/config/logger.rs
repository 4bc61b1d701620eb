use serde::{Deserialize, Serialize};

/// 日誌相關配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// env_logger 篩選字串，`RUST_LOG` 優先
    pub filter: String,
    /// 時間戳格式 (chrono)
    pub timestamp_format: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            filter: "info".to_string(),
            timestamp_format: "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        }
    }
}
