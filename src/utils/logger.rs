use crate::config::LogConfig;
use chrono::Local;
use env_logger::{Builder, Env};
use std::io::Write;

/// 以預設配置初始化日誌
pub fn init() {
    init_with(&LogConfig::default());
}

/// 初始化 env_logger，每行前加上本地時間戳
///
/// `RUST_LOG` 優先於 `config.filter`。重複呼叫時回傳 false 且不影響既有設定。
pub fn init_with(config: &LogConfig) -> bool {
    let timestamp_format = config.timestamp_format.clone();
    Builder::from_env(Env::default().default_filter_or(config.filter.as_str()))
        .format(move |buf, record| {
            writeln!(
                buf,
                "[{} {:<5} {}] {}",
                Local::now().format(&timestamp_format),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init()
        .is_ok()
}
