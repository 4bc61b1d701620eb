use std::io;
use thiserror::Error;

/// 矩陣顯示器的錯誤類型
///
/// 除了 `Window`、`Config` 與 `IO` 之外，其餘皆為驗證錯誤，
/// 會在任何繪製動作之前回報。
#[derive(Error, Debug)]
pub enum Error {
    /// 輸入不是二維陣列
    #[error("input matrix must be a 2D array, got {ndim} dimension(s)")]
    NotTwoDimensional { ndim: usize },
    /// 資料長度與形狀不符
    #[error("data length {len} does not match shape {rows}x{cols}")]
    ShapeMismatch { rows: usize, cols: usize, len: usize },
    /// 各列長度不一致
    #[error("row {row} has {len} values, expected {expected}")]
    RaggedRows {
        row: usize,
        len: usize,
        expected: usize,
    },
    /// 空矩陣
    #[error("input matrix is empty ({rows}x{cols})")]
    EmptyMatrix { rows: usize, cols: usize },
    /// 不支援的模式
    #[error("mode must be 'binary' or 'color', got '{0}'")]
    UnsupportedMode(String),
    /// 格線維度必須為正整數
    #[error("'{name}' must be a positive integer")]
    InvalidGrid { name: &'static str },
    /// 矩陣維度無法被格線整除
    #[error(
        "matrix dimensions ({rows}x{cols}) must be divisible by grid dimensions \
         ({grid_rows}x{grid_cols}); padding or partial tiles are not supported"
    )]
    IndivisibleGrid {
        rows: usize,
        cols: usize,
        grid_rows: usize,
        grid_cols: usize,
    },
    /// 視窗尺寸無效
    #[error(
        "figure size must be positive and fit in {max}x{max} pixels, got ({width}, {height})",
        max = crate::config::MAX_SURFACE_SIDE
    )]
    InvalidFigureSize { width: f64, height: f64 },
    /// 未知的調色板名稱
    #[error("unknown palette '{0}'")]
    UnknownPalette(String),
    /// 數值範圍無效
    #[error("vmin ({vmin}) must not exceed vmax ({vmax})")]
    InvalidRange { vmin: f64, vmax: f64 },
    /// 視窗後端錯誤
    #[error("display window error: {0}")]
    Window(String),
    /// 設定檔錯誤
    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),
    /// IO 錯誤
    #[error("IO error: {0}")]
    IO(#[from] io::Error),
}

impl Error {
    pub fn window(msg: impl Into<String>) -> Self {
        Error::Window(msg.into())
    }

    /// 是否為輸入驗證錯誤（呼叫端的問題，而非後端故障）
    pub fn is_validation(&self) -> bool {
        !matches!(self, Error::Window(_) | Error::Config(_) | Error::IO(_))
    }
}

/// 顯示器結果類型
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indivisible_message_names_grid_dims() {
        let err = Error::IndivisibleGrid {
            rows: 10,
            cols: 10,
            grid_rows: 3,
            grid_cols: 1,
        };
        let msg = err.to_string();
        assert!(msg.contains("(10x10)"));
        assert!(msg.contains("(3x1)"));
    }

    #[test]
    fn test_validation_classification() {
        assert!(Error::UnsupportedMode("grayscale".into()).is_validation());
        assert!(Error::InvalidGrid { name: "grid_rows" }.is_validation());
        assert!(!Error::window("closed").is_validation());
    }
}
