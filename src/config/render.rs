use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// 繪製模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RenderMode {
    /// 以 > 0 為門檻的黑白雙色
    #[default]
    Binary,
    /// 連續色階
    Color,
}

impl RenderMode {
    pub fn as_str(self) -> &'static str {
        match self {
            RenderMode::Binary => "binary",
            RenderMode::Color => "color",
        }
    }
}

impl FromStr for RenderMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "binary" => Ok(RenderMode::Binary),
            "color" => Ok(RenderMode::Color),
            other => Err(Error::UnsupportedMode(other.to_string())),
        }
    }
}

impl TryFrom<String> for RenderMode {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<RenderMode> for String {
    fn from(mode: RenderMode) -> Self {
        mode.as_str().to_string()
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 整體表面尺寸（英吋）
///
/// 作為快取鍵的一部分，以位元模式比較與雜湊。
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FigSize {
    pub width: f64,
    pub height: f64,
}

impl FigSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

impl Default for FigSize {
    fn default() -> Self {
        FigSize::new(6.0, 6.0)
    }
}

impl PartialEq for FigSize {
    fn eq(&self, other: &Self) -> bool {
        self.width.to_bits() == other.width.to_bits()
            && self.height.to_bits() == other.height.to_bits()
    }
}

impl Eq for FigSize {}

impl Hash for FigSize {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.width.to_bits().hash(state);
        self.height.to_bits().hash(state);
    }
}

impl From<(f64, f64)> for FigSize {
    fn from((width, height): (f64, f64)) -> Self {
        FigSize::new(width, height)
    }
}

/// 單次繪製呼叫的參數
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub mode: RenderMode,
    /// None 視為 1
    pub grid_rows: Option<usize>,
    /// None 視為 1
    pub grid_cols: Option<usize>,
    pub figsize: FigSize,
    /// 連續色階名稱，binary 模式忽略
    pub cmap: Option<String>,
    pub vmin: Option<f64>,
    pub vmax: Option<f64>,
    /// 省略時清除先前的標題
    pub title: Option<String>,
}

impl RenderOptions {
    pub fn builder() -> RenderOptionsBuilder {
        RenderOptionsBuilder::new()
    }

    pub fn binary() -> Self {
        RenderOptions::default()
    }

    pub fn color() -> Self {
        RenderOptions {
            mode: RenderMode::Color,
            ..RenderOptions::default()
        }
    }
}

/// 參數構建器
#[derive(Debug, Default)]
pub struct RenderOptionsBuilder {
    options: RenderOptions,
}

impl RenderOptionsBuilder {
    pub fn new() -> Self {
        RenderOptionsBuilder {
            options: RenderOptions::default(),
        }
    }

    pub fn mode(mut self, mode: RenderMode) -> Self {
        self.options.mode = mode;
        self
    }

    pub fn grid(mut self, rows: usize, cols: usize) -> Self {
        self.options.grid_rows = Some(rows);
        self.options.grid_cols = Some(cols);
        self
    }

    pub fn grid_rows(mut self, rows: usize) -> Self {
        self.options.grid_rows = Some(rows);
        self
    }

    pub fn grid_cols(mut self, cols: usize) -> Self {
        self.options.grid_cols = Some(cols);
        self
    }

    pub fn figsize(mut self, width: f64, height: f64) -> Self {
        self.options.figsize = FigSize::new(width, height);
        self
    }

    pub fn cmap(mut self, name: impl Into<String>) -> Self {
        self.options.cmap = Some(name.into());
        self
    }

    pub fn range(mut self, vmin: f64, vmax: f64) -> Self {
        self.options.vmin = Some(vmin);
        self.options.vmax = Some(vmax);
        self
    }

    pub fn vmin(mut self, vmin: f64) -> Self {
        self.options.vmin = Some(vmin);
        self
    }

    pub fn vmax(mut self, vmax: f64) -> Self {
        self.options.vmax = Some(vmax);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.options.title = Some(title.into());
        self
    }

    pub fn build(self) -> RenderOptions {
        self.options
    }
}
