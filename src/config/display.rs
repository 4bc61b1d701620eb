use super::render::FigSize;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// 表面單邊的像素上限
pub const MAX_SURFACE_SIDE: usize = 8192;

/// 顯示表面相關配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// 每英吋像素數，表面大小 = figsize * dpi
    pub dpi: u32,
    /// 子表面之間的間距（像素）
    pub cell_padding: usize,
    /// 背景色 (0x00RRGGBB)
    pub background: u32,
    /// 頂部保留給標題的比例
    pub heading_fraction: f32,
    /// 底部保留的邊界比例
    pub bottom_margin: f32,
    /// 視窗是否可調整大小
    pub resizable: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            dpi: 100,
            cell_padding: 4,
            background: 0x00FF_FFFF,
            heading_fraction: 0.05,
            bottom_margin: 0.03,
            resizable: false,
        }
    }
}

impl DisplayConfig {
    /// 將英吋換算為像素，至少 1 像素；非有限值或超過上限時回傳 None
    pub fn to_pixels(&self, inches: f64) -> Option<usize> {
        let px = (inches * f64::from(self.dpi)).round();
        if px.is_finite() && px <= MAX_SURFACE_SIDE as f64 {
            Some((px.max(0.0) as usize).max(1))
        } else {
            None
        }
    }

    /// 表面的像素尺寸 (寬, 高)
    pub fn surface_size(&self, figsize: FigSize) -> Result<(usize, usize)> {
        let size = self
            .to_pixels(figsize.width)
            .zip(self.to_pixels(figsize.height))
            .filter(|&(w, h)| w.checked_mul(h).is_some());
        size.ok_or(Error::InvalidFigureSize {
            width: figsize.width,
            height: figsize.height,
        })
    }
}
