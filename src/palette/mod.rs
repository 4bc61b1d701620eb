//! 兩種繪製模式共用的數值到顏色映射

pub mod color;
pub mod gradient;

pub use color::Color;
pub use gradient::{DEFAULT_PALETTE, PALETTE_NAMES};

use crate::error::{Error, Result};

/// 點陣圖對應到色盤的縮放範圍
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    pub vmin: f64,
    pub vmax: f64,
}

impl ValueRange {
    pub const fn new(vmin: f64, vmax: f64) -> Self {
        Self { vmin, vmax }
    }

    /// 二值化圖塊使用的固定範圍
    pub const UNIT: Self = Self::new(0.0, 1.0);

    /// 將 `value` 映射到 `[0, 1]`，範圍外的值截斷；範圍退化時有限值一律為 0，
    /// NaN 沒有位置。
    pub fn normalize(&self, value: f64) -> Option<f64> {
        if value.is_nan() {
            return None;
        }
        let span = self.vmax - self.vmin;
        if span <= 0.0 || !span.is_finite() {
            return Some(0.0);
        }
        Some(((value - self.vmin) / span).clamp(0.0, 1.0))
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Kind {
    /// 依區間挑選的離散顏色
    Listed(Vec<Color>),
    /// 已排序的 `(位置, 顏色)` 控制點
    Gradient(Vec<(f64, Color)>),
}

/// 具名的正規化數值到顏色映射
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    name: String,
    kind: Kind,
}

impl Palette {
    /// binary 模式的固定雙色色盤：0 為黑，1 為白
    pub fn binary() -> Self {
        Self::listed("binary", vec![Color::BLACK, Color::WHITE])
    }

    pub fn listed(name: impl Into<String>, colors: Vec<Color>) -> Self {
        Self {
            name: name.into(),
            kind: Kind::Listed(colors),
        }
    }

    /// 取得內建連續色階，名稱加 `_r` 表示反轉
    pub fn named(name: &str) -> Result<Self> {
        let (base, reversed) = match name.strip_suffix("_r") {
            Some(base) => (base, true),
            None => (name, false),
        };
        let mut stops: Vec<(f64, Color)> = gradient::stops(base)
            .ok_or_else(|| Error::UnknownPalette(name.to_string()))?
            .into_iter()
            .map(|(pos, hex)| (pos, Color::hex(hex)))
            .collect();
        if reversed {
            stops = stops
                .into_iter()
                .rev()
                .map(|(pos, c)| (1.0 - pos, c))
                .collect();
        }
        Ok(Self {
            name: name.to_string(),
            kind: Kind::Gradient(stops),
        })
    }

    pub fn default_continuous() -> Self {
        Self::named(DEFAULT_PALETTE).unwrap_or_else(|_| Self::binary())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_discrete(&self) -> bool {
        matches!(self.kind, Kind::Listed(_))
    }

    /// 正規化位置 `t`（`[0, 1]`）的顏色
    pub fn sample(&self, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        match &self.kind {
            Kind::Listed(colors) => {
                if colors.is_empty() {
                    return Color::TRANSPARENT;
                }
                let n = colors.len();
                let idx = ((t * n as f64) as usize).min(n - 1);
                colors[idx]
            }
            Kind::Gradient(stops) => {
                let Some(&(_, first)) = stops.first() else {
                    return Color::TRANSPARENT;
                };
                let mut prev = (0.0, first);
                for &(pos, color) in stops {
                    if t <= pos {
                        let width = pos - prev.0;
                        if width <= 0.0 {
                            return color;
                        }
                        return prev.1.lerp(color, (t - prev.0) / width);
                    }
                    prev = (pos, color);
                }
                prev.1
            }
        }
    }

    /// 原始數值在 `range` 下的顏色；NaN 為 None
    pub fn map(&self, value: f64, range: &ValueRange) -> Option<Color> {
        range.normalize(value).map(|t| self.sample(t))
    }
}
