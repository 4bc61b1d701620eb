use super::layout::Rect;
use crate::palette::{Color, Palette, ValueRange};
use crate::tile::Tile;

/// 點陣圖識別碼，資料更換多少次都不變
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewId(pub(crate) u64);

/// 綁定在一個子表面上的點陣圖
///
/// 每個格子只建立一次，之後的渲染原地修改。
#[derive(Debug, Clone)]
pub struct ImageView {
    id: ViewId,
    rows: usize,
    cols: usize,
    data: Vec<f64>,
    palette: Palette,
    range: ValueRange,
    /// 資料更新次數（建立時為 0）
    updates: u64,
}

impl ImageView {
    pub(crate) fn new(id: ViewId, tile: Tile, palette: Palette, range: ValueRange) -> Self {
        let (rows, cols) = tile.shape();
        Self {
            id,
            rows,
            cols,
            data: tile.into_data(),
            palette,
            range,
            updates: 0,
        }
    }

    pub fn id(&self) -> ViewId {
        self.id
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn data(&self) -> &[f64] {
        &self.data
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn range(&self) -> ValueRange {
        self.range
    }

    pub fn updates(&self) -> u64 {
        self.updates
    }

    /// 取代像素資料，沿用既有配置
    pub fn set_data(&mut self, tile: Tile) {
        let (rows, cols) = tile.shape();
        self.rows = rows;
        self.cols = cols;
        self.data.clear();
        self.data.extend_from_slice(tile.as_slice());
        self.updates += 1;
    }

    pub fn set_palette(&mut self, palette: &Palette) {
        if self.palette != *palette {
            self.palette = palette.clone();
        }
    }

    pub fn set_range(&mut self, range: ValueRange) {
        self.range = range;
    }

    /// `(row, col)` 元素的顏色；NaN 或越界時為 None
    pub fn color_at(&self, row: usize, col: usize) -> Option<Color> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.palette.map(self.data[row * self.cols + col], &self.range)
    }

    /// 以最近鄰取樣將資料拉伸填滿 `rect`；超出 `stride` 寬的部分裁掉，
    /// 不會繞到下一列。
    pub fn draw(&self, buffer: &mut [u32], stride: usize, rect: Rect, background: u32) {
        if rect.is_empty() || self.rows == 0 || self.cols == 0 {
            return;
        }
        for dy in 0..rect.height {
            let src_row = dy * self.rows / rect.height;
            let line = (rect.y + dy) * stride;
            for dx in 0..rect.width {
                let src_col = dx * self.cols / rect.width;
                let pixel = self
                    .color_at(src_row, src_col)
                    .map_or(background, Color::to_u32);
                let x = rect.x + dx;
                if x >= stride {
                    break;
                }
                if let Some(dst) = buffer.get_mut(line + x) {
                    *dst = pixel;
                }
            }
        }
    }
}
