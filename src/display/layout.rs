//! 標題區與子表面在表面內的位置

use crate::config::DisplayConfig;

/// 與座標軸對齊的像素矩形
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Rect {
    pub const fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.x && y >= self.y && x < self.x + self.width && y < self.y + self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// 一次排版的結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// 頂部保留給標題的區域
    pub heading: Rect,
    /// 每個格子一個矩形，逐列排列
    pub cells: Vec<Rect>,
}

impl Layout {
    /// 將 `width x height` 的表面分成標題區、底部邊界與
    /// `grid_rows x grid_cols` 個等大格子，格子間隔 `cell_padding`。
    ///
    /// 間距放不下時改為 0；格子數多於像素時格子寬或高為 0，
    /// 所有矩形都不會超出表面。
    pub fn compute(
        width: usize,
        height: usize,
        grid_rows: usize,
        grid_cols: usize,
        config: &DisplayConfig,
    ) -> Self {
        let top = (height as f32 * config.heading_fraction).round() as usize;
        let bottom = (height as f32 * config.bottom_margin).round() as usize;
        let area_h = height.saturating_sub(top + bottom);
        let pad_x = fitting_padding(config.cell_padding, grid_cols, width);
        let pad_y = fitting_padding(config.cell_padding, grid_rows, area_h);

        let cell_w = (width - pad_x * (grid_cols + 1)) / grid_cols.max(1);
        let cell_h = (area_h - pad_y * (grid_rows + 1)) / grid_rows.max(1);

        let mut cells = Vec::with_capacity(grid_rows * grid_cols);
        for i in 0..grid_rows {
            for j in 0..grid_cols {
                cells.push(Rect::new(
                    pad_x + j * (cell_w + pad_x),
                    top + pad_y + i * (cell_h + pad_y),
                    cell_w,
                    cell_h,
                ));
            }
        }

        Self {
            heading: Rect::new(0, 0, width, top),
            cells,
        }
    }
}

/// `count` 個格子需要 `count + 1` 段間距，放不下就不留間距
fn fitting_padding(pad: usize, count: usize, extent: usize) -> usize {
    match pad.checked_mul(count + 1) {
        Some(total) if total < extent => pad,
        _ => 0,
    }
}
