//! 表面模組，持有畫面緩衝區與子表面格線

use super::image::{ImageView, ViewId};
use super::layout::{Layout, Rect};
use super::next_id;
use crate::config::DisplayConfig;
use crate::palette::{Palette, ValueRange};
use crate::tile::Tile;

/// 子表面外框顏色
const FRAME_COLOR: u32 = 0x0000_0000;
/// 寬高都至少這麼大才畫外框，太小的格子只畫內容
const MIN_FRAMED: usize = 8;

/// 表面上的一個格子，最多持有一個點陣圖；沒有座標軸與刻度
#[derive(Debug, Default)]
pub struct SubSurface {
    rect: Rect,
    image: Option<ImageView>,
}

impl SubSurface {
    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn image(&self) -> Option<&ImageView> {
        self.image.as_ref()
    }

    /// 第一次使用時建立點陣圖，之後原地更新；回傳是否新建
    pub fn show(&mut self, tile: Tile, palette: &Palette, range: ValueRange) -> bool {
        match self.image.as_mut() {
            Some(view) => {
                view.set_data(tile);
                view.set_palette(palette);
                view.set_range(range);
                false
            }
            None => {
                let view = ImageView::new(ViewId(next_id()), tile, palette.clone(), range);
                self.image = Some(view);
                true
            }
        }
    }

    fn draw(&self, buffer: &mut [u32], stride: usize, background: u32) {
        let r = self.rect;
        if let Some(view) = &self.image {
            view.draw(buffer, stride, r, background);
        }
        if r.width < MIN_FRAMED || r.height < MIN_FRAMED {
            return;
        }
        let mut put = |x: usize, y: usize| {
            if x >= stride {
                return;
            }
            if let Some(px) = buffer.get_mut(y * stride + x) {
                *px = FRAME_COLOR;
            }
        };
        let (right, bottom) = (r.x + r.width - 1, r.y + r.height - 1);
        for x in r.x..=right {
            put(x, r.y);
            put(x, bottom);
        }
        for y in r.y..=bottom {
            put(r.x, y);
            put(right, y);
        }
    }
}

/// 一個顯示控制代碼的可繪製表面
#[derive(Debug)]
pub struct Canvas {
    width: usize,
    height: usize,
    grid_rows: usize,
    grid_cols: usize,
    cells: Vec<SubSurface>,
    heading: String,
    heading_rect: Rect,
    buffer: Vec<u32>,
    config: DisplayConfig,
}

impl Canvas {
    /// 配置切成 `grid_rows x grid_cols` 個子表面的表面，
    /// 子表面不帶刻度與標籤，也尚無點陣圖。
    pub fn new(
        width: usize,
        height: usize,
        grid_rows: usize,
        grid_cols: usize,
        config: &DisplayConfig,
    ) -> Self {
        let cells = (0..grid_rows * grid_cols)
            .map(|_| SubSurface::default())
            .collect();
        let mut canvas = Self {
            width,
            height,
            grid_rows,
            grid_cols,
            cells,
            heading: String::new(),
            heading_rect: Rect::default(),
            buffer: vec![config.background; width * height],
            config: config.clone(),
        };
        canvas.layout();
        canvas
    }

    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn grid(&self) -> (usize, usize) {
        (self.grid_rows, self.grid_cols)
    }

    pub fn cell(&self, i: usize, j: usize) -> Option<&SubSurface> {
        if i < self.grid_rows && j < self.grid_cols {
            self.cells.get(i * self.grid_cols + j)
        } else {
            None
        }
    }

    pub fn cell_mut(&mut self, i: usize, j: usize) -> Option<&mut SubSurface> {
        if i < self.grid_rows && j < self.grid_cols {
            self.cells.get_mut(i * self.grid_cols + j)
        } else {
            None
        }
    }

    pub fn cells(&self) -> impl Iterator<Item = &SubSurface> {
        self.cells.iter()
    }

    /// 將 `tile` 送到對應格子的子表面
    pub fn show_tile(&mut self, tile: Tile, palette: &Palette, range: ValueRange) -> bool {
        let (i, j) = tile.position();
        match self.cell_mut(i, j) {
            Some(cell) => cell.show(tile, palette, range),
            None => false,
        }
    }

    pub fn heading(&self) -> &str {
        &self.heading
    }

    /// 取代標題，空字串表示清除
    pub fn set_heading(&mut self, text: &str) {
        self.heading.clear();
        self.heading.push_str(text);
    }

    pub fn heading_rect(&self) -> Rect {
        self.heading_rect
    }

    /// 排版：保留標題區並放置每個子表面
    pub fn layout(&mut self) {
        let layout = Layout::compute(
            self.width,
            self.height,
            self.grid_rows,
            self.grid_cols,
            &self.config,
        );
        self.heading_rect = layout.heading;
        for (cell, rect) in self.cells.iter_mut().zip(layout.cells) {
            cell.rect = rect;
        }
    }

    /// 依目前的點陣圖重繪整個畫面緩衝區
    pub fn compose(&mut self) {
        self.buffer.fill(self.config.background);
        for cell in &self.cells {
            cell.draw(&mut self.buffer, self.width, self.config.background);
        }
    }

    pub fn buffer(&self) -> &[u32] {
        &self.buffer
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        if x < self.width && y < self.height {
            Some(self.buffer[y * self.width + x])
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::Color;

    fn canvas() -> Canvas {
        let config = DisplayConfig {
            cell_padding: 2,
            ..DisplayConfig::default()
        };
        Canvas::new(100, 100, 2, 2, &config)
    }

    #[test]
    fn test_new_canvas_is_blank_grid() {
        let c = canvas();
        assert_eq!(c.cells().count(), 4);
        assert!(c.cells().all(|s| s.image().is_none()));
        assert!(c.cell(2, 0).is_none());
        assert_eq!(c.heading(), "");
    }

    #[test]
    fn test_show_creates_then_updates() {
        let mut c = canvas();
        let tile = Tile::new(1, 0, 1, 1, vec![1.0]);
        assert!(c.show_tile(tile.clone(), &Palette::binary(), ValueRange::UNIT));
        let id = c.cell(1, 0).and_then(|s| s.image()).map(|v| v.id());
        assert!(!c.show_tile(tile, &Palette::binary(), ValueRange::UNIT));
        let again = c.cell(1, 0).and_then(|s| s.image()).map(|v| v.id());
        assert_eq!(id, again);
    }

    #[test]
    fn test_compose_paints_cell_interior() {
        let mut c = canvas();
        c.show_tile(Tile::new(0, 0, 1, 1, vec![1.0]), &Palette::binary(), ValueRange::UNIT);
        c.show_tile(Tile::new(0, 1, 1, 1, vec![0.0]), &Palette::binary(), ValueRange::UNIT);
        c.compose();
        let r0 = c.cell(0, 0).map(|s| s.rect()).unwrap();
        let r1 = c.cell(0, 1).map(|s| s.rect()).unwrap();
        let center = |r: Rect| (r.x + r.width / 2, r.y + r.height / 2);
        let (x0, y0) = center(r0);
        let (x1, y1) = center(r1);
        assert_eq!(c.pixel(x0, y0), Some(Color::WHITE.to_u32()));
        assert_eq!(c.pixel(x1, y1), Some(Color::BLACK.to_u32()));
        // 標題區保持背景色
        assert_eq!(c.pixel(50, 0), Some(DisplayConfig::default().background));
    }

    #[test]
    fn test_narrow_cells_keep_their_content() {
        let config = DisplayConfig::default();
        let mut c = Canvas::new(600, 600, 1, 200, &config);
        for j in 0..200 {
            let value = if j % 2 == 0 { 1.0 } else { 0.0 };
            c.show_tile(Tile::new(0, j, 1, 1, vec![value]), &Palette::binary(), ValueRange::UNIT);
        }
        c.compose();
        for (j, cell) in c.cells().enumerate() {
            let r = cell.rect();
            assert!(r.x + r.width <= 600);
            let expected = if j % 2 == 0 { Color::WHITE } else { Color::BLACK };
            for x in r.x..r.x + r.width {
                assert_eq!(c.pixel(x, r.y + r.height / 2), Some(expected.to_u32()));
            }
        }
    }

    #[test]
    fn test_heading_replace_and_clear() {
        let mut c = canvas();
        c.set_heading("first");
        c.set_heading("second");
        assert_eq!(c.heading(), "second");
        c.set_heading("");
        assert_eq!(c.heading(), "");
    }
}
