//! 分塊矩陣渲染器

use crate::config::{DisplayConfig, RenderMode, RenderOptions};
use crate::display::{next_id, Canvas, DisplayBackend};
use crate::error::Result;
use crate::matrix::Matrix;
use crate::palette::{Palette, ValueRange};
use crate::registry::{DisplayHandle, DisplayKey, DisplayRegistry, HandleId};
use crate::validate::validate;
use log::debug;
use std::time::Duration;

/// 每次渲染後交還主機事件迴圈的固定暫停時間
pub const EVENT_PAUSE: Duration = Duration::from_millis(1);

/// 單次呼叫決定的色盤與縮放範圍
#[derive(Debug, Clone, PartialEq)]
pub struct Coloring {
    pub palette: Palette,
    pub range: ValueRange,
    /// 顯示前先以 `> 0` 二值化
    pub threshold: bool,
}

impl Coloring {
    /// binary 模式固定使用兩色色盤與 `[0, 1]`；color 模式使用指定色盤
    /// （預設 viridis），範圍未指定的一端取整個矩陣的最小/最大值。
    pub fn resolve(matrix: &Matrix, options: &RenderOptions) -> Result<Self> {
        match options.mode {
            RenderMode::Binary => Ok(Self {
                palette: Palette::binary(),
                range: ValueRange::UNIT,
                threshold: true,
            }),
            RenderMode::Color => {
                let palette = match options.cmap.as_deref() {
                    Some(name) => Palette::named(name)?,
                    None => Palette::default_continuous(),
                };
                let (lo, hi) = matrix.min_max().unwrap_or((0.0, 1.0));
                Ok(Self {
                    palette,
                    range: ValueRange::new(options.vmin.unwrap_or(lo), options.vmax.unwrap_or(hi)),
                    threshold: false,
                })
            }
        }
    }
}

/// 將矩陣渲染到快取的顯示表面
///
/// 持有控制代碼快取；標題、格線與尺寸相同的呼叫會原地更新同一個視窗。
pub struct MatrixDisplay<B: DisplayBackend> {
    backend: B,
    config: DisplayConfig,
    registry: DisplayRegistry<B::Window>,
}

impl<B: DisplayBackend> MatrixDisplay<B> {
    pub fn new(backend: B) -> Self {
        Self::with_config(backend, DisplayConfig::default())
    }

    pub fn with_config(backend: B, config: DisplayConfig) -> Self {
        Self {
            backend,
            config,
            registry: DisplayRegistry::new(),
        }
    }

    /// 將 `matrix` 切成 `grid_rows x grid_cols` 個分塊並顯示
    ///
    /// 繪製前先完成所有檢查。鍵對應的視窗仍開啟時沿用，不存在或已被關閉時
    /// 重建；沿用時點陣圖原地更新。最後重繪、處理事件並短暫暫停。
    pub fn render_tiled_matrix(&mut self, matrix: &Matrix, options: &RenderOptions) -> Result<()> {
        let grid = validate(matrix, options)?;
        self.config.surface_size(options.figsize)?;
        let coloring = Coloring::resolve(matrix, options)?;
        let key = DisplayKey::new(options, &grid);

        // 讓使用者關閉的視窗真正釋放
        self.registry.evict_closed();

        let Self {
            backend,
            config,
            registry,
        } = self;
        let handle = registry.acquire(key, |key| open_handle(backend, config, key))?;

        let canvas = handle.canvas_mut();
        let mut created = 0;
        for tile in matrix.tiles(&grid) {
            let tile = if coloring.threshold { tile.threshold() } else { tile };
            if canvas.show_tile(tile, &coloring.palette, coloring.range) {
                created += 1;
            }
        }
        debug!(
            "rendered {}x{} tiles ({} new views) with '{}' over [{}, {}]",
            grid.grid_rows,
            grid.grid_cols,
            created,
            coloring.palette.name(),
            coloring.range.vmin,
            coloring.range.vmax
        );

        canvas.set_heading(options.title.as_deref().unwrap_or(""));
        canvas.layout();
        canvas.compose();
        handle.present()?;

        backend.pause(EVENT_PAUSE);
        Ok(())
    }

    /// 以 `options` 呼叫時會使用的現存控制代碼
    pub fn handle(&self, options: &RenderOptions) -> Option<&DisplayHandle<B::Window>> {
        self.registry.get(&DisplayKey::from_options(options))
    }

    pub fn registry(&self) -> &DisplayRegistry<B::Window> {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut DisplayRegistry<B::Window> {
        &mut self.registry
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }
}

/// 建立路徑：依 figsize 開窗，表面切成格線，尚無點陣圖
fn open_handle<B: DisplayBackend>(
    backend: &mut B,
    config: &DisplayConfig,
    key: &DisplayKey,
) -> Result<DisplayHandle<B::Window>> {
    let id = HandleId(next_id());
    let (width, height) = config.surface_size(key.figsize)?;
    let name = format!("Figure {}", id.0);
    let window = backend.open(&name, width, height, config)?;
    let canvas = Canvas::new(width, height, key.grid_rows, key.grid_cols, config);
    Ok(DisplayHandle::new(id, window, canvas))
}

#[cfg(feature = "window")]
impl MatrixDisplay<crate::display::MinifbBackend> {
    /// 繪製到真實視窗的渲染器
    pub fn windowed() -> Self {
        Self::new(crate::display::MinifbBackend::new())
    }
}
