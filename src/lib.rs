// 矩陣圖塊顯示庫
pub mod config;
pub mod display;
pub mod error;
pub mod matrix;
pub mod palette;
pub mod registry;
pub mod renderer;
pub mod tile;
pub mod utils;
pub mod validate;

pub use crate::config::{Config, ConfigBuilder, DisplayConfig, FigSize, RenderMode, RenderOptions};
pub use crate::display::{DisplayBackend, DisplayWindow, HeadlessBackend};
#[cfg(feature = "window")]
pub use crate::display::MinifbBackend;
pub use crate::error::{Error, Result};
pub use crate::matrix::Matrix;
pub use crate::palette::{Color, Palette, ValueRange};
pub use crate::registry::{DisplayHandle, DisplayKey, DisplayRegistry};
pub use crate::renderer::{MatrixDisplay, EVENT_PAUSE};
pub use crate::tile::{Tile, TileGrid};
pub use crate::validate::validate;
