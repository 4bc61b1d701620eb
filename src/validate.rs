//! 純輸入檢查，在任何顯示副作用之前執行

use crate::config::{RenderMode, RenderOptions};
use crate::error::{Error, Result};
use crate::matrix::Matrix;
use crate::palette::Palette;
use crate::tile::TileGrid;

/// 解析格線維度，未指定視為 1
fn effective_dim(value: Option<usize>, name: &'static str) -> Result<usize> {
    match value {
        None => Ok(1),
        Some(0) => Err(Error::InvalidGrid { name }),
        Some(n) => Ok(n),
    }
}

/// 檢查矩陣與參數，回傳要使用的分塊方式
///
/// 這裡不碰顯示端，被拒絕的呼叫不會改動任何快取中的表面。
/// 表面像素上限另由 [`DisplayConfig::surface_size`](crate::config::DisplayConfig::surface_size) 檢查。
pub fn validate(matrix: &Matrix, options: &RenderOptions) -> Result<TileGrid> {
    let (rows, cols) = matrix.shape();
    if matrix.is_empty() {
        return Err(Error::EmptyMatrix { rows, cols });
    }

    let grid_rows = effective_dim(options.grid_rows, "grid_rows")?;
    let grid_cols = effective_dim(options.grid_cols, "grid_cols")?;

    if rows % grid_rows != 0 || cols % grid_cols != 0 {
        return Err(Error::IndivisibleGrid {
            rows,
            cols,
            grid_rows,
            grid_cols,
        });
    }

    if !options.figsize.is_valid() {
        return Err(Error::InvalidFigureSize {
            width: options.figsize.width,
            height: options.figsize.height,
        });
    }

    if options.mode == RenderMode::Color {
        if let Some(name) = options.cmap.as_deref() {
            Palette::named(name)?;
        }
        if let (Some(vmin), Some(vmax)) = (options.vmin, options.vmax) {
            if vmin > vmax {
                return Err(Error::InvalidRange { vmin, vmax });
            }
        }
    }

    Ok(TileGrid::new(
        grid_rows,
        grid_cols,
        rows / grid_rows,
        cols / grid_cols,
    ))
}
