//! 渲染器使用的逐列二維數值儲存

use crate::error::{Error, Result};
use crate::tile::{Tile, TileGrid};

/// 逐列儲存的 `rows x cols` 密集 `f64` 矩陣
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    pub fn new(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        if rows * cols != data.len() {
            return Err(Error::ShapeMismatch {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// 由任意形狀建立，非二維一律拒絕，一維 `[n]` 向量不會被繪製
    pub fn from_shape_vec(shape: &[usize], data: Vec<f64>) -> Result<Self> {
        match *shape {
            [rows, cols] => Self::new(rows, cols, data),
            _ => Err(Error::NotTwoDimensional { ndim: shape.len() }),
        }
    }

    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != cols {
                return Err(Error::RaggedRows {
                    row,
                    len: values.len(),
                    expected: cols,
                });
            }
            data.extend_from_slice(values);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                data.push(f(r, c));
            }
        }
        Self { rows, cols, data }
    }

    pub fn filled(rows: usize, cols: usize, value: f64) -> Self {
        Self {
            rows,
            cols,
            data: vec![value; rows * cols],
        }
    }

    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, 0.0)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn map(&self, f: impl Fn(f64) -> f64) -> Matrix {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }

    /// 整個矩陣的最小與最大值，忽略 NaN；沒有可比較的值時為 None
    pub fn min_max(&self) -> Option<(f64, f64)> {
        self.data
            .iter()
            .copied()
            .filter(|v| !v.is_nan())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    pub fn min(&self) -> Option<f64> {
        self.min_max().map(|(lo, _)| lo)
    }

    pub fn max(&self) -> Option<f64> {
        self.min_max().map(|(_, hi)| hi)
    }

    /// 複製格子 `(grid_row, grid_col)` 的子區塊
    pub fn tile(&self, grid: &TileGrid, grid_row: usize, grid_col: usize) -> Tile {
        let row0 = grid_row * grid.tile_rows;
        let col0 = grid_col * grid.tile_cols;
        let mut data = Vec::with_capacity(grid.tile_rows * grid.tile_cols);
        for r in row0..row0 + grid.tile_rows {
            let start = r * self.cols + col0;
            data.extend_from_slice(&self.data[start..start + grid.tile_cols]);
        }
        Tile::new(grid_row, grid_col, grid.tile_rows, grid.tile_cols, data)
    }

    /// 依列優先順序產生每個圖塊
    pub fn tiles<'a>(&'a self, grid: &'a TileGrid) -> impl Iterator<Item = Tile> + 'a {
        grid.cells().map(move |(i, j)| self.tile(grid, i, j))
    }
}
