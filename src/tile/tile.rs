/*
矩陣圖塊系統實現
===================
處理輸入矩陣的分塊與二值化
*/

use std::fmt;

/// 分塊格線：grid_rows x grid_cols 個大小相同的圖塊
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileGrid {
    pub grid_rows: usize,
    pub grid_cols: usize,
    /// 每個圖塊的列數
    pub tile_rows: usize,
    /// 每個圖塊的行數
    pub tile_cols: usize,
}

impl TileGrid {
    pub const fn new(grid_rows: usize, grid_cols: usize, tile_rows: usize, tile_cols: usize) -> Self {
        Self {
            grid_rows,
            grid_cols,
            tile_rows,
            tile_cols,
        }
    }

    /// 圖塊總數
    pub fn len(&self) -> usize {
        self.grid_rows * self.grid_cols
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 依列優先順序列出每個格子 (i, j)
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let cols = self.grid_cols;
        (0..self.grid_rows).flat_map(move |i| (0..cols).map(move |j| (i, j)))
    }
}

/// 代表矩陣中位於格子 (row, col) 的一個子區塊
#[derive(Clone, PartialEq)]
pub struct Tile {
    /// 格線中的位置
    row: usize,
    col: usize,
    /// 圖塊尺寸
    rows: usize,
    cols: usize,
    /// 列優先的數值
    data: Vec<f64>,
}

impl Tile {
    pub fn new(row: usize, col: usize, rows: usize, cols: usize, data: Vec<f64>) -> Self {
        debug_assert_eq!(rows * cols, data.len());
        Self {
            row,
            col,
            rows,
            cols,
            data,
        }
    }

    /// 格線位置 (i, j)
    pub fn position(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// 左上角在原矩陣中的座標
    pub fn origin(&self) -> (usize, usize) {
        (self.row * self.rows, self.col * self.cols)
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// 取得特定位置的數值
    pub fn get(&self, r: usize, c: usize) -> f64 {
        self.data[r * self.cols + c]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn into_data(self) -> Vec<f64> {
        self.data
    }

    /// 二值化：> 0 為 1.0，其餘（含 NaN）為 0.0
    pub fn threshold(self) -> Tile {
        let data = self
            .data
            .iter()
            .map(|&v| if v > 0.0 { 1.0 } else { 0.0 })
            .collect();
        Tile { data, ..self }
    }
}

impl fmt::Debug for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Tile ({}, {}) {}x{} [", self.row, self.col, self.rows, self.cols)?;
        for r in 0..self.rows {
            write!(f, " ")?;
            for c in 0..self.cols {
                write!(f, " {}", self.get(r, c))?;
            }
            writeln!(f)?;
        }
        write!(f, "]")
    }
}
