/*
================================================================================
顯示控制代碼快取
================================================================================
以 (標題, 格線, 尺寸) 為鍵保存已開啟的視窗；使用者關閉視窗後，
下一次查詢視同未命中並重新建立。
================================================================================
*/
use crate::config::{FigSize, RenderOptions};
use crate::display::{Canvas, DisplayWindow};
use crate::error::Result;
use crate::tile::TileGrid;
use log::{debug, warn};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;

/// 快取鍵
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DisplayKey {
    pub title: Option<String>,
    pub grid_rows: usize,
    pub grid_cols: usize,
    pub figsize: FigSize,
}

impl DisplayKey {
    pub fn new(options: &RenderOptions, grid: &TileGrid) -> Self {
        Self {
            title: options.title.clone(),
            grid_rows: grid.grid_rows,
            grid_cols: grid.grid_cols,
            figsize: options.figsize,
        }
    }

    /// 直接由參數推得，未指定的格線維度視為 1
    pub fn from_options(options: &RenderOptions) -> Self {
        Self {
            title: options.title.clone(),
            grid_rows: options.grid_rows.unwrap_or(1),
            grid_cols: options.grid_cols.unwrap_or(1),
            figsize: options.figsize,
        }
    }
}

impl fmt::Display for DisplayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:?}, {}x{}, {}x{}in)",
            self.title, self.grid_rows, self.grid_cols, self.figsize.width, self.figsize.height
        )
    }
}

/// 控制代碼識別碼
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandleId(pub(crate) u64);

/// 一個鍵對應的視窗 + 表面 + 子表面 + 點陣圖
#[derive(Debug)]
pub struct DisplayHandle<W> {
    id: HandleId,
    window: W,
    canvas: Canvas,
}

impl<W: DisplayWindow> DisplayHandle<W> {
    pub fn new(id: HandleId, window: W, canvas: Canvas) -> Self {
        Self { id, window, canvas }
    }

    pub fn id(&self) -> HandleId {
        self.id
    }

    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// 處理視窗待辦事件後回報是否仍開啟
    pub fn poll(&mut self) -> bool {
        self.window.poll();
        self.window.is_open()
    }

    pub fn window(&self) -> &W {
        &self.window
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    /// 將表面內容與標題推送到視窗
    pub fn present(&mut self) -> Result<()> {
        let (width, height) = self.canvas.size();
        self.window.set_heading(self.canvas.heading());
        self.window.present(self.canvas.buffer(), width, height)
    }
}

/// 快取本體；狀態轉換：absent -> created -> active -> (使用者關閉) -> absent
#[derive(Debug)]
pub struct DisplayRegistry<W> {
    handles: HashMap<DisplayKey, DisplayHandle<W>>,
}

impl<W> Default for DisplayRegistry<W> {
    fn default() -> Self {
        Self {
            handles: HashMap::new(),
        }
    }
}

impl<W: DisplayWindow> DisplayRegistry<W> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 查詢；已關閉的視窗視同不存在
    pub fn get(&self, key: &DisplayKey) -> Option<&DisplayHandle<W>> {
        self.handles.get(key).filter(|h| h.is_open())
    }

    pub fn get_mut(&mut self, key: &DisplayKey) -> Option<&mut DisplayHandle<W>> {
        self.handles.get_mut(key).filter(|h| h.is_open())
    }

    pub fn contains(&self, key: &DisplayKey) -> bool {
        self.get(key).is_some()
    }

    /// 取得可用的控制代碼，必要時以 `create` 建立
    ///
    /// 先讓快取中的視窗處理事件，使用者剛按下的關閉才會被看到；
    /// 已關閉者先移除再重建，不視為錯誤。`create` 失敗時快取維持原狀。
    pub fn acquire<F>(&mut self, key: DisplayKey, create: F) -> Result<&mut DisplayHandle<W>>
    where
        F: FnOnce(&DisplayKey) -> Result<DisplayHandle<W>>,
    {
        if self.handles.get_mut(&key).is_some_and(|h| !h.poll()) {
            warn!("display {} was closed, recreating", key);
            self.handles.remove(&key);
        }
        match self.handles.entry(key) {
            Entry::Occupied(entry) => {
                debug!("display {} reused", entry.key());
                Ok(entry.into_mut())
            }
            Entry::Vacant(entry) => {
                let handle = create(entry.key())?;
                debug!("display {} created as {:?}", entry.key(), handle.id());
                Ok(entry.insert(handle))
            }
        }
    }

    /// 處理所有視窗的事件並移除已關閉者，回傳移除數量
    ///
    /// 被移除的視窗在此釋放，視窗系統才會真正收掉它。
    pub fn evict_closed(&mut self) -> usize {
        let before = self.handles.len();
        self.handles.retain(|key, h| {
            let open = h.poll();
            if !open {
                warn!("evicting closed display {}", key);
            }
            open
        });
        before - self.handles.len()
    }

    /// 快取中的項目數（含尚未偵測到關閉者）
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &DisplayKey> {
        self.handles.keys()
    }

    pub fn clear(&mut self) {
        self.handles.clear();
    }
}
