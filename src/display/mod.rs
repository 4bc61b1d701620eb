/*
================================================================================
顯示介面
================================================================================
渲染器只需要視窗系統的幾個基本操作：開啟視窗、處理待辦事件、
查詢是否仍開啟、顯示標題、推送畫面緩衝區以及短暫暫停。
排版與點陣化都在 [`Canvas`] 內完成。
================================================================================
*/

pub mod canvas;
pub mod headless;
pub mod image;
pub mod layout;
#[cfg(feature = "window")]
pub mod window;

pub use canvas::{Canvas, SubSurface};
pub use headless::{HeadlessBackend, HeadlessProbe, HeadlessWindow};
pub use image::{ImageView, ViewId};
pub use layout::{Layout, Rect};
#[cfg(feature = "window")]
pub use window::{MinifbBackend, MinifbWindow};

use crate::config::DisplayConfig;
use crate::error::Result;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// 控制代碼與點陣圖共用的全域識別碼計數器
pub(crate) fn next_id() -> u64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// 一個螢幕上（或記憶體中）的視窗
pub trait DisplayWindow {
    /// 處理待辦的視窗事件，使用者的關閉要求要經過這一步才看得到
    fn poll(&mut self);

    /// 使用者關閉視窗後回傳 false
    fn is_open(&self) -> bool;

    /// 在格線上方顯示標題，空字串表示清除
    fn set_heading(&mut self, heading: &str);

    /// 以 `buffer`（0x00RRGGBB，逐列）重繪視窗並處理待辦事件
    fn present(&mut self, buffer: &[u32], width: usize, height: usize) -> Result<()>;
}

/// 視窗工廠，並負責把控制權短暫交還給主機事件迴圈
pub trait DisplayBackend {
    type Window: DisplayWindow;

    fn open(
        &mut self,
        name: &str,
        width: usize,
        height: usize,
        config: &DisplayConfig,
    ) -> Result<Self::Window>;

    /// 讓主機事件迴圈有時間處理視窗事件
    fn pause(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
