//! 無頭顯示後端
//!
//! 視窗只存在於記憶體中。每個視窗與一個 [`HeadlessProbe`] 共用狀態，
//! 呼叫端可藉此檢查推送過的畫面，或像使用者一樣關閉視窗。

use super::{DisplayBackend, DisplayWindow};
use crate::config::DisplayConfig;
use crate::error::{Error, Result};
use log::{info, trace};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

#[derive(Debug, Default)]
struct WindowState {
    name: String,
    width: usize,
    height: usize,
    open: bool,
    /// 使用者已按下關閉，但事件尚未處理
    close_requested: bool,
    heading: String,
    frame: Vec<u32>,
    presents: usize,
    polls: usize,
}

impl WindowState {
    fn pump_events(&mut self) {
        if self.close_requested {
            self.close_requested = false;
            self.open = false;
        }
    }
}

/// 無頭視窗的共用檢視
#[derive(Debug, Clone)]
pub struct HeadlessProbe {
    state: Rc<RefCell<WindowState>>,
}

impl HeadlessProbe {
    /// 立即關閉視窗，如同視窗系統已處理完關閉事件
    pub fn close(&self) {
        self.state.borrow_mut().open = false;
    }

    /// 使用者按下關閉鍵；要等視窗下一次處理事件才會生效
    pub fn request_close(&self) {
        self.state.borrow_mut().close_requested = true;
    }

    pub fn is_open(&self) -> bool {
        self.state.borrow().open
    }

    pub fn name(&self) -> String {
        self.state.borrow().name.clone()
    }

    pub fn size(&self) -> (usize, usize) {
        let s = self.state.borrow();
        (s.width, s.height)
    }

    pub fn heading(&self) -> String {
        self.state.borrow().heading.clone()
    }

    /// 已推送的畫面數
    pub fn presents(&self) -> usize {
        self.state.borrow().presents
    }

    /// 最後一次推送的畫面副本
    pub fn frame(&self) -> Vec<u32> {
        self.state.borrow().frame.clone()
    }

    /// 處理事件的次數（不含 present）
    pub fn polls(&self) -> usize {
        self.state.borrow().polls
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        let s = self.state.borrow();
        if x < s.width && y < s.height {
            s.frame.get(y * s.width + x).copied()
        } else {
            None
        }
    }
}

/// [`HeadlessBackend`] 開啟的記憶體視窗
#[derive(Debug)]
pub struct HeadlessWindow {
    state: Rc<RefCell<WindowState>>,
}

impl HeadlessWindow {
    pub fn probe(&self) -> HeadlessProbe {
        HeadlessProbe {
            state: Rc::clone(&self.state),
        }
    }
}

impl DisplayWindow for HeadlessWindow {
    fn poll(&mut self) {
        let mut s = self.state.borrow_mut();
        s.polls += 1;
        s.pump_events();
    }

    fn is_open(&self) -> bool {
        self.state.borrow().open
    }

    fn set_heading(&mut self, heading: &str) {
        let mut s = self.state.borrow_mut();
        s.heading.clear();
        s.heading.push_str(heading);
    }

    fn present(&mut self, buffer: &[u32], width: usize, height: usize) -> Result<()> {
        let mut s = self.state.borrow_mut();
        if !s.open {
            return Err(Error::window(format!("window '{}' is closed", s.name)));
        }
        if buffer.len() != width * height {
            return Err(Error::window(format!(
                "buffer of {} pixels does not fit {}x{}",
                buffer.len(),
                width,
                height
            )));
        }
        trace!("headless present '{}' {}x{}", s.name, width, height);
        s.width = width;
        s.height = height;
        s.frame.clear();
        s.frame.extend_from_slice(buffer);
        s.presents += 1;
        s.pump_events();
        Ok(())
    }
}

/// 不接觸真實視窗系統的後端
#[derive(Debug, Default)]
pub struct HeadlessBackend {
    probes: Vec<HeadlessProbe>,
    pauses: usize,
    paused: Duration,
}

impl HeadlessBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// 目前為止開啟過的所有視窗，依開啟順序
    pub fn probes(&self) -> &[HeadlessProbe] {
        &self.probes
    }

    pub fn last_probe(&self) -> Option<&HeadlessProbe> {
        self.probes.last()
    }

    /// 開啟過的視窗數
    pub fn opened(&self) -> usize {
        self.probes.len()
    }

    /// 交還控制權給主機事件迴圈的次數
    pub fn pauses(&self) -> usize {
        self.pauses
    }

    /// 要求的暫停時間總和（不會真的休眠）
    pub fn paused(&self) -> Duration {
        self.paused
    }
}

impl DisplayBackend for HeadlessBackend {
    type Window = HeadlessWindow;

    fn open(
        &mut self,
        name: &str,
        width: usize,
        height: usize,
        _config: &DisplayConfig,
    ) -> Result<HeadlessWindow> {
        info!("HeadlessBackend: open '{}' ({}x{})", name, width, height);
        let state = Rc::new(RefCell::new(WindowState {
            name: name.to_string(),
            width,
            height,
            open: true,
            ..WindowState::default()
        }));
        let window = HeadlessWindow { state };
        self.probes.push(window.probe());
        Ok(window)
    }

    fn pause(&mut self, duration: Duration) {
        self.pauses += 1;
        self.paused += duration;
    }
}
