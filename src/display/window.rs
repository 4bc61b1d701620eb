use super::{DisplayBackend, DisplayWindow};
use crate::config::DisplayConfig;
use crate::error::{Error, Result};
use log::{info, trace};
use minifb::{Window, WindowOptions};
use std::fmt::{self, Debug};

/// 以 minifb 開啟真實視窗
#[derive(Debug, Default)]
pub struct MinifbBackend;

impl MinifbBackend {
    pub fn new() -> Self {
        MinifbBackend
    }
}

impl DisplayBackend for MinifbBackend {
    type Window = MinifbWindow;

    fn open(
        &mut self,
        name: &str,
        width: usize,
        height: usize,
        config: &DisplayConfig,
    ) -> Result<MinifbWindow> {
        let options = WindowOptions {
            resize: config.resizable,
            ..WindowOptions::default()
        };
        let window = Window::new(name, width, height, options)
            .map_err(|e| Error::window(format!("cannot open '{}': {}", name, e)))?;
        info!("opened window '{}' ({}x{})", name, width, height);
        Ok(MinifbWindow {
            window,
            name: name.to_string(),
            heading: String::new(),
        })
    }
}

pub struct MinifbWindow {
    window: Window,
    /// 視窗原名，標題清除時恢復
    name: String,
    heading: String,
}

impl Debug for MinifbWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MinifbWindow")
            .field("name", &self.name)
            .field("heading", &self.heading)
            .finish()
    }
}

impl DisplayWindow for MinifbWindow {
    /// minifb 只在 update 期間處理事件並設定 should_close
    fn poll(&mut self) {
        self.window.update();
    }

    fn is_open(&self) -> bool {
        self.window.is_open()
    }

    fn set_heading(&mut self, heading: &str) {
        if self.heading == heading {
            return;
        }
        self.heading = heading.to_string();
        if heading.is_empty() {
            self.window.set_title(&self.name);
        } else {
            self.window.set_title(&format!("{} - {}", self.name, heading));
        }
    }

    fn present(&mut self, buffer: &[u32], width: usize, height: usize) -> Result<()> {
        trace!("present '{}' {}x{}", self.name, width, height);
        self.window
            .update_with_buffer(buffer, width, height)
            .map_err(|e| Error::window(e.to_string()))
    }
}
