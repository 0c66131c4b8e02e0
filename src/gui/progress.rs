// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use eframe::egui;

use crate::{error::FeedError, keys::FeedKey, progress::Progress};

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    ctx: egui::Context,
    done: usize,
    failed: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>, ctx: egui::Context) -> Self {
        Self { status, ctx, done: 0, failed: 0, total: 0 }
    }

    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
        self.ctx.request_repaint();
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn item_done(&mut self, key: FeedKey, rows: usize) {
        self.done += 1;
        self.set_status(format!("Loaded {} – {} rows ({}/{})", key, rows, self.done + self.failed, self.total));
    }
    fn item_failed(&mut self, key: FeedKey, _err: &FeedError) {
        self.failed += 1;
        self.set_status(format!("Couldn't load {} ({}/{})", key, self.done + self.failed, self.total));
    }
    fn finish(&mut self) {
        if self.failed == 0 {
            self.set_status(format!("Ready ({} feeds)", self.done));
        } else {
            self.set_status(format!("Ready – {} of {} feeds failed", self.failed, self.total));
        }
    }
}
