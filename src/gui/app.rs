// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
    thread,
};

use eframe::egui;

use crate::{
    config::{consts::{MAIN_BUTTONS, SIDEBAR_BUTTONS}, state::AppState},
    controller::{ButtonGroup, Controller},
    loader,
    store::LoadState,
};

use super::{components, progress::GuiProgress};

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Sheetfolio",
        options,
        Box::new(|cc| Ok(Box::new(App::new(&cc.egui_ctx, state)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // current load; replaced wholesale on reload
    pub data: Option<LoadState>,
    pub ctrl: Option<Controller>,

    // status/progress (worker writes here)
    pub status: Arc<Mutex<String>>,
    pub running: bool,

    // worker → UI handoff
    pending: Arc<Mutex<Option<LoadState>>>,
}

impl App {
    pub fn new(ctx: &egui::Context, state: AppState) -> Self {
        logf!("Init: feeds={}", state.options.feeds.len());
        let mut app = Self {
            state,
            data: None,
            ctrl: None,
            status: Arc::new(Mutex::new(s!("Idle"))),
            running: false,
            pending: Arc::new(Mutex::new(None)),
        };
        app.reload(ctx);
        app
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Start a fresh load in the background. Ignored while one is running.
    pub fn reload(&mut self, ctx: &egui::Context) {
        if self.running { return; }
        self.running = true;
        self.status("Loading…");

        let feeds = self.state.options.feeds.clone();
        let net = self.state.options.net.clone();
        let status = self.status.clone();
        let pending = self.pending.clone();
        let ctx2 = ctx.clone();

        thread::spawn(move || {
            let mut prog = GuiProgress::new(status.clone(), ctx2.clone());
            match loader::load_blocking(&feeds, &net, Some(&mut prog)) {
                Ok(data) => {
                    if let Ok(mut slot) = pending.lock() {
                        *slot = Some(data);
                    }
                }
                Err(e) => {
                    loge!("Load: {}", e);
                    if let Ok(mut s) = status.lock() {
                        *s = format!("Error: {e}");
                    }
                    // Mount an empty state so the UI leaves "loading".
                    if let Ok(mut slot) = pending.lock() {
                        *slot = Some(LoadState::default());
                    }
                }
            }
            ctx2.request_repaint();
        });
    }

    /// Pick up a finished load and mount the initial selection.
    fn poll_load(&mut self) {
        let done = self.pending.lock().ok().and_then(|mut slot| slot.take());
        if let Some(data) = done {
            let ctrl = Controller::mount(
                &data,
                ButtonGroup::new(SIDEBAR_BUTTONS),
                ButtonGroup::new(MAIN_BUTTONS),
            );
            logf!("UI: Mounted (loaded={}, failed={})", data.loaded_count(), data.failed_count());
            self.ctrl = Some(ctrl);
            self.data = Some(data);
            self.running = false;
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_load();

        egui::SidePanel::left("sidebar")
            .resizable(true)
            .default_width(self.state.gui.sidebar_w)
            .show(ctx, |ui| {
                components::sidebar::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::toolbar::draw(ui, self);

            ui.separator();

            components::main_panel::draw(ui, self);
        });
    }
}
