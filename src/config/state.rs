// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: f32,
    pub window_h: f32,

    /// Sidebar panel width in points
    pub sidebar_w: f32,

    /// Show the per-feed load report under the sidebar
    pub show_feed_report: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 1200.0,
            window_h: 800.0,
            sidebar_w: 320.0,
            show_feed_report: false,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
