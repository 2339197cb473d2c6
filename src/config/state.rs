// src/config/state.rs
use super::options::AppOptions;

/// Which central view the GUI shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Table,
    Charts,
}

impl View {
    pub const ALL: [View; 2] = [View::Table, View::Charts];

    pub fn title(&self) -> &'static str {
        match self {
            View::Table => "Table",
            View::Charts => "Charts",
        }
    }
}

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Active tab
    pub view: View,

    /// 0-based index into the current chart pages
    pub chart_page: usize,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 1100,
            window_h: 700,
            view: View::Table,
            chart_page: 0,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
