use studio_core::models::{OrchestratorState, Studio, STUDIOS};

use crate::presenter::{self, StudioCard};

/// The active mode determines which UI is shown and how keys are dispatched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    StudioGrid,
    ConfirmDialog {
        message: String,
        action: ConfirmAction,
    },
    HelpDialog,
}

/// What a confirmed dialog action should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    Destroy(String),
    Quit,
}

/// Top-level application state.
///
/// `state` is a read-only copy of the orchestrator's state, replaced whenever
/// the orchestrator publishes a change.
pub struct App {
    pub mode: Mode,
    pub catalog: &'static [Studio],
    pub state: OrchestratorState,
    pub selected_index: usize,
    pub should_quit: bool,
    pub backend_url: String,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub const GRID_COLUMNS: usize = 3;

    pub fn new() -> Self {
        Self {
            mode: Mode::StudioGrid,
            catalog: &STUDIOS,
            state: OrchestratorState::default(),
            selected_index: 0,
            should_quit: false,
            backend_url: String::new(),
        }
    }

    pub fn with_backend_url(mut self, url: impl Into<String>) -> Self {
        self.backend_url = url.into();
        self
    }

    pub fn cards(&self) -> Vec<StudioCard> {
        presenter::present(self.catalog, &self.state)
    }

    pub fn selected_studio(&self) -> Option<&'static Studio> {
        self.catalog.get(self.selected_index)
    }

    /// Deploy, destroy and refresh are unavailable while an operation runs.
    pub fn controls_disabled(&self) -> bool {
        self.state.is_busy
    }

    pub fn select_next(&mut self) {
        if !self.catalog.is_empty() {
            self.selected_index = (self.selected_index + 1) % self.catalog.len();
        }
    }

    pub fn select_prev(&mut self) {
        if !self.catalog.is_empty() {
            if self.selected_index == 0 {
                self.selected_index = self.catalog.len() - 1;
            } else {
                self.selected_index -= 1;
            }
        }
    }

    /// Navigate the card grid.
    pub fn grid_move(&mut self, dx: i32, dy: i32) {
        if self.catalog.is_empty() {
            return;
        }
        let cols = Self::GRID_COLUMNS;
        let row = self.selected_index / cols;
        let col = self.selected_index % cols;

        let new_col = (col as i32 + dx).clamp(0, cols as i32 - 1) as usize;
        let new_row = (row as i32 + dy).max(0) as usize;
        let new_idx = new_row * cols + new_col;

        if new_idx < self.catalog.len() {
            self.selected_index = new_idx;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_navigation_stays_in_bounds() {
        let mut app = App::new();
        app.grid_move(-1, -1);
        assert_eq!(app.selected_index, 0);

        app.grid_move(1, 0);
        assert_eq!(app.selected_index, 1);
        app.grid_move(0, 1);
        assert_eq!(app.selected_index, 4);
        app.grid_move(5, 0);
        assert_eq!(app.selected_index, 5);
        app.grid_move(0, 1);
        assert_eq!(app.selected_index, 5);
    }

    #[test]
    fn linear_selection_wraps() {
        let mut app = App::new();
        app.select_prev();
        assert_eq!(app.selected_index, STUDIOS.len() - 1);
        app.select_next();
        assert_eq!(app.selected_index, 0);
    }
}
