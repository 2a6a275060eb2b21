pub mod dialog_confirm;
pub mod dialog_help;
pub mod layout;
pub mod status_bar;
pub mod studio_grid;

use ratatui::Frame;

use crate::app::{App, Mode};

/// Top-level render dispatch.
pub fn render(f: &mut Frame, app: &App) {
    let chunks = layout::main_layout(f.area());

    layout::render_title(f, chunks[0], app);
    studio_grid::render(f, chunks[1], app);
    status_bar::render(f, chunks[2], app);

    // Overlay dialogs
    match &app.mode {
        Mode::ConfirmDialog { message, action } => {
            dialog_confirm::render(f, app, message, action)
        }
        Mode::HelpDialog => dialog_help::render(f),
        Mode::StudioGrid => {}
    }
}
