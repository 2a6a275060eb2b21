use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use studio_core::models::ActionKind;

use crate::app::{App, ConfirmAction, Mode};
use crate::presenter::Intent;

/// Handle a key event, dispatching based on current mode.
///
/// Returns the intent to forward to the orchestrator, if the key raised one.
pub fn handle_key(app: &mut App, key: KeyEvent) -> Option<Intent> {
    tracing::debug!(mode = ?app.mode, key = ?key.code, "handle_key");
    match &app.mode {
        Mode::StudioGrid => handle_studio_grid(app, key),
        Mode::ConfirmDialog { .. } => handle_confirm_dialog(app, key),
        Mode::HelpDialog => {
            handle_help_dialog(app, key);
            None
        }
    }
}

// ─── Studio Grid ────────────────────────────────────────────────────────

fn handle_studio_grid(app: &mut App, key: KeyEvent) -> Option<Intent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return None;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            if app.state.is_busy {
                app.mode = Mode::ConfirmDialog {
                    message: "An operation is still running. Quit anyway?".into(),
                    action: ConfirmAction::Quit,
                };
            } else {
                app.should_quit = true;
            }
            None
        }
        KeyCode::Left | KeyCode::Char('h') => {
            app.grid_move(-1, 0);
            None
        }
        KeyCode::Right | KeyCode::Char('l') => {
            app.grid_move(1, 0);
            None
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.grid_move(0, -1);
            None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.grid_move(0, 1);
            None
        }
        KeyCode::Tab => {
            app.select_next();
            None
        }
        KeyCode::BackTab => {
            app.select_prev();
            None
        }
        KeyCode::Char('?') => {
            app.mode = Mode::HelpDialog;
            None
        }
        _ if app.controls_disabled() => None,
        KeyCode::Char('a') | KeyCode::Enter => {
            let studio = app.selected_studio()?;
            Some(Intent::RequestAction {
                studio: studio.identifier.to_string(),
                action: ActionKind::Apply,
            })
        }
        KeyCode::Char('d') => {
            let studio = app.selected_studio()?;
            app.mode = Mode::ConfirmDialog {
                message: format!(
                    "Destroy {} ({})? This tears down its infrastructure.",
                    studio.display_name, studio.identifier
                ),
                action: ConfirmAction::Destroy(studio.identifier.to_string()),
            };
            None
        }
        KeyCode::Char('r') => Some(Intent::RequestRefresh),
        _ => None,
    }
}

// ─── Dialogs ────────────────────────────────────────────────────────────

fn handle_confirm_dialog(app: &mut App, key: KeyEvent) -> Option<Intent> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('n') => {
            app.mode = Mode::StudioGrid;
            None
        }
        KeyCode::Char('y') | KeyCode::Enter => {
            let Mode::ConfirmDialog { action, .. } = &app.mode else {
                return None;
            };
            let action = action.clone();
            app.mode = Mode::StudioGrid;
            match action {
                ConfirmAction::Quit => {
                    app.should_quit = true;
                    None
                }
                // The dialog may have been open when another operation started.
                ConfirmAction::Destroy(_) if app.controls_disabled() => None,
                ConfirmAction::Destroy(studio) => Some(Intent::RequestAction {
                    studio,
                    action: ActionKind::Destroy,
                }),
            }
        }
        _ => None,
    }
}

fn handle_help_dialog(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
            app.mode = Mode::StudioGrid;
        }
        _ => {}
    }
}
