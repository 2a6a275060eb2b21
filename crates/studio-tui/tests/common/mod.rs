// Each test binary compiles this module independently and uses a different
// subset of helpers, so unused-function warnings are expected.
#![allow(dead_code)]

use ratatui::buffer::Buffer;
use ratatui::style::Color;
use ratatui::{backend::TestBackend, Terminal};
use studio_core::models::{MessageKind, OrchestratorState};
use studio_tui::app::App;
use studio_tui::ui;

/// Render the app into a TestBackend of the given dimensions.
pub fn render_to_buffer(app: &App, width: u16, height: u16) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| ui::render(f, app)).unwrap();
    terminal.backend().buffer().clone()
}

/// Render the app to a string using a TestBackend of the given dimensions.
pub fn render_to_string(app: &App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| ui::render(f, app)).unwrap();
    terminal.backend().to_string()
}

/// Foreground colour of the first cell where `text` appears on screen.
pub fn fg_of(buffer: &Buffer, text: &str) -> Option<Color> {
    let needle: Vec<char> = text.chars().collect();
    let area = buffer.area;
    for y in area.top()..area.bottom() {
        let row: Vec<(char, u16)> = (area.left()..area.right())
            .flat_map(|x| {
                let symbol = buffer.cell((x, y)).map(|c| c.symbol()).unwrap_or(" ");
                symbol.chars().map(move |ch| (ch, x)).collect::<Vec<_>>()
            })
            .collect();
        let found = row
            .windows(needle.len())
            .find(|w| w.iter().map(|(ch, _)| *ch).eq(needle.iter().copied()));
        if let Some(window) = found {
            let x = window[0].1;
            return buffer.cell((x, y)).map(|c| c.fg);
        }
    }
    None
}

/// Build orchestrator state with the given deployed flags.
pub fn make_state(entries: &[(&str, bool)], busy: bool, message: &str) -> OrchestratorState {
    OrchestratorState {
        status_message: message.to_string(),
        message_kind: MessageKind::Info,
        is_busy: busy,
        last_health_check_at: None,
        statuses: entries.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
    }
}

/// App showing the given state against a fixed backend address.
pub fn make_app(state: OrchestratorState) -> App {
    let mut app = App::new().with_backend_url("http://localhost:5000");
    app.state = state;
    app
}
