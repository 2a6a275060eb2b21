use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use studio_core::models::MessageKind;

use crate::app::{App, Mode};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    // First line: orchestrator status message or blank
    let msg = &app.state.status_message;
    let status_line = if msg.is_empty() {
        Line::from("")
    } else {
        Line::from(Span::styled(
            format!(" {msg}"),
            message_style(app.state.message_kind),
        ))
    };

    // Second line: context-sensitive hotkey hints
    let hints = match (&app.mode, app.state.is_busy) {
        (Mode::ConfirmDialog { .. }, _) => Line::from(vec![
            hint("Y", "es"),
            Span::raw(" "),
            hint("N", "o"),
        ]),
        (Mode::HelpDialog, _) => Line::from(vec![hint("Esc", "close")]),
        (Mode::StudioGrid, true) => Line::from(vec![
            Span::styled(" busy... ", Style::default().fg(Color::Yellow)),
            hint("Arrows", "nav"),
            Span::raw(" "),
            hint("?", "help"),
            Span::raw(" "),
            hint("Q", "uit"),
        ]),
        (Mode::StudioGrid, false) => Line::from(vec![
            hint("Arrows", "nav"),
            Span::raw(" "),
            hint("A", "deploy"),
            Span::raw(" "),
            hint("D", "estroy"),
            Span::raw(" "),
            hint("R", "efresh"),
            Span::raw(" "),
            hint("?", "help"),
            Span::raw(" "),
            hint("Q", "uit"),
        ]),
    };

    let widget = Paragraph::new(vec![status_line, hints]);
    f.render_widget(widget, area);
}

fn message_style(kind: MessageKind) -> Style {
    match kind {
        MessageKind::Info => Style::default().fg(Color::Green),
        MessageKind::Progress => Style::default().fg(Color::Yellow),
        MessageKind::Warning => Style::default().fg(Color::Red),
        MessageKind::Error => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    }
}

fn hint(key: &str, label: &str) -> Span<'static> {
    Span::styled(
        format!("[{key}]{label}"),
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
}
