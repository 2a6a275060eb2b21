use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::App;
use crate::presenter;

/// Main vertical layout: [title bar] [content] [status bar]
pub fn main_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Min(10),   // content
            Constraint::Length(2), // status bar
        ])
        .split(area)
        .to_vec()
}

/// Render the title bar.
pub fn render_title(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        " Studio Control ",
        Style::default().fg(Color::Yellow),
    )];
    if !app.backend_url.is_empty() {
        spans.push(Span::styled(
            format!("({}) ", app.backend_url),
            Style::default().fg(Color::DarkGray),
        ));
    }
    spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
    spans.push(Span::styled(
        presenter::last_check_label(&app.state),
        Style::default().fg(Color::White),
    ));
    spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
    spans.push(Span::styled(
        format!("{} studios configured", app.catalog.len()),
        Style::default().fg(Color::Cyan),
    ));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Create a centered popup area of a given percentage of the screen.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
