use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};
use ratatui::Frame;

use studio_core::models::{Accent, DeploymentStatus};

use crate::app::App;
use crate::presenter::StudioCard;

/// Render every studio as a card in a fixed-width grid.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let cards = app.cards();
    if cards.is_empty() {
        let msg = Paragraph::new(Line::from(Span::styled(
            "  No studios configured.",
            Style::default().fg(Color::DarkGray),
        )));
        f.render_widget(msg, area);
        return;
    }

    let cols = App::GRID_COLUMNS;
    let rows = cards.len().div_ceil(cols);

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints((0..rows).map(|_| Constraint::Ratio(1, rows as u32)))
        .split(area);

    for (row, row_area) in row_areas.iter().enumerate() {
        let col_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints((0..cols).map(|_| Constraint::Ratio(1, cols as u32)))
            .split(*row_area);

        for (col, col_area) in col_areas.iter().enumerate() {
            let idx = row * cols + col;
            if let Some(card) = cards.get(idx) {
                render_card(f, *col_area, card, idx == app.selected_index);
            }
        }
    }
}

fn render_card(f: &mut Frame, area: Rect, card: &StudioCard, is_selected: bool) {
    let accent = accent_color(card.accent);

    let (title, border_type) = if is_selected {
        (format!(" > {} ", card.badge), BorderType::Double)
    } else {
        (format!(" {} ", card.badge), BorderType::Plain)
    };

    let block = Block::default()
        .title(Span::styled(
            title,
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(Style::default().fg(accent));

    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.height < 3 {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // name + description
            Constraint::Length(1), // status
            Constraint::Length(1), // controls
        ])
        .split(inner);

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            format!(" {}", card.display_name),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(" {}", card.description),
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .wrap(Wrap { trim: false });
    f.render_widget(header, chunks[0]);

    let status_color = status_color(card.status);
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(" ● ", Style::default().fg(status_color)),
            Span::styled(card.label, Style::default().fg(status_color)),
        ])),
        chunks[1],
    );

    f.render_widget(Paragraph::new(controls_line(card)), chunks[2]);
}

fn controls_line(card: &StudioCard) -> Line<'static> {
    if card.disabled {
        let dim = Style::default().fg(Color::DarkGray);
        return Line::from(vec![
            Span::styled(" [A]Deploy", dim),
            Span::raw("  "),
            Span::styled("[D]Destroy", dim),
        ]);
    }
    Line::from(vec![
        Span::styled(
            " [A]Deploy",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled("[D]Destroy", Style::default().fg(Color::Red)),
    ])
}

pub(crate) fn status_color(status: DeploymentStatus) -> Color {
    match status {
        DeploymentStatus::Deployed => Color::Green,
        DeploymentStatus::NotDeployed => Color::DarkGray,
        DeploymentStatus::Unknown => Color::Yellow,
    }
}

pub(crate) fn accent_color(accent: Accent) -> Color {
    match accent {
        Accent::Sky => Color::LightCyan,
        Accent::Violet => Color::Magenta,
        Accent::Emerald => Color::Green,
        Accent::Amber => Color::Yellow,
        Accent::Rose => Color::LightRed,
        Accent::Blue => Color::Blue,
    }
}
