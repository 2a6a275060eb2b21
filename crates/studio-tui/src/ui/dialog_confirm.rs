use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use studio_core::models::find_studio;

use crate::app::{App, ConfirmAction};
use crate::ui::layout::centered_rect;
use crate::ui::studio_grid::{accent_color, status_color};

/// Confirmation overlay. Destroying a studio gets a red frame naming the
/// target and its last known status; quitting mid-operation gets a yellow one.
pub fn render(f: &mut Frame, app: &App, message: &str, action: &ConfirmAction) {
    let area = centered_rect(50, 30, f.area());
    f.render_widget(Clear, area);

    let (title, border_color, header) = match action {
        ConfirmAction::Destroy(identifier) => {
            let header = find_studio(identifier).map(|studio| {
                let status = app.state.statuses.status_of(studio.identifier);
                let status_style = Style::default().fg(status_color(status));
                Line::from(vec![
                    Span::styled(
                        studio.display_name,
                        Style::default()
                            .fg(accent_color(studio.accent))
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled("  ● ", status_style),
                    Span::styled(status.label(), status_style),
                ])
            });
            (
                format!(" Destroy {} ", identifier.to_uppercase()),
                Color::Red,
                header,
            )
        }
        ConfirmAction::Quit => (" Quit ".to_string(), Color::Yellow, None),
    };

    let block = Block::default()
        .title(Span::styled(
            title,
            Style::default()
                .fg(border_color)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Thick)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(if header.is_some() { 2 } else { 0 }),
            Constraint::Min(2),
            Constraint::Length(1),
        ])
        .split(inner);

    if let Some(header) = header {
        f.render_widget(Paragraph::new(header), chunks[0]);
    }

    f.render_widget(
        Paragraph::new(Span::styled(
            message.to_string(),
            Style::default().fg(Color::White),
        ))
        .wrap(Wrap { trim: false }),
        chunks[1],
    );

    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(" [Y]", Style::default().fg(Color::Green)),
            Span::styled("es  ", Style::default().fg(Color::DarkGray)),
            Span::styled("[N]", Style::default().fg(Color::Red)),
            Span::styled("o / Esc", Style::default().fg(Color::DarkGray)),
        ])),
        chunks[2],
    );
}
