use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::layout::centered_rect;

pub fn render(f: &mut Frame) {
    let area = centered_rect(60, 70, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help: Keybindings ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let lines = vec![
        section_header("Studios"),
        key_line("Arrows/hjkl", "Move between studio cards"),
        key_line("Tab", "Next studio"),
        key_line("A / Enter", "Deploy selected studio"),
        key_line("D", "Destroy selected studio"),
        key_line("R", "Check backend health and refresh"),
        key_line("?", "Show this help"),
        key_line("Q / Esc", "Quit"),
        Line::from(""),
        section_header("Dialogs"),
        key_line("Y / Enter", "Confirm"),
        key_line("N / Esc", "Cancel / close"),
        Line::from(""),
        Line::from(Span::styled(
            "  Deploy, destroy and refresh are disabled while an operation runs.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn section_header(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {title}"),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))
}

fn key_line(key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("    {key:<14}"),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(desc.to_string(), Style::default().fg(Color::White)),
    ])
}
