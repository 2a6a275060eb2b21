mod common;

use ratatui::style::Color;
use studio_core::models::{MessageKind, OrchestratorState};
use studio_tui::app::App;

use common::{fg_of, make_app, make_state, render_to_buffer, render_to_string};

#[test]
fn initial_render_shows_every_studio_unknown() {
    let app = make_app(OrchestratorState::default());
    let output = render_to_string(&app, 120, 30);

    for name in [
        "Omni 3D Studio",
        "Omni Voice Studio",
        "Omni Avatar Studio",
        "Omni Office Studio",
        "Omni Photo Studio",
        "Omni Video Studio",
    ] {
        assert!(output.contains(name), "missing {name}\n{output}");
    }
    assert_eq!(output.matches("Status unknown").count(), 6);
    assert!(!output.contains("Not deployed"));
}

#[test]
fn title_bar_shows_backend_and_counts() {
    let app = make_app(OrchestratorState::default());
    let output = render_to_string(&app, 120, 30);
    assert!(output.contains("Studio Control"));
    assert!(output.contains("http://localhost:5000"));
    assert!(output.contains("Health check pending"));
    assert!(output.contains("6 studios configured"));
}

#[test]
fn badges_are_upper_cased_identifiers() {
    let app = make_app(OrchestratorState::default());
    let output = render_to_string(&app, 120, 30);
    for badge in ["3D", "AUDIO", "AVATAR", "OFFICE", "PHOTO", "VIDEO"] {
        assert!(output.contains(badge), "missing badge {badge}");
    }
}

#[test]
fn mixed_statuses() {
    let app = make_app(make_state(&[("audio", true), ("video", false)], false, ""));
    let output = render_to_string(&app, 120, 30);
    assert_eq!(output.matches("Deployed").count(), 1);
    assert_eq!(output.matches("Not deployed").count(), 1);
    assert_eq!(output.matches("Status unknown").count(), 4);
}

#[test]
fn selected_card_is_marked() {
    let mut app = make_app(OrchestratorState::default());
    app.selected_index = 4;
    let output = render_to_string(&app, 120, 30);
    assert!(output.contains("> PHOTO"));
    assert!(!output.contains("> 3D"));
}

#[test]
fn idle_hints_offer_actions() {
    let app = make_app(OrchestratorState::default());
    let output = render_to_string(&app, 120, 30);
    assert!(output.contains("[A]deploy"));
    assert!(output.contains("[R]efresh"));
    assert!(!output.contains("busy..."));
}

#[test]
fn busy_hints_hide_actions() {
    let app = make_app(make_state(&[], true, "Deploying audio..."));
    let output = render_to_string(&app, 120, 30);
    assert!(output.contains("busy..."));
    assert!(output.contains("Deploying audio..."));
    assert!(!output.contains("[R]efresh"));
}

#[test]
fn warning_message_shown() {
    let app = make_app(make_state(
        &[],
        false,
        "Warning: Status update failed: HTTP 502",
    ));
    let output = render_to_string(&app, 120, 30);
    assert!(output.contains("Warning: Status update failed: HTTP 502"));
}

#[test]
fn message_colour_follows_its_kind() {
    let cases = [
        ("Deploying audio...", MessageKind::Progress, Color::Yellow),
        ("Warning: connection refused", MessageKind::Warning, Color::Red),
        ("terraform exited with status 1", MessageKind::Error, Color::Red),
        ("Deployed audio", MessageKind::Info, Color::Green),
    ];
    for (message, kind, expected) in cases {
        let app = make_app(OrchestratorState {
            message_kind: kind,
            ..make_state(&[], kind == MessageKind::Progress, message)
        });
        let buffer = render_to_buffer(&app, 120, 30);
        assert_eq!(fg_of(&buffer, message), Some(expected), "{kind:?}");
    }
}

#[test]
fn backend_error_is_not_shown_as_success() {
    let app = make_app(OrchestratorState {
        message_kind: MessageKind::Error,
        ..make_state(&[], false, "apply failed: quota exceeded")
    });
    let buffer = render_to_buffer(&app, 120, 30);
    assert_ne!(fg_of(&buffer, "apply failed"), Some(Color::Green));
}

#[test]
fn narrow_terminal_still_renders() {
    let app = App::new();
    let output = render_to_string(&app, 60, 20);
    assert!(output.contains("Studio Control"));
}
