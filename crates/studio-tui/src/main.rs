use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc;

use studio_core::models::ControlConfig;
use studio_core::services::backend::HttpBackend;
use studio_core::services::config_loader;
use studio_core::services::orchestrator::Orchestrator;

use studio_tui::app::App;
use studio_tui::event::{spawn_input_task, spawn_state_task, AppEvent};
use studio_tui::{keys, presenter, ui};

/// Deploy and destroy studio workloads through the provisioning backend.
#[derive(Parser, Debug)]
#[command(name = "studio-control", version, about)]
struct Args {
    /// Config file (defaults to .studio-control.yaml in the current directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Backend host, overrides the config file
    #[arg(long)]
    host: Option<String>,

    /// Backend port, overrides the config file
    #[arg(long)]
    port: Option<u16>,

    /// Write debug logs to .studio-control-debug.log
    #[arg(long)]
    debug: bool,

    /// Drive the UI from a script and print frames to stdout
    #[arg(long, value_name = "SCRIPT")]
    headless: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    // Set up debug logging if requested
    let _guard = if args.debug || args.headless.is_some() {
        Some(setup_debug_logging())
    } else {
        None
    };

    let config = resolve_config(&args)?;
    tracing::debug!(base_url = %config.base_url(), "config_resolved");

    let backend = HttpBackend::from_config(&config);
    let backend_url = backend.base_url().to_string();
    let orchestrator = Arc::new(Orchestrator::new(Arc::new(backend)));

    if let Some(script_path) = args.headless {
        run_headless(script_path, orchestrator, backend_url).await
    } else {
        run_interactive(orchestrator, backend_url).await
    }
}

/// Configure file-based tracing to `.studio-control-debug.log` in CWD.
/// Returns the guard that must be held alive for the duration of the program.
fn setup_debug_logging() -> tracing_appender::non_blocking::WorkerGuard {
    let file_appender = tracing_appender::rolling::never(".", ".studio-control-debug.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_ansi(false)
        .init();

    guard
}

/// Config file first, then CLI overrides.
fn resolve_config(args: &Args) -> color_eyre::Result<ControlConfig> {
    let mut config = match &args.config {
        Some(path) => config_loader::load(path)?,
        None => config_loader::load_or_default(Path::new("."))?,
    };
    if let Some(host) = &args.host {
        config.host = host.clone();
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    Ok(config)
}

/// Wire the orchestrator into the event channel and start the initial status
/// load. Rendering does not wait for it.
fn start_orchestrator(
    orchestrator: &Arc<Orchestrator>,
    event_tx: &mpsc::UnboundedSender<AppEvent>,
) -> tokio::task::JoinHandle<()> {
    let state_task = spawn_state_task(orchestrator.subscribe(), event_tx.clone());
    let initial = Arc::clone(orchestrator);
    tokio::spawn(async move { initial.initialize().await });
    state_task
}

/// Run the normal interactive TUI with crossterm backend.
async fn run_interactive(
    orchestrator: Arc<Orchestrator>,
    backend_url: String,
) -> color_eyre::Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();
    let _input_task = spawn_input_task(event_tx.clone());
    let _state_task = start_orchestrator(&orchestrator, &event_tx);

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new().with_backend_url(backend_url);
    app.state = orchestrator.snapshot();

    // Main event loop
    loop {
        terminal.draw(|f| ui::render(f, &app))?;

        if let Ok(event) = event_rx.try_recv() {
            process_event(&mut app, event, &orchestrator);
        } else {
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        }

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

/// Run headless mode: read scripted input, render to TestBackend, dump frames to stdout.
async fn run_headless(
    script_path: PathBuf,
    orchestrator: Arc<Orchestrator>,
    backend_url: String,
) -> color_eyre::Result<()> {
    use ratatui::backend::TestBackend;

    let script = std::fs::read_to_string(&script_path)?;

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();
    // No spawn_input_task — input comes from script
    let _state_task = start_orchestrator(&orchestrator, &event_tx);

    let backend = TestBackend::new(120, 40);
    let mut terminal = Terminal::new(backend)?;
    let mut app = App::new().with_backend_url(backend_url);
    app.state = orchestrator.snapshot();

    for raw_line in script.lines() {
        let line = raw_line.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }

        if line == "quit" {
            break;
        }

        if line == "screenshot" {
            headless_screenshot(&mut terminal, &app, None)?;
            continue;
        }

        if let Some(label) = line.strip_prefix("screenshot:") {
            headless_screenshot(&mut terminal, &app, Some(label.trim()))?;
            continue;
        }

        if let Some(ms_str) = line.strip_prefix("wait:") {
            let ms: u64 = ms_str.trim().parse().unwrap_or(100);
            headless_wait(&mut app, &mut event_rx, &orchestrator, ms).await;
            continue;
        }

        if let Some(text) = line.strip_prefix("type:") {
            for ch in text.chars() {
                let key_event = press(KeyCode::Char(ch), KeyModifiers::NONE);
                process_event(&mut app, AppEvent::Key(key_event), &orchestrator);
            }
            continue;
        }

        if let Some(key_str) = line.strip_prefix("key:") {
            let Some((code, modifiers)) = parse_key(key_str.trim()) else {
                eprintln!("headless: unknown key '{}'", key_str.trim());
                continue;
            };
            process_event(&mut app, AppEvent::Key(press(code, modifiers)), &orchestrator);
            continue;
        }

        eprintln!("headless: unknown command '{line}'");
    }

    Ok(())
}

fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

/// Parse a script key name such as `enter`, `shift+tab` or `ctrl+c`.
fn parse_key(name: &str) -> Option<(KeyCode, KeyModifiers)> {
    let (modifiers, key_name) = if let Some(rest) = name.strip_prefix("ctrl+") {
        (KeyModifiers::CONTROL, rest)
    } else if let Some(rest) = name.strip_prefix("shift+") {
        (KeyModifiers::SHIFT, rest)
    } else {
        (KeyModifiers::NONE, name)
    };

    let code = match key_name {
        "enter" => KeyCode::Enter,
        "esc" => KeyCode::Esc,
        "tab" if modifiers == KeyModifiers::SHIFT => KeyCode::BackTab,
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        s if s.chars().count() == 1 => {
            let ch = s.chars().next()?;
            if modifiers.contains(KeyModifiers::SHIFT) {
                KeyCode::Char(ch.to_uppercase().next().unwrap_or(ch))
            } else {
                KeyCode::Char(ch)
            }
        }
        _ => return None,
    };
    Some((code, modifiers))
}

/// Render the current app state to the TestBackend and dump frame text to stdout.
fn headless_screenshot(
    terminal: &mut Terminal<ratatui::backend::TestBackend>,
    app: &App,
    label: Option<&str>,
) -> color_eyre::Result<()> {
    if let Some(label) = label {
        println!("=== {label} ===");
    }
    terminal.draw(|f| ui::render(f, app))?;
    let buf = terminal.backend().buffer();
    for y in 0..buf.area.height {
        let mut line = String::new();
        for x in 0..buf.area.width {
            line.push_str(buf[(x, y)].symbol());
        }
        println!("{}", line.trim_end());
    }
    Ok(())
}

/// Process async events during a `wait:` command.
async fn headless_wait(
    app: &mut App,
    event_rx: &mut mpsc::UnboundedReceiver<AppEvent>,
    orchestrator: &Arc<Orchestrator>,
    ms: u64,
) {
    let deadline = tokio::time::Instant::now() + std::time::Duration::from_millis(ms);
    while tokio::time::Instant::now() < deadline {
        while let Ok(event) = event_rx.try_recv() {
            process_event(app, event, orchestrator);
        }
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    }
}

/// Process a single AppEvent, updating app state accordingly.
fn process_event(app: &mut App, event: AppEvent, orchestrator: &Arc<Orchestrator>) {
    match event {
        AppEvent::Key(key) => {
            if key.kind == KeyEventKind::Press {
                if let Some(intent) = keys::handle_key(app, key) {
                    tracing::info!(?intent, "forward_intent");
                    presenter::forward(intent, orchestrator);
                }
            }
        }
        AppEvent::StateChanged(state) => {
            tracing::debug!(
                busy = state.is_busy,
                kind = ?state.message_kind,
                message = %state.status_message,
                "state_changed"
            );
            app.state = state;
        }
    }
}
