use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use shortly_core::{update, AppState, AppViewModel, Msg};
use shortly_logging::client_info;

use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::persistence;
use super::ui;

pub fn run_app() -> Result<()> {
    logging::initialize(LogDestination::from_env());
    client_info!("shortly starting");

    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let result = run_event_loop(&mut terminal);

    disable_raw_mode().context("disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).context("leave alternate screen")?;
    terminal.show_cursor().context("show cursor")?;

    result
}

fn run_event_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(msg_tx.clone());

    let state_dir = persistence::state_dir();
    let restored = persistence::load_history(&state_dir);
    let (mut state, _effects) = update(AppState::new(), Msg::RestoreHistory(restored));
    let mut last_history_len = state.history_snapshot().len();

    // Background tick to drive the busy spinner and throttle rendering.
    let tick_tx = msg_tx.clone();
    thread::spawn(move || {
        let interval = Duration::from_millis(75);
        while tick_tx.send(Msg::Tick).is_ok() {
            thread::sleep(interval);
        }
    });

    state.consume_dirty();
    let mut view = state.view();
    terminal.draw(|f| ui::render::draw(f, &view))?;

    loop {
        if event::poll(Duration::from_millis(10)).unwrap_or(false) {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    match map_key(&view, key) {
                        KeyAction::Quit => break,
                        KeyAction::Dispatch(msg) => {
                            let _ = msg_tx.send(msg);
                        }
                        KeyAction::None => {}
                    }
                }
                Ok(Event::Resize(_, _)) => {
                    terminal.draw(|f| ui::render::draw(f, &view))?;
                }
                _ => {}
            }
        }

        // Drain input, ticks, and worker completions before deciding to render.
        while let Ok(msg) = msg_rx.try_recv() {
            let (next, effects) = update(std::mem::take(&mut state), msg);
            state = next;
            runner.enqueue(effects);
        }

        if state.consume_dirty() {
            view = state.view();
            terminal.draw(|f| ui::render::draw(f, &view))?;

            if view.history.len() != last_history_len {
                last_history_len = view.history.len();
                persistence::save_history(&state_dir, &state.history_snapshot());
            }
        }
    }

    Ok(())
}

#[derive(Debug, PartialEq, Eq)]
enum KeyAction {
    Dispatch(Msg),
    Quit,
    None,
}

/// Maps a key press to a core message. Editing keys rebuild the full input
/// text; the core decides whether the form currently accepts it.
fn map_key(view: &AppViewModel, key: KeyEvent) -> KeyAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => KeyAction::Quit,
            KeyCode::Char('y') => KeyAction::Dispatch(Msg::CopyResultClicked),
            _ => KeyAction::None,
        };
    }
    match key.code {
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Enter => KeyAction::Dispatch(Msg::SubmitClicked),
        KeyCode::Backspace => {
            let mut text = view.input.clone();
            text.pop();
            KeyAction::Dispatch(Msg::InputChanged(text))
        }
        KeyCode::Char(c) => KeyAction::Dispatch(Msg::InputChanged(format!("{}{}", view.input, c))),
        _ => KeyAction::None,
    }
}
