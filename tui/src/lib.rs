mod app;
mod fetcher;
mod footer;
mod header;
mod views;
pub mod widgets;

use client::AssetClient;
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyCode, KeyEventKind, KeyModifiers,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use tokio::sync::mpsc;
use viewer::ViewState;

use app::{App, Control};
use fetcher::{dispatch, FetchOutcome};

/// Launch the interactive viewer and block until the user quits.
///
/// Must be called from within a tokio runtime; fetches are spawned onto it.
pub async fn run(state: ViewState, client: AssetClient, scroll_threshold: usize) -> io::Result<()> {
    // Install a panic hook that restores the terminal before printing
    // the panic message. Without this, a panic leaves the terminal in
    // raw mode, making it unusable.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen, DisableMouseCapture);
        default_hook(info);
    }));

    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(state, scroll_threshold);
    app.start();
    let result = run_app(&mut terminal, &mut app, &client).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    client: &AssetClient,
) -> io::Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<FetchOutcome>();
    let mut events = EventStream::new();

    loop {
        for command in app.take_commands() {
            dispatch(command, client, &tx);
        }

        terminal.draw(|f| app.render(f))?;

        tokio::select! {
            Some(outcome) = rx.recv() => app.on_fetch_outcome(outcome),
            maybe_event = events.next() => match maybe_event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    let interrupt = key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c');
                    if interrupt || app.handle_key(key.code) == Control::Quit {
                        return Ok(());
                    }
                }
                Some(Ok(Event::Mouse(mouse))) => match mouse.kind {
                    MouseEventKind::Down(_) => app.handle_click(mouse.column, mouse.row),
                    MouseEventKind::ScrollDown => app.handle_scroll_down(),
                    MouseEventKind::ScrollUp => app.handle_scroll_up(),
                    _ => {}
                },
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e),
                None => return Ok(()),
            },
        }
    }
}
