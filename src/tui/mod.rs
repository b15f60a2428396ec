//! Terminal UI: the turn controller and presentation layer.
//!
//! This layer owns all mutable game state and timing. The decision core
//! never blocks on input or sleeps; the controller drives it.

mod app;
mod input;
mod orchestrator;
mod players;
mod ui;

use anyhow::Result;
use app::App;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use orchestrator::{GameEvent, Orchestrator};
use players::{ComputerPlayer, HumanPlayer};
use ratatui::DefaultTerminal;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use unbeatable_tictactoe::Position;

/// Runs the TUI until the user quits.
pub async fn run(delay: Duration) -> Result<()> {
    let mut terminal = ratatui::init();
    let result = run_app(&mut terminal, delay).await;
    ratatui::restore();
    result
}

/// One game in flight: the orchestrator task plus its channels.
struct Session {
    handle: JoinHandle<()>,
    move_tx: mpsc::UnboundedSender<Position>,
    event_rx: mpsc::UnboundedReceiver<GameEvent>,
}

impl Session {
    fn start(delay: Duration) -> Self {
        let (move_tx, move_rx) = mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let mut orchestrator = Orchestrator::new(
            Box::new(HumanPlayer::new(move_rx)),
            Box::new(ComputerPlayer::new(delay)),
            event_tx,
        );
        let handle = tokio::spawn(async move {
            if let Err(error) = orchestrator.run().await {
                warn!(%error, "game loop stopped");
            }
        });
        Self {
            handle,
            move_tx,
            event_rx,
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn run_app(terminal: &mut DefaultTerminal, delay: Duration) -> Result<()> {
    let mut app = App::new();
    let mut session = Session::start(delay);

    info!("TUI started");

    loop {
        while let Ok(game_event) = session.event_rx.try_recv() {
            app.handle_event(game_event);
        }

        terminal.draw(|frame| ui::draw(frame, app.game().board(), app.cursor(), app.status()))?;

        // Short poll keeps the loop responsive to orchestrator events.
        if !event::poll(Duration::from_millis(50))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                return Ok(());
            }
            KeyCode::Char('r') => {
                debug!("Restarting game");
                session = Session::start(delay);
                app.restart();
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let _ = session.move_tx.send(app.cursor());
            }
            KeyCode::Char(c) if ('1'..='9').contains(&c) => {
                let index = c as usize - '1' as usize;
                if let Some(position) = Position::from_index(index) {
                    let _ = session.move_tx.send(position);
                }
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                app.move_cursor(key.code);
            }
            _ => {}
        }
    }
}
