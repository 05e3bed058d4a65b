use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

use crate::app::events::{AppEvent, Command};
use crate::app::loader::{spawn_csv_download, spawn_matches_fetch};
use crate::app::scheduler::RefreshScheduler;
use crate::app::state::AppState;
use crate::config::Config;
use crate::error::Result;
use crate::fetch::FixturesSource;
use crate::ui::{action_for, draw_fixtures, TerminalGuard};
use crate::view::screen_model;

const INPUT_POLL: Duration = Duration::from_millis(100);

/// Owns the fixtures screen: routes input, timer ticks and background results
/// through `AppState` and launches the fetches it asks for.
pub struct AppController<S: FixturesSource> {
    source: Arc<S>,
    config: Config,
}

impl<S: FixturesSource> AppController<S> {
    pub fn new(source: S, config: Config) -> Self {
        Self {
            source: Arc::new(source),
            config,
        }
    }

    pub async fn run(self) -> Result<()> {
        let (tx, mut rx) = unbounded_channel();
        let (tick_tx, mut tick_rx) = unbounded_channel();
        let scheduler = RefreshScheduler::start(self.config.refresh_interval, tick_tx, ());
        log::info!(
            "Refreshing fixtures every {} minutes from {}",
            scheduler.period().as_secs() / 60,
            self.config.matches_url()
        );

        let mut state = AppState::new();
        let mut guard = TerminalGuard::enter()?;
        let outcome = self
            .event_loop(&mut guard, &mut state, &tx, &mut rx, &mut tick_rx)
            .await;

        scheduler.cancel();
        guard.leave()?;
        outcome
    }

    async fn event_loop(
        &self,
        guard: &mut TerminalGuard,
        state: &mut AppState,
        tx: &UnboundedSender<AppEvent>,
        rx: &mut UnboundedReceiver<AppEvent>,
        ticks: &mut UnboundedReceiver<()>,
    ) -> Result<()> {
        loop {
            let model = screen_model(state);
            guard.terminal_mut().draw(|f| draw_fixtures(f, &model))?;

            while ticks.try_recv().is_ok() {
                if self.dispatch(state, AppEvent::RefreshDue, tx) {
                    return Ok(());
                }
            }

            while let Ok(event) = rx.try_recv() {
                if self.dispatch(state, event, tx) {
                    return Ok(());
                }
            }

            if event::poll(INPUT_POLL)? {
                if let Event::Key(key) = event::read()? {
                    if let Some(action) = action_for(key) {
                        if self.dispatch(state, AppEvent::User(action), tx) {
                            return Ok(());
                        }
                    }
                }
            }

            tokio::task::yield_now().await;
        }
    }

    /// Apply `event` and start whatever it asks for. Returns `true` on quit.
    pub(crate) fn dispatch(
        &self,
        state: &mut AppState,
        event: AppEvent,
        tx: &UnboundedSender<AppEvent>,
    ) -> bool {
        match state.handle(event) {
            Some(Command::FetchMatches) => {
                spawn_matches_fetch(Arc::clone(&self.source), tx.clone());
            }
            Some(Command::DownloadCsv) => {
                spawn_csv_download(
                    Arc::clone(&self.source),
                    self.config.download_dir.clone(),
                    tx.clone(),
                );
            }
            Some(Command::Quit) => return true,
            None => {}
        }
        false
    }
}
