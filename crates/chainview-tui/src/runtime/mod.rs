//! Dashboard runtime - owns the terminal, the event-bus subscription, and
//! the event loop.
//!
//! This is the "Elm runtime" boundary: all side effects happen here. The
//! reducer stays pure and produces effects; this module executes them.
//!
//! ## Inbox Pattern
//!
//! The bus handler registered at mount only forwards block payloads into an
//! inbox channel; the loop drains the inbox each frame. Bus dispatch runs
//! under the bus lock, so the handler must never block or call back into the
//! bus - forwarding into a channel is all it does.
//!
//! ## Lifecycle
//!
//! The component has exactly two states: mounted (subscribed) and unmounted
//! (unsubscribed). Subscription happens in `new`; unsubscription happens on
//! teardown and is race-free (see `EventBus::unsubscribe`), so no handler
//! runs after the runtime is gone.

use std::io::Stdout;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use anyhow::Result;
use chainview_core::{BusEvent, Config, EventBus, SubscriptionId, Topic};
use chainview_types::BlockSummary;
use chrono::Utc;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio_util::sync::CancellationToken;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{render, terminal, update};

/// Poll timeout when waiting for terminal input between ticks.
const INPUT_POLL: Duration = Duration::from_millis(50);

/// Full-screen dashboard runtime.
///
/// Owns the terminal and state. Runs the event loop and executes effects.
/// Terminal state is restored on drop, panic, or quit.
pub struct DashboardRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub state: AppState,
    bus: EventBus,
    subscription: Option<SubscriptionId>,
    inbox_rx: mpsc::Receiver<BlockSummary>,
    feed_done: CancellationToken,
    age_refresh: Duration,
}

impl DashboardRuntime {
    /// Sets up the terminal and subscribes to the block topic.
    pub fn new(
        config: &Config,
        bus: EventBus,
        seed: Vec<BlockSummary>,
        feed_done: CancellationToken,
    ) -> Result<Self> {
        let state = AppState::new(config, seed, Utc::now());
        let terminal = terminal::setup_terminal()?;

        let (inbox_tx, inbox_rx) = mpsc::channel();
        let subscription = bus.subscribe(Topic::NewBlock, move |event| {
            let BusEvent::Block(block) = event;
            // Receiver may already be gone during teardown; dropped sends
            // are fine.
            let _ = inbox_tx.send(block.clone());
        });
        tracing::info!(topic = Topic::NewBlock.name(), "subscribed");
        Ok(Self {
            terminal,
            state,
            bus,
            subscription: Some(subscription),
            inbox_rx,
            feed_done,
            age_refresh: Duration::from_millis(config.age_refresh_ms),
        })
    }

    /// Runs the event loop until a quit effect is produced.
    pub fn run(&mut self) -> Result<()> {
        let mut last_tick = Instant::now();
        let mut quit = false;
        while !quit {
            let mut effects = Vec::new();

            // Blocks forwarded from the bus, in delivery order. Each one
            // re-reads the then-current head row inside the reducer.
            while let Ok(block) = self.inbox_rx.try_recv() {
                effects.extend(update::update(
                    &mut self.state,
                    UiEvent::Block {
                        block,
                        now: Utc::now(),
                    },
                ));
            }

            if self.feed_done.is_cancelled() && !self.state.status.feed_closed {
                effects.extend(update::update(&mut self.state, UiEvent::FeedClosed));
            }

            if event::poll(INPUT_POLL)?
                && let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                effects.extend(update::update(&mut self.state, UiEvent::Key(key)));
            }

            if last_tick.elapsed() >= self.age_refresh {
                last_tick = Instant::now();
                effects.extend(update::update(
                    &mut self.state,
                    UiEvent::Tick { now: Utc::now() },
                ));
            }

            self.terminal.draw(|frame| render::render(&self.state, frame))?;

            for effect in effects {
                match effect {
                    UiEffect::Quit => quit = true,
                }
            }
        }
        self.teardown();
        Ok(())
    }

    /// Unsubscribes from the bus and restores the terminal. Idempotent.
    fn teardown(&mut self) {
        if let Some(id) = self.subscription.take() {
            self.bus.unsubscribe(Topic::NewBlock, id);
            tracing::info!(topic = Topic::NewBlock.name(), "unsubscribed");
        }
        if let Err(err) = terminal::restore_terminal() {
            tracing::warn!(%err, "failed to restore terminal");
        }
    }
}

impl Drop for DashboardRuntime {
    fn drop(&mut self) {
        self.teardown();
    }
}
