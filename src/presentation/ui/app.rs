//! Main application orchestrator.

use std::sync::Arc;

use crossterm::event::{Event, EventStream, KeyEvent, KeyEventKind};
use futures_util::StreamExt;
use ratatui::{DefaultTerminal, Frame};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::application::use_cases::{CreateProcessUseCase, LoadFeedUseCase};
use crate::domain::ports::{NewProcess, ProgressPort};
use crate::infrastructure::config::UiConfig;
use crate::presentation::events::{AppEvent, EventResult, RefreshTrigger};
use crate::presentation::ui::{ProgressScreen, ProgressScreenState, ScreenAction};
use crate::presentation::widgets::{LoadOutcome, StatusLevel};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppState {
    Running,
    Exiting,
}

pub struct App {
    state: AppState,
    screen: ProgressScreenState,
    load_feed: LoadFeedUseCase,
    create_process: CreateProcessUseCase,
    refresh: RefreshTrigger,
    event_tx: mpsc::UnboundedSender<AppEvent>,
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
}

impl App {
    #[must_use]
    pub fn new(progress_port: Arc<dyn ProgressPort>, ui: &UiConfig) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        Self {
            state: AppState::Running,
            screen: ProgressScreenState::new(ui),
            load_feed: LoadFeedUseCase::new(progress_port.clone()),
            create_process: CreateProcessUseCase::new(progress_port),
            refresh: RefreshTrigger::new(event_tx.clone()),
            event_tx,
            event_rx,
        }
    }

    /// # Errors
    /// Returns error if drawing to the terminal fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        self.mount_feed();
        self.run_event_loop(terminal).await?;

        info!("Application exiting normally");
        Ok(())
    }

    async fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();

        terminal.draw(|frame| self.render(frame))?;

        while self.state != AppState::Exiting {
            tokio::select! {
                biased;

                Some(event) = self.event_rx.recv() => {
                    self.handle_app_event(event);
                    terminal.draw(|frame| self.render(frame))?;
                }

                Some(Ok(event)) = terminal_events.next() => {
                    if self.handle_terminal_event(event) == EventResult::Exit {
                        self.state = AppState::Exiting;
                    }
                    terminal.draw(|frame| self.render(frame))?;
                }

                else => {
                    warn!("Terminal event stream closed");
                    self.state = AppState::Exiting;
                }
            }
        }

        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        frame.render_stateful_widget(ProgressScreen::new(), frame.area(), &mut self.screen);
    }

    fn handle_terminal_event(&mut self, event: Event) -> EventResult {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            _ => EventResult::Continue,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        match self.screen.handle_key(key) {
            ScreenAction::Quit => return EventResult::Exit,
            ScreenAction::Submit(process) => self.submit(process),
            ScreenAction::Refresh => self.refresh.request(),
            ScreenAction::None => {}
        }
        EventResult::Continue
    }

    /// Dispatches one feed load tagged with a fresh ticket.
    fn mount_feed(&mut self) {
        let ticket = self.screen.feed_mut().begin_load();
        let use_case = self.load_feed.clone();
        let tx = self.event_tx.clone();

        tokio::spawn(async move {
            let result = use_case.execute().await;
            let _ = tx.send(AppEvent::FeedLoaded { ticket, result });
        });
    }

    fn submit(&mut self, process: NewProcess) {
        debug!(process = %process.process_name, "Submitting process");
        let use_case = self.create_process.clone();
        let tx = self.event_tx.clone();

        tokio::spawn(async move {
            let result = use_case.execute(process).await;
            let _ = tx.send(AppEvent::ProcessCreated { result });
        });
    }

    fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::FeedLoaded { ticket, result } => {
                if self.screen.feed_mut().finish_load(ticket, result) == LoadOutcome::Committed {
                    debug!(count = self.screen.feed().records().len(), "Feed updated");
                }
            }
            AppEvent::ProcessCreated { result } => {
                if self.screen.form_mut().finish_submit(result) {
                    info!("Process created");
                    self.screen.set_notice("Process created", StatusLevel::Success);
                    self.refresh.request();
                }
            }
            AppEvent::Refresh => {
                debug!("Refreshing page");
                self.mount_feed();
            }
        }
    }
}
