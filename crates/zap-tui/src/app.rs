//! App — the component-based event loop.
//!
//! - `App` owns the views, `AppState`, and the playback handle.
//! - A `tokio::mpsc` channel carries `AppMessage` events in from background
//!   tasks (terminal input, playlist fetches).
//! - The loop draws a frame, then awaits the next message.
//! - Views return `Vec<Action>`; App dispatches each Action, mutating state
//!   and applying the navigation core's command effects.

use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use ratatui::crossterm::{
    event::{self, Event, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use zap_core::catalog::Country;
use zap_core::config::Config;
use zap_core::nav::{CommandEffect, NavigationState};
use zap_core::playlist::{parse_playlist, Channel};

use crate::{
    action::Action,
    app_state::{AppState, View},
    component::Component,
    components::{
        catalog_list::CatalogList, channel_list::ChannelList, player_panel::PlayerPanel,
    },
    fetch,
    mpv::MpvPlayer,
    widgets::status_bar::{self, InputMode},
};

// ── Internal event bus ────────────────────────────────────────────────────────

enum AppMessage {
    Event(Event),
    PlaylistFetched {
        generation: u64,
        result: Result<String, String>,
    },
}

// ── App ───────────────────────────────────────────────────────────────────────

pub struct App {
    state: AppState,
    config: Config,

    catalog_list: CatalogList,
    channel_list: ChannelList,
    player_panel: PlayerPanel,

    /// Owned playback session.  Replacing or clearing this handle is what
    /// disposes the previous player process, so two sessions never coexist.
    player: Option<MpvPlayer>,

    /// Monotonic fetch tag.  A result carrying an older tag is stale — the
    /// user navigated away or opened another playlist — and is discarded.
    fetch_generation: u64,

    msg_tx: Option<mpsc::Sender<AppMessage>>,
    should_quit: bool,
}

impl App {
    pub fn new(config: Config, catalog: Vec<Country>) -> Self {
        Self {
            state: AppState::new(catalog),
            config,
            catalog_list: CatalogList::new(),
            channel_list: ChannelList::new(),
            player_panel: PlayerPanel::new(),
            player: None,
            fetch_generation: 0,
            msg_tx: None,
            should_quit: false,
        }
    }

    // ── Main run loop ─────────────────────────────────────────────────────────

    pub async fn run(mut self) -> anyhow::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let (tx, mut rx) = mpsc::channel::<AppMessage>(256);
        self.msg_tx = Some(tx.clone());

        // Background task: keyboard events.
        let event_tx = tx.clone();
        tokio::task::spawn_blocking(move || loop {
            match event::read() {
                Ok(ev) => {
                    if event_tx.blocking_send(AppMessage::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            }
        });

        info!("zapper ready");
        loop {
            terminal.draw(|f| self.draw(f))?;
            if self.should_quit {
                break;
            }
            match rx.recv().await {
                Some(msg) => self.handle_message(msg).await,
                None => break,
            }
        }

        // Dispose the player before giving the terminal back.
        self.player.take();

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    // ── Event handling ────────────────────────────────────────────────────────

    async fn handle_message(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::Event(Event::Key(key)) => self.handle_key(key).await,
            AppMessage::Event(_) => {}
            AppMessage::PlaylistFetched { generation, result } => {
                if generation != self.fetch_generation {
                    debug!("fetch: discarding stale result (gen {})", generation);
                    return;
                }
                self.state.loading = false;
                match result {
                    Ok(text) => {
                        let channels = parse_playlist(&text);
                        info!("playlist parsed: {} channels", channels.len());
                        self.state.nav = Some(NavigationState::new(channels));
                    }
                    Err(e) => {
                        warn!("fetch: {}", e);
                        self.state.error_message =
                            Some("Failed to load playlist channels.".to_string());
                        self.state.nav = Some(NavigationState::new(Vec::new()));
                    }
                }
            }
        }
    }

    async fn handle_key(&mut self, key: KeyEvent) {
        let actions = match self.state.view {
            View::Catalog => self.catalog_list.handle_key(key, &self.state),
            View::Channels => self.channel_list.handle_key(key, &self.state),
            View::Player => self.player_panel.handle_key(key, &self.state),
        };
        for action in actions {
            self.dispatch(action).await;
        }
    }

    /// Apply an action, then offer it to every view; follow-up actions are
    /// processed breadth-first.
    async fn dispatch(&mut self, action: Action) {
        let mut queue = VecDeque::from([action]);
        while let Some(action) = queue.pop_front() {
            self.apply(&action).await;
            queue.extend(self.catalog_list.on_action(&action, &self.state));
            queue.extend(self.channel_list.on_action(&action, &self.state));
            queue.extend(self.player_panel.on_action(&action, &self.state));
        }
    }

    async fn apply(&mut self, action: &Action) {
        match action {
            Action::OpenPlaylist(playlist) => {
                info!("opening playlist '{}'", playlist.name);
                self.state.view = View::Channels;
                self.state.selected_playlist = Some(playlist.clone());
                self.state.loading = true;
                self.state.error_message = None;
                self.state.nav = None;
                self.spawn_fetch(playlist.url.clone());
            }
            Action::ChooseChannel(channel) => {
                if let Some(nav) = self.state.nav.as_mut() {
                    nav.select_channel(channel);
                }
                self.start_playback(channel.clone()).await;
                self.state.view = View::Player;
            }
            Action::SearchChanged(term) => {
                if let Some(nav) = self.state.nav.as_mut() {
                    nav.set_search_term(term);
                }
            }
            Action::CommandChanged(text) => {
                if let Some(nav) = self.state.nav.as_mut() {
                    nav.set_command(text);
                }
            }
            Action::SubmitCommand => {
                let effect = match self.state.nav.as_mut() {
                    Some(nav) => nav.submit_command(),
                    None => CommandEffect::None,
                };
                self.apply_effect(effect).await;
            }
            Action::CopyToClipboard(text) => self.copy_to_clipboard(text),
            Action::LeaveChannels => {
                self.state.view = View::Catalog;
                self.state.selected_playlist = None;
                self.state.loading = false;
                self.state.error_message = None;
                self.state.nav = None;
                // Invalidate any in-flight fetch.
                self.fetch_generation += 1;
            }
            Action::LeavePlayer => self.exit_player(),
            Action::Quit => self.should_quit = true,
        }
    }

    async fn apply_effect(&mut self, effect: CommandEffect) {
        match effect {
            CommandEffect::Select(channel) => self.start_playback(channel).await,
            CommandEffect::Resume => {
                if let Some(player) = &self.player {
                    player.resume().await;
                    self.state.paused = false;
                }
            }
            CommandEffect::Pause => {
                if let Some(player) = &self.player {
                    player.pause().await;
                    self.state.paused = true;
                }
            }
            CommandEffect::Exit => self.exit_player(),
            CommandEffect::None => {}
        }
    }

    // ── Playback lifecycle ────────────────────────────────────────────────────

    /// Dispose the current session, then start `channel`.  A start failure is
    /// logged and noted in the status line; selection is left as-is.
    async fn start_playback(&mut self, channel: Channel) {
        self.player.take();
        match MpvPlayer::start(&self.config.player, &channel.url).await {
            Ok(player) => {
                self.player = Some(player);
                self.state.paused = false;
                self.state.last_log = Some(format!("tuned to {}", channel.name));
            }
            Err(e) => {
                error!("player: {:#}", e);
                self.state.last_log = Some("playback failed — see log".to_string());
            }
        }
        self.state.now_playing = Some(channel);
    }

    fn exit_player(&mut self) {
        self.player.take();
        self.state.now_playing = None;
        self.state.paused = false;
        self.state.view = View::Channels;
    }

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn spawn_fetch(&mut self, url: String) {
        self.fetch_generation += 1;
        let generation = self.fetch_generation;
        let timeout = Duration::from_secs(self.config.fetch.timeout_secs);
        let Some(tx) = self.msg_tx.clone() else {
            return;
        };
        tokio::spawn(async move {
            let result = fetch::fetch_playlist(&url, timeout)
                .await
                .map_err(|e| e.to_string());
            let _ = tx
                .send(AppMessage::PlaylistFetched { generation, result })
                .await;
        });
    }

    fn copy_to_clipboard(&mut self, text: &str) {
        match arboard::Clipboard::new().and_then(|mut cb| cb.set_text(text.to_string())) {
            Ok(()) => self.state.last_log = Some("url copied to clipboard".to_string()),
            Err(e) => warn!("clipboard: {}", e),
        }
    }

    // ── Render ────────────────────────────────────────────────────────────────

    fn draw(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(frame.area());

        match self.state.view {
            View::Catalog => self.catalog_list.draw(frame, chunks[0], &self.state),
            View::Channels => self.channel_list.draw(frame, chunks[0], &self.state),
            View::Player => self.player_panel.draw(frame, chunks[0], &self.state),
        }

        let message = self
            .state
            .error_message
            .as_deref()
            .or(self.state.last_log.as_deref());
        status_bar::draw_log_bar(
            frame,
            chunks[1],
            message,
            self.state.error_message.is_some(),
        );
        status_bar::draw_keys_bar(frame, chunks[2], self.state.view, self.input_mode());
    }

    fn input_mode(&self) -> InputMode {
        match self.state.view {
            View::Player => InputMode::Command,
            View::Catalog if self.catalog_list.is_filter_active() => InputMode::Filter,
            View::Channels if self.channel_list.is_search_active() => InputMode::Filter,
            _ => InputMode::Normal,
        }
    }
}
