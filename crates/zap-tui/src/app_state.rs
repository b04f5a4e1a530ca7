//! AppState — shared read-only data passed to every view during render and
//! event handling.  The App event-loop is the only writer.

use zap_core::catalog::{Country, PlaylistRef};
use zap_core::nav::NavigationState;
use zap_core::playlist::Channel;

/// Which screen is active.  The flow is Catalog → Channels → Player and back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Catalog,
    Channels,
    Player,
}

pub struct AppState {
    pub view: View,

    /// The playlist catalog, consumed read-only.
    pub catalog: Vec<Country>,

    /// The playlist whose channels are loaded (or loading).
    pub selected_playlist: Option<PlaylistRef>,
    /// A playlist fetch is in flight.
    pub loading: bool,
    /// One-shot view-level message ("failed to load…"), shown until the next
    /// playlist is opened.
    pub error_message: Option<String>,

    /// Navigation core for the loaded channel list.  `None` until a fetch
    /// completes; dropped when the user leaves the channel list.
    pub nav: Option<NavigationState>,

    /// The channel the player is tuned to.
    pub now_playing: Option<Channel>,
    pub paused: bool,

    /// Last status-bar message.
    pub last_log: Option<String>,
}

impl AppState {
    pub fn new(catalog: Vec<Country>) -> Self {
        Self {
            view: View::Catalog,
            catalog,
            selected_playlist: None,
            loading: false,
            error_message: None,
            nav: None,
            now_playing: None,
            paused: false,
            last_log: None,
        }
    }

    /// Channels currently eligible for selection, after search narrowing.
    pub fn active_channels(&self) -> &[Channel] {
        self.nav.as_ref().map(|n| n.active()).unwrap_or(&[])
    }
}
