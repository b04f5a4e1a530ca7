//! Action enum — all user-initiated intents flowing from views to the App.

use zap_core::catalog::PlaylistRef;
use zap_core::playlist::Channel;

/// All actions that can flow through the system.
/// Views produce Actions; the App dispatches them.
#[derive(Debug, Clone)]
pub enum Action {
    // ── Catalog ──────────────────────────────────────────────────────────────
    /// Fetch and open this playlist's channel list.
    OpenPlaylist(PlaylistRef),

    // ── Channel list ─────────────────────────────────────────────────────────
    /// Tune this channel and enter the player view.
    ChooseChannel(Channel),
    /// The channel search term changed.
    SearchChanged(String),
    CopyToClipboard(String),
    /// Leave the channel list, back to the catalog.
    LeaveChannels,

    // ── Player ───────────────────────────────────────────────────────────────
    /// The in-progress command text changed.
    CommandChanged(String),
    /// The user confirmed the typed command buffer.
    SubmitCommand,
    /// Leave the player, back to the channel list (same as the `back` command).
    LeavePlayer,

    // ── System ───────────────────────────────────────────────────────────────
    Quit,
}
