//! End-to-end exercise of the public API: parse a playlist document, then
//! drive channel selection through the command surface the way the UI does.

use zap_core::nav::{CommandEffect, NavigationState};
use zap_core::playlist::parse_playlist;

const PLAYLIST: &str = concat!(
    "#EXTM3U\n",
    "#EXTINF:-1 tvg-logo=\"http://logos/one.png\" group-title=\"News\",World One\n",
    "http://stream/one\n",
    "#EXTINF:-1 group-title=\"Sport\",Kickoff TV\n",
    "http://stream/kickoff\n",
    "#EXTINF:-1,Broken Entry\n",
    "#EXTINF:-1 group-title=\"sport\",Extra Time\n",
    "http://stream/extra\n",
    "#EXTINF:-1,Night Owl\n",
    "http://stream/owl\n",
);

#[test]
fn test_parse_then_zap_through_channels() {
    let channels = parse_playlist(PLAYLIST);
    assert_eq!(channels.len(), 4);
    assert!(channels.iter().all(|c| !c.url.is_empty()));
    // "Broken Entry" had no URL line; ids stay dense over emitted entries.
    let ids: Vec<usize> = channels.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);

    let mut nav = NavigationState::new(channels);

    // First "next" with nothing selected tunes the first channel.
    match nav.interpret("next") {
        CommandEffect::Select(ch) => assert_eq!(ch.url, "http://stream/one"),
        other => panic!("expected Select, got {other:?}"),
    }

    // Jump directly by number, then wrap off the end.
    nav.interpret("4");
    match nav.interpret("next") {
        CommandEffect::Select(ch) => assert_eq!(ch.name, "World One"),
        other => panic!("expected Select, got {other:?}"),
    }

    // Out-of-range and garbage input change nothing.
    assert_eq!(nav.interpret("5"), CommandEffect::None);
    assert_eq!(nav.interpret("louder"), CommandEffect::None);
    assert_eq!(nav.selected(), Some(0));
}

#[test]
fn test_search_narrowing_redirects_navigation() {
    let mut nav = NavigationState::new(parse_playlist(PLAYLIST));
    nav.interpret("1");

    // Case-insensitive over the group label; both sport channels match.
    nav.set_search_term("SPORT");
    assert_eq!(nav.active().len(), 2);

    // Navigation now cycles the narrowed list only.
    match nav.interpret("next") {
        CommandEffect::Select(ch) => assert_eq!(ch.name, "Extra Time"),
        other => panic!("expected Select, got {other:?}"),
    }
    match nav.interpret("next") {
        CommandEffect::Select(ch) => assert_eq!(ch.name, "Kickoff TV"),
        other => panic!("expected Select, got {other:?}"),
    }

    // Clearing the term restores the full parse order.
    nav.set_search_term("");
    assert_eq!(nav.active().len(), 4);
    assert_eq!(nav.active()[0].name, "World One");
}

#[test]
fn test_player_commands_pass_through_as_effects() {
    let mut nav = NavigationState::new(parse_playlist(PLAYLIST));
    nav.interpret("2");
    assert_eq!(nav.interpret("pause"), CommandEffect::Pause);
    assert_eq!(nav.interpret("play"), CommandEffect::Resume);
    assert_eq!(nav.interpret("back"), CommandEffect::Exit);
    // Selection is untouched by playback commands.
    assert_eq!(nav.selected(), Some(1));
}
