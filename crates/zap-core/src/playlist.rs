//! Playlist document parsing.
//!
//! A playlist is plain newline-delimited text.  Each channel is declared by an
//! `#EXTINF:` metadata line followed by its stream URL on the next line; every
//! other `#`-prefixed line is ignorable.  Documents in the wild are
//! inconsistently formatted, so the parser is best-effort: entries with no
//! usable URL line are dropped, never reported as errors.

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Marker that opens a channel metadata line.
pub const EXTINF_PREFIX: &str = "#EXTINF:";

/// Display name used when a metadata line carries no comma-delimited name.
pub const FALLBACK_NAME: &str = "Unknown Channel";

/// Group label used when a metadata line carries no `group-title` attribute.
pub const FALLBACK_GROUP: &str = "Uncategorized";

/// One channel extracted from a playlist document.
///
/// `id` is the 1-based position among *emitted* channels of a single parse,
/// stable only within that parse result.  `url` is always non-empty — the
/// parser never emits a channel without one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub id: usize,
    pub name: String,
    pub url: String,
    pub logo: Option<String>,
    pub group: String,
}

/// Parse a playlist document into its channel sequence.
///
/// Single left-to-right scan.  An `#EXTINF:` line opens an entry; the line
/// immediately after it is the URL iff it is non-empty after trimming and is
/// not itself a comment line.  A consumed URL line is never re-inspected as a
/// metadata candidate.  Malformed entries are skipped silently; an empty or
/// metadata-free document yields an empty vec.  Never fails.
pub fn parse_playlist(text: &str) -> Vec<Channel> {
    // Attribute patterns are literal; a failed compile degrades to
    // "attribute absent" rather than aborting the parse.
    let logo_re = Regex::new(r#"tvg-logo="([^"]*)""#).ok();
    let group_re = Regex::new(r#"group-title="([^"]*)""#).ok();

    let lines: Vec<&str> = text.lines().collect();
    let mut channels = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let Some(info) = lines[i].strip_prefix(EXTINF_PREFIX) else {
            i += 1;
            continue;
        };

        let url = lines.get(i + 1).map(|l| l.trim()).unwrap_or("");
        if url.is_empty() || url.starts_with('#') {
            // Metadata with no usable URL line: drop the entry and resume at
            // the very next line, which may itself open a new entry.
            debug!(line = i + 1, "playlist entry without a stream url, dropped");
            i += 1;
            continue;
        }

        let name = match info.rfind(',') {
            Some(pos) => info[pos + 1..].trim().to_string(),
            None => FALLBACK_NAME.to_string(),
        };

        channels.push(Channel {
            id: channels.len() + 1,
            name,
            url: url.to_string(),
            logo: capture_attr(&logo_re, info),
            group: capture_attr(&group_re, info).unwrap_or_else(|| FALLBACK_GROUP.to_string()),
        });

        // Skip past the consumed URL line.
        i += 2;
    }

    channels
}

fn capture_attr(re: &Option<Regex>, info: &str) -> Option<String> {
    re.as_ref()
        .and_then(|re| re.captures(info))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_metadata_line() {
        let text = "#EXTINF:-1 tvg-logo=\"L\" group-title=\"G\",Name\nhttp://x";
        let channels = parse_playlist(text);
        assert_eq!(channels.len(), 1);
        let ch = &channels[0];
        assert_eq!(ch.id, 1);
        assert_eq!(ch.name, "Name");
        assert_eq!(ch.url, "http://x");
        assert_eq!(ch.logo.as_deref(), Some("L"));
        assert_eq!(ch.group, "G");
    }

    #[test]
    fn test_missing_attributes_take_defaults() {
        let channels = parse_playlist("#EXTINF:-1,Plain\nhttp://x");
        assert_eq!(channels[0].logo, None);
        assert_eq!(channels[0].group, FALLBACK_GROUP);
    }

    #[test]
    fn test_no_comma_falls_back_to_placeholder_name() {
        let channels = parse_playlist("#EXTINF:-1 tvg-logo=\"L\"\nhttp://x");
        assert_eq!(channels[0].name, FALLBACK_NAME);
    }

    #[test]
    fn test_name_is_text_after_last_comma() {
        let channels = parse_playlist("#EXTINF:-1 group-title=\"a,b\",  Real Name \nhttp://x");
        assert_eq!(channels[0].name, "Real Name");
    }

    #[test]
    fn test_metadata_followed_by_metadata_drops_first() {
        let text = "#EXTINF:-1,OnlyName\n#EXTINF:-1,NextOne\nhttp://y";
        let channels = parse_playlist(text);
        assert_eq!(channels.len(), 1);
        assert_eq!(channels[0].name, "NextOne");
        assert_eq!(channels[0].url, "http://y");
        assert_eq!(channels[0].id, 1);
    }

    #[test]
    fn test_metadata_followed_by_comment_drops_entry() {
        let text = "#EXTINF:-1,A\n# some comment\nhttp://x";
        assert!(parse_playlist(text).is_empty());
    }

    #[test]
    fn test_metadata_at_end_of_input_drops_entry() {
        assert!(parse_playlist("#EXTM3U\n#EXTINF:-1,Last").is_empty());
    }

    #[test]
    fn test_blank_url_line_drops_entry() {
        assert!(parse_playlist("#EXTINF:-1,A\n   \nhttp://x").is_empty());
    }

    #[test]
    fn test_ids_count_emitted_entries_only() {
        let text = concat!(
            "#EXTM3U\n",
            "#EXTINF:-1,First\nhttp://1\n",
            "#EXTINF:-1,Dropped\n",
            "#EXTINF:-1,Second\nhttp://2\n",
        );
        let channels = parse_playlist(text);
        assert_eq!(channels.len(), 2);
        assert_eq!(channels[0].id, 1);
        assert_eq!(channels[1].id, 2);
        assert_eq!(channels[1].name, "Second");
    }

    #[test]
    fn test_consumed_url_line_is_not_reinterpreted() {
        // The URL of the first entry is followed directly by new metadata;
        // the scan must resume there and not swallow it.
        let text = "#EXTINF:-1,A\nhttp://a\n#EXTINF:-1,B\nhttp://b";
        let channels = parse_playlist(text);
        assert_eq!(channels.len(), 2);
        assert_eq!(channels[1].url, "http://b");
    }

    #[test]
    fn test_empty_and_metadata_free_input() {
        assert!(parse_playlist("").is_empty());
        assert!(parse_playlist("#EXTM3U\n# comment\nhttp://stray").is_empty());
    }

    #[test]
    fn test_every_emitted_channel_has_a_url() {
        let text = concat!(
            "#EXTINF:-1,A\nhttp://a\n",
            "#EXTINF:-1,B\n\n",
            "#EXTINF:-1,C\nhttp://c\n",
            "garbage line\n",
            "#EXTINF:-1,D",
        );
        let channels = parse_playlist(text);
        assert!(channels.iter().all(|c| !c.url.is_empty()));
        assert_eq!(channels.len(), 2);
    }
}
