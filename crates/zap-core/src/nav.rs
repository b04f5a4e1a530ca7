//! Channel navigation and command interpretation.
//!
//! `NavigationState` is a plain value object: the UI layer owns the single
//! mutable instance (created when a playlist's channels finish loading,
//! dropped on exit) and applies the [`CommandEffect`] each transition returns.
//! All transitions run synchronously to completion; nothing here touches the
//! player or the terminal.

use crate::playlist::Channel;

/// The fixed command vocabulary of the player's free-text field.
///
/// Free text is parsed into a variant first, then matched exhaustively —
/// numeric selection is the fallback case, anything else is `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Next,
    Prev,
    Play,
    Pause,
    Stop,
    Back,
    /// 1-based channel number as the user typed it.
    Goto(usize),
    Unknown,
}

impl Command {
    /// Parse submitted text.  Matching is case-insensitive and ignores
    /// surrounding whitespace; `previous` is an alias for `prev`.
    pub fn parse(raw: &str) -> Self {
        let cmd = raw.trim().to_lowercase();
        match cmd.as_str() {
            "next" => Self::Next,
            "prev" | "previous" => Self::Prev,
            "play" => Self::Play,
            "pause" => Self::Pause,
            "stop" => Self::Stop,
            "back" => Self::Back,
            other => match other.parse::<usize>() {
                Ok(n) if n > 0 => Self::Goto(n),
                _ => Self::Unknown,
            },
        }
    }
}

/// What the caller must do after a command was interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandEffect {
    /// Start playback of this channel.  The caller disposes any current
    /// playback session before starting the new one.
    Select(Channel),
    /// Resume playback on the existing player, if one exists.  A resume
    /// failure is logged by the caller, never surfaced to the user.
    Resume,
    /// Pause playback on the existing player, if one exists.
    Pause,
    /// Tear down the player and leave the player context.
    Exit,
    /// Unrecognized or out-of-range input: deliberate no-op.
    None,
}

/// Selection state over a parsed channel list.
///
/// `active` is the list currently eligible for selection — the full parse
/// result, or the search-narrowed subsequence in parse order.  `selected`
/// indexes into `active`; `None` means no selection.  Narrowing the search
/// never moves `selected`: the index is authoritative, and the wrap
/// arithmetic of `next`/`prev` is computed over the current active length,
/// so a stale index re-enters range on the first navigation command.
#[derive(Debug, Clone, Default)]
pub struct NavigationState {
    channels: Vec<Channel>,
    active: Vec<Channel>,
    selected: Option<usize>,
    search: String,
    command: String,
}

impl NavigationState {
    pub fn new(channels: Vec<Channel>) -> Self {
        Self {
            active: channels.clone(),
            channels,
            selected: None,
            search: String::new(),
            command: String::new(),
        }
    }

    /// The list currently eligible for selection.
    pub fn active(&self) -> &[Channel] {
        &self.active
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_channel(&self) -> Option<&Channel> {
        self.selected.and_then(|i| self.active.get(i))
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// In-progress typed command text.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Mirror the command field's current text into the state.
    pub fn set_command(&mut self, text: &str) {
        self.command = text.to_string();
    }

    /// Recompute the active list for `term`: channels whose name or group
    /// contains it case-insensitively, in parse order.  An empty term
    /// restores the full list.  `selected` is left untouched.
    pub fn set_search_term(&mut self, term: &str) {
        self.search = term.to_string();
        let needle = term.to_lowercase();
        if needle.is_empty() {
            self.active = self.channels.clone();
        } else {
            self.active = self
                .channels
                .iter()
                .filter(|c| {
                    c.name.to_lowercase().contains(&needle)
                        || c.group.to_lowercase().contains(&needle)
                })
                .cloned()
                .collect();
        }
    }

    /// Select `channel` by resolving its position in the current active list
    /// by URL value-equality.  Returns the stored position; `None` when the
    /// channel is absent from the active list.
    pub fn select_channel(&mut self, channel: &Channel) -> Option<usize> {
        self.selected = self.active.iter().position(|c| c.url == channel.url);
        self.selected
    }

    /// Submit the buffered command text.  The buffer is cleared in all cases,
    /// including no-match.
    pub fn submit_command(&mut self) -> CommandEffect {
        let raw = std::mem::take(&mut self.command);
        self.interpret(&raw)
    }

    /// Interpret one submitted command.  Clears the command buffer regardless
    /// of recognition outcome.
    pub fn interpret(&mut self, raw: &str) -> CommandEffect {
        self.command.clear();
        match Command::parse(raw) {
            Command::Next => self.step_forward(),
            Command::Prev => self.step_back(),
            Command::Play => CommandEffect::Resume,
            Command::Pause => CommandEffect::Pause,
            Command::Stop | Command::Back => CommandEffect::Exit,
            Command::Goto(n) if n <= self.active.len() => {
                self.selected = Some(n - 1);
                CommandEffect::Select(self.active[n - 1].clone())
            }
            Command::Goto(_) | Command::Unknown => CommandEffect::None,
        }
    }

    /// Circular `next`.  With no selection the starting point is the slot
    /// before the first channel, so `next` lands on index 0.
    fn step_forward(&mut self) -> CommandEffect {
        let len = self.active.len();
        if len == 0 {
            return CommandEffect::None;
        }
        let next = match self.selected {
            Some(i) => (i + 1) % len,
            None => 0,
        };
        self.selected = Some(next);
        CommandEffect::Select(self.active[next].clone())
    }

    /// Circular `prev`.  With no selection, `prev` lands on the last index.
    fn step_back(&mut self) -> CommandEffect {
        let len = self.active.len();
        if len == 0 {
            return CommandEffect::None;
        }
        let prev = match self.selected {
            Some(i) => (i + len - 1) % len,
            None => len - 1,
        };
        self.selected = Some(prev);
        CommandEffect::Select(self.active[prev].clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channel(id: usize, name: &str, group: &str) -> Channel {
        Channel {
            id,
            name: name.to_string(),
            url: format!("http://stream/{id}"),
            logo: None,
            group: group.to_string(),
        }
    }

    fn nav(n: usize) -> NavigationState {
        NavigationState::new((1..=n).map(|i| channel(i, &format!("ch{i}"), "news")).collect())
    }

    #[test]
    fn test_command_vocabulary() {
        assert_eq!(Command::parse("next"), Command::Next);
        assert_eq!(Command::parse("prev"), Command::Prev);
        assert_eq!(Command::parse("previous"), Command::Prev);
        assert_eq!(Command::parse("play"), Command::Play);
        assert_eq!(Command::parse("pause"), Command::Pause);
        assert_eq!(Command::parse("stop"), Command::Stop);
        assert_eq!(Command::parse("back"), Command::Back);
        assert_eq!(Command::parse("7"), Command::Goto(7));
    }

    #[test]
    fn test_command_parse_is_forgiving_about_case_and_whitespace() {
        assert_eq!(Command::parse("  NEXT "), Command::Next);
        assert_eq!(Command::parse("Previous"), Command::Prev);
        assert_eq!(Command::parse(" 3 "), Command::Goto(3));
    }

    #[test]
    fn test_command_parse_rejects_non_positive_and_garbage() {
        assert_eq!(Command::parse("0"), Command::Unknown);
        assert_eq!(Command::parse("-2"), Command::Unknown);
        assert_eq!(Command::parse("2.5"), Command::Unknown);
        assert_eq!(Command::parse("louder"), Command::Unknown);
        assert_eq!(Command::parse(""), Command::Unknown);
    }

    #[test]
    fn test_next_from_no_selection_lands_on_first() {
        let mut s = nav(4);
        assert_eq!(s.interpret("next"), CommandEffect::Select(s.active()[0].clone()));
        assert_eq!(s.selected(), Some(0));
    }

    #[test]
    fn test_prev_from_no_selection_lands_on_last() {
        let mut s = nav(4);
        s.interpret("prev");
        assert_eq!(s.selected(), Some(3));
    }

    #[test]
    fn test_next_wraps_from_last_to_first() {
        let mut s = nav(3);
        s.interpret("3");
        s.interpret("next");
        assert_eq!(s.selected(), Some(0));
    }

    #[test]
    fn test_prev_wraps_from_first_to_last() {
        let mut s = nav(3);
        s.interpret("1");
        s.interpret("prev");
        assert_eq!(s.selected(), Some(2));
    }

    #[test]
    fn test_next_cycles_back_to_start_after_full_lap() {
        let mut s = nav(5);
        s.interpret("2");
        for _ in 0..5 {
            s.interpret("next");
        }
        assert_eq!(s.selected(), Some(1));
    }

    #[test]
    fn test_prev_is_the_inverse_of_next() {
        for start in 1..=4 {
            let mut s = nav(4);
            s.interpret(&start.to_string());
            let before = s.selected();
            s.interpret("next");
            s.interpret("prev");
            assert_eq!(s.selected(), before);
        }
    }

    #[test]
    fn test_next_and_prev_on_empty_list_are_noops() {
        let mut s = nav(0);
        assert_eq!(s.interpret("next"), CommandEffect::None);
        assert_eq!(s.interpret("prev"), CommandEffect::None);
        assert_eq!(s.selected(), None);
    }

    #[test]
    fn test_numeric_selection_is_one_based() {
        let mut s = nav(3);
        let effect = s.interpret("2");
        assert_eq!(effect, CommandEffect::Select(s.active()[1].clone()));
        assert_eq!(s.selected(), Some(1));
    }

    #[test]
    fn test_out_of_range_numbers_leave_selection_unchanged() {
        let mut s = nav(3);
        s.interpret("2");
        for bad in ["0", "4", "99", "nope"] {
            assert_eq!(s.interpret(bad), CommandEffect::None);
            assert_eq!(s.selected(), Some(1));
        }
    }

    #[test]
    fn test_buffer_clears_on_every_submission() {
        let mut s = nav(3);
        s.set_command("gibberish");
        assert_eq!(s.submit_command(), CommandEffect::None);
        assert_eq!(s.command(), "");

        s.set_command("next");
        s.submit_command();
        assert_eq!(s.command(), "");
    }

    #[test]
    fn test_play_pause_stop_back_effects() {
        let mut s = nav(2);
        assert_eq!(s.interpret("play"), CommandEffect::Resume);
        assert_eq!(s.interpret("pause"), CommandEffect::Pause);
        assert_eq!(s.interpret("stop"), CommandEffect::Exit);
        assert_eq!(s.interpret("back"), CommandEffect::Exit);
    }

    #[test]
    fn test_search_narrows_by_name_and_group_case_insensitively() {
        let mut s = NavigationState::new(vec![
            channel(1, "Alpha News", "news"),
            channel(2, "Beta Sport", "sport"),
            channel(3, "Gamma", "SPORT extra"),
        ]);
        s.set_search_term("SPORT");
        assert_eq!(s.active().len(), 2);
        assert_eq!(s.active()[0].id, 2);
        assert_eq!(s.active()[1].id, 3);

        s.set_search_term("");
        assert_eq!(s.active().len(), 3);
    }

    #[test]
    fn test_search_preserves_parse_order() {
        let mut s = NavigationState::new(vec![
            channel(1, "b one", "g"),
            channel(2, "a two", "g"),
            channel(3, "b three", "g"),
        ]);
        s.set_search_term("b");
        let ids: Vec<usize> = s.active().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_search_does_not_move_selection() {
        let mut s = nav(5);
        s.interpret("4");
        s.set_search_term("ch1");
        assert_eq!(s.selected(), Some(3));
    }

    #[test]
    fn test_navigation_after_narrowing_stays_in_bounds() {
        let mut s = nav(6);
        s.interpret("6");
        // Narrow to a single channel; the stored index is now past the end.
        s.set_search_term("ch2");
        assert_eq!(s.active().len(), 1);
        s.interpret("next");
        assert_eq!(s.selected(), Some(0));
        s.interpret("prev");
        assert_eq!(s.selected(), Some(0));
    }

    #[test]
    fn test_select_channel_resolves_by_url_in_active_list() {
        let mut s = nav(4);
        let third = s.active()[2].clone();
        assert_eq!(s.select_channel(&third), Some(2));

        s.set_search_term("ch1");
        // ch3 is no longer in the active list.
        assert_eq!(s.select_channel(&third), None);
    }
}
