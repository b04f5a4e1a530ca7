//! PlayerPanel — the player view: now-playing info and the command field.
//!
//! Every printable key lands in the command field; it is the entire command
//! surface of the player.  The vocabulary is interpreted by the navigation
//! core — this component only edits and submits the buffer.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::{
    action::Action,
    app_state::AppState,
    component::Component,
    theme::{
        C_BADGE_LIVE, C_BADGE_PAUSED, C_GROUP, C_MUTED, C_PRIMARY, C_SECONDARY,
    },
    widgets::{
        pane_chrome::{pane_chrome, Badge},
        text_prompt::{PromptAction, TextPrompt},
    },
};

pub struct PlayerPanel {
    command: TextPrompt,
}

impl PlayerPanel {
    pub fn new() -> Self {
        let mut command = TextPrompt::new("›", "next, prev, play, pause, stop, back, or a number");
        command.activate();
        Self { command }
    }
}

impl Component for PlayerPanel {
    fn handle_key(&mut self, key: KeyEvent, _state: &AppState) -> Vec<Action> {
        if key.kind == KeyEventKind::Release {
            return vec![];
        }

        // Esc with an empty buffer leaves the player, same as `back`.
        if key.code == KeyCode::Esc && self.command.is_empty() {
            return vec![Action::LeavePlayer];
        }

        match self.command.handle_key(key) {
            PromptAction::Changed(text) => vec![Action::CommandChanged(text)],
            PromptAction::Submitted => {
                // The navigation core holds the synced buffer; it clears it on
                // submission whatever the outcome.
                self.command.clear();
                vec![Action::SubmitCommand]
            }
            PromptAction::Cancelled | PromptAction::None => vec![],
        }
    }

    fn on_action(&mut self, action: &Action, _state: &AppState) -> Vec<Action> {
        if matches!(action, Action::LeavePlayer | Action::ChooseChannel(_)) {
            self.command.clear();
            self.command.activate();
        }
        vec![]
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let badge = if state.paused {
            Badge {
                text: "PAUSED",
                color: C_BADGE_PAUSED,
            }
        } else {
            Badge {
                text: "LIVE",
                color: C_BADGE_LIVE,
            }
        };
        let block = pane_chrome("now playing", true, Some(badge));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // channel info
                Constraint::Length(1), // command prompt
                Constraint::Length(1), // hint
            ])
            .split(inner);

        let mut lines: Vec<Line> = Vec::new();
        if let Some(ch) = &state.now_playing {
            lines.push(Line::from(Span::styled(
                format!(" {}", ch.name),
                Style::default().fg(C_PRIMARY).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(vec![
                Span::raw(" "),
                Span::styled(ch.group.clone(), Style::default().fg(C_GROUP)),
            ]));
            lines.push(Line::from(Span::styled(
                format!(" {}", ch.url),
                Style::default().fg(C_MUTED),
            )));
            if let Some(logo) = &ch.logo {
                lines.push(Line::from(Span::styled(
                    format!(" logo: {logo}"),
                    Style::default().fg(C_MUTED),
                )));
            }
            lines.push(Line::default());

            let total = state.active_channels().len();
            let position = state
                .nav
                .as_ref()
                .and_then(|n| n.selected())
                .map(|i| (i + 1).to_string())
                .unwrap_or_else(|| "—".to_string());
            lines.push(Line::from(Span::styled(
                format!(" channel {position} of {total}"),
                Style::default().fg(C_SECONDARY),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                " nothing tuned",
                Style::default().fg(C_MUTED),
            )));
        }
        frame.render_widget(Paragraph::new(lines), chunks[0]);

        self.command.draw(frame, chunks[1]);

        let total = state.active_channels().len();
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!(
                    " commands: next, prev, play, pause, stop, back, or a channel number (1-{total})"
                ),
                Style::default().fg(C_MUTED),
            )),
            chunks[2],
        );
    }
}
