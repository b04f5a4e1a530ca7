//! ChannelList — the channel list of one fetched playlist (second view).
//!
//! The list shown here is always the navigation core's *active* list, so the
//! row numbers on screen are exactly the numbers the player command field
//! accepts.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::{
    action::Action,
    app_state::AppState,
    component::Component,
    theme::{
        C_GROUP, C_LOADING, C_MUTED, C_PLAYING, C_PRIMARY, C_SECONDARY, C_SELECTION_BG,
    },
    widgets::{
        list_cursor::ListCursor,
        pane_chrome::{pane_chrome, Badge},
        text_prompt::{PromptAction, TextPrompt},
    },
};

/// Widest a channel name is allowed to render before being clipped.
const NAME_COL_WIDTH: usize = 48;

pub struct ChannelList {
    cursor: ListCursor,
    search: TextPrompt,
}

impl ChannelList {
    pub fn new() -> Self {
        Self {
            cursor: ListCursor::new(),
            search: TextPrompt::new("/", "channel name or group…"),
        }
    }

    pub fn is_search_active(&self) -> bool {
        self.search.is_active()
    }

    fn reset(&mut self) {
        self.cursor = ListCursor::new();
        self.search.clear();
        self.search.deactivate();
    }
}

impl Component for ChannelList {
    fn handle_key(&mut self, key: KeyEvent, state: &AppState) -> Vec<Action> {
        if key.kind == KeyEventKind::Release {
            return vec![];
        }

        let len = state.active_channels().len();

        if self.search.is_active() {
            match key.code {
                KeyCode::Up => {
                    self.cursor.select_up(1);
                    return vec![];
                }
                KeyCode::Down => {
                    self.cursor.select_down(1, len);
                    return vec![];
                }
                _ => {}
            }
            return match self.search.handle_key(key) {
                PromptAction::Changed(q) => {
                    self.cursor.select_first();
                    vec![Action::SearchChanged(q)]
                }
                PromptAction::Submitted => {
                    self.search.deactivate();
                    vec![]
                }
                PromptAction::Cancelled => vec![Action::SearchChanged(String::new())],
                PromptAction::None => vec![],
            };
        }

        let step = if key.modifiers.contains(KeyModifiers::SHIFT) {
            5
        } else {
            1
        };
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.cursor.select_up(step),
            KeyCode::Down | KeyCode::Char('j') => self.cursor.select_down(step, len),
            KeyCode::PageUp => self.cursor.select_up(10),
            KeyCode::PageDown => self.cursor.select_down(10, len),
            KeyCode::Home | KeyCode::Char('g') => self.cursor.select_first(),
            KeyCode::End | KeyCode::Char('G') => self.cursor.select_last(len),

            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(ch) = state.active_channels().get(self.cursor.selected) {
                    return vec![Action::ChooseChannel(ch.clone())];
                }
            }

            KeyCode::Char('y') => {
                if let Some(ch) = state.active_channels().get(self.cursor.selected) {
                    return vec![Action::CopyToClipboard(ch.url.clone())];
                }
            }

            KeyCode::Char('/') => self.search.activate(),

            KeyCode::Esc | KeyCode::Backspace => return vec![Action::LeaveChannels],
            KeyCode::Char('q') => return vec![Action::Quit],

            _ => {}
        }

        vec![]
    }

    fn on_action(&mut self, action: &Action, _state: &AppState) -> Vec<Action> {
        match action {
            // Fresh playlist or back to catalog: cursor and search are stale.
            Action::OpenPlaylist(_) | Action::LeaveChannels => self.reset(),
            _ => {}
        }
        vec![]
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let channels = state.active_channels();
        self.cursor.clamp(channels.len());

        let title = state
            .selected_playlist
            .as_ref()
            .map(|p| p.name.as_str())
            .unwrap_or("channels");
        let count = format!("{} channels", channels.len());
        let block = pane_chrome(
            title,
            true,
            Some(Badge {
                text: &count,
                color: C_SECONDARY,
            }),
        );
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if state.loading {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    "  loading playlist channels…",
                    Style::default().fg(C_LOADING),
                )),
                inner,
            );
            return;
        }

        if let Some(msg) = &state.error_message {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    format!("  {msg}"),
                    Style::default().fg(crate::theme::C_ACCENT),
                )),
                inner,
            );
            return;
        }

        if channels.is_empty() {
            let msg = if state.nav.as_ref().is_some_and(|n| !n.search().is_empty()) {
                "  no channels match search"
            } else {
                "  no channels found in this playlist"
            };
            frame.render_widget(
                Paragraph::new(Span::styled(msg, Style::default().fg(C_MUTED))),
                inner,
            );
            return;
        }

        let content_h = inner.height as usize;
        self.cursor.ensure_visible(content_h);

        let number_width = channels.len().to_string().len().max(2);
        let items: Vec<ListItem> = self
            .cursor
            .visible_range(channels.len(), content_h)
            .map(|idx| {
                let ch = &channels[idx];
                let is_selected = idx == self.cursor.selected;
                let is_playing = state
                    .now_playing
                    .as_ref()
                    .is_some_and(|p| p.url == ch.url);

                let icon = if is_playing { "▶" } else { " " };
                let icon_color = if is_playing { C_PLAYING } else { C_MUTED };

                let name_style = if is_playing {
                    Style::default().fg(C_PLAYING).add_modifier(Modifier::BOLD)
                } else if is_selected {
                    Style::default().fg(C_PRIMARY).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(C_SECONDARY)
                };

                let mut name = ch.name.clone();
                if name.width() > NAME_COL_WIDTH {
                    name = name.chars().take(NAME_COL_WIDTH).collect::<String>() + "…";
                }

                let spans = vec![
                    Span::styled(
                        format!(" {:>number_width$} ", idx + 1),
                        Style::default().fg(C_MUTED),
                    ),
                    Span::styled(icon, Style::default().fg(icon_color)),
                    Span::raw("  "),
                    Span::styled(name, name_style),
                    Span::raw("  "),
                    Span::styled(ch.group.clone(), Style::default().fg(C_GROUP)),
                ];

                let item_bg = if is_selected {
                    Style::default().bg(C_SELECTION_BG)
                } else {
                    Style::default()
                };
                ListItem::new(Line::from(spans)).style(item_bg)
            })
            .collect();

        frame.render_widget(List::new(items), inner);

        if self.search.is_active() {
            let search_area = Rect {
                y: inner.y + inner.height.saturating_sub(1),
                height: 1,
                ..inner
            };
            self.search.draw(frame, search_area);
        }
    }
}
