//! CatalogList — the country-grouped playlist browser (first view).

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

use zap_core::catalog::{filter_catalog, Country, PlaylistRef};

use crate::{
    action::Action,
    app_state::AppState,
    component::Component,
    theme::{C_COUNTRY, C_GROUP, C_MUTED, C_PRIMARY, C_SECONDARY, C_SELECTION_BG},
    widgets::{
        list_cursor::ListCursor,
        pane_chrome::{pane_chrome, Badge},
        text_prompt::{PromptAction, TextPrompt},
    },
};

/// One selectable row: a playlist together with its country grouping.
struct CatalogRow {
    country: String,
    flag: String,
    playlist: PlaylistRef,
}

pub struct CatalogList {
    cursor: ListCursor,
    filter: TextPrompt,
    filter_term: String,
}

impl CatalogList {
    pub fn new() -> Self {
        Self {
            cursor: ListCursor::new(),
            filter: TextPrompt::new("/", "playlist, country, category…"),
            filter_term: String::new(),
        }
    }

    pub fn is_filter_active(&self) -> bool {
        self.filter.is_active()
    }

    /// Flatten the (filtered) catalog into selectable rows, document order.
    fn rows(&self, state: &AppState) -> Vec<CatalogRow> {
        filter_catalog(&state.catalog, &self.filter_term)
            .into_iter()
            .flat_map(|country| {
                let Country {
                    name,
                    flag,
                    playlists,
                } = country;
                playlists.into_iter().map(move |playlist| CatalogRow {
                    country: name.clone(),
                    flag: flag.clone(),
                    playlist,
                })
            })
            .collect()
    }
}

impl Component for CatalogList {
    fn handle_key(&mut self, key: KeyEvent, state: &AppState) -> Vec<Action> {
        if key.kind == KeyEventKind::Release {
            return vec![];
        }

        let rows = self.rows(state);

        if self.filter.is_active() {
            match key.code {
                KeyCode::Up => {
                    self.cursor.select_up(1);
                    return vec![];
                }
                KeyCode::Down => {
                    self.cursor.select_down(1, rows.len());
                    return vec![];
                }
                _ => {}
            }
            match self.filter.handle_key(key) {
                PromptAction::Changed(q) => {
                    self.filter_term = q;
                    self.cursor.select_first();
                }
                PromptAction::Submitted => self.filter.deactivate(),
                PromptAction::Cancelled => self.filter_term.clear(),
                PromptAction::None => {}
            }
            return vec![];
        }

        let step = if key.modifiers.contains(KeyModifiers::SHIFT) {
            5
        } else {
            1
        };
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.cursor.select_up(step),
            KeyCode::Down | KeyCode::Char('j') => self.cursor.select_down(step, rows.len()),
            KeyCode::PageUp => self.cursor.select_up(10),
            KeyCode::PageDown => self.cursor.select_down(10, rows.len()),
            KeyCode::Home | KeyCode::Char('g') => self.cursor.select_first(),
            KeyCode::End | KeyCode::Char('G') => self.cursor.select_last(rows.len()),

            KeyCode::Enter => {
                if let Some(row) = rows.get(self.cursor.selected) {
                    return vec![Action::OpenPlaylist(row.playlist.clone())];
                }
            }

            KeyCode::Char('/') => self.filter.activate(),

            KeyCode::Char('q') => return vec![Action::Quit],

            _ => {}
        }

        vec![]
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let rows = self.rows(state);
        self.cursor.clamp(rows.len());

        let count = format!("{} playlists", rows.len());
        let block = pane_chrome(
            "playlists",
            true,
            Some(Badge {
                text: &count,
                color: C_SECONDARY,
            }),
        );
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if state.catalog.is_empty() {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    "  no catalog loaded",
                    Style::default().fg(C_MUTED),
                )),
                inner,
            );
            return;
        }

        if rows.is_empty() {
            frame.render_widget(
                Paragraph::new(Span::styled(
                    "  no playlists match filter",
                    Style::default().fg(C_MUTED),
                )),
                inner,
            );
        }

        let content_h = inner.height as usize;
        self.cursor.ensure_visible(content_h);

        let mut prev_country: Option<&str> = None;
        let items: Vec<ListItem> = self
            .cursor
            .visible_range(rows.len(), content_h)
            .map(|idx| {
                let row = &rows[idx];
                let is_selected = idx == self.cursor.selected;

                // Show the country label on its first visible row only.
                let show_country = prev_country != Some(row.country.as_str());
                prev_country = Some(row.country.as_str());

                let name_style = if is_selected {
                    Style::default().fg(C_PRIMARY).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(C_SECONDARY)
                };

                let mut spans: Vec<Span> = Vec::new();
                if show_country {
                    spans.push(Span::styled(
                        format!(" {} {:<14}", row.flag, row.country),
                        Style::default().fg(C_COUNTRY),
                    ));
                } else {
                    spans.push(Span::raw(" ".repeat(row.flag.chars().count() + 17)));
                }
                spans.push(Span::styled(row.playlist.name.clone(), name_style));
                if !row.playlist.category.is_empty() {
                    spans.push(Span::styled("  · ", Style::default().fg(C_MUTED)));
                    spans.push(Span::styled(
                        row.playlist.category.clone(),
                        Style::default().fg(C_GROUP),
                    ));
                }

                let item_bg = if is_selected {
                    Style::default().bg(C_SELECTION_BG)
                } else {
                    Style::default()
                };
                ListItem::new(Line::from(spans)).style(item_bg)
            })
            .collect();

        frame.render_widget(List::new(items), inner);

        if self.filter.is_active() {
            let filter_area = Rect {
                y: inner.y + inner.height.saturating_sub(1),
                height: 1,
                ..inner
            };
            self.filter.draw(frame, filter_area);
        }
    }
}
