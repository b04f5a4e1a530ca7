//! TextPrompt — wraps tui-input for the two text surfaces of the app:
//! the `/` list filter and the player command field.

use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tui_input::{backend::crossterm::EventHandler, Input};

use crate::theme::{C_MUTED, C_PROMPT_BG, C_PROMPT_FG};

pub enum PromptAction {
    Changed(String),
    /// Enter was pressed.  The prompt itself is left untouched — the owner
    /// decides whether to clear or deactivate.
    Submitted,
    Cancelled,
    None,
}

pub struct TextPrompt {
    input: Input,
    active: bool,
    prefix: &'static str,
    placeholder: String,
}

impl TextPrompt {
    pub fn new(prefix: &'static str, placeholder: impl Into<String>) -> Self {
        Self {
            input: Input::default(),
            active: false,
            prefix,
            placeholder: placeholder.into(),
        }
    }

    pub fn activate(&mut self) {
        self.active = true;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn clear(&mut self) {
        self.input = Input::default();
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_empty(&self) -> bool {
        self.input.value().is_empty()
    }

    /// Handle a key event.
    ///
    /// Esc behaviour:
    ///   - text present: clear it and emit `Changed("")` (prompt stays open)
    ///   - already empty: deactivate and emit `Cancelled`
    pub fn handle_key(&mut self, key: KeyEvent) -> PromptAction {
        match key.code {
            KeyCode::Esc => {
                if !self.input.value().is_empty() {
                    self.input = Input::default();
                    PromptAction::Changed(String::new())
                } else {
                    self.deactivate();
                    PromptAction::Cancelled
                }
            }
            KeyCode::Enter => PromptAction::Submitted,
            _ => {
                self.input
                    .handle_event(&ratatui::crossterm::event::Event::Key(key));
                PromptAction::Changed(self.input.value().to_string())
            }
        }
    }

    /// Render the prompt as a single highlighted line.
    pub fn draw(&self, frame: &mut Frame, area: Rect) {
        let pad = self.prefix.chars().count() as u16 + 1;
        let scroll = self
            .input
            .visual_scroll(area.width.saturating_sub(pad + 2) as usize);
        let value = self.input.value();
        let display = if value.is_empty() {
            Span::styled(
                format!("{} {}", self.prefix, self.placeholder),
                Style::default().fg(C_MUTED),
            )
        } else {
            Span::styled(
                format!("{} {}", self.prefix, &value[scroll..]),
                Style::default().fg(C_PROMPT_FG),
            )
        };

        let paragraph =
            Paragraph::new(Line::from(vec![display])).style(Style::default().bg(C_PROMPT_BG));
        frame.render_widget(paragraph, area);

        if self.active && !value.is_empty() {
            let cursor_x = area.x + pad + (self.input.visual_cursor() - scroll) as u16;
            frame.set_cursor_position((cursor_x.min(area.x + area.width - 1), area.y));
        }
    }
}
