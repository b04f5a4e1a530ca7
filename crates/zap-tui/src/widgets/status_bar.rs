//! Status bars — bottom log line and the mode/keys footer.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app_state::View;
use crate::theme::{
    C_ACCENT, C_MODE_COMMAND, C_MODE_FILTER, C_MODE_NORMAL, C_MUTED, C_SECONDARY,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputMode {
    Normal,
    Filter,
    Command,
}

impl InputMode {
    fn label(self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Filter => "FILTER",
            Self::Command => "COMMAND",
        }
    }

    fn color(self) -> ratatui::style::Color {
        match self {
            Self::Normal => C_MODE_NORMAL,
            Self::Filter => C_MODE_FILTER,
            Self::Command => C_MODE_COMMAND,
        }
    }
}

/// Draw the log bar: last status message, red when it reports an error.
pub fn draw_log_bar(frame: &mut Frame, area: Rect, message: Option<&str>, is_error: bool) {
    let style = if is_error {
        Style::default().fg(C_ACCENT)
    } else {
        Style::default().fg(C_SECONDARY)
    };
    let line = Line::from(vec![
        Span::raw(" "),
        Span::styled(message.unwrap_or(""), style),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Draw the keybindings footer (one row).
pub fn draw_keys_bar(frame: &mut Frame, area: Rect, view: View, mode: InputMode) {
    let keys = match mode {
        InputMode::Filter => " type to filter  ↑↓ move  Enter keep  Esc clear/close",
        InputMode::Command => " type a command  Enter execute  Esc clear/leave",
        InputMode::Normal => match view {
            View::Catalog => " ↑↓/jk select  Enter open playlist  / filter  q quit",
            View::Channels => " ↑↓/jk select  Enter tune  y copy url  / search  Esc back  q quit",
            View::Player => "",
        },
    };

    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", mode.label()),
            Style::default()
                .fg(mode.color())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(keys, Style::default().fg(C_MUTED)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
