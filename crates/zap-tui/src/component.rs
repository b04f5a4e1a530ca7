//! Component trait — the interface each view implements.
//!
//! Views are self-contained: they own their cursor/input state and render
//! themselves from the read-only `AppState`.  They never mutate shared state
//! directly; they return `Vec<Action>` and the App event-loop dispatches.

use ratatui::crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

use crate::action::Action;
use crate::app_state::AppState;

pub trait Component {
    /// Handle a key event.  Only called while this view is active.
    fn handle_key(&mut self, key: KeyEvent, state: &AppState) -> Vec<Action>;

    /// Receive an action dispatched by the App.  Views can react to actions
    /// even when not active (e.g. resetting their cursor on view changes).
    fn on_action(&mut self, _action: &Action, _state: &AppState) -> Vec<Action> {
        Vec::new()
    }

    /// Render the view into `area`.
    fn draw(&mut self, frame: &mut Frame, area: Rect, state: &AppState);
}
