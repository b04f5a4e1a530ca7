//! Cursor + scroll state for a vertical list.
//!
//! The list items themselves live elsewhere (the catalog, or the navigation
//! core's active list); this widget only tracks which row is under the cursor
//! and which window of rows is visible.

#[derive(Debug, Default)]
pub struct ListCursor {
    pub selected: usize,
    pub scroll_offset: usize,
}

impl ListCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_up(&mut self, n: usize) {
        self.selected = self.selected.saturating_sub(n);
    }

    pub fn select_down(&mut self, n: usize, len: usize) {
        if len == 0 {
            return;
        }
        self.selected = (self.selected + n).min(len - 1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
        self.scroll_offset = 0;
    }

    pub fn select_last(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
    }

    /// Pull the cursor back into range after the list shrank.
    pub fn clamp(&mut self, len: usize) {
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
        if self.scroll_offset >= len {
            self.scroll_offset = 0;
        }
    }

    /// Adjust the scroll window so the cursor row is visible in `height` rows.
    pub fn ensure_visible(&mut self, height: usize) {
        if height == 0 {
            return;
        }
        if self.selected < self.scroll_offset {
            self.scroll_offset = self.selected;
        } else if self.selected >= self.scroll_offset + height {
            self.scroll_offset = self.selected.saturating_sub(height - 1);
        }
    }

    /// The range of row indices visible in `height` rows.
    pub fn visible_range(&self, len: usize, height: usize) -> std::ops::Range<usize> {
        let end = (self.scroll_offset + height).min(len);
        self.scroll_offset.min(end)..end
    }
}
