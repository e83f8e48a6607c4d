//! Selection and scroll tracking for the record list.

/// Selected row and first visible row of one list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCursor {
    pub selected: usize,
    pub offset: usize,
}

impl ListCursor {
    pub fn down(&mut self, len: usize, visible: usize) {
        if len == 0 {
            return;
        }
        self.selected = (self.selected + 1).min(len - 1);
        self.reveal(visible);
    }

    pub fn up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
        if self.selected < self.offset {
            self.offset = self.selected;
        }
    }

    pub fn top(&mut self) {
        *self = Self::default();
    }

    pub fn bottom(&mut self, len: usize, visible: usize) {
        if len == 0 {
            return;
        }
        self.selected = len - 1;
        self.reveal(visible);
    }

    /// Keep the cursor inside a list that may have shrunk after a refetch
    pub fn clamped(self, len: usize, visible: usize) -> Self {
        if len == 0 {
            return Self::default();
        }
        let mut cursor = self;
        cursor.selected = cursor.selected.min(len - 1);
        cursor.offset = cursor.offset.min(cursor.selected);
        cursor.reveal(visible);
        cursor
    }

    fn reveal(&mut self, visible: usize) {
        let visible = visible.max(1);
        if self.selected >= self.offset + visible {
            self.offset = self.selected + 1 - visible;
        }
    }
}
