use ratatui::widgets::ScrollbarState;

/// Offset into dialog content plus the scrollbar that mirrors it
#[derive(Debug, Default)]
pub struct DialogScroll {
    pub offset: usize,
    pub scrollbar_state: ScrollbarState,
}

impl DialogScroll {
    pub fn reset(&mut self) {
        self.offset = 0;
        self.scrollbar_state = ScrollbarState::default();
    }

    pub fn up(&mut self) {
        self.offset = self.offset.saturating_sub(1);
        self.sync();
    }

    pub fn down(&mut self) {
        self.offset = self.offset.saturating_add(1);
        self.sync();
    }

    pub fn to_top(&mut self) {
        self.offset = 0;
        self.sync();
    }

    /// Renderers clamp the offset to their content length
    pub fn to_bottom(&mut self) {
        self.offset = usize::MAX;
        self.sync();
    }

    /// Clamp to the largest offset that still fills `visible` lines, then return it
    pub fn clamp(&mut self, total: usize, visible: usize) -> usize {
        let max = total.saturating_sub(visible);
        self.offset = self.offset.min(max);
        self.scrollbar_state = self.scrollbar_state.content_length(max + 1).position(self.offset);
        self.offset
    }

    fn sync(&mut self) {
        self.scrollbar_state = self.scrollbar_state.position(self.offset);
    }
}
