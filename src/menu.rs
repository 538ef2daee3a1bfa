//! Slide-out navigation menu.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SlideMenu {
    open: bool,
}

impl SlideMenu {
    /// Menu button. Returns the new open state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Link click or overlay click.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Escape closes an open menu. Returns whether it did.
    pub fn handle_escape(&mut self) -> bool {
        let was_open = self.open;
        self.open = false;
        was_open
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Page scrolling is locked while the menu covers it.
    #[must_use]
    pub fn scroll_locked(self) -> bool {
        self.open
    }
}
