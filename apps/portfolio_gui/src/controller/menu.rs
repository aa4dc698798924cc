//! Collapsible navigation menu state (narrow viewport widths only).

use shared::domain::SectionId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Activating a navigation target forces the menu closed and yields the
    /// scroll target for the view to consume.
    pub fn select_section(&mut self, section: SectionId) -> SectionId {
        self.open = false;
        section
    }
}
