//! Navigation menu state

use crate::portfolio::Section;

/// Collapsible navigation menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    pub open: bool,
    /// Highlighted link while the menu is open
    pub selected: usize,
}

impl MenuState {
    pub fn toggle(&mut self) {
        self.open = !self.open;
        if self.open {
            self.selected = 0;
        }
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % Section::ALL.len();
    }

    pub fn select_prev(&mut self) {
        let count = Section::ALL.len();
        self.selected = (self.selected + count - 1) % count;
    }

    pub fn selected_section(&self) -> Section {
        Section::ALL[self.selected % Section::ALL.len()]
    }

    /// Hamburger glyph for the current state
    pub fn glyph(&self) -> &'static str {
        if self.open {
            "✕"
        } else {
            "☰"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        let menu = MenuState::default();
        assert!(!menu.open);
        assert_eq!(menu.glyph(), "☰");
    }

    #[test]
    fn test_toggle_opens_and_closes() {
        let mut menu = MenuState::default();
        menu.toggle();
        assert!(menu.open);
        assert_eq!(menu.glyph(), "✕");
        menu.toggle();
        assert!(!menu.open);
    }

    #[test]
    fn test_reopening_resets_selection() {
        let mut menu = MenuState::default();
        menu.toggle();
        menu.select_next();
        menu.select_next();
        menu.close();
        menu.toggle();
        assert_eq!(menu.selected_section(), Section::Home);
    }

    #[test]
    fn test_selection_wraps() {
        let mut menu = MenuState::default();
        menu.select_prev();
        assert_eq!(menu.selected_section(), Section::Contact);
        menu.select_next();
        assert_eq!(menu.selected_section(), Section::Home);
    }
}
