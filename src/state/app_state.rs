//! Application state definitions

use super::forms::ContactForm;
use super::menu::MenuState;
use super::page_layout::{PageLayout, RowSpan, STATUS_BAR_HEIGHT};
use super::reveal::ScrollAnimator;
use super::scroll::ScrollState;
use super::theme::{Palette, ThemePreference};
use crate::portfolio::Section;
use std::time::Instant;

/// Where keyboard input goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Scrolling and navigation keys
    #[default]
    Page,
    /// The open dropdown menu
    Menu,
    /// The contact form's active field or submit button
    Form,
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub theme: ThemePreference,
    pub menu: MenuState,
    pub scroll: ScrollState,
    pub animator: ScrollAnimator,
    pub layout: PageLayout,
    pub form: ContactForm,
    pub focus: Focus,

    // Terminal size as of the last frame
    pub viewport_width: u16,
    pub viewport_height: u16,
}

impl AppState {
    /// Fresh state with the hero already revealed
    pub fn new(theme: ThemePreference, skill_category_count: usize, now: Instant) -> Self {
        let mut animator = ScrollAnimator::new(skill_category_count);
        animator.reveal_now(Section::Home, now);
        Self {
            theme,
            menu: MenuState::default(),
            scroll: ScrollState::default(),
            animator,
            layout: PageLayout::default(),
            form: ContactForm::new(),
            focus: Focus::Page,
            viewport_width: 0,
            viewport_height: 0,
        }
    }

    pub fn palette(&self) -> Palette {
        self.theme.palette()
    }

    /// Rows available to the page (the terminal minus the status bar)
    pub fn page_height(&self) -> u16 {
        self.viewport_height.saturating_sub(STATUS_BAR_HEIGHT)
    }

    /// Page rows currently on screen
    pub fn visible_rows(&self) -> RowSpan {
        RowSpan::new(self.scroll.offset(), self.page_height())
    }

    /// Install a freshly measured layout for a terminal of the given size
    pub fn apply_layout(&mut self, layout: PageLayout, width: u16, height: u16) {
        self.viewport_width = width;
        self.viewport_height = height;
        self.scroll.set_bounds(layout.height, self.page_height());
        self.layout = layout;
    }

    /// Section the navbar highlights
    pub fn current_section(&self) -> Option<Section> {
        self.layout.current_section(self.scroll.offset())
    }

    pub fn is_form_focused(&self) -> bool {
        self.focus == Focus::Form
    }

    pub fn open_menu(&mut self) {
        if !self.menu.open {
            self.menu.toggle();
        }
        self.focus = Focus::Menu;
    }

    pub fn close_menu(&mut self) {
        self.menu.close();
        if self.focus == Focus::Menu {
            self.focus = Focus::Page;
        }
    }

    /// Advance animations and timers to `now`
    pub fn tick(&mut self, now: Instant) {
        self.scroll.tick(now);
        self.form.tick(now);
        if self.page_height() > 0 {
            self.animator.observe(&self.layout, self.visible_rows(), now);
        }
    }

    /// Whether the next frame will differ without any input
    pub fn is_animating(&self, now: Instant) -> bool {
        self.scroll.is_animating() || self.animator.is_animating(now) || self.form.banner_visible()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn layout() -> PageLayout {
        PageLayout {
            sections: vec![
                (Section::Home, RowSpan::new(0, 20)),
                (Section::About, RowSpan::new(20, 30)),
                (Section::Skills, RowSpan::new(50, 30)),
            ],
            skill_categories: vec![RowSpan::new(53, 10)],
            contact_fields: Vec::new(),
            height: 80,
        }
    }

    #[test]
    fn test_new_reveals_hero_only() {
        let state = AppState::new(ThemePreference::Dark, 1, Instant::now());
        assert!(state.animator.is_revealed(Section::Home));
        assert!(!state.animator.is_revealed(Section::About));
        assert_eq!(state.palette(), Palette::DARK);
    }

    #[test]
    fn test_apply_layout_sets_scroll_bounds() {
        let mut state = AppState::new(ThemePreference::Light, 1, Instant::now());
        state.apply_layout(layout(), 80, 25);
        assert_eq!(state.page_height(), 24);
        assert_eq!(state.scroll.max_offset(), 80 - 24);
    }

    #[test]
    fn test_tick_reveals_sections_in_view() {
        let now = Instant::now();
        let mut state = AppState::new(ThemePreference::Light, 1, now);
        state.apply_layout(layout(), 80, 25);
        state.tick(now);
        // About shows 4 of 30 rows at the top of the viewport
        assert!(state.animator.is_revealed(Section::About));
        assert!(!state.animator.is_revealed(Section::Skills));

        state.scroll.scroll_by(40);
        state.tick(now + Duration::from_millis(10));
        assert!(state.animator.is_revealed(Section::Skills));
        assert!(state.animator.is_skill_category_filled(0));
    }

    #[test]
    fn test_menu_focus_follows_open_state() {
        let mut state = AppState::new(ThemePreference::Light, 0, Instant::now());
        state.open_menu();
        assert!(state.menu.open);
        assert_eq!(state.focus, Focus::Menu);
        state.close_menu();
        assert!(!state.menu.open);
        assert_eq!(state.focus, Focus::Page);
    }

    #[test]
    fn test_current_section_tracks_offset() {
        let mut state = AppState::new(ThemePreference::Light, 1, Instant::now());
        state.apply_layout(layout(), 80, 25);
        assert_eq!(state.current_section(), Some(Section::Home));
        state.scroll.scroll_by(30);
        assert_eq!(state.current_section(), Some(Section::About));
    }
}
