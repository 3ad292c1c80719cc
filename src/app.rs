//! Application state and core logic

use crate::config::{ConfigStore, TuiConfig};
use crate::platform::is_submit_modifier;
use crate::portfolio::{Portfolio, Section};
use crate::state::{
    AppState, ContactForm, FieldId, Focus, FormEvent, FormOutcome, HEADER_OFFSET, NAVBAR_HEIGHT,
};
use crate::submission::{SubmissionSink, TracingSink};
use crate::ui::{self, NavbarHit};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use std::time::Instant;

/// Rows moved per mouse wheel notch
const WHEEL_STEP: i32 = 3;

/// Shown when the theme preference could not be written
const THEME_SAVE_FAILED: &str = "Could not save theme preference";

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Content rendered on the page
    pub portfolio: Portfolio,
    config: TuiConfig,
    store: ConfigStore,
    /// Receives accepted contact form submissions
    sink: Box<dyn SubmissionSink>,
    /// Whether the app should quit
    quit: bool,
    /// Transient message for the status bar
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App from the user's config and portfolio files
    pub fn new() -> Result<Self> {
        let mut store = ConfigStore::default();
        let config = store.load_or_default();
        let portfolio = match config.resolve_portfolio_path() {
            Some(path) => {
                tracing::info!("Loading portfolio from {}", path.display());
                Portfolio::load_from(&path)?
            }
            None => Portfolio::sample(),
        };
        Ok(Self::with_parts(
            config,
            store,
            portfolio,
            Box::new(TracingSink),
            Instant::now(),
        ))
    }

    pub fn with_parts(
        config: TuiConfig,
        store: ConfigStore,
        portfolio: Portfolio,
        sink: Box<dyn SubmissionSink>,
        now: Instant,
    ) -> Self {
        let state = AppState::new(config.theme(), portfolio.skills.len(), now);
        Self {
            state,
            portfolio,
            config,
            store,
            sink,
            quit: false,
            status_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Re-measure the page for the current terminal size
    pub fn update_layout(&mut self, width: u16, height: u16) {
        let layout = ui::measure(&self.portfolio, width);
        self.state.apply_layout(layout, width, height);
    }

    /// Advance animations and timers
    pub fn tick(&mut self, now: Instant) {
        self.state.tick(now);
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.state.is_animating(now)
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        self.handle_key_at(key, Instant::now())
    }

    fn handle_key_at(&mut self, key: KeyEvent, now: Instant) -> Result<()> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return Ok(());
        }

        // Clear any status messages on key press
        self.status_message = None;

        match self.state.focus {
            Focus::Page => self.handle_page_key(key, now),
            Focus::Menu => self.handle_menu_key(key, now),
            Focus::Form => self.handle_form_key(key, now),
        }
        Ok(())
    }

    fn handle_page_key(&mut self, key: KeyEvent, now: Instant) {
        let page = self.state.page_height() as i32;
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('j') | KeyCode::Down => self.state.scroll.scroll_by(1),
            KeyCode::Char('k') | KeyCode::Up => self.state.scroll.scroll_by(-1),
            KeyCode::PageDown | KeyCode::Char(' ') => self.state.scroll.scroll_by(page),
            KeyCode::PageUp => self.state.scroll.scroll_by(-page),
            KeyCode::Char('g') | KeyCode::Home => self.state.scroll.scroll_to_top(),
            KeyCode::Char('G') | KeyCode::End => self.state.scroll.scroll_to_bottom(),
            KeyCode::Char(c @ '1'..='5') => {
                if let Some(section) = Section::from_shortcut(c) {
                    self.follow_link(section, now);
                }
            }
            KeyCode::Char('c') | KeyCode::Tab => self.focus_form(now),
            KeyCode::Char('t') => self.toggle_theme(),
            KeyCode::Char('m') => self.state.open_menu(),
            _ => {}
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.state.menu.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.state.menu.select_prev(),
            KeyCode::Enter => {
                let section = self.state.menu.selected_section();
                self.follow_link(section, now);
            }
            KeyCode::Esc | KeyCode::Char('m') => self.state.close_menu(),
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent, now: Instant) {
        let form = &mut self.state.form;
        match key.code {
            KeyCode::Char('s') if is_submit_modifier(key.modifiers) => self.submit(now),
            KeyCode::Esc => self.leave_form(now),
            KeyCode::Tab => {
                form.focus_next(now);
                self.reveal_active_field(now);
            }
            KeyCode::BackTab => {
                form.focus_prev(now);
                self.reveal_active_field(now);
            }
            KeyCode::Enter => {
                if form.is_submit_active() {
                    self.submit(now);
                } else if form.is_active_field_multiline() {
                    form.input_char('\n', now);
                } else {
                    form.focus_next(now);
                    self.reveal_active_field(now);
                }
            }
            KeyCode::Backspace => {
                form.backspace(now);
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                form.input_char(c, now);
            }
            _ => {}
        }
    }

    /// Smooth-scroll to a section, closing the menu
    pub fn follow_link(&mut self, section: Section, now: Instant) {
        self.leave_form(now);
        self.state.close_menu();
        self.state.focus = Focus::Page;
        match self.state.layout.section_span(section) {
            Some(span) => {
                tracing::debug!("Following link to {}", section.anchor());
                self.state.scroll.scroll_to_anchor(span.top, now);
            }
            None => tracing::debug!("No target for {}", section.anchor()),
        }
    }

    /// Switch between light and dark and remember the choice
    pub fn toggle_theme(&mut self) {
        self.state.theme = self.state.theme.toggle();
        self.config.theme = Some(self.state.theme);
        match self.store.save(&self.config) {
            Ok(()) => tracing::info!("Theme set to {}", self.state.theme.label()),
            Err(err) => {
                tracing::warn!("Failed to save theme preference: {err:#}");
                self.status_message = Some(THEME_SAVE_FAILED.to_string());
            }
        }
    }

    /// Hand keyboard input back to the page, blurring the active field
    fn leave_form(&mut self, now: Instant) {
        if self.state.focus == Focus::Form {
            self.state.form.blur_active(now);
            self.state.focus = Focus::Page;
        }
    }

    /// Move keyboard input into the contact form
    fn focus_form(&mut self, now: Instant) {
        self.state.close_menu();
        self.state.focus = Focus::Form;
        self.reveal_active_field(now);
    }

    /// Scroll the active field into the middle of the viewport if it is hidden
    fn reveal_active_field(&mut self, now: Instant) {
        let id = self
            .state
            .form
            .active_field_id()
            .unwrap_or(FieldId::Message);
        let Some(span) = self.state.layout.field_span(id) else {
            return;
        };
        let visible = self.state.visible_rows();
        let hidden = span.top < visible.top + HEADER_OFFSET || span.bottom() > visible.bottom();
        if hidden {
            let viewport = self.state.page_height();
            self.state.scroll.center_on(span.top, span.height, viewport, now);
        }
    }

    /// Validate and submit the contact form
    pub fn submit(&mut self, now: Instant) {
        self.state.focus = Focus::Form;
        match self.state.form.dispatch(FormEvent::Submit, now) {
            FormOutcome::Rejected {
                first_error,
                result,
            } => {
                let kind = self.state.form.field(first_error).error().map(|e| e.kind());
                tracing::debug!(
                    valid = result.valid,
                    errors = result.errors.len(),
                    ?kind,
                    "Contact form rejected, first error on {first_error}"
                );
                if let Some(span) = self.state.layout.field_span(first_error) {
                    let viewport = self.state.page_height();
                    self.state.scroll.center_on(span.top, span.height, viewport, now);
                }
            }
            FormOutcome::Accepted(submission) => self.sink.record(&submission),
            FormOutcome::Unchanged | FormOutcome::Validated { .. } => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        self.handle_mouse_at(mouse, Instant::now())
    }

    fn handle_mouse_at(&mut self, mouse: MouseEvent, now: Instant) -> Result<()> {
        match mouse.kind {
            MouseEventKind::ScrollUp => self.state.scroll.scroll_by(-WHEEL_STEP),
            MouseEventKind::ScrollDown => self.state.scroll.scroll_by(WHEEL_STEP),
            MouseEventKind::Down(MouseButton::Left) => {
                self.handle_click(mouse.column, mouse.row, now)
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_click(&mut self, column: u16, row: u16, now: Instant) {
        let width = self.state.viewport_width;

        // Any click on the header takes focus away from the form
        if row < NAVBAR_HEIGHT
            || (self.state.menu.open && ui::dropdown_hit_test(width, column, row).is_some())
        {
            self.leave_form(now);
        }

        if self.state.menu.open {
            if let Some(section) = ui::dropdown_hit_test(width, column, row) {
                self.follow_link(section, now);
                return;
            }
        }

        if row < NAVBAR_HEIGHT {
            match ui::navbar_hit_test(width, column, row) {
                Some(NavbarHit::Link(section)) => self.follow_link(section, now),
                Some(NavbarHit::Hamburger) => {
                    if self.state.menu.open {
                        self.state.close_menu();
                    } else {
                        self.state.open_menu();
                    }
                }
                Some(NavbarHit::ThemeToggle) => self.toggle_theme(),
                None => {}
            }
            return;
        }

        // Clicking anywhere else dismisses the menu
        if self.state.menu.open {
            self.state.close_menu();
            return;
        }

        if row >= self.state.page_height() {
            return;
        }
        let page_row = self.state.scroll.offset().saturating_add(row);
        let clicked = self
            .state
            .layout
            .contact_fields
            .iter()
            .find(|(_, span)| span.contains_row(page_row))
            .map(|(id, _)| *id);
        match clicked {
            Some(id) => {
                self.state.focus = Focus::Form;
                self.state.form.focus(ContactForm::index_of(id), now);
            }
            None => self.leave_form(now),
        }
    }
}
