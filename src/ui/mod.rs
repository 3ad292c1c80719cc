//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod navbar;
mod page;
mod sections;
mod skills;

pub use navbar::{dropdown_area, dropdown_hit_test, hit_test as navbar_hit_test, NavbarHit};
pub use page::measure;

use crate::app::App;
use navbar::NavbarView;
use page::PageView;
use ratatui::Frame;
use std::time::Instant;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App, now: Instant) {
    let area = frame.area();
    let (page_area, status_area) = layout::create_layout(area);
    let state = &app.state;
    let palette = state.palette();
    let buf = frame.buffer_mut();

    PageView {
        portfolio: &app.portfolio,
        layout: &state.layout,
        form: &state.form,
        form_focused: state.is_form_focused(),
        animator: &state.animator,
        palette,
        offset: state.scroll.offset(),
        now,
    }
    .draw(buf, page_area);

    // The navbar sits on top of the page like a fixed header
    NavbarView {
        brand: &app.portfolio.name,
        current: state.current_section(),
        theme: state.theme,
        menu: state.menu,
        elevated: state.scroll.is_elevated(),
        palette,
    }
    .draw(buf, page_area);

    layout::draw_status_bar(buf, status_area, app);
}
