//! The scrolling page: measures every section and draws the visible slice
//!
//! Each visible section is rendered at full height into its own buffer and
//! then copied into the viewport, shifted by the scroll offset and by its
//! reveal offset.

use crate::portfolio::{Portfolio, Section};
use crate::state::{blend, ContactForm, PageLayout, Palette, RowSpan, ScrollAnimator};
use crate::ui::forms::{contact_rows, draw_contact};
use crate::ui::sections::{
    about_height, content_column, draw_about, draw_hero, draw_projects, hero_height,
    projects_height,
};
use crate::ui::skills::{category_offsets, draw_skills, skills_height};
use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use std::time::Instant;

/// Measure the page for a terminal `width` columns wide
pub fn measure(portfolio: &Portfolio, width: u16) -> PageLayout {
    let (_, content_width) = content_column(width);
    let contact = contact_rows(portfolio);
    let heights = [
        (Section::Home, hero_height()),
        (Section::About, about_height(portfolio, content_width)),
        (Section::Skills, skills_height(portfolio)),
        (Section::Projects, projects_height(portfolio, content_width)),
        (Section::Contact, contact.height),
    ];

    let mut top = 0u16;
    let mut sections = Vec::with_capacity(heights.len());
    for (section, height) in heights {
        sections.push((section, RowSpan::new(top, height)));
        top = top.saturating_add(height);
    }

    let skills_top = sections[2].1.top;
    let skill_categories = category_offsets(portfolio)
        .into_iter()
        .map(|(offset, height)| RowSpan::new(skills_top + offset, height))
        .collect();

    let contact_top = sections[4].1.top;
    let contact_fields = contact
        .fields
        .iter()
        .map(|(id, offset, height)| (*id, RowSpan::new(contact_top + offset, *height)))
        .collect();

    PageLayout {
        sections,
        skill_categories,
        contact_fields,
        height: top,
    }
}

/// Palette partway through a fade-in from the background
pub fn faded_palette(palette: &Palette, opacity: f32) -> Palette {
    if opacity >= 1.0 {
        return *palette;
    }
    let bg = palette.background;
    Palette {
        background: bg,
        surface: blend(bg, palette.surface, opacity),
        text: blend(bg, palette.text, opacity),
        muted: blend(bg, palette.muted, opacity),
        accent: blend(bg, palette.accent, opacity),
        border: blend(bg, palette.border, opacity),
        error: blend(bg, palette.error, opacity),
        success: blend(bg, palette.success, opacity),
        bar_track: blend(bg, palette.bar_track, opacity),
    }
}

/// Everything needed to draw the page for one frame
pub struct PageView<'a> {
    pub portfolio: &'a Portfolio,
    pub layout: &'a PageLayout,
    pub form: &'a ContactForm,
    pub form_focused: bool,
    pub animator: &'a ScrollAnimator,
    pub palette: Palette,
    pub offset: u16,
    pub now: Instant,
}

impl PageView<'_> {
    fn render_section(&self, section: Section, buf: &mut Buffer, palette: &Palette) {
        let area = buf.area;
        match section {
            Section::Home => draw_hero(buf, area, self.portfolio, palette),
            Section::About => draw_about(buf, area, self.portfolio, palette),
            Section::Skills => draw_skills(buf, area, self.portfolio, palette, |index| {
                self.animator.skill_fill(index, self.now)
            }),
            Section::Projects => draw_projects(buf, area, self.portfolio, palette),
            Section::Contact => draw_contact(
                buf,
                area,
                self.portfolio,
                self.form,
                self.form_focused,
                palette,
            ),
        }
    }

    /// Draw the visible part of the page into `area`
    pub fn draw(&self, buf: &mut Buffer, area: Rect) {
        buf.set_style(
            area,
            Style::default()
                .bg(self.palette.background)
                .fg(self.palette.text),
        );
        let viewport = RowSpan::new(self.offset, area.height);

        for (section, span) in &self.layout.sections {
            let fade = self.animator.fade(*section, self.now);
            let shifted = RowSpan::new(span.top.saturating_add(fade.shift), span.height);
            if shifted.intersection_ratio(viewport) == 0.0 {
                continue;
            }
            let palette = faded_palette(&self.palette, fade.opacity);
            let mut scratch = Buffer::empty(Rect::new(0, 0, area.width, span.height));
            scratch.set_style(
                scratch.area,
                Style::default().bg(palette.background).fg(palette.text),
            );
            self.render_section(*section, &mut scratch, &palette);
            blit(&scratch, shifted, viewport, buf, area);
        }
    }
}

/// Copy the rows of `scratch` (placed at page rows `span`) that fall inside
/// `viewport` into `area`
fn blit(scratch: &Buffer, span: RowSpan, viewport: RowSpan, buf: &mut Buffer, area: Rect) {
    let first = span.top.max(viewport.top);
    let last = span.bottom().min(viewport.bottom());
    for page_row in first..last {
        let src_y = page_row - span.top;
        let dst_y = area.y + (page_row - viewport.top);
        for x in 0..area.width {
            buf[(area.x + x, dst_y)] = scratch[(x, src_y)].clone();
        }
    }
}
