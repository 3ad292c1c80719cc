//! Contact section: info lines, the three fields, submit button and banner

use super::field_renderer::{draw_field, draw_field_error};
use crate::portfolio::Portfolio;
use crate::state::{ContactForm, FieldId, Palette};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crate::ui::sections::{content_column, draw_title, SECTION_FOOTER_ROWS, SECTION_HEADER_ROWS};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Height of a single-line field box
pub const FIELD_HEIGHT: u16 = 3;
/// Height of the message box
pub const MESSAGE_HEIGHT: u16 = 7;
/// Row under each field reserved for its error
pub const ERROR_ROW_HEIGHT: u16 = 1;

const FORM_MAX_WIDTH: u16 = 64;
const SUBMIT_WIDTH: u16 = 18;
const SUBMIT_LABEL: &str = "Send Message";

/// Row offsets inside the contact section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRows {
    pub info: u16,
    /// (field, top offset, box height)
    pub fields: Vec<(FieldId, u16, u16)>,
    pub submit: u16,
    pub banner: u16,
    pub height: u16,
}

fn info_lines(portfolio: &Portfolio) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(email) = &portfolio.contact.email {
        lines.push(format!("✉  {email}"));
    }
    if let Some(location) = &portfolio.contact.location {
        lines.push(format!("⌂  {location}"));
    }
    lines
}

/// Compute where everything in the contact section goes
pub fn contact_rows(portfolio: &Portfolio) -> ContactRows {
    let mut row = SECTION_HEADER_ROWS;
    let info = row;
    let info_count = info_lines(portfolio).len() as u16;
    if info_count > 0 {
        row += info_count + 1;
    }

    let mut fields = Vec::with_capacity(FieldId::ALL.len());
    for id in FieldId::ALL {
        let height = if id.is_multiline() {
            MESSAGE_HEIGHT
        } else {
            FIELD_HEIGHT
        };
        fields.push((id, row, height));
        row += height + ERROR_ROW_HEIGHT;
    }

    let submit = row;
    row += BUTTON_HEIGHT;
    let banner = row;
    row += 1;

    ContactRows {
        info,
        fields,
        submit,
        banner,
        height: row + SECTION_FOOTER_ROWS,
    }
}

/// Draw the contact section into `area` (the whole section)
pub fn draw_contact(
    buf: &mut Buffer,
    area: Rect,
    portfolio: &Portfolio,
    form: &ContactForm,
    form_focused: bool,
    palette: &Palette,
) {
    draw_title(buf, area, "Get In Touch", palette);

    let rows = contact_rows(portfolio);
    let (column_x, column_width) = content_column(area.width);
    let width = column_width.min(FORM_MAX_WIDTH);
    let x = area.x + column_x + (column_width - width) / 2;

    for (i, line) in info_lines(portfolio).into_iter().enumerate() {
        let line_area = Rect::new(x, area.y + rows.info + i as u16, width, 1);
        Paragraph::new(Span::styled(line, Style::default().fg(palette.muted)))
            .render(line_area, buf);
    }

    for (id, offset, height) in &rows.fields {
        let field = form.field(*id);
        let is_active = form_focused && form.active_field_id() == Some(*id);
        let box_area = Rect::new(x, area.y + offset, width, *height);
        draw_field(buf, box_area, field, is_active, palette);
        let error_area = Rect::new(x, area.y + offset + height, width, ERROR_ROW_HEIGHT);
        draw_field_error(buf, error_area, field, palette);
    }

    let submit_area = Rect::new(x, area.y + rows.submit, SUBMIT_WIDTH.min(width), BUTTON_HEIGHT);
    render_button(
        buf,
        submit_area,
        SUBMIT_LABEL,
        form_focused && form.is_submit_active(),
        palette,
    );

    if let Some(banner) = &form.banner {
        let banner_area = Rect::new(x, area.y + rows.banner, width, 1);
        Paragraph::new(Line::from(Span::styled(
            format!("✓ {}", banner.text()),
            Style::default()
                .fg(palette.success)
                .add_modifier(Modifier::BOLD),
        )))
        .render(banner_area, buf);
    }
}
