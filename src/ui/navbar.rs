//! Fixed navbar drawn over the top of the page, plus the dropdown menu

use crate::portfolio::Section;
use crate::state::{MenuState, Palette, ThemePreference, NAVBAR_HEIGHT};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

/// Below this width the links collapse behind the hamburger
pub const COLLAPSE_WIDTH: u16 = 80;

/// Row of the navbar that holds the brand, links and icons
const CONTENT_ROW: u16 = 1;
const LINK_GAP: u16 = 2;
const DROPDOWN_WIDTH: u16 = 16;

/// Something clickable in the navbar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavbarHit {
    Link(Section),
    Hamburger,
    ThemeToggle,
}

/// A clickable item and the columns it spans
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NavbarItem {
    hit: NavbarHit,
    x: u16,
    width: u16,
}

pub fn is_collapsed(width: u16) -> bool {
    width < COLLAPSE_WIDTH
}

fn link_label(index: usize, section: Section) -> String {
    format!("{} {}", index + 1, section.label())
}

/// Clickable items for a navbar `width` columns wide
fn navbar_items(width: u16) -> Vec<NavbarItem> {
    if is_collapsed(width) {
        return vec![
            NavbarItem {
                hit: NavbarHit::ThemeToggle,
                x: width.saturating_sub(6),
                width: 1,
            },
            NavbarItem {
                hit: NavbarHit::Hamburger,
                x: width.saturating_sub(3),
                width: 1,
            },
        ];
    }

    let theme_x = width.saturating_sub(3);
    let labels: Vec<(Section, u16)> = Section::ALL
        .iter()
        .enumerate()
        .map(|(i, s)| (*s, link_label(i, *s).chars().count() as u16))
        .collect();
    let total: u16 = labels.iter().map(|(_, w)| w + LINK_GAP).sum();
    let mut x = theme_x.saturating_sub(total + 1);

    let mut items = Vec::with_capacity(labels.len() + 1);
    for (section, label_width) in labels {
        items.push(NavbarItem {
            hit: NavbarHit::Link(section),
            x,
            width: label_width,
        });
        x += label_width + LINK_GAP;
    }
    items.push(NavbarItem {
        hit: NavbarHit::ThemeToggle,
        x: theme_x,
        width: 1,
    });
    items
}

/// What lies under a click on the navbar
pub fn hit_test(width: u16, column: u16, row: u16) -> Option<NavbarHit> {
    if row != CONTENT_ROW {
        return None;
    }
    navbar_items(width)
        .into_iter()
        .find(|item| column >= item.x && column < item.x + item.width)
        .map(|item| item.hit)
}

/// Area of the open dropdown menu
pub fn dropdown_area(width: u16) -> Rect {
    Rect::new(
        width.saturating_sub(DROPDOWN_WIDTH + 2),
        NAVBAR_HEIGHT,
        DROPDOWN_WIDTH.min(width),
        Section::ALL.len() as u16 + 2,
    )
}

/// Link under a click inside the open dropdown
pub fn dropdown_hit_test(width: u16, column: u16, row: u16) -> Option<Section> {
    let area = dropdown_area(width);
    let inner_x = area.x + 1..area.x + area.width.saturating_sub(1);
    let first_row = area.y + 1;
    if !inner_x.contains(&column) || row < first_row {
        return None;
    }
    Section::ALL.get((row - first_row) as usize).copied()
}

/// State the navbar reflects
pub struct NavbarView<'a> {
    pub brand: &'a str,
    pub current: Option<Section>,
    pub theme: ThemePreference,
    pub menu: MenuState,
    pub elevated: bool,
    pub palette: Palette,
}

impl NavbarView<'_> {
    pub fn draw(&self, buf: &mut Buffer, area: Rect) {
        let palette = &self.palette;
        let bar = Rect::new(area.x, area.y, area.width, NAVBAR_HEIGHT.min(area.height));
        Clear.render(bar, buf);
        let border_type = if self.elevated {
            BorderType::Thick
        } else {
            BorderType::Plain
        };
        Block::default()
            .borders(Borders::BOTTOM)
            .border_type(border_type)
            .border_style(Style::default().fg(palette.border))
            .style(Style::default().bg(palette.surface))
            .render(bar, buf);

        let row = bar.y + CONTENT_ROW;
        Paragraph::new(Span::styled(
            format!("‹{}›", self.brand),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ))
        .render(Rect::new(bar.x + 2, row, bar.width.saturating_sub(4), 1), buf);

        for (index, item) in navbar_items(area.width).into_iter().enumerate() {
            let (text, style) = match item.hit {
                NavbarHit::Link(section) => {
                    let style = if self.current == Some(section) {
                        Style::default()
                            .fg(palette.accent)
                            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
                    } else {
                        Style::default().fg(palette.text)
                    };
                    (link_label(index, section), style)
                }
                NavbarHit::Hamburger => (
                    self.menu.glyph().to_string(),
                    Style::default().fg(palette.text),
                ),
                NavbarHit::ThemeToggle => (
                    self.theme.icon().to_string(),
                    Style::default().fg(palette.accent),
                ),
            };
            let x = bar.x + item.x;
            if x >= bar.right() {
                continue;
            }
            let width = item.width.max(1).min(bar.right() - x);
            Paragraph::new(Span::styled(text, style)).render(Rect::new(x, row, width, 1), buf);
        }

        if self.menu.open {
            self.draw_dropdown(buf, area);
        }
    }

    fn draw_dropdown(&self, buf: &mut Buffer, area: Rect) {
        let palette = &self.palette;
        let dropdown = dropdown_area(area.width).intersection(area);
        Clear.render(dropdown, buf);
        let lines: Vec<Line> = Section::ALL
            .iter()
            .enumerate()
            .map(|(i, section)| {
                let style = if i == self.menu.selected {
                    Style::default()
                        .fg(palette.background)
                        .bg(palette.accent)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(palette.text)
                };
                Line::from(Span::styled(format!(" {}", link_label(i, *section)), style))
            })
            .collect();
        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.border)),
            )
            .style(Style::default().bg(palette.surface))
            .render(dropdown, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(width: u16, view: &NavbarView) -> Buffer {
        let area = Rect::new(0, 0, width, 12);
        let mut buf = Buffer::empty(area);
        view.draw(&mut buf, area);
        buf
    }

    fn view(menu: MenuState, elevated: bool) -> NavbarView<'static> {
        NavbarView {
            brand: "Alex Morgan",
            current: Some(Section::About),
            theme: ThemePreference::Light,
            menu,
            elevated,
            palette: Palette::LIGHT,
        }
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    mod hit_testing {
        use super::*;

        #[test]
        fn test_wide_navbar_hits_every_link() {
            let items = navbar_items(100);
            for section in Section::ALL {
                let item = items
                    .iter()
                    .find(|i| i.hit == NavbarHit::Link(section))
                    .unwrap();
                assert_eq!(hit_test(100, item.x, CONTENT_ROW), Some(NavbarHit::Link(section)));
            }
            assert_eq!(hit_test(100, 97, CONTENT_ROW), Some(NavbarHit::ThemeToggle));
        }

        #[test]
        fn test_collapsed_navbar_has_hamburger() {
            assert_eq!(hit_test(60, 57, CONTENT_ROW), Some(NavbarHit::Hamburger));
            assert_eq!(hit_test(60, 54, CONTENT_ROW), Some(NavbarHit::ThemeToggle));
            assert!(navbar_items(60)
                .iter()
                .all(|i| !matches!(i.hit, NavbarHit::Link(_))));
        }

        #[test]
        fn test_other_rows_miss() {
            assert_eq!(hit_test(60, 57, 0), None);
            assert_eq!(hit_test(60, 57, 2), None);
        }

        #[test]
        fn test_dropdown_rows_map_to_sections() {
            let area = dropdown_area(60);
            let column = area.x + 2;
            assert_eq!(dropdown_hit_test(60, column, area.y + 1), Some(Section::Home));
            assert_eq!(dropdown_hit_test(60, column, area.y + 5), Some(Section::Contact));
            assert_eq!(dropdown_hit_test(60, column, area.y + 6), None);
            assert_eq!(dropdown_hit_test(60, 0, area.y + 1), None);
        }
    }

    mod drawing {
        use super::*;

        #[test]
        fn test_wide_navbar_shows_links_and_icon() {
            let buf = render(100, &view(MenuState::default(), false));
            let row = row_text(&buf, CONTENT_ROW);
            assert!(row.contains("Alex Morgan"));
            assert!(row.contains("1 Home"));
            assert!(row.contains("5 Contact"));
            assert!(row.contains("☾"));
        }

        #[test]
        fn test_collapsed_navbar_shows_hamburger_only() {
            let buf = render(60, &view(MenuState::default(), false));
            let row = row_text(&buf, CONTENT_ROW);
            assert!(row.contains("☰"));
            assert!(!row.contains("Home"));
        }

        #[test]
        fn test_open_menu_lists_links() {
            let mut menu = MenuState::default();
            menu.toggle();
            let buf = render(60, &view(menu, false));
            let row = row_text(&buf, CONTENT_ROW);
            assert!(row.contains("✕"));
            let area = dropdown_area(60);
            assert!(row_text(&buf, area.y + 1).contains("1 Home"));
            assert!(row_text(&buf, area.y + 5).contains("5 Contact"));
        }

        #[test]
        fn test_elevation_thickens_border() {
            let flat = render(100, &view(MenuState::default(), false));
            let raised = render(100, &view(MenuState::default(), true));
            assert_eq!(flat[(10, 2)].symbol(), "─");
            assert_eq!(raised[(10, 2)].symbol(), "━");
        }
    }
}
