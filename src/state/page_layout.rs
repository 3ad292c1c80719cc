//! Page geometry in page rows
//!
//! The page is one tall column of sections. Positions here are page rows
//! (row 0 is the top of the hero section), independent of the scroll offset.
//!
//! # Screen layout
//!
//! ```text
//! Row 0-2:  Navbar (drawn over the page, 3 rows with borders)
//! Row 0+:   Page viewport, scrolled by ScrollState::offset
//! Bottom:   Status bar (1 row)
//! ```

use super::forms::FieldId;
use super::scroll::HEADER_OFFSET;
use crate::portfolio::Section;

/// Height of the fixed navbar
pub const NAVBAR_HEIGHT: u16 = HEADER_OFFSET;

/// Height of the status bar under the page
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// A vertical range of rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowSpan {
    pub top: u16,
    pub height: u16,
}

impl RowSpan {
    pub const fn new(top: u16, height: u16) -> Self {
        Self { top, height }
    }

    /// First row after the span
    pub fn bottom(&self) -> u16 {
        self.top.saturating_add(self.height)
    }

    pub fn contains_row(&self, row: u16) -> bool {
        row >= self.top && row < self.bottom()
    }

    /// Fraction of this span that lies inside `viewport`, in `0.0..=1.0`
    pub fn intersection_ratio(&self, viewport: RowSpan) -> f32 {
        if self.height == 0 {
            return 0.0;
        }
        let top = self.top.max(viewport.top);
        let bottom = self.bottom().min(viewport.bottom());
        let visible = bottom.saturating_sub(top);
        visible as f32 / self.height as f32
    }
}

/// Measured positions of everything scroll behaviour depends on
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLayout {
    pub sections: Vec<(Section, RowSpan)>,
    /// One span per skill category, in portfolio order
    pub skill_categories: Vec<RowSpan>,
    pub contact_fields: Vec<(FieldId, RowSpan)>,
    pub height: u16,
}

impl PageLayout {
    pub fn section_span(&self, section: Section) -> Option<RowSpan> {
        self.sections
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, span)| *span)
    }

    pub fn field_span(&self, field: FieldId) -> Option<RowSpan> {
        self.contact_fields
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, span)| *span)
    }

    /// Section under the navbar's bottom edge at the given scroll offset
    pub fn current_section(&self, offset: u16) -> Option<Section> {
        let row = offset.saturating_add(HEADER_OFFSET);
        self.sections
            .iter()
            .find(|(_, span)| span.contains_row(row))
            .or_else(|| self.sections.last())
            .map(|(s, _)| *s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod row_span {
        use super::*;

        #[test]
        fn test_bottom_and_contains() {
            let span = RowSpan::new(10, 5);
            assert_eq!(span.bottom(), 15);
            assert!(span.contains_row(10));
            assert!(span.contains_row(14));
            assert!(!span.contains_row(15));
            assert!(!span.contains_row(9));
        }

        #[test]
        fn test_fully_visible_ratio_is_one() {
            let span = RowSpan::new(10, 5);
            assert_eq!(span.intersection_ratio(RowSpan::new(0, 40)), 1.0);
        }

        #[test]
        fn test_partially_visible_ratio() {
            let span = RowSpan::new(10, 10);
            // Viewport ends at row 15: half visible
            assert_eq!(span.intersection_ratio(RowSpan::new(0, 15)), 0.5);
            // Viewport starts at row 18: two rows visible
            assert_eq!(span.intersection_ratio(RowSpan::new(18, 30)), 0.2);
        }

        #[test]
        fn test_disjoint_ratio_is_zero() {
            let span = RowSpan::new(50, 10);
            assert_eq!(span.intersection_ratio(RowSpan::new(0, 50)), 0.0);
            assert_eq!(span.intersection_ratio(RowSpan::new(60, 10)), 0.0);
        }

        #[test]
        fn test_empty_span_ratio_is_zero() {
            assert_eq!(RowSpan::new(5, 0).intersection_ratio(RowSpan::new(0, 40)), 0.0);
        }
    }

    mod page_layout {
        use super::*;

        fn sample() -> PageLayout {
            PageLayout {
                sections: vec![
                    (Section::Home, RowSpan::new(0, 20)),
                    (Section::About, RowSpan::new(20, 15)),
                    (Section::Contact, RowSpan::new(35, 25)),
                ],
                skill_categories: vec![],
                contact_fields: vec![(FieldId::Email, RowSpan::new(44, 3))],
                height: 60,
            }
        }

        #[test]
        fn test_span_lookups() {
            let layout = sample();
            assert_eq!(layout.section_span(Section::About), Some(RowSpan::new(20, 15)));
            assert_eq!(layout.section_span(Section::Skills), None);
            assert_eq!(layout.field_span(FieldId::Email), Some(RowSpan::new(44, 3)));
            assert_eq!(layout.field_span(FieldId::Name), None);
        }

        #[test]
        fn test_current_section_accounts_for_navbar() {
            let layout = sample();
            assert_eq!(layout.current_section(0), Some(Section::Home));
            assert_eq!(layout.current_section(16), Some(Section::Home));
            assert_eq!(layout.current_section(17), Some(Section::About));
            assert_eq!(layout.current_section(500), Some(Section::Contact));
        }

        #[test]
        fn test_current_section_of_empty_layout() {
            assert_eq!(PageLayout::default().current_section(0), None);
        }
    }
}
