//! Scroll-triggered reveal animations
//!
//! Sections fade in the first time enough of them enters the viewport, and
//! skill bars fill once their category is half visible. Both effects fire
//! once per element and never reverse.

use super::page_layout::{PageLayout, RowSpan};
use crate::portfolio::Section;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Visible fraction at which a section starts fading in
pub const FADE_THRESHOLD: f32 = 0.1;
/// Visible fraction at which a skill category fills its bars
pub const SKILL_THRESHOLD: f32 = 0.5;
/// Rows a hidden section is pushed down before it slides into place
pub const FADE_SHIFT_ROWS: u16 = 2;

const FADE_DURATION: Duration = Duration::from_millis(600);
const SKILL_FILL_DURATION: Duration = Duration::from_millis(1000);

/// Eased 0..1 progress of a tween started at `started_at`
fn tween_progress(started_at: Instant, duration: Duration, now: Instant) -> f32 {
    let elapsed = now.saturating_duration_since(started_at);
    if elapsed >= duration {
        return 1.0;
    }
    let linear = elapsed.as_secs_f32() / duration.as_secs_f32();
    simple_easing::cubic_out(linear)
}

/// How far along a section's fade-in is
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fade {
    /// 0.0 fully hidden, 1.0 fully shown
    pub opacity: f32,
    /// Rows the section is still shifted down by
    pub shift: u16,
}

impl Fade {
    pub const HIDDEN: Fade = Fade {
        opacity: 0.0,
        shift: FADE_SHIFT_ROWS,
    };
    pub const SHOWN: Fade = Fade {
        opacity: 1.0,
        shift: 0,
    };
}

/// Tracks which sections and skill categories have been revealed
#[derive(Debug, Clone, Default)]
pub struct ScrollAnimator {
    revealed_sections: BTreeMap<Section, Instant>,
    /// Fill start time per skill category; `None` while still observed
    skill_fills: Vec<Option<Instant>>,
}

impl ScrollAnimator {
    pub fn new(skill_category_count: usize) -> Self {
        Self {
            revealed_sections: BTreeMap::new(),
            skill_fills: vec![None; skill_category_count],
        }
    }

    /// Show a section without waiting for it to scroll into view
    pub fn reveal_now(&mut self, section: Section, now: Instant) {
        self.revealed_sections.entry(section).or_insert(now);
    }

    #[cfg(test)]
    pub fn is_revealed(&self, section: Section) -> bool {
        self.revealed_sections.contains_key(&section)
    }

    #[cfg(test)]
    pub fn is_skill_category_filled(&self, index: usize) -> bool {
        self.skill_fills.get(index).is_some_and(|f| f.is_some())
    }

    /// Check every observed element against the current viewport
    pub fn observe(&mut self, layout: &PageLayout, viewport: RowSpan, now: Instant) {
        for (section, span) in &layout.sections {
            if self.revealed_sections.contains_key(section) {
                continue;
            }
            let ratio = span.intersection_ratio(viewport);
            if ratio > 0.0 && ratio >= FADE_THRESHOLD {
                tracing::debug!(?section, ratio, "revealing section");
                self.revealed_sections.insert(*section, now);
            }
        }

        if self.skill_fills.len() < layout.skill_categories.len() {
            self.skill_fills.resize(layout.skill_categories.len(), None);
        }
        for (index, span) in layout.skill_categories.iter().enumerate() {
            let fill = &mut self.skill_fills[index];
            if fill.is_some() {
                continue;
            }
            if span.intersection_ratio(viewport) >= SKILL_THRESHOLD {
                tracing::debug!(index, "filling skill bars");
                *fill = Some(now);
            }
        }
    }

    /// Current fade state of a section
    pub fn fade(&self, section: Section, now: Instant) -> Fade {
        let Some(started_at) = self.revealed_sections.get(&section) else {
            return Fade::HIDDEN;
        };
        let progress = tween_progress(*started_at, FADE_DURATION, now);
        if progress >= 1.0 {
            return Fade::SHOWN;
        }
        let shift = (FADE_SHIFT_ROWS as f32 * (1.0 - progress)).round() as u16;
        Fade {
            opacity: progress,
            shift,
        }
    }

    /// Fraction of each bar's target width currently drawn for a category
    pub fn skill_fill(&self, index: usize, now: Instant) -> f32 {
        match self.skill_fills.get(index).copied().flatten() {
            Some(started_at) => tween_progress(started_at, SKILL_FILL_DURATION, now),
            None => 0.0,
        }
    }

    /// Whether any tween is still running
    pub fn is_animating(&self, now: Instant) -> bool {
        let fading = self
            .revealed_sections
            .values()
            .any(|t| now.saturating_duration_since(*t) < FADE_DURATION);
        let filling = self
            .skill_fills
            .iter()
            .flatten()
            .any(|t| now.saturating_duration_since(*t) < SKILL_FILL_DURATION);
        fading || filling
    }
}
