//! Page scroll position and smooth scrolling

use std::time::{Duration, Instant};

/// Rows covered by the fixed navbar at the top of the page
pub const HEADER_OFFSET: u16 = 3;

/// Offset past which the navbar is drawn elevated
pub const ELEVATION_THRESHOLD: u16 = 5;

/// An eased scroll from one offset to another
#[derive(Debug, Clone, Copy, PartialEq)]
struct ScrollAnimation {
    from: f32,
    to: u16,
    started_at: Instant,
}

/// Vertical scroll state of the page
#[derive(Debug, Clone, Default)]
pub struct ScrollState {
    offset: u16,
    max_offset: u16,
    animation: Option<ScrollAnimation>,
}

impl ScrollState {
    /// Duration of a smooth scroll
    const ANIMATION_DURATION: Duration = Duration::from_millis(400);

    pub fn offset(&self) -> u16 {
        self.offset
    }

    pub fn max_offset(&self) -> u16 {
        self.max_offset
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Whether the page has scrolled far enough to elevate the navbar
    pub fn is_elevated(&self) -> bool {
        self.offset > ELEVATION_THRESHOLD
    }

    /// Update the scrollable range after a layout change
    pub fn set_bounds(&mut self, page_height: u16, viewport_height: u16) {
        self.max_offset = page_height.saturating_sub(viewport_height);
        self.offset = self.offset.min(self.max_offset);
        if let Some(animation) = self.animation.as_mut() {
            animation.to = animation.to.min(self.max_offset);
        }
    }

    /// Scroll immediately by `delta` rows, cancelling any animation
    pub fn scroll_by(&mut self, delta: i32) {
        self.animation = None;
        let target = (self.offset as i32 + delta).clamp(0, self.max_offset as i32);
        self.offset = target as u16;
    }

    pub fn scroll_to_top(&mut self) {
        self.animation = None;
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.animation = None;
        self.offset = self.max_offset;
    }

    /// Start an eased scroll towards `target`
    pub fn animate_to(&mut self, target: u16, now: Instant) {
        let to = target.min(self.max_offset);
        if to == self.offset {
            self.animation = None;
            return;
        }
        self.animation = Some(ScrollAnimation {
            from: self.offset as f32,
            to,
            started_at: now,
        });
    }

    /// Scroll so an anchor at `anchor_top` sits just below the navbar
    pub fn scroll_to_anchor(&mut self, anchor_top: u16, now: Instant) {
        self.animate_to(anchor_top.saturating_sub(HEADER_OFFSET), now);
    }

    /// Scroll so the rows `[top, top + height)` sit in the middle of the viewport
    pub fn center_on(&mut self, top: u16, height: u16, viewport_height: u16, now: Instant) {
        let middle = top as i32 + height as i32 / 2;
        let target = (middle - viewport_height as i32 / 2).max(0) as u16;
        self.animate_to(target, now);
    }

    /// Advance the running animation
    pub fn tick(&mut self, now: Instant) {
        let Some(animation) = self.animation else {
            return;
        };
        let elapsed = now.saturating_duration_since(animation.started_at);
        if elapsed >= Self::ANIMATION_DURATION {
            self.offset = animation.to;
            self.animation = None;
            return;
        }
        let progress = elapsed.as_secs_f32() / Self::ANIMATION_DURATION.as_secs_f32();
        let eased = simple_easing::cubic_in_out(progress);
        let position = animation.from + (animation.to as f32 - animation.from) * eased;
        self.offset = (position.round().max(0.0) as u16).min(self.max_offset);
    }
}
