//! Index arithmetic for carousels and the gallery lightbox.
//!
//! DESIGN
//! ======
//! The carousel components keep one of these in a signal and let timers and
//! buttons mutate it; the components own the timers, this module owns the
//! wrap-around rules.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

/// Review carousel auto-advance delay.
pub const REVIEW_ADVANCE_MS: u32 = 6_000;
/// Gallery spotlight rotation period.
pub const SPOTLIGHT_ROTATE_MS: u32 = 4_000;

/// Current position in a fixed-length list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Advance one slot, wrapping from the last item to the first.
    pub fn next(&mut self) {
        if self.len == 0 {
            return;
        }
        self.index = (self.index + 1) % self.len;
    }

    /// Step back one slot, wrapping from the first item to the last.
    pub fn prev(&mut self) {
        if self.len == 0 {
            return;
        }
        self.index = if self.index == 0 { self.len - 1 } else { self.index - 1 };
    }

    /// Jump to an explicit slot (dot click). Out-of-range targets clamp to
    /// the last slot.
    pub fn go_to(&mut self, index: usize) {
        if self.len == 0 {
            return;
        }
        self.index = index.min(self.len - 1);
    }
}

/// Timer policy for a carousel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AutoAdvance {
    pub paused_on_hover: bool,
}

impl AutoAdvance {
    /// Whether a timer should be armed for the current state.
    pub fn should_tick(self, hovered: bool, len: usize) -> bool {
        len > 1 && !(self.paused_on_hover && hovered)
    }
}

/// Full-screen gallery viewer. Closed, or open on one image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Lightbox {
    open: Option<Carousel>,
    len: usize,
}

impl Lightbox {
    pub fn new(len: usize) -> Self {
        Self { open: None, len }
    }

    pub fn open(&mut self, index: usize) {
        if self.len == 0 {
            return;
        }
        let mut carousel = Carousel::new(self.len);
        carousel.go_to(index);
        self.open = Some(carousel);
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    pub fn next(&mut self) {
        if let Some(carousel) = self.open.as_mut() {
            carousel.next();
        }
    }

    pub fn prev(&mut self) {
        if let Some(carousel) = self.open.as_mut() {
            carousel.prev();
        }
    }

    /// Index of the displayed image, if open.
    pub fn current(&self) -> Option<usize> {
        self.open.map(|carousel| carousel.index())
    }

    /// Position caption, e.g. `"3 / 6"`.
    pub fn caption(&self) -> Option<String> {
        self.current().map(|index| format!("{} / {}", index + 1, self.len))
    }
}
