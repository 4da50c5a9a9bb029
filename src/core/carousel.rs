use super::constants::PANEL_FADE_SCROLL_PX;

/// Cyclic slide index with a hover flag that suspends auto-advance.
///
/// The index is always in `0..len()`; every movement wraps modularly.
#[derive(Clone, Debug)]
pub struct Carousel {
    index: usize,
    len: usize,
    hovering: bool,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len: len.max(1),
            hovering: false,
        }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[cfg(test)]
    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    pub fn next(&mut self) -> usize {
        self.index = (self.index + 1) % self.len;
        self.index
    }

    pub fn prev(&mut self) -> usize {
        self.index = (self.index + self.len - 1) % self.len;
        self.index
    }

    pub fn go_to(&mut self, index: usize) -> usize {
        self.index = index % self.len;
        self.index
    }

    /// Returns true when the flag actually changed.
    pub fn set_hovering(&mut self, hovering: bool) -> bool {
        let changed = self.hovering != hovering;
        self.hovering = hovering;
        changed
    }

    /// Timer-driven step; `None` while the panel is hovered.
    pub fn auto_advance(&mut self) -> Option<usize> {
        if self.hovering {
            None
        } else {
            Some(self.next())
        }
    }
}

/// Detail panel opacity for a scroll offset in CSS pixels.
#[inline]
pub fn panel_opacity(scroll_offset: f64) -> f64 {
    (1.0 - scroll_offset.max(0.0) / PANEL_FADE_SCROLL_PX).max(0.0)
}
