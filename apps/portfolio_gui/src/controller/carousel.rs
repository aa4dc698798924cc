//! Circular index into the fixed project sequence.

/// Current position in the project carousel. The index is always a valid
/// index into the sequence, even after wraparound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    index: usize,
    len: usize,
}

impl CarouselState {
    /// The project sequence is fixed and non-empty; clamp anyway so the
    /// wraparound arithmetic stays well-defined.
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len: len.max(1),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Advance one project, wrapping from the last index back to 0.
    pub fn next(&mut self) {
        self.index = if self.index == self.len - 1 {
            0
        } else {
            self.index + 1
        };
    }

    /// Step back one project, wrapping from 0 to the last index.
    pub fn previous(&mut self) {
        self.index = if self.index == 0 {
            self.len - 1
        } else {
            self.index - 1
        };
    }

    /// Jump directly to `target`. An out-of-range target is rejected as a
    /// no-op; the index never leaves the valid range.
    pub fn go_to(&mut self, target: usize) -> bool {
        if target < self.len {
            self.index = target;
            true
        } else {
            false
        }
    }
}
