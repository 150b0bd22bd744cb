//! Circular navigation cursor for the swipe/scroll browsing variant.
//!
//! One card is shown at a time; wheel and touch gestures move the cursor
//! forward or backward with circular wrap. Gestures below the magnitude
//! threshold are ignored so jittery input does not flip cards.

/// Minimum gesture magnitude before the cursor moves.
pub const GESTURE_THRESHOLD: f32 = 50.0;

/// A navigation gesture from the presentation layer.
///
/// `delta_y` follows the convention of the source events: positive means
/// "advance" (wheel scrolled down, or a touch dragged upward past the
/// threshold), negative means "retreat".
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// Desktop wheel event.
    Wheel { delta_y: f32 },
    /// Accumulated touch drag, start minus current position.
    TouchDrag { delta_y: f32 },
}

impl Gesture {
    fn delta_y(&self) -> f32 {
        match self {
            Gesture::Wheel { delta_y } | Gesture::TouchDrag { delta_y } => *delta_y,
        }
    }

    /// Direction of motion, or `None` below the hysteresis threshold.
    pub fn direction(&self) -> Option<NavDirection> {
        let delta = self.delta_y();
        if delta.abs() < GESTURE_THRESHOLD {
            return None;
        }
        Some(if delta > 0.0 {
            NavDirection::Advance
        } else {
            NavDirection::Retreat
        })
    }
}

/// Direction a gesture resolves to once it clears the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    /// Move to the next record.
    Advance,
    /// Move to the previous record.
    Retreat,
}

/// Index into the currently visible record sequence, wrapping circularly.
///
/// Only meaningful while the sequence is non-empty; every operation is a
/// no-op at length zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavCursor {
    index: usize,
}

impl NavCursor {
    /// Cursor at the first record.
    pub fn new() -> Self {
        Self { index: 0 }
    }

    /// Current position within the visible sequence.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Move to the next record, wrapping from the end to the start.
    pub fn advance(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.index = (self.index + 1) % len;
    }

    /// Move to the previous record, wrapping from the start to the end.
    pub fn retreat(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.index = (self.index + len - 1) % len;
    }

    /// Apply a gesture over a sequence of `len` records. Returns true when
    /// the cursor moved.
    pub fn apply(&mut self, gesture: Gesture, len: usize) -> bool {
        if len == 0 {
            return false;
        }
        match gesture.direction() {
            Some(NavDirection::Advance) => {
                self.advance(len);
                true
            }
            Some(NavDirection::Retreat) => {
                self.retreat(len);
                true
            }
            None => false,
        }
    }
}
