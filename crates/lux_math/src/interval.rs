use serde::{Deserialize, Serialize};

/// A closed range `[min, max]` used to validate editable light parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Interval with only a lower bound.
    pub const fn at_least(min: f32) -> Self {
        Self { min, max: f32::MAX }
    }

    /// Returns the size of the interval (max - min).
    pub fn size(&self) -> f32 {
        self.max - self.min
    }

    /// Returns true if x is within the interval [min, max] (inclusive).
    pub fn contains(&self, x: f32) -> bool {
        self.min <= x && x <= self.max
    }

    /// Clamps x to be within the interval [min, max].
    ///
    /// NaN maps to `min`. Never panics, even on an inverted interval.
    pub fn clamp(&self, x: f32) -> f32 {
        x.max(self.min).min(self.max)
    }

    /// The unit interval `[0, 1]` (color channels).
    pub const UNIT: Interval = Interval { min: 0.0, max: 1.0 };

    /// Non-negative reals, saturating at `f32::MAX`.
    pub const NON_NEGATIVE: Interval = Interval {
        min: 0.0,
        max: f32::MAX,
    };
}
