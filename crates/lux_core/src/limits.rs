//! Valid ranges and documented defaults for light parameters.

use lux_math::Interval;

/// Smallest positive extent a range, width or height may take.
pub const MIN_EXTENT: f32 = 1e-3;

/// Smallest cone angle in degrees. Cone angles live in (0, 180].
pub const MIN_ANGLE: f32 = 1e-3;

pub const MAX_ANGLE: f32 = 180.0;

/// Color channels.
pub const COLOR_RANGE: Interval = Interval::UNIT;

/// Ambient, diffuse and specular coefficients.
pub const COEFFICIENT_RANGE: Interval = Interval::NON_NEGATIVE;

/// Point range, area width and height.
pub const EXTENT_RANGE: Interval = Interval::at_least(MIN_EXTENT);

/// Spot cone angles in degrees.
pub const ANGLE_RANGE: Interval = Interval::new(MIN_ANGLE, MAX_ANGLE);

pub const DEFAULT_RANGE: f32 = 10.0;
pub const DEFAULT_OUTER_ANGLE: f32 = 30.0;
pub const DEFAULT_INNER_ANGLE: f32 = 25.0;
pub const DEFAULT_AREA_SIZE: f32 = 1.0;

/// Outcome of a clamping setter.
///
/// Edits are never rejected. The stored value is reported back so an editor
/// surface can show the corrected number.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Clamped<T> {
    /// What the caller asked for
    pub requested: T,
    /// What was stored
    pub value: T,
}

impl<T: PartialEq> Clamped<T> {
    pub fn was_clamped(&self) -> bool {
        self.requested != self.value
    }
}

/// Clamp a scalar into `range`, logging when the input had to change.
pub(crate) fn clamp_scalar(name: &str, range: Interval, requested: f32) -> Clamped<f32> {
    let value = range.clamp(requested);
    // NaN != NaN, so compare bit patterns to keep a NaN request reported as clamped
    if value.to_bits() != requested.to_bits() {
        log::debug!("Clamped {} from {} to {}", name, requested, value);
    }
    Clamped { requested, value }
}
