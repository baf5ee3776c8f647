//! Type-specific light geometry.
//!
//! Each variant carries its own invariant and restores it in [`Geometry::repair`],
//! which runs before anything is pushed to a native light.

use serde::{Deserialize, Serialize};

use crate::field::{FieldValue, LightField, LightKind};
use crate::limits::{
    clamp_scalar, Clamped, ANGLE_RANGE, DEFAULT_AREA_SIZE, DEFAULT_INNER_ANGLE,
    DEFAULT_OUTER_ANGLE, DEFAULT_RANGE, EXTENT_RANGE, MIN_ANGLE,
};
use lux_math::Interval;

/// Geometry capability shared by all variants.
pub trait Geometry {
    fn kind(&self) -> LightKind;

    /// Restore the variant's invariants in place.
    ///
    /// Returns true if any value changed.
    fn repair(&mut self) -> bool;

    /// Geometry fields mirrored to the native light, with their current values.
    fn fields(&self) -> Vec<(LightField, FieldValue)>;
}

/// Omnidirectional light with a finite range. Invariant: `range > 0`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointLight {
    range: f32,
}

impl Default for PointLight {
    fn default() -> Self {
        Self {
            range: DEFAULT_RANGE,
        }
    }
}

impl PointLight {
    pub fn new(range: f32) -> Self {
        Self {
            range: EXTENT_RANGE.clamp(range),
        }
    }

    pub fn range(&self) -> f32 {
        self.range
    }

    pub fn set_range(&mut self, range: f32) -> Clamped<f32> {
        let result = clamp_scalar("range", EXTENT_RANGE, range);
        self.range = result.value;
        result
    }
}

impl Geometry for PointLight {
    fn kind(&self) -> LightKind {
        LightKind::Point
    }

    fn repair(&mut self) -> bool {
        let repaired = EXTENT_RANGE.clamp(self.range);
        let changed = repaired.to_bits() != self.range.to_bits();
        self.range = repaired;
        changed
    }

    fn fields(&self) -> Vec<(LightField, FieldValue)> {
        vec![(LightField::Range, FieldValue::Scalar(self.range))]
    }
}

/// Cone light. Angles are full cone angles in degrees.
///
/// Invariant: `inner_angle <= outer_angle`. The outer angle is authoritative:
/// narrowing it drags the inner angle down, and the inner angle can never be
/// widened past it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpotLight {
    outer_angle: f32,
    inner_angle: f32,
}

impl Default for SpotLight {
    fn default() -> Self {
        Self {
            outer_angle: DEFAULT_OUTER_ANGLE,
            inner_angle: DEFAULT_INNER_ANGLE,
        }
    }
}

impl SpotLight {
    pub fn new(outer_angle: f32, inner_angle: f32) -> Self {
        let mut spot = Self {
            outer_angle,
            inner_angle,
        };
        spot.repair();
        spot
    }

    pub fn outer_angle(&self) -> f32 {
        self.outer_angle
    }

    pub fn inner_angle(&self) -> f32 {
        self.inner_angle
    }

    pub fn set_outer_angle(&mut self, degrees: f32) -> Clamped<f32> {
        let result = clamp_scalar("outer angle", ANGLE_RANGE, degrees);
        self.outer_angle = result.value;
        self.drag_inner();
        result
    }

    pub fn set_inner_angle(&mut self, degrees: f32) -> Clamped<f32> {
        let result = clamp_scalar(
            "inner angle",
            Interval::new(MIN_ANGLE, ANGLE_RANGE.clamp(self.outer_angle)),
            degrees,
        );
        self.inner_angle = result.value;
        result
    }

    fn drag_inner(&mut self) -> bool {
        if self.inner_angle > self.outer_angle {
            log::debug!(
                "Inner angle {} exceeds outer angle {}, clamping",
                self.inner_angle,
                self.outer_angle
            );
            self.inner_angle = self.outer_angle;
            return true;
        }
        false
    }
}

impl Geometry for SpotLight {
    fn kind(&self) -> LightKind {
        LightKind::Spot
    }

    fn repair(&mut self) -> bool {
        let outer = ANGLE_RANGE.clamp(self.outer_angle);
        let inner = ANGLE_RANGE.clamp(self.inner_angle);
        let changed =
            outer.to_bits() != self.outer_angle.to_bits() || inner.to_bits() != self.inner_angle.to_bits();
        self.outer_angle = outer;
        self.inner_angle = inner;
        self.drag_inner() || changed
    }

    fn fields(&self) -> Vec<(LightField, FieldValue)> {
        vec![
            (LightField::OuterAngle, FieldValue::Scalar(self.outer_angle)),
            (LightField::InnerAngle, FieldValue::Scalar(self.inner_angle)),
        ]
    }
}

/// Rectangular emitter. Orientation comes from the owning transform and is
/// not stored here. Invariant: `width > 0 && height > 0`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AreaLight {
    width: f32,
    height: f32,
}

impl Default for AreaLight {
    fn default() -> Self {
        Self {
            width: DEFAULT_AREA_SIZE,
            height: DEFAULT_AREA_SIZE,
        }
    }
}

impl AreaLight {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: EXTENT_RANGE.clamp(width),
            height: EXTENT_RANGE.clamp(height),
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn set_width(&mut self, width: f32) -> Clamped<f32> {
        let result = clamp_scalar("width", EXTENT_RANGE, width);
        self.width = result.value;
        result
    }

    pub fn set_height(&mut self, height: f32) -> Clamped<f32> {
        let result = clamp_scalar("height", EXTENT_RANGE, height);
        self.height = result.value;
        result
    }
}

impl Geometry for AreaLight {
    fn kind(&self) -> LightKind {
        LightKind::Area
    }

    fn repair(&mut self) -> bool {
        let width = EXTENT_RANGE.clamp(self.width);
        let height = EXTENT_RANGE.clamp(self.height);
        let changed =
            width.to_bits() != self.width.to_bits() || height.to_bits() != self.height.to_bits();
        self.width = width;
        self.height = height;
        changed
    }

    fn fields(&self) -> Vec<(LightField, FieldValue)> {
        vec![
            (LightField::Width, FieldValue::Scalar(self.width)),
            (LightField::Height, FieldValue::Scalar(self.height)),
        ]
    }
}

/// Tagged union over the fixed variant set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum LightVariant {
    #[default]
    Base,
    Point(PointLight),
    Spot(SpotLight),
    Area(AreaLight),
}

impl LightVariant {
    /// A variant of `kind` with its documented default geometry.
    pub fn default_for(kind: LightKind) -> Self {
        match kind {
            LightKind::Base => LightVariant::Base,
            LightKind::Point => LightVariant::Point(PointLight::default()),
            LightKind::Spot => LightVariant::Spot(SpotLight::default()),
            LightKind::Area => LightVariant::Area(AreaLight::default()),
        }
    }

    pub fn as_point(&self) -> Option<&PointLight> {
        match self {
            LightVariant::Point(point) => Some(point),
            _ => None,
        }
    }

    pub fn as_spot(&self) -> Option<&SpotLight> {
        match self {
            LightVariant::Spot(spot) => Some(spot),
            _ => None,
        }
    }

    pub fn as_area(&self) -> Option<&AreaLight> {
        match self {
            LightVariant::Area(area) => Some(area),
            _ => None,
        }
    }
}

impl Geometry for LightVariant {
    fn kind(&self) -> LightKind {
        match self {
            LightVariant::Base => LightKind::Base,
            LightVariant::Point(point) => point.kind(),
            LightVariant::Spot(spot) => spot.kind(),
            LightVariant::Area(area) => area.kind(),
        }
    }

    fn repair(&mut self) -> bool {
        match self {
            LightVariant::Base => false,
            LightVariant::Point(point) => point.repair(),
            LightVariant::Spot(spot) => spot.repair(),
            LightVariant::Area(area) => area.repair(),
        }
    }

    fn fields(&self) -> Vec<(LightField, FieldValue)> {
        match self {
            LightVariant::Base => Vec::new(),
            LightVariant::Point(point) => point.fields(),
            LightVariant::Spot(spot) => spot.fields(),
            LightVariant::Area(area) => area.fields(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::limits::{MAX_ANGLE, MIN_EXTENT};

    #[test]
    fn test_point_range_clamped_positive() {
        let mut point = PointLight::default();
        let result = point.set_range(-5.0);

        assert!(result.was_clamped());
        assert_eq!(point.range(), MIN_EXTENT);
        assert!(point.range() > 0.0);

        point.set_range(0.0);
        assert_eq!(point.range(), MIN_EXTENT);
    }

    #[test]
    fn test_spot_outer_drags_inner() {
        let mut spot = SpotLight::default();
        spot.set_outer_angle(10.0);

        assert_eq!(spot.outer_angle(), 10.0);
        assert_eq!(spot.inner_angle(), 10.0);
    }

    #[test]
    fn test_spot_widening_outer_keeps_inner() {
        let mut spot = SpotLight::default();
        spot.set_outer_angle(90.0);

        assert_eq!(spot.outer_angle(), 90.0);
        assert_eq!(spot.inner_angle(), DEFAULT_INNER_ANGLE);
    }

    #[test]
    fn test_spot_inner_cannot_exceed_outer() {
        let mut spot = SpotLight::default();
        let result = spot.set_inner_angle(45.0);

        assert!(result.was_clamped());
        assert_eq!(spot.inner_angle(), DEFAULT_OUTER_ANGLE);
        assert_eq!(spot.outer_angle(), DEFAULT_OUTER_ANGLE);
    }

    #[test]
    fn test_spot_angle_domain() {
        let mut spot = SpotLight::default();
        spot.set_outer_angle(400.0);
        assert_eq!(spot.outer_angle(), MAX_ANGLE);

        spot.set_outer_angle(-1.0);
        assert_eq!(spot.outer_angle(), MIN_ANGLE);
        assert!(spot.inner_angle() <= spot.outer_angle());
    }

    #[test]
    fn test_spot_invariant_over_edit_sequence() {
        let mut spot = SpotLight::default();
        let edits = [
            (true, 50.0),
            (false, 60.0),
            (true, 5.0),
            (false, 3.0),
            (true, 170.0),
            (false, 200.0),
            (true, 0.0),
            (false, f32::NAN),
        ];

        for (outer, degrees) in edits {
            if outer {
                spot.set_outer_angle(degrees);
            } else {
                spot.set_inner_angle(degrees);
            }
            spot.repair();
            assert!(
                spot.inner_angle() <= spot.outer_angle(),
                "inner {} > outer {}",
                spot.inner_angle(),
                spot.outer_angle()
            );
        }
    }

    #[test]
    fn test_spot_repair_after_deserialize() {
        let mut spot: SpotLight =
            serde_json::from_str(r#"{"outer_angle": 20.0, "inner_angle": 35.0}"#).unwrap();

        assert!(spot.repair());
        assert_eq!(spot.inner_angle(), 20.0);
        assert!(!spot.repair());
    }

    #[test]
    fn test_area_size_clamped() {
        let mut area = AreaLight::new(2.0, 3.0);
        area.set_width(-1.0);
        area.set_height(0.0);

        assert_eq!(area.width(), MIN_EXTENT);
        assert_eq!(area.height(), MIN_EXTENT);
    }

    #[test]
    fn test_variant_defaults() {
        assert_eq!(
            LightVariant::default_for(LightKind::Point).as_point().map(|p| p.range()),
            Some(10.0)
        );
        let spot = LightVariant::default_for(LightKind::Spot);
        assert_eq!(spot.as_spot().map(|s| s.outer_angle()), Some(30.0));
        assert_eq!(spot.as_spot().map(|s| s.inner_angle()), Some(25.0));
        let area = LightVariant::default_for(LightKind::Area);
        assert_eq!(area.as_area().map(|a| (a.width(), a.height())), Some((1.0, 1.0)));
        assert!(LightVariant::default_for(LightKind::Base).fields().is_empty());
    }

    #[test]
    fn test_variant_serde_tag() {
        let variant = LightVariant::Point(PointLight::new(4.0));
        let json = serde_json::to_string(&variant).unwrap();
        assert!(json.contains(r#""kind":"point""#));

        let back: LightVariant = serde_json::from_str(&json).unwrap();
        assert_eq!(back.kind(), LightKind::Point);
    }
}
