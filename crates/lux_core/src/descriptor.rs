//! Renderer-agnostic light parameters and their native mirror.
//!
//! Once bound, the descriptor is the single source of truth for every field
//! in [`LightDescriptor::owned_fields`]. The native light's copies are
//! write-only mirrors, updated by compare-before-write so a resync with
//! nothing to do performs no writes.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use lux_math::{Transform, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::{BindingError, BindingResult};
use crate::field::{Color, FieldSet, FieldValue, LightField, LightKind};
use crate::limits::{clamp_scalar, Clamped, COEFFICIENT_RANGE, COLOR_RANGE};
use crate::native::{NativeHandle, NativeLight};
use crate::snapshot::{LightSnapshot, SnapshotGeometry};
use crate::variant::{AreaLight, Geometry, LightVariant, PointLight, SpotLight};

/// Photometric state plus variant geometry for one light.
///
/// Serializable so the host scene can persist it; the native binding is
/// never serialized. Missing fields load as defaults and loaded values are
/// clamped and repaired before use.
#[derive(Debug, Serialize, Deserialize)]
#[serde(from = "StoredDescriptor")]
pub struct LightDescriptor {
    color: Color,
    ambient: f32,
    diffuse: f32,
    specular: f32,
    variant: LightVariant,

    #[serde(skip)]
    native: Option<Weak<RefCell<dyn NativeLight>>>,
}

impl Default for LightDescriptor {
    fn default() -> Self {
        Self {
            color: Color::ONE,
            ambient: 0.1,
            diffuse: 1.0,
            specular: 0.5,
            variant: LightVariant::Base,
            native: None,
        }
    }
}

/// Persisted form of a descriptor, before clamping.
#[derive(Deserialize)]
#[serde(default)]
struct StoredDescriptor {
    color: Color,
    ambient: f32,
    diffuse: f32,
    specular: f32,
    variant: LightVariant,
}

impl Default for StoredDescriptor {
    fn default() -> Self {
        let defaults = LightDescriptor::default();
        Self {
            color: defaults.color,
            ambient: defaults.ambient,
            diffuse: defaults.diffuse,
            specular: defaults.specular,
            variant: defaults.variant,
        }
    }
}

impl From<StoredDescriptor> for LightDescriptor {
    fn from(stored: StoredDescriptor) -> Self {
        let mut descriptor = Self {
            color: stored.color,
            ambient: stored.ambient,
            diffuse: stored.diffuse,
            specular: stored.specular,
            variant: stored.variant,
            native: None,
        };
        descriptor.repair();
        descriptor
    }
}

impl LightDescriptor {
    /// A descriptor of `kind` with default photometrics and geometry.
    pub fn new(kind: LightKind) -> Self {
        Self {
            variant: LightVariant::default_for(kind),
            ..Default::default()
        }
    }

    pub fn point(range: f32) -> Self {
        Self::from_variant(LightVariant::Point(PointLight::new(range)))
    }

    pub fn spot(outer_angle: f32, inner_angle: f32) -> Self {
        Self::from_variant(LightVariant::Spot(SpotLight::new(outer_angle, inner_angle)))
    }

    pub fn area(width: f32, height: f32) -> Self {
        Self::from_variant(LightVariant::Area(AreaLight::new(width, height)))
    }

    pub fn from_variant(variant: LightVariant) -> Self {
        Self {
            variant,
            ..Default::default()
        }
    }

    /// Set the color (builder form, clamped, never pushed).
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = clamp_color(color);
        self
    }

    /// Set ambient, diffuse and specular coefficients (builder form).
    pub fn with_coefficients(mut self, ambient: f32, diffuse: f32, specular: f32) -> Self {
        self.ambient = COEFFICIENT_RANGE.clamp(ambient);
        self.diffuse = COEFFICIENT_RANGE.clamp(diffuse);
        self.specular = COEFFICIENT_RANGE.clamp(specular);
        self
    }

    pub fn kind(&self) -> LightKind {
        self.variant.kind()
    }

    pub fn variant(&self) -> &LightVariant {
        &self.variant
    }

    /// Direct access to the geometry. Edits made here reach the native light
    /// on the next [`resync`](Self::resync).
    pub fn variant_mut(&mut self) -> &mut LightVariant {
        &mut self.variant
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn ambient(&self) -> f32 {
        self.ambient
    }

    pub fn diffuse(&self) -> f32 {
        self.diffuse
    }

    pub fn specular(&self) -> f32 {
        self.specular
    }

    /// True while the bound native light is still alive.
    pub fn is_bound(&self) -> bool {
        self.native_handle().is_some()
    }

    /// The bound native light, if it is still alive.
    pub fn native_handle(&self) -> Option<NativeHandle> {
        self.native.as_ref().and_then(Weak::upgrade)
    }

    /// Bind to `native` and push every mirrored field to it.
    ///
    /// A missing native light leaves the descriptor unbound. Returns the
    /// number of native writes.
    pub fn bind(&mut self, native: Option<&NativeHandle>) -> BindingResult<usize> {
        let Some(native) = native else {
            self.native = None;
            return Err(BindingError::MissingNativeLight);
        };

        self.repair();

        let writes = {
            let mut light = native
                .try_borrow_mut()
                .map_err(|_| BindingError::NativeBusy)?;
            self.push(&mut *light, true)
        };

        self.native = Some(Rc::downgrade(native));
        log::info!("Bound {} light ({} native writes)", self.kind(), writes);
        Ok(writes)
    }

    /// Forget the native light. Its last synchronized values are kept as is.
    ///
    /// Returns true if the descriptor was bound.
    pub fn unbind(&mut self) -> bool {
        let was_bound = self.native.take().is_some();
        if was_bound {
            log::info!("Unbound {} light", self.kind());
        }
        was_bound
    }

    /// Repair invariants and push any field that differs from the native light.
    ///
    /// Idempotent: a second call with no intervening edit writes nothing.
    /// Unbound descriptors perform no native writes. Returns the number of
    /// native writes.
    pub fn resync(&mut self) -> usize {
        self.repair();
        self.sync()
    }

    /// Fields this descriptor owns on its native light.
    pub fn owned_fields(&self) -> FieldSet {
        self.mirrored_fields()
            .into_iter()
            .map(|(field, _)| field)
            .collect()
    }

    /// Change variant, keeping photometrics.
    ///
    /// The new geometry starts from its documented defaults and the
    /// descriptor re-binds to the same native light. Returns the number of
    /// native writes.
    pub fn switch_kind(&mut self, kind: LightKind) -> usize {
        if kind == self.kind() {
            return 0;
        }

        log::info!("Switching light from {} to {}", self.kind(), kind);
        self.variant = LightVariant::default_for(kind);

        match self.native_handle() {
            Some(native) => match self.bind(Some(&native)) {
                Ok(writes) => writes,
                Err(e) => {
                    log::warn!("Re-bind after type switch failed: {}", e);
                    0
                }
            },
            None => 0,
        }
    }

    pub fn set_color(&mut self, color: Color) -> Clamped<Color> {
        let value = clamp_color(color);
        if value != color {
            log::debug!("Clamped color from {:?} to {:?}", color, value);
        }
        self.color = value;
        self.resync();
        Clamped {
            requested: color,
            value,
        }
    }

    pub fn set_ambient(&mut self, ambient: f32) -> Clamped<f32> {
        let result = clamp_scalar("ambient", COEFFICIENT_RANGE, ambient);
        self.ambient = result.value;
        self.resync();
        result
    }

    pub fn set_diffuse(&mut self, diffuse: f32) -> Clamped<f32> {
        let result = clamp_scalar("diffuse", COEFFICIENT_RANGE, diffuse);
        self.diffuse = result.value;
        self.resync();
        result
    }

    pub fn set_specular(&mut self, specular: f32) -> Clamped<f32> {
        let result = clamp_scalar("specular", COEFFICIENT_RANGE, specular);
        self.specular = result.value;
        self.resync();
        result
    }

    /// Set the point range. None if this is not a point light.
    pub fn set_range(&mut self, range: f32) -> Option<Clamped<f32>> {
        let result = match &mut self.variant {
            LightVariant::Point(point) => point.set_range(range),
            _ => return None,
        };
        self.resync();
        Some(result)
    }

    /// Set the spot outer angle, dragging the inner angle down if needed.
    /// None if this is not a spot light.
    pub fn set_outer_angle(&mut self, degrees: f32) -> Option<Clamped<f32>> {
        let result = match &mut self.variant {
            LightVariant::Spot(spot) => spot.set_outer_angle(degrees),
            _ => return None,
        };
        self.resync();
        Some(result)
    }

    /// Set the spot inner angle, capped at the outer angle.
    /// None if this is not a spot light.
    pub fn set_inner_angle(&mut self, degrees: f32) -> Option<Clamped<f32>> {
        let result = match &mut self.variant {
            LightVariant::Spot(spot) => spot.set_inner_angle(degrees),
            _ => return None,
        };
        self.resync();
        Some(result)
    }

    /// Set the area size. None if this is not an area light.
    pub fn set_size(&mut self, width: f32, height: f32) -> Option<(Clamped<f32>, Clamped<f32>)> {
        let result = match &mut self.variant {
            LightVariant::Area(area) => (area.set_width(width), area.set_height(height)),
            _ => return None,
        };
        self.resync();
        Some(result)
    }

    /// Finalized values for the downstream renderer.
    ///
    /// `transform` is the owning object's transform; spot direction and area
    /// orientation are derived from it, never stored.
    pub fn snapshot(&self, transform: &Transform) -> LightSnapshot {
        let geometry = match &self.variant {
            LightVariant::Base => SnapshotGeometry::None,
            LightVariant::Point(point) => SnapshotGeometry::Point {
                range: point.range(),
            },
            LightVariant::Spot(spot) => SnapshotGeometry::Spot {
                direction: transform.forward(),
                outer_angle: spot.outer_angle(),
                inner_angle: spot.inner_angle(),
            },
            LightVariant::Area(area) => SnapshotGeometry::Area {
                width: area.width(),
                height: area.height(),
                normal: transform.forward(),
                right: transform.right(),
                up: transform.up(),
            },
        };

        LightSnapshot {
            kind: self.kind(),
            color: self.color,
            ambient: self.ambient,
            diffuse: self.diffuse,
            specular: self.specular,
            position: transform.translation,
            geometry,
        }
    }

    /// Clamp photometrics and restore variant invariants.
    fn repair(&mut self) -> bool {
        let color = clamp_color(self.color);
        let ambient = COEFFICIENT_RANGE.clamp(self.ambient);
        let diffuse = COEFFICIENT_RANGE.clamp(self.diffuse);
        let specular = COEFFICIENT_RANGE.clamp(self.specular);

        let mut changed = color.to_array().map(f32::to_bits)
            != self.color.to_array().map(f32::to_bits)
            || ambient.to_bits() != self.ambient.to_bits()
            || diffuse.to_bits() != self.diffuse.to_bits()
            || specular.to_bits() != self.specular.to_bits();

        self.color = color;
        self.ambient = ambient;
        self.diffuse = diffuse;
        self.specular = specular;

        changed |= self.variant.repair();
        if changed {
            log::debug!("Repaired {} light parameters", self.kind());
        }
        changed
    }

    /// Push to the bound native light, if any.
    fn sync(&mut self) -> usize {
        let Some(weak) = &self.native else {
            return 0;
        };

        let Some(native) = weak.upgrade() else {
            log::warn!("Native light for {} light was dropped, unbinding", self.kind());
            self.native = None;
            return 0;
        };

        let Ok(mut light) = native.try_borrow_mut() else {
            log::warn!("Native light is borrowed elsewhere, skipping sync");
            return 0;
        };

        self.push(&mut *light, false)
    }

    /// Write mirrored fields to `native`, skipping values it already holds
    /// unless `force` is set.
    fn push(&self, native: &mut dyn NativeLight, force: bool) -> usize {
        let mut writes = 0;
        for (field, value) in order_cone_writes(self.mirrored_fields(), native) {
            if !native.supports(field) {
                continue;
            }
            if !force && native.read(field) == Some(value) {
                continue;
            }
            native.write(field, value);
            writes += 1;
        }

        if writes > 0 {
            log::debug!("Pushed {} fields to native {} light", writes, self.kind());
        }
        writes
    }

    fn mirrored_fields(&self) -> Vec<(LightField, FieldValue)> {
        let mut fields = vec![
            (LightField::Kind, FieldValue::Kind(self.kind())),
            (LightField::Color, FieldValue::Color(self.color)),
            (LightField::Ambient, FieldValue::Scalar(self.ambient)),
            (LightField::Diffuse, FieldValue::Scalar(self.diffuse)),
            (LightField::Specular, FieldValue::Scalar(self.specular)),
        ];
        fields.extend(self.variant.fields());
        fields
    }
}

fn clamp_color(color: Color) -> Color {
    Vec3::new(
        COLOR_RANGE.clamp(color.x),
        COLOR_RANGE.clamp(color.y),
        COLOR_RANGE.clamp(color.z),
    )
}

/// Order cone angle writes so the native light never holds `inner > outer`.
///
/// If the new inner angle fits under the native's current outer angle it is
/// written first, otherwise the outer angle goes first.
fn order_cone_writes(
    mut fields: Vec<(LightField, FieldValue)>,
    native: &dyn NativeLight,
) -> Vec<(LightField, FieldValue)> {
    let outer_idx = fields.iter().position(|(f, _)| *f == LightField::OuterAngle);
    let inner_idx = fields.iter().position(|(f, _)| *f == LightField::InnerAngle);
    let (Some(outer_idx), Some(inner_idx)) = (outer_idx, inner_idx) else {
        return fields;
    };

    let new_inner = fields[inner_idx].1.as_scalar().unwrap_or(0.0);
    let inner_fits = native
        .read(LightField::OuterAngle)
        .and_then(|v| v.as_scalar())
        .map_or(true, |current_outer| new_inner <= current_outer);

    let inner_first = inner_idx < outer_idx;
    if inner_fits != inner_first {
        fields.swap(outer_idx, inner_idx);
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::limits::MIN_EXTENT;
    use crate::native::MemoryLight;

    fn bound(descriptor: &mut LightDescriptor) -> Rc<RefCell<MemoryLight>> {
        let light = MemoryLight::new().shared();
        let handle: NativeHandle = light.clone();
        descriptor.bind(Some(&handle)).unwrap();
        light
    }

    #[test]
    fn test_set_clamps_to_valid_range() {
        let mut descriptor = LightDescriptor::new(LightKind::Base);

        let color = descriptor.set_color(Vec3::new(1.5, -0.2, 0.5));
        assert!(color.was_clamped());
        assert_eq!(descriptor.color(), Vec3::new(1.0, 0.0, 0.5));

        assert_eq!(descriptor.set_ambient(-1.0).value, 0.0);
        assert_eq!(descriptor.set_diffuse(2.5).value, 2.5);
        assert!(!descriptor.set_specular(0.3).was_clamped());
        assert_eq!(descriptor.specular(), 0.3);
    }

    #[test]
    fn test_set_clamp_property() {
        let mut descriptor = LightDescriptor::default();
        let inputs = [-10.0, -0.0, 0.0, 0.25, 1.0, 7.5, f32::INFINITY, f32::NAN];

        for v in inputs {
            let stored = descriptor.set_ambient(v).value;
            assert_eq!(stored, COEFFICIENT_RANGE.clamp(v));
            assert_eq!(descriptor.ambient(), stored);

            let color = descriptor.set_color(Vec3::splat(v)).value;
            assert_eq!(color, Vec3::splat(COLOR_RANGE.clamp(v)));
        }
    }

    #[test]
    fn test_bind_pushes_all_fields() {
        let mut descriptor = LightDescriptor::point(4.0);
        let light = bound(&mut descriptor);

        let light = light.borrow();
        assert_eq!(light.write_count(), 6);
        assert_eq!(light.value(LightField::Kind), Some(FieldValue::Kind(LightKind::Point)));
        assert_eq!(light.scalar(LightField::Range), Some(4.0));
        assert_eq!(light.scalar(LightField::Specular), Some(0.5));
    }

    #[test]
    fn test_bind_missing_native() {
        let mut descriptor = LightDescriptor::point(4.0);
        assert_eq!(descriptor.bind(None), Err(BindingError::MissingNativeLight));
        assert!(!descriptor.is_bound());
        assert_eq!(descriptor.resync(), 0);
    }

    #[test]
    fn test_bind_native_busy() {
        let mut descriptor = LightDescriptor::default();
        let light = MemoryLight::new().shared();
        let handle: NativeHandle = light.clone();

        let _guard = light.borrow();
        assert_eq!(descriptor.bind(Some(&handle)), Err(BindingError::NativeBusy));
        assert!(!descriptor.is_bound());
    }

    #[test]
    fn test_setter_pushes_single_write_when_bound() {
        let mut descriptor = LightDescriptor::default();
        let light = bound(&mut descriptor);
        let before = light.borrow().write_count();

        descriptor.set_diffuse(0.75);

        let light = light.borrow();
        assert_eq!(light.write_count(), before + 1);
        assert_eq!(light.scalar(LightField::Diffuse), Some(0.75));
    }

    #[test]
    fn test_setter_unchanged_value_no_write() {
        let mut descriptor = LightDescriptor::default();
        let light = bound(&mut descriptor);
        let before = light.borrow().write_count();

        descriptor.set_diffuse(descriptor.diffuse());

        assert_eq!(light.borrow().write_count(), before);
    }

    #[test]
    fn test_resync_idempotent() {
        let mut descriptor = LightDescriptor::spot(40.0, 20.0);
        let light = bound(&mut descriptor);

        if let LightVariant::Spot(spot) = descriptor.variant_mut() {
            spot.set_outer_angle(15.0);
        }

        assert_eq!(descriptor.resync(), 2);
        let after_first = light.borrow().write_count();
        assert_eq!(descriptor.resync(), 0);
        assert_eq!(light.borrow().write_count(), after_first);
    }

    #[test]
    fn test_resync_corrects_native_drift() {
        let mut descriptor = LightDescriptor::point(4.0);
        let light = bound(&mut descriptor);

        light
            .borrow_mut()
            .inspector_edit(LightField::Range, FieldValue::Scalar(99.0));

        assert_eq!(descriptor.resync(), 1);
        assert_eq!(light.borrow().scalar(LightField::Range), Some(4.0));
    }

    /// Stores range rounded to whole units.
    #[derive(Default)]
    struct RoundingLight {
        inner: MemoryLight,
    }

    impl NativeLight for RoundingLight {
        fn read(&self, field: LightField) -> Option<FieldValue> {
            self.inner.read(field)
        }

        fn write(&mut self, field: LightField, value: FieldValue) {
            let value = match (field, value) {
                (LightField::Range, FieldValue::Scalar(v)) => FieldValue::Scalar(v.round()),
                (_, other) => other,
            };
            self.inner.write(field, value);
        }

        fn set_field_locked(&mut self, field: LightField, locked: bool) {
            self.inner.set_field_locked(field, locked);
        }

        fn is_field_locked(&self, field: LightField) -> bool {
            self.inner.is_field_locked(field)
        }
    }

    #[test]
    fn test_inexact_read_back_rewrites_on_resync() {
        let light = Rc::new(RefCell::new(RoundingLight::default()));
        let handle: NativeHandle = light.clone();
        let mut descriptor = LightDescriptor::point(2.5);
        descriptor.bind(Some(&handle)).unwrap();

        // Range reads back as 3.0, so every resync repeats the write
        assert_eq!(descriptor.resync(), 1);
        assert_eq!(descriptor.resync(), 1);
        assert_eq!(light.borrow().inner.writes_to(LightField::Range), 3);
    }

    #[test]
    fn test_resync_after_native_dropped() {
        let mut descriptor = LightDescriptor::default();
        let light = bound(&mut descriptor);
        drop(light);

        assert!(!descriptor.is_bound());
        assert_eq!(descriptor.resync(), 0);
        assert_eq!(descriptor.set_ambient(0.4).value, 0.4);
    }

    #[test]
    fn test_cone_shrink_never_passes_invalid_state() {
        let mut descriptor = LightDescriptor::spot(30.0, 25.0);
        let light = bound(&mut descriptor);

        descriptor.set_outer_angle(10.0);

        let light = light.borrow();
        let mut outer = None;
        let mut inner = None;
        for (field, value) in light.history() {
            match field {
                LightField::OuterAngle => outer = value.as_scalar(),
                LightField::InnerAngle => inner = value.as_scalar(),
                _ => {}
            }
            if let (Some(o), Some(i)) = (outer, inner) {
                assert!(i <= o, "native saw inner {} > outer {}", i, o);
            }
        }
        assert_eq!(light.scalar(LightField::InnerAngle), Some(10.0));
    }

    #[test]
    fn test_cone_widen_writes_outer_first() {
        let mut descriptor = LightDescriptor::spot(10.0, 10.0);
        let light = bound(&mut descriptor);
        let start = light.borrow().history().len();

        if let LightVariant::Spot(spot) = descriptor.variant_mut() {
            spot.set_outer_angle(90.0);
            spot.set_inner_angle(60.0);
        }
        descriptor.resync();

        let light = light.borrow();
        let fields: Vec<_> = light.history()[start..].iter().map(|(f, _)| *f).collect();
        assert_eq!(fields, vec![LightField::OuterAngle, LightField::InnerAngle]);
    }

    #[test]
    fn test_unsupported_fields_skipped() {
        let mut descriptor = LightDescriptor::area(2.0, 3.0);
        let light = MemoryLight::with_supported([LightField::Color, LightField::Width]).shared();
        let handle: NativeHandle = light.clone();

        assert_eq!(descriptor.bind(Some(&handle)), Ok(2));
        assert_eq!(light.borrow().writes_to(LightField::Height), 0);
    }

    #[test]
    fn test_switch_kind_resets_geometry_keeps_photometrics() {
        let mut descriptor = LightDescriptor::point(3.0)
            .with_color(Vec3::new(0.2, 0.4, 0.6))
            .with_coefficients(0.3, 0.8, 0.9);
        let light = bound(&mut descriptor);

        let writes = descriptor.switch_kind(LightKind::Spot);
        assert!(writes > 0);

        let spot = descriptor.variant().as_spot().copied().unwrap();
        assert_eq!(spot.outer_angle(), 30.0);
        assert_eq!(spot.inner_angle(), 25.0);
        assert_eq!(descriptor.color(), Vec3::new(0.2, 0.4, 0.6));
        assert_eq!(descriptor.ambient(), 0.3);
        assert_eq!(descriptor.diffuse(), 0.8);
        assert_eq!(descriptor.specular(), 0.9);

        assert!(descriptor.is_bound());
        let light = light.borrow();
        assert_eq!(light.value(LightField::Kind), Some(FieldValue::Kind(LightKind::Spot)));
        assert_eq!(light.scalar(LightField::OuterAngle), Some(30.0));
    }

    #[test]
    fn test_switch_kind_each_default() {
        let mut descriptor = LightDescriptor::spot(60.0, 5.0);

        descriptor.switch_kind(LightKind::Area);
        let area = descriptor.variant().as_area().copied().unwrap();
        assert_eq!((area.width(), area.height()), (1.0, 1.0));

        descriptor.switch_kind(LightKind::Point);
        assert_eq!(descriptor.variant().as_point().map(|p| p.range()), Some(10.0));

        assert_eq!(descriptor.switch_kind(LightKind::Point), 0);
    }

    #[test]
    fn test_geometry_setters_wrong_kind() {
        let mut descriptor = LightDescriptor::point(1.0);
        assert!(descriptor.set_outer_angle(10.0).is_none());
        assert!(descriptor.set_size(1.0, 1.0).is_none());
        assert_eq!(descriptor.set_range(-5.0).map(|c| c.value), Some(MIN_EXTENT));
    }

    #[test]
    fn test_owned_fields_per_kind() {
        let spot = LightDescriptor::new(LightKind::Spot).owned_fields();
        assert!(spot.contains(LightField::Color));
        assert!(spot.contains(LightField::OuterAngle));
        assert!(spot.contains(LightField::InnerAngle));
        assert!(!spot.contains(LightField::Range));

        let base = LightDescriptor::new(LightKind::Base).owned_fields();
        assert_eq!(base.len(), LightField::PHOTOMETRIC.len());
    }

    #[test]
    fn test_serde_skips_binding_and_repairs_on_load() {
        let mut descriptor = LightDescriptor::spot(45.0, 30.0);
        let _light = bound(&mut descriptor);

        let json = serde_json::to_string(&descriptor).unwrap();
        assert!(!json.contains("native"));

        let mut loaded: LightDescriptor = serde_json::from_str(
            r#"{"color":[2.0,0.5,0.5],"ambient":-1.0,"diffuse":1.0,"specular":0.5,
                "variant":{"kind":"spot","outer_angle":20.0,"inner_angle":40.0}}"#,
        )
        .unwrap();
        assert!(!loaded.is_bound());
        assert_eq!(loaded.color(), Vec3::new(1.0, 0.5, 0.5));
        assert_eq!(loaded.ambient(), 0.0);
        assert_eq!(loaded.variant().as_spot().map(|s| s.inner_angle()), Some(20.0));

        // Already valid, so an unbound resync has nothing to repair
        assert_eq!(loaded.resync(), 0);
    }

    #[test]
    fn test_loaded_descriptor_snapshot_in_range() {
        let spot: LightDescriptor = serde_json::from_str(
            r#"{"color":[2.0,0.5,0.5],"variant":{"kind":"spot","outer_angle":20.0,"inner_angle":40.0}}"#,
        )
        .unwrap();
        let snapshot = spot.snapshot(&Transform::default());
        assert_eq!(snapshot.color, Vec3::new(1.0, 0.5, 0.5));
        match snapshot.geometry {
            SnapshotGeometry::Spot {
                outer_angle,
                inner_angle,
                ..
            } => assert_eq!((outer_angle, inner_angle), (20.0, 20.0)),
            other => panic!("expected spot, got {:?}", other),
        }

        let point: LightDescriptor =
            serde_json::from_str(r#"{"variant":{"kind":"point","range":-5.0}}"#).unwrap();
        assert_eq!(
            point.snapshot(&Transform::default()).geometry,
            SnapshotGeometry::Point { range: MIN_EXTENT }
        );
    }

    #[test]
    fn test_snapshot_area_orientation() {
        use lux_math::Quat;
        use std::f32::consts::FRAC_PI_2;

        let descriptor = LightDescriptor::area(2.0, 3.0);
        let transform = Transform::from_translation(Vec3::new(0.0, 5.0, 0.0))
            .with_rotation(Quat::from_rotation_x(-FRAC_PI_2));

        let snapshot = descriptor.snapshot(&transform);
        assert_eq!(snapshot.kind, LightKind::Area);
        assert_eq!(snapshot.position, Vec3::new(0.0, 5.0, 0.0));

        match snapshot.geometry {
            SnapshotGeometry::Area {
                width,
                height,
                normal,
                ..
            } => {
                assert_eq!((width, height), (2.0, 3.0));
                // Facing straight down
                assert!((normal - Vec3::NEG_Y).length() < 1e-5);
            }
            other => panic!("expected area geometry, got {:?}", other),
        }
        assert_eq!(snapshot.area_corners().map(|c| c.len()), Some(4));
    }
}
