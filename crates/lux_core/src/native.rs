//! The host renderer's light object, seen through a get/set surface.
//!
//! Descriptors never own a native light. The host scene graph holds the
//! strong reference; descriptors keep a `Weak` one.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::field::{FieldSet, FieldValue, LightField};

/// Get/set surface of a host-rendered light.
pub trait NativeLight {
    /// Whether this light has a control for `field`. Unsupported fields are
    /// never read or written.
    fn supports(&self, field: LightField) -> bool {
        let _ = field;
        true
    }

    /// Current value of `field`, if the light reports one.
    ///
    /// Bridges compare against this before writing, so a supported field
    /// must read back exactly the last value written to it. A light that
    /// quantizes or returns `None` for a supported field is rewritten on
    /// every resync.
    fn read(&self, field: LightField) -> Option<FieldValue>;

    fn write(&mut self, field: LightField, value: FieldValue);

    /// Hide/disable direct editing of `field` in the host's inspector.
    fn set_field_locked(&mut self, field: LightField, locked: bool);

    fn is_field_locked(&self, field: LightField) -> bool;
}

/// Shared handle the host scene graph owns.
pub type NativeHandle = Rc<RefCell<dyn NativeLight>>;

/// In-memory native light.
///
/// Stands in for a host renderer light in headless sessions and counts
/// every write so redundant pushes are observable.
#[derive(Clone, Debug, Default)]
pub struct MemoryLight {
    values: HashMap<LightField, FieldValue>,
    locked: FieldSet,
    /// None means every field is supported
    supported: Option<FieldSet>,
    history: Vec<(LightField, FieldValue)>,
}

impl MemoryLight {
    pub fn new() -> Self {
        Self::default()
    }

    /// A light that only exposes the given controls.
    pub fn with_supported(fields: impl IntoIterator<Item = LightField>) -> Self {
        Self {
            supported: Some(fields.into_iter().collect()),
            ..Default::default()
        }
    }

    /// Wrap in the shared handle shape a host scene graph would hold.
    pub fn shared(self) -> Rc<RefCell<MemoryLight>> {
        Rc::new(RefCell::new(self))
    }

    /// Total number of writes received.
    pub fn write_count(&self) -> usize {
        self.history.len()
    }

    /// Number of writes received for one field.
    pub fn writes_to(&self, field: LightField) -> usize {
        self.history.iter().filter(|(f, _)| *f == field).count()
    }

    /// Every write in the order it arrived.
    pub fn history(&self) -> &[(LightField, FieldValue)] {
        &self.history
    }

    pub fn value(&self, field: LightField) -> Option<FieldValue> {
        self.values.get(&field).copied()
    }

    pub fn scalar(&self, field: LightField) -> Option<f32> {
        self.value(field).and_then(|v| v.as_scalar())
    }

    /// An edit made through the host's own inspector.
    ///
    /// Returns false, leaving the value untouched, when the field is locked.
    pub fn inspector_edit(&mut self, field: LightField, value: FieldValue) -> bool {
        if self.locked.contains(field) {
            return false;
        }
        self.values.insert(field, value);
        true
    }
}

impl NativeLight for MemoryLight {
    fn supports(&self, field: LightField) -> bool {
        self.supported
            .as_ref()
            .map_or(true, |fields| fields.contains(field))
    }

    fn read(&self, field: LightField) -> Option<FieldValue> {
        self.values.get(&field).copied()
    }

    fn write(&mut self, field: LightField, value: FieldValue) {
        self.values.insert(field, value);
        self.history.push((field, value));
    }

    fn set_field_locked(&mut self, field: LightField, locked: bool) {
        if locked {
            self.locked.insert(field);
        } else {
            self.locked.remove(field);
        }
    }

    fn is_field_locked(&self, field: LightField) -> bool {
        self.locked.contains(field)
    }
}
