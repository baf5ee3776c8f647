//! Reconciliation between descriptors and native lights.
//!
//! `SyncBridge` is the explicit context that owns the set of claimed native
//! lights. One native light can be bound to at most one descriptor.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use serde::{Deserialize, Serialize};

use crate::descriptor::LightDescriptor;
use crate::error::{BindingError, BindingResult};
use crate::field::{FieldSet, LightField, LightKind};
use crate::native::{NativeHandle, NativeLight};

/// Bridge behaviour switches.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Lock owned fields in the host inspector while bound
    pub lock_owned_fields: bool,

    /// Release those locks again on unbind
    pub unlock_on_unbind: bool,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            lock_owned_fields: true,
            unlock_on_unbind: true,
        }
    }
}

/// Orchestrates bind, per-edit resync and unbind for descriptors.
#[derive(Default)]
pub struct SyncBridge {
    config: SyncConfig,
    claims: Vec<Weak<RefCell<dyn NativeLight>>>,
}

impl SyncBridge {
    pub fn new(config: SyncConfig) -> Self {
        Self {
            config,
            claims: Vec::new(),
        }
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// Number of live native lights currently bound.
    pub fn claim_count(&self) -> usize {
        self.claims.iter().filter(|c| c.strong_count() > 0).count()
    }

    /// Whether `native` is bound to some descriptor.
    pub fn is_claimed(&self, native: &NativeHandle) -> bool {
        self.claims
            .iter()
            .filter_map(Weak::upgrade)
            .any(|claimed| Rc::ptr_eq(&claimed, native))
    }

    /// Bind `descriptor` to `native` and lock the fields it now owns.
    ///
    /// A missing native light leaves the descriptor unbound; `AlreadyBound`
    /// and `NativeBusy` leave it, its claim and its locks as they were. Never
    /// panics. Returns the number of native writes.
    pub fn on_bind(
        &mut self,
        descriptor: &mut LightDescriptor,
        native: Option<&NativeHandle>,
    ) -> BindingResult<usize> {
        self.claims.retain(|c| c.strong_count() > 0);

        let current = descriptor.native_handle();
        let rebinding_same = matches!(
            (&current, native),
            (Some(current), Some(native)) if Rc::ptr_eq(current, native)
        );

        if let Some(native) = native {
            if !rebinding_same && self.is_claimed(native) {
                log::warn!("Refusing to bind {} light: native light already bound", descriptor.kind());
                return Err(BindingError::AlreadyBound);
            }
        }

        let result = descriptor.bind(native);

        // The old claim goes only once the descriptor has actually let go of
        // it. A busy new light leaves the old binding in place.
        if let (Some(current), false) = (current, rebinding_same) {
            let still_held = descriptor
                .native_handle()
                .is_some_and(|held| Rc::ptr_eq(&held, &current));
            if !still_held {
                self.release(descriptor, &current);
            }
        }

        let writes = result.map_err(|e| {
            log::warn!("Binding {} light failed: {}", descriptor.kind(), e);
            e
        })?;

        if let Some(native) = native {
            if !rebinding_same {
                self.claims.push(Rc::downgrade(native));
            }
            if self.config.lock_owned_fields {
                set_locks(native, descriptor.owned_fields().iter(), true);
            }
        }

        Ok(writes)
    }

    /// Resync after a host edit notification. Safe to call on every redraw.
    pub fn on_scene_edit(&mut self, descriptor: &mut LightDescriptor) -> usize {
        descriptor.resync()
    }

    /// Drop the binding. Native values stay at their last synchronized state.
    pub fn on_unbind(&mut self, descriptor: &mut LightDescriptor) -> bool {
        match descriptor.native_handle() {
            Some(native) => {
                self.release(descriptor, &native);
                descriptor.unbind()
            }
            None => descriptor.unbind(),
        }
    }

    /// Switch the descriptor's variant and move the field locks with it.
    pub fn switch_kind(&mut self, descriptor: &mut LightDescriptor, kind: LightKind) -> usize {
        let before = descriptor.owned_fields();
        let writes = descriptor.switch_kind(kind);

        if let (Some(native), true) = (descriptor.native_handle(), self.config.lock_owned_fields) {
            let after = descriptor.owned_fields();
            set_locks(&native, before.difference(&after), false);
            set_locks(&native, after.iter(), true);
        }
        writes
    }

    fn release(&mut self, descriptor: &LightDescriptor, native: &NativeHandle) {
        self.claims.retain(|claim| {
            claim
                .upgrade()
                .is_some_and(|claimed| !Rc::ptr_eq(&claimed, native))
        });

        if self.config.lock_owned_fields && self.config.unlock_on_unbind {
            let owned: FieldSet = descriptor.owned_fields();
            set_locks(native, owned.iter(), false);
        }
    }
}

fn set_locks(native: &NativeHandle, fields: impl Iterator<Item = LightField>, locked: bool) {
    match native.try_borrow_mut() {
        Ok(mut light) => {
            for field in fields {
                light.set_field_locked(field, locked);
            }
        }
        Err(_) => log::warn!("Native light is borrowed elsewhere, field locks unchanged"),
    }
}
