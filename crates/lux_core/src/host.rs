//! Translation from host lifecycle signals to bridge entry points.

use crate::descriptor::LightDescriptor;
use crate::error::{BindingError, BindingResult};
use crate::native::NativeHandle;
use crate::scene::LightObject;
use crate::sync::SyncBridge;

/// Lifecycle signals a host editor/runtime emits for a light object.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostSignal {
    /// First activation of the object
    Bind,
    /// Any scene edit notification, possibly once per redraw
    SceneEdited,
    /// The object is deactivated or about to be destroyed
    Unbind,
}

/// What a dispatched signal did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignalOutcome {
    Bound { writes: usize },
    BindFailed(BindingError),
    Synced { writes: usize },
    Unbound { was_bound: bool },
}

/// The three entry points a binding adapter forwards to.
pub trait LifecycleHooks {
    fn on_bind(
        &mut self,
        descriptor: &mut LightDescriptor,
        native: Option<&NativeHandle>,
    ) -> BindingResult<usize>;

    fn on_scene_edit(&mut self, descriptor: &mut LightDescriptor) -> usize;

    fn on_unbind(&mut self, descriptor: &mut LightDescriptor) -> bool;
}

impl LifecycleHooks for SyncBridge {
    fn on_bind(
        &mut self,
        descriptor: &mut LightDescriptor,
        native: Option<&NativeHandle>,
    ) -> BindingResult<usize> {
        SyncBridge::on_bind(self, descriptor, native)
    }

    fn on_scene_edit(&mut self, descriptor: &mut LightDescriptor) -> usize {
        SyncBridge::on_scene_edit(self, descriptor)
    }

    fn on_unbind(&mut self, descriptor: &mut LightDescriptor) -> bool {
        SyncBridge::on_unbind(self, descriptor)
    }
}

/// Stateless shim between host signals and [`LifecycleHooks`].
///
/// Errors are turned into outcomes; nothing propagates into the host's
/// callback.
pub struct HostBindingAdapter<'a, H: LifecycleHooks> {
    hooks: &'a mut H,
}

impl<'a, H: LifecycleHooks> HostBindingAdapter<'a, H> {
    pub fn new(hooks: &'a mut H) -> Self {
        Self { hooks }
    }

    pub fn dispatch(&mut self, object: &mut LightObject, signal: HostSignal) -> SignalOutcome {
        match signal {
            HostSignal::Bind => {
                match self
                    .hooks
                    .on_bind(&mut object.descriptor, object.native.as_ref())
                {
                    Ok(writes) => SignalOutcome::Bound { writes },
                    Err(e) => {
                        log::warn!("Light object '{}' could not be bound: {}", object.name, e);
                        SignalOutcome::BindFailed(e)
                    }
                }
            }
            HostSignal::SceneEdited => SignalOutcome::Synced {
                writes: self.hooks.on_scene_edit(&mut object.descriptor),
            },
            HostSignal::Unbind => SignalOutcome::Unbound {
                was_bound: self.hooks.on_unbind(&mut object.descriptor),
            },
        }
    }
}
