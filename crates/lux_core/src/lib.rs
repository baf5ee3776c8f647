//! LUX Core - Ray-tracer light descriptors and native light synchronization.
//!
//! This crate provides:
//!
//! - **Descriptors**: `LightDescriptor` with point, spot and area variants
//! - **Synchronization**: `SyncBridge` mirrors descriptors onto the host's
//!   native lights with compare-before-write
//! - **Host glue**: `HostBindingAdapter` maps lifecycle signals to the bridge
//! - **Snapshots**: read-only `LightSnapshot`s for the downstream ray tracer
//!
//! # Example
//!
//! ```ignore
//! use lux_core::{LightDescriptor, MemoryLight, NativeHandle, SyncBridge};
//!
//! let native: NativeHandle = MemoryLight::new().shared();
//! let mut spot = LightDescriptor::spot(30.0, 25.0);
//! let mut bridge = SyncBridge::default();
//!
//! bridge.on_bind(&mut spot, Some(&native))?;
//! spot.set_outer_angle(10.0);
//! bridge.on_scene_edit(&mut spot);
//! ```

pub mod descriptor;
pub mod error;
pub mod field;
pub mod host;
pub mod limits;
pub mod native;
pub mod scene;
pub mod snapshot;
pub mod sync;
pub mod variant;

// Re-export commonly used types
pub use descriptor::LightDescriptor;
pub use error::{BindingError, BindingResult};
pub use field::{Color, FieldSet, FieldValue, LightField, LightKind};
pub use host::{HostBindingAdapter, HostSignal, LifecycleHooks, SignalOutcome};
pub use limits::Clamped;
pub use native::{MemoryLight, NativeHandle, NativeLight};
pub use scene::{LightObject, Scene};
pub use snapshot::{LightSnapshot, SnapshotGeometry};
pub use sync::{SyncBridge, SyncConfig};
pub use variant::{AreaLight, Geometry, LightVariant, PointLight, SpotLight};
