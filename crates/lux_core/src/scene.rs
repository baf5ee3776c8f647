//! Scene of light objects owned by the host.
//!
//! Each object owns its descriptor and, through the host, the strong
//! reference to its native light. Descriptors only ever hold a weak one.

use lux_math::Transform;

use crate::descriptor::LightDescriptor;
use crate::native::NativeHandle;
use crate::snapshot::LightSnapshot;

/// A scene object carrying a light.
pub struct LightObject {
    /// Unique identifier within the scene
    pub id: usize,

    /// Object name
    pub name: String,

    /// Object transform (source of light position and orientation)
    pub transform: Transform,

    /// Ray-tracer light parameters
    pub descriptor: LightDescriptor,

    /// Host-rendered light, if the object has one
    pub native: Option<NativeHandle>,
}

impl LightObject {
    /// Create a new light object without a native light.
    pub fn new(id: usize, name: impl Into<String>, descriptor: LightDescriptor) -> Self {
        Self {
            id,
            name: name.into(),
            transform: Transform::default(),
            descriptor,
            native: None,
        }
    }

    /// Set the transform.
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Attach a native light.
    pub fn with_native(mut self, native: NativeHandle) -> Self {
        self.native = Some(native);
        self
    }

    /// Finalized light values at the object's current transform.
    pub fn snapshot(&self) -> LightSnapshot {
        self.descriptor.snapshot(&self.transform)
    }
}

/// A collection of light objects.
#[derive(Default)]
pub struct Scene {
    /// Light objects in insertion order
    objects: Vec<LightObject>,

    /// Next identifier to hand out
    next_id: usize,

    /// Scene name
    pub name: String,
}

impl Scene {
    /// Create an empty scene.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Add a light object and return its ID.
    pub fn add_light(
        &mut self,
        name: impl Into<String>,
        descriptor: LightDescriptor,
        transform: Transform,
        native: Option<NativeHandle>,
    ) -> usize {
        let id = self.next_id;
        self.next_id += 1;

        let mut object = LightObject::new(id, name, descriptor).with_transform(transform);
        object.native = native;
        self.objects.push(object);
        id
    }

    /// Get a light object by ID.
    pub fn get(&self, id: usize) -> Option<&LightObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    /// Get a mutable light object by ID.
    pub fn get_mut(&mut self, id: usize) -> Option<&mut LightObject> {
        self.objects.iter_mut().find(|o| o.id == id)
    }

    /// Find a light object by name.
    pub fn find(&self, name: &str) -> Option<&LightObject> {
        self.objects.iter().find(|o| o.name == name)
    }

    /// Remove a light object, handing it back so the caller can unbind it.
    pub fn remove(&mut self, id: usize) -> Option<LightObject> {
        let index = self.objects.iter().position(|o| o.id == id)?;
        Some(self.objects.remove(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &LightObject> {
        self.objects.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut LightObject> {
        self.objects.iter_mut()
    }

    /// Get light count.
    pub fn light_count(&self) -> usize {
        self.objects.len()
    }

    /// Snapshot every light, in insertion order.
    pub fn snapshots(&self) -> Vec<LightSnapshot> {
        self.objects.iter().map(LightObject::snapshot).collect()
    }
}
