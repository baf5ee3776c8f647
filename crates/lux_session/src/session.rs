//! Session files: a light scene plus a scripted sequence of host signals
//! and edits, replayed against in-memory native lights.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use anyhow::{bail, Context, Result};
use lux_core::{
    Color, HostBindingAdapter, HostSignal, LightDescriptor, LightKind, LightSnapshot,
    MemoryLight, NativeHandle, Scene, SignalOutcome, SyncBridge, SyncConfig,
};
use lux_math::{EulerRot, Quat, Transform, Vec3};
use serde::{Deserialize, Serialize};

/// A complete session file.
#[derive(Debug, Deserialize)]
pub struct SessionFile {
    /// Scene name
    #[serde(default = "default_scene_name")]
    pub name: String,

    /// Bridge configuration
    #[serde(default)]
    pub sync: SyncConfig,

    pub lights: Vec<LightSpec>,

    #[serde(default)]
    pub steps: Vec<Step>,
}

fn default_scene_name() -> String {
    "session".to_string()
}

fn default_true() -> bool {
    true
}

/// One light object in the session scene.
#[derive(Debug, Deserialize)]
pub struct LightSpec {
    pub name: String,

    #[serde(default)]
    pub translation: Vec3,

    /// Euler XYZ rotation in degrees
    #[serde(default)]
    pub rotation_deg: Vec3,

    #[serde(default)]
    pub descriptor: LightDescriptor,

    /// Whether the object has a native light at all
    #[serde(default = "default_true")]
    pub native: bool,
}

impl LightSpec {
    fn transform(&self) -> Transform {
        let r = self.rotation_deg;
        Transform::from_translation(self.translation).with_rotation(Quat::from_euler(
            EulerRot::XYZ,
            r.x.to_radians(),
            r.y.to_radians(),
            r.z.to_radians(),
        ))
    }
}

/// One scripted step addressed to a light by name.
#[derive(Debug, Deserialize)]
pub struct Step {
    pub light: String,

    #[serde(flatten)]
    pub action: Action,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    Bind,
    SceneEdited,
    Unbind,
    SetColor { value: Color },
    SetAmbient { value: f32 },
    SetDiffuse { value: f32 },
    SetSpecular { value: f32 },
    SetRange { value: f32 },
    SetOuterAngle { value: f32 },
    SetInnerAngle { value: f32 },
    SetSize { width: f32, height: f32 },
    SwitchKind { kind: LightKind },
    /// Unbind and destroy the object
    Remove,
}

/// Final state of one light after the session.
#[derive(Debug, Serialize)]
pub struct LightReport {
    pub name: String,
    pub bound: bool,
    /// Writes the native light received, None without a native light
    pub native_writes: Option<usize>,
    pub snapshot: LightSnapshot,
}

/// Everything a session run produced.
#[derive(Debug, Serialize)]
pub struct SessionReport {
    pub scene: String,
    pub steps: usize,
    pub clamped_edits: usize,
    pub failed_binds: usize,
    pub lights: Vec<LightReport>,
}

impl SessionFile {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Invalid session file")
    }
}

/// Replay a session and report the finalized light values.
pub fn run_session(file: SessionFile) -> Result<SessionReport> {
    let mut scene = Scene::new(file.name);
    let mut bridge = SyncBridge::new(file.sync);
    let mut natives: HashMap<usize, Rc<RefCell<MemoryLight>>> = HashMap::new();
    let mut ids: HashMap<String, usize> = HashMap::new();

    for spec in file.lights {
        if ids.contains_key(&spec.name) {
            bail!("Duplicate light name '{}'", spec.name);
        }

        let transform = spec.transform();
        let memory = spec.native.then(|| MemoryLight::new().shared());
        let native = memory.clone().map(|m| m as NativeHandle);
        let id = scene.add_light(spec.name.clone(), spec.descriptor, transform, native);

        if let Some(memory) = memory {
            natives.insert(id, memory);
        }
        ids.insert(spec.name, id);
    }
    log::info!("Loaded {} lights into '{}'", scene.light_count(), scene.name);

    let mut clamped_edits = 0;
    let mut failed_binds = 0;
    let steps = file.steps.len();

    for (index, step) in file.steps.into_iter().enumerate() {
        let id = *ids
            .get(&step.light)
            .with_context(|| format!("Step {} names unknown light '{}'", index, step.light))?;

        if let Action::Remove = step.action {
            if let Some(mut object) = scene.remove(id) {
                HostBindingAdapter::new(&mut bridge).dispatch(&mut object, HostSignal::Unbind);
                natives.remove(&id);
                ids.remove(&step.light);
                log::info!("Removed light '{}'", object.name);
            }
            continue;
        }

        let object = scene
            .get_mut(id)
            .with_context(|| format!("Light '{}' no longer exists", step.light))?;

        let clamped = match step.action {
            Action::Bind | Action::SceneEdited | Action::Unbind => {
                let signal = match step.action {
                    Action::Bind => HostSignal::Bind,
                    Action::SceneEdited => HostSignal::SceneEdited,
                    _ => HostSignal::Unbind,
                };
                let outcome = HostBindingAdapter::new(&mut bridge).dispatch(object, signal);
                if let SignalOutcome::BindFailed(_) = outcome {
                    failed_binds += 1;
                }
                log::debug!("Step {}: {:?} -> {:?}", index, signal, outcome);
                false
            }
            Action::SetColor { value } => object.descriptor.set_color(value).was_clamped(),
            Action::SetAmbient { value } => object.descriptor.set_ambient(value).was_clamped(),
            Action::SetDiffuse { value } => object.descriptor.set_diffuse(value).was_clamped(),
            Action::SetSpecular { value } => object.descriptor.set_specular(value).was_clamped(),
            Action::SetRange { value } => {
                geometry_edit(&step.light, "range", object.descriptor.set_range(value))
            }
            Action::SetOuterAngle { value } => {
                geometry_edit(&step.light, "outer angle", object.descriptor.set_outer_angle(value))
            }
            Action::SetInnerAngle { value } => {
                geometry_edit(&step.light, "inner angle", object.descriptor.set_inner_angle(value))
            }
            Action::SetSize { width, height } => match object.descriptor.set_size(width, height) {
                Some((w, h)) => w.was_clamped() || h.was_clamped(),
                None => {
                    log::warn!("Light '{}' has no size, ignoring edit", step.light);
                    false
                }
            },
            Action::SwitchKind { kind } => {
                bridge.switch_kind(&mut object.descriptor, kind);
                false
            }
            Action::Remove => false,
        };

        if clamped {
            clamped_edits += 1;
        }
    }

    let lights = scene
        .iter()
        .map(|object| LightReport {
            name: object.name.clone(),
            bound: object.descriptor.is_bound(),
            native_writes: natives.get(&object.id).map(|m| m.borrow().write_count()),
            snapshot: object.snapshot(),
        })
        .collect();

    Ok(SessionReport {
        scene: scene.name.clone(),
        steps,
        clamped_edits,
        failed_binds,
        lights,
    })
}

fn geometry_edit(light: &str, field: &str, result: Option<lux_core::Clamped<f32>>) -> bool {
    match result {
        Some(clamped) => clamped.was_clamped(),
        None => {
            log::warn!("Light '{}' has no {}, ignoring edit", light, field);
            false
        }
    }
}
