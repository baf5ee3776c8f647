//! Light Inspector - descriptor editor and native light viewer.
//!
//! The native light panel queries the descriptor's owned fields and shows
//! them read-only while bound, so the host never offers two editors for the
//! same value.
//!
//! # Features
//! - Native light rows with owned fields disabled
//! - Descriptor editing through the clamping setters
//! - Light type switching (routed back to the caller)

use lux_core::{
    FieldSet, FieldValue, LightDescriptor, LightField, LightKind, LightObject, LightVariant,
    NativeLight,
};
use lux_math::Vec3;

/// One native light field as shown in the inspector.
#[derive(Clone, Debug, PartialEq)]
pub struct InspectorRow {
    pub field: LightField,

    /// Display label
    pub label: &'static str,

    /// Value currently held by the native light
    pub value: Option<FieldValue>,

    /// Whether direct editing is disabled
    pub locked: bool,
}

/// Native light properties for a selected light object.
#[derive(Clone, Debug, Default)]
pub struct LightProperties {
    /// Object name
    pub name: String,

    /// Descriptor variant
    pub kind: LightKind,

    /// Whether the descriptor is bound to the native light
    pub is_bound: bool,

    /// Fields the descriptor owns
    pub owned: FieldSet,

    /// Native light rows (empty when the object has no native light)
    pub rows: Vec<InspectorRow>,
}

impl LightProperties {
    /// Collect properties from a light object.
    ///
    /// A row is locked if the bound descriptor owns it or the native light
    /// reports it locked.
    pub fn from_object(object: &LightObject) -> Self {
        let is_bound = object.descriptor.is_bound();
        let owned = object.descriptor.owned_fields();

        let rows = match object.native.as_ref().map(|n| n.try_borrow()) {
            Some(Ok(native)) => LightField::ALL
                .iter()
                .copied()
                .filter(|field| native.supports(*field))
                .map(|field| InspectorRow {
                    field,
                    label: field.label(),
                    value: native.read(field),
                    locked: (is_bound && owned.contains(field)) || native.is_field_locked(field),
                })
                .collect(),
            Some(Err(_)) => {
                log::warn!("Native light of '{}' is borrowed, skipping rows", object.name);
                Vec::new()
            }
            None => Vec::new(),
        };

        Self {
            name: object.name.clone(),
            kind: object.descriptor.kind(),
            is_bound,
            owned,
            rows,
        }
    }

    /// Rows a host inspector may still offer for editing.
    pub fn editable_rows(&self) -> impl Iterator<Item = &InspectorRow> {
        self.rows.iter().filter(|row| !row.locked)
    }
}

/// Render the native light panel.
pub fn render_native_light_inspector(ui: &mut egui::Ui, properties: Option<&LightProperties>) {
    ui.heading("Native Light");
    ui.separator();

    match properties {
        None => {
            ui.label("No light selected");
        }
        Some(props) => {
            ui.horizontal(|ui| {
                ui.label("Object:");
                ui.label(egui::RichText::new(&props.name).monospace());
            });

            ui.horizontal(|ui| {
                ui.label("Bound:");
                if props.is_bound {
                    ui.colored_label(egui::Color32::GREEN, "✓ Yes");
                } else {
                    ui.colored_label(egui::Color32::RED, "✗ No");
                }
            });

            ui.separator();

            if props.rows.is_empty() {
                ui.label("Object has no native light");
                return;
            }

            egui::Grid::new("native_light_grid")
                .num_columns(2)
                .striped(true)
                .show(ui, |ui| {
                    for row in &props.rows {
                        ui.label(row.label);
                        let text = row
                            .value
                            .map(|v| v.to_string())
                            .unwrap_or_else(|| "-".to_string());
                        ui.add_enabled(
                            !row.locked,
                            egui::Label::new(egui::RichText::new(text).monospace()),
                        )
                        .on_disabled_hover_text("Driven by the light descriptor");
                        ui.end_row();
                    }
                });
        }
    }
}

/// Result of one frame of descriptor editing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InspectorResponse {
    /// A field was edited (already clamped and pushed)
    pub changed: bool,

    /// The user picked a different light type. Route through
    /// `SyncBridge::switch_kind` so field locks follow.
    pub switch_to: Option<LightKind>,
}

/// Render the descriptor editor.
pub fn render_light_inspector(ui: &mut egui::Ui, descriptor: &mut LightDescriptor) -> InspectorResponse {
    let mut response = InspectorResponse::default();

    ui.heading("Light");
    ui.separator();

    let current = descriptor.kind();
    let mut selected = current;
    egui::ComboBox::from_label("Type")
        .selected_text(current.to_string())
        .show_ui(ui, |ui| {
            for kind in [LightKind::Base, LightKind::Point, LightKind::Spot, LightKind::Area] {
                ui.selectable_value(&mut selected, kind, kind.to_string());
            }
        });
    if selected != current {
        response.switch_to = Some(selected);
    }

    ui.separator();

    egui::Grid::new("light_descriptor_grid")
        .num_columns(2)
        .show(ui, |ui| {
            ui.label(LightField::Color.label());
            let mut rgb = descriptor.color().to_array();
            if ui.color_edit_button_rgb(&mut rgb).changed() {
                descriptor.set_color(Vec3::from_array(rgb));
                response.changed = true;
            }
            ui.end_row();

            let mut ambient = descriptor.ambient();
            if scalar_row(ui, LightField::Ambient, &mut ambient, 0.01, "") {
                descriptor.set_ambient(ambient);
                response.changed = true;
            }

            let mut diffuse = descriptor.diffuse();
            if scalar_row(ui, LightField::Diffuse, &mut diffuse, 0.01, "") {
                descriptor.set_diffuse(diffuse);
                response.changed = true;
            }

            let mut specular = descriptor.specular();
            if scalar_row(ui, LightField::Specular, &mut specular, 0.01, "") {
                descriptor.set_specular(specular);
                response.changed = true;
            }

            let variant = *descriptor.variant();
            match variant {
                LightVariant::Base => {}
                LightVariant::Point(point) => {
                    let mut range = point.range();
                    if scalar_row(ui, LightField::Range, &mut range, 0.1, "") {
                        descriptor.set_range(range);
                        response.changed = true;
                    }
                }
                LightVariant::Spot(spot) => {
                    let mut outer = spot.outer_angle();
                    if scalar_row(ui, LightField::OuterAngle, &mut outer, 0.5, "°") {
                        descriptor.set_outer_angle(outer);
                        response.changed = true;
                    }
                    let mut inner = spot.inner_angle();
                    if scalar_row(ui, LightField::InnerAngle, &mut inner, 0.5, "°") {
                        descriptor.set_inner_angle(inner);
                        response.changed = true;
                    }
                }
                LightVariant::Area(area) => {
                    let mut width = area.width();
                    let mut height = area.height();
                    let width_changed = scalar_row(ui, LightField::Width, &mut width, 0.05, "");
                    let height_changed = scalar_row(ui, LightField::Height, &mut height, 0.05, "");
                    if width_changed || height_changed {
                        descriptor.set_size(width, height);
                        response.changed = true;
                    }
                }
            }
        });

    response
}

/// One labelled drag value. Range checks are left to the descriptor setters.
fn scalar_row(ui: &mut egui::Ui, field: LightField, value: &mut f32, speed: f64, suffix: &str) -> bool {
    ui.label(field.label());
    let changed = ui
        .add(egui::DragValue::new(value).speed(speed).suffix(suffix))
        .changed();
    ui.end_row();
    changed
}
