//! Read-only light parameters handed to the downstream ray tracer.

use lux_math::Vec3;
use serde::{Deserialize, Serialize};

use crate::field::{Color, LightKind};

/// Geometry-specific part of a snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SnapshotGeometry {
    None,
    Point {
        range: f32,
    },
    Spot {
        /// Unit emission direction
        direction: Vec3,
        outer_angle: f32,
        inner_angle: f32,
    },
    Area {
        width: f32,
        height: f32,
        /// Unit emission direction (plane normal)
        normal: Vec3,
        /// Unit axis along `width`
        right: Vec3,
        /// Unit axis along `height`
        up: Vec3,
    },
}

/// Finalized values of one light, taken once per render request.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LightSnapshot {
    pub kind: LightKind,
    pub color: Color,
    pub ambient: f32,
    pub diffuse: f32,
    pub specular: f32,
    /// World-space position of the owning object
    pub position: Vec3,
    pub geometry: SnapshotGeometry,
}

impl LightSnapshot {
    /// Light color scaled by the diffuse coefficient.
    pub fn diffuse_color(&self) -> Color {
        self.color * self.diffuse
    }

    /// Light color scaled by the specular coefficient.
    pub fn specular_color(&self) -> Color {
        self.color * self.specular
    }

    /// Light color scaled by the ambient coefficient.
    pub fn ambient_color(&self) -> Color {
        self.color * self.ambient
    }

    /// Corners of an area light in world space, in winding order starting
    /// at the (-right, -up) corner.
    pub fn area_corners(&self) -> Option<[Vec3; 4]> {
        match self.geometry {
            SnapshotGeometry::Area {
                width,
                height,
                right,
                up,
                ..
            } => {
                let half_right = right * (width * 0.5);
                let half_up = up * (height * 0.5);
                let c = self.position;
                Some([
                    c - half_right - half_up,
                    c + half_right - half_up,
                    c + half_right + half_up,
                    c - half_right + half_up,
                ])
            }
            _ => None,
        }
    }
}
