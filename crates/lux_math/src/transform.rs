// Transform utilities for light placement
//
// Lights read their position and orientation from the owning scene object.
// A light emits along its local -Z axis.

use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Transform components that can be composed into a matrix.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Translation
    pub translation: Vec3,

    /// Rotation (as quaternion)
    pub rotation: Quat,

    /// Scale
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Create a new transform with only translation.
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Default::default()
        }
    }

    /// Create a new transform from a 4x4 matrix.
    ///
    /// Decomposes the matrix into translation, rotation, and scale.
    pub fn from_matrix(matrix: Mat4) -> Self {
        let (scale, rotation, translation) = matrix.to_scale_rotation_translation();
        Self {
            translation,
            rotation,
            scale,
        }
    }

    /// Set the rotation.
    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    /// Convert to a 4x4 transformation matrix.
    ///
    /// Order: Scale -> Rotate -> Translate (SRT)
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }

    /// Emission direction (local -Z in world space, unit length).
    pub fn forward(&self) -> Vec3 {
        self.to_matrix().transform_vector3(Vec3::NEG_Z).normalize_or_zero()
    }

    /// Local +X in world space, unit length.
    pub fn right(&self) -> Vec3 {
        self.to_matrix().transform_vector3(Vec3::X).normalize_or_zero()
    }

    /// Local +Y in world space, unit length.
    pub fn up(&self) -> Vec3 {
        self.to_matrix().transform_vector3(Vec3::Y).normalize_or_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_matrix_roundtrip() {
        let transform = Transform {
            translation: Vec3::new(1.0, 2.0, 3.0),
            rotation: Quat::from_rotation_y(std::f32::consts::FRAC_PI_4),
            scale: Vec3::new(2.0, 2.0, 2.0),
        };

        let recovered = Transform::from_matrix(transform.to_matrix());

        assert!((recovered.translation - transform.translation).length() < 0.001);
        assert!((recovered.scale - transform.scale).length() < 0.001);
    }

    #[test]
    fn test_forward_identity() {
        let transform = Transform::default();
        assert!((transform.forward() - Vec3::NEG_Z).length() < 1e-6);
        assert!((transform.right() - Vec3::X).length() < 1e-6);
        assert!((transform.up() - Vec3::Y).length() < 1e-6);
    }

    #[test]
    fn test_forward_ignores_scale() {
        use std::f32::consts::PI;

        // 90 degrees around Y turns -Z into -X
        let transform = Transform {
            translation: Vec3::new(5.0, 0.0, 0.0),
            rotation: Quat::from_rotation_y(PI / 2.0),
            scale: Vec3::new(3.0, 3.0, 3.0),
        };

        let forward = transform.forward();
        assert!((forward - Vec3::NEG_X).length() < 1e-5);
        assert!((forward.length() - 1.0).abs() < 1e-5);
    }
}
