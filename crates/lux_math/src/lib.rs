// Re-export glam for convenience
pub use glam::*;

// LUX math types
mod interval;
mod transform;

pub use interval::Interval;
pub use transform::Transform;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_creation() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_interval_reexport() {
        let unit = Interval::UNIT;
        assert_eq!(unit.clamp(2.0), 1.0);
    }
}
