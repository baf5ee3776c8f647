//! Field identities shared by descriptors, native lights and inspectors.

use std::collections::BTreeSet;
use std::fmt;

use lux_math::Vec3;
use serde::{Deserialize, Serialize};

/// Color type alias (RGB, each channel 0-1)
pub type Color = Vec3;

/// The fixed set of light variants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LightKind {
    /// Photometric parameters only, no geometry
    #[default]
    Base,
    Point,
    Spot,
    Area,
}

impl fmt::Display for LightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LightKind::Base => "base",
            LightKind::Point => "point",
            LightKind::Spot => "spot",
            LightKind::Area => "area",
        };
        f.write_str(name)
    }
}

/// A single logical value mirrored between a descriptor and a native light.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LightField {
    Kind,
    Color,
    Ambient,
    Diffuse,
    Specular,
    Range,
    OuterAngle,
    InnerAngle,
    Width,
    Height,
}

impl LightField {
    pub const ALL: [LightField; 10] = [
        LightField::Kind,
        LightField::Color,
        LightField::Ambient,
        LightField::Diffuse,
        LightField::Specular,
        LightField::Range,
        LightField::OuterAngle,
        LightField::InnerAngle,
        LightField::Width,
        LightField::Height,
    ];

    /// Fields every variant mirrors.
    pub const PHOTOMETRIC: [LightField; 5] = [
        LightField::Kind,
        LightField::Color,
        LightField::Ambient,
        LightField::Diffuse,
        LightField::Specular,
    ];

    /// Human readable label for inspector rows.
    pub fn label(self) -> &'static str {
        match self {
            LightField::Kind => "Type",
            LightField::Color => "Color",
            LightField::Ambient => "Ambient",
            LightField::Diffuse => "Diffuse",
            LightField::Specular => "Specular",
            LightField::Range => "Range",
            LightField::OuterAngle => "Outer Angle",
            LightField::InnerAngle => "Inner Angle",
            LightField::Width => "Width",
            LightField::Height => "Height",
        }
    }
}

/// A value carried by a [`LightField`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldValue {
    Kind(LightKind),
    Color(Color),
    Scalar(f32),
}

impl FieldValue {
    pub fn as_scalar(&self) -> Option<f32> {
        match self {
            FieldValue::Scalar(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_color(&self) -> Option<Color> {
        match self {
            FieldValue::Color(c) => Some(*c),
            _ => None,
        }
    }

    pub fn as_kind(&self) -> Option<LightKind> {
        match self {
            FieldValue::Kind(k) => Some(*k),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Kind(kind) => write!(f, "{}", kind),
            FieldValue::Color(c) => write!(f, "({:.3}, {:.3}, {:.3})", c.x, c.y, c.z),
            FieldValue::Scalar(v) => write!(f, "{:.3}", v),
        }
    }
}

/// An ordered set of fields.
///
/// Host inspectors query a descriptor's owned set to decide which native
/// fields must not be offered for direct editing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldSet(BTreeSet<LightField>);

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: LightField) -> bool {
        self.0.insert(field)
    }

    pub fn remove(&mut self, field: LightField) -> bool {
        self.0.remove(&field)
    }

    pub fn contains(&self, field: LightField) -> bool {
        self.0.contains(&field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = LightField> + '_ {
        self.0.iter().copied()
    }

    /// Fields in `self` that are not in `other`.
    pub fn difference<'a>(&'a self, other: &'a FieldSet) -> impl Iterator<Item = LightField> + 'a {
        self.0.difference(&other.0).copied()
    }
}

impl FromIterator<LightField> for FieldSet {
    fn from_iter<I: IntoIterator<Item = LightField>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<LightField> for FieldSet {
    fn extend<I: IntoIterator<Item = LightField>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}
