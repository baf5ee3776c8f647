//! LUX Viewport - host inspector panels for lights.

pub mod light_inspector;

pub use light_inspector::{
    render_light_inspector, render_native_light_inspector, InspectorResponse, InspectorRow,
    LightProperties,
};
