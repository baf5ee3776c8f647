//! Example: Bind a spot light and watch the native writes.
//!
//! Run with: RUST_LOG=debug cargo run --example spot_edit

use lux_core::{
    HostBindingAdapter, HostSignal, LightDescriptor, LightField, LightObject, MemoryLight,
    NativeLight, SyncBridge,
};

fn main() {
    env_logger::init();

    let native = MemoryLight::new().shared();
    let mut object = LightObject::new(0, "key", LightDescriptor::spot(30.0, 25.0))
        .with_native(native.clone());
    let mut bridge = SyncBridge::default();
    let mut adapter = HostBindingAdapter::new(&mut bridge);

    println!("bind: {:?}", adapter.dispatch(&mut object, HostSignal::Bind));

    let clamped = object.descriptor.set_outer_angle(10.0);
    println!("set outer angle 10: {:?}", clamped);

    for frame in 0..3 {
        let outcome = adapter.dispatch(&mut object, HostSignal::SceneEdited);
        println!("redraw {}: {:?}", frame, outcome);
    }

    let light = native.borrow();
    println!("\n--- Native light ---");
    for field in [LightField::OuterAngle, LightField::InnerAngle] {
        println!(
            "  {:<12} {:?} (locked: {})",
            field.label(),
            light.scalar(field),
            light.is_field_locked(field)
        );
    }
    println!("  total writes: {}", light.write_count());
}
