//! Minimal particle example: drive size and alpha over a particle's life.

use std::error::Error;

use lifecurve::{Curve, persist, preset_from_name};

fn main() -> Result<(), Box<dyn Error>> {
    // Size swells quickly, then shrinks slowly.
    let size = Curve::builder()
        .anchor_point((0.0, 0.2))
        .control_point1((0.1, 1.5))
        .control_point2((0.2, 1.0))
        .anchor_point((0.3, 1.0))
        .anchor_point((1.0, 0.0))
        .build();
    let alpha = preset_from_name("fade")?;

    for step in 0..=10 {
        let life = step as f32 / 10.0;
        println!(
            "life {life:.1}: size {:.3} alpha {:.3}",
            size.value(life),
            alpha.value(life)
        );
    }

    println!("{}", persist::to_json_pretty(&size)?);
    Ok(())
}
