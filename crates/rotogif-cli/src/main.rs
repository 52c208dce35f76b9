//! Rotogif - spin a static logo into a looping GIF.
//!
//! A fixed, single-run transformation: reads the logo, writes the rotating
//! version next to it. No flags, no environment variables, no configuration;
//! any failure propagates out of `main` and exits non-zero.

use std::path::Path;

use rotogif_core::{render_rotation_gif, AnimateError, AnimationSettings};

const INPUT_PATH: &str = "static/logo.png";
const OUTPUT_PATH: &str = "static/logo-rotating.gif";

fn main() -> Result<(), AnimateError> {
    let settings = AnimationSettings::default();
    render_rotation_gif(Path::new(INPUT_PATH), Path::new(OUTPUT_PATH), &settings)?;

    println!("rotation animation created: {OUTPUT_PATH}");
    Ok(())
}
