//! Content domain: tuning file loading and application.

mod data;
mod loader;

pub use data::MovementTuningDef;

use bevy::prelude::*;
use std::path::Path;

use crate::movement::MovementTuning;

const TUNING_PATH: &str = "assets/data/tuning.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, load_tuning);
    }
}

/// Apply the tuning file over the compiled-in defaults. A missing or
/// malformed file is not fatal: the defaults stand and we log a warning.
fn load_tuning(mut tuning: ResMut<MovementTuning>) {
    match loader::load_tuning_file(Path::new(TUNING_PATH)) {
        Ok(def) => {
            def.apply(&mut tuning);
            info!("Loaded movement tuning from {}", TUNING_PATH);
        }
        Err(e) => {
            warn!("{}; using default movement tuning", e);
        }
    }
}
