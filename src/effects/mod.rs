//! Effects domain: cosmetic skid feedback, audio one-shot and dust burst.
//!
//! Everything here reacts to [`SkidEvent`](crate::movement::SkidEvent) and
//! is fire-and-forget: missing assets mean the effect is skipped, never an
//! error.

mod audio;
mod particles;

use bevy::prelude::*;

pub struct EffectsPlugin;

impl Plugin for EffectsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<audio::SkidAudio>()
            .add_systems(Startup, audio::load_skid_clip)
            .add_systems(
                Update,
                (
                    audio::play_skid_audio,
                    particles::spawn_skid_dust,
                    particles::update_skid_dust,
                ),
            );
    }
}
