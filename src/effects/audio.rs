//! Effects domain: skid audio one-shot playback.

use bevy::audio::PlaybackMode;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::movement::SkidEvent;

/// Handle to the skid clip. The file is optional; if it never loads, skids
/// simply play no sound.
#[derive(Resource, Debug, Default)]
pub(crate) struct SkidAudio {
    pub clip: Option<Handle<AudioSource>>,
}

/// Marker for the in-flight skid playback entity. Playback despawns the
/// entity when the clip ends, so "an entity with this marker exists" is
/// exactly "the skid channel is busy".
#[derive(Component, Debug)]
pub(crate) struct SkidAudioChannel;

pub(crate) fn load_skid_clip(asset_server: Res<AssetServer>, mut audio: ResMut<SkidAudio>) {
    audio.clip = Some(asset_server.load("audio/skid.ogg"));
}

pub(crate) fn play_skid_audio(
    mut commands: Commands,
    mut skid_events: MessageReader<SkidEvent>,
    audio: Res<SkidAudio>,
    sources: Res<Assets<AudioSource>>,
    playing: Query<(), With<SkidAudioChannel>>,
) {
    for _event in skid_events.read() {
        // Single channel: anything still audible on it suppresses the
        // next one-shot.
        if !playing.is_empty() {
            continue;
        }

        let Some(clip) = &audio.clip else {
            continue;
        };
        // An asset that never loaded counts as unassigned.
        if sources.get(clip).is_none() {
            continue;
        }

        commands.spawn((
            SkidAudioChannel,
            AudioPlayer::new(clip.clone()),
            PlaybackSettings {
                mode: PlaybackMode::Despawn,
                ..default()
            },
        ));
    }
}
