//! Movement domain: debug draw for the ground probe.

use bevy::prelude::*;

use crate::movement::{MovementTuning, Player};

/// Draws the ground probe ray as a gizmo line each frame. Diagnostics only.
pub(crate) fn draw_ground_ray(
    tuning: Res<MovementTuning>,
    query: Query<&Transform, With<Player>>,
    mut gizmos: Gizmos,
) {
    for transform in &query {
        let origin = transform.translation.truncate() + tuning.ground_ray_offset;
        let end = origin + Vec2::NEG_Y * tuning.ground_ray_length;
        gizmos.line_2d(origin, end, Color::srgb(0.0, 1.0, 0.0));
    }
}
