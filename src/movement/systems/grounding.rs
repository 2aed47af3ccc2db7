//! Movement domain: ground detection via a downward raycast.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, MovementState, MovementTuning, Player};

/// True when a ray cast straight down from `origin` hits a ground-layer
/// collider within `tuning.ground_ray_length`. Pure query of the physics
/// world; the result is not cached across ticks.
pub(crate) fn ground_ray_hit(
    spatial_query: &SpatialQuery,
    origin: Vec2,
    tuning: &MovementTuning,
) -> bool {
    // Filter to only hit Ground layer entities
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    spatial_query
        .cast_ray(
            origin,
            Dir2::NEG_Y,
            tuning.ground_ray_length,
            true,
            &ground_filter,
        )
        .is_some()
}

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    tuning: Res<MovementTuning>,
    mut query: Query<(&Transform, &mut MovementState), With<Player>>,
) {
    for (transform, mut state) in &mut query {
        let was_on_ground = state.on_ground;
        let origin = transform.translation.truncate() + tuning.ground_ray_offset;

        state.on_ground = ground_ray_hit(&spatial_query, origin, &tuning);

        if state.on_ground && !was_on_ground {
            debug!("Landed");
        } else if !state.on_ground && was_on_ground {
            debug!("Left ground");
        }
    }
}
