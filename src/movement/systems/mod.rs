//! Movement domain: system modules for locomotion updates.

pub(crate) mod grounding;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use grounding::detect_ground;
pub(crate) use input::read_input;
pub(crate) use movement::{apply_jump, apply_movement, capture_original_scale};
