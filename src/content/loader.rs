//! Loader for the RON tuning file at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::MovementTuningDef;

/// Error type for tuning load failures.
#[derive(Debug)]
pub struct TuningLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for TuningLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

pub(crate) fn load_tuning_file(path: &Path) -> Result<MovementTuningDef, TuningLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| TuningLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    ron_options()
        .from_str(&contents)
        .map_err(|e| TuningLoadError {
            file: file_name,
            message: format!("Parse error: {}", e),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_tuning_ron() {
        let source = r#"
            (
                move_speed: 340.0,
                acceleration: 2600.0,
                deceleration: 3200.0,
                jump_velocity: 680.0,
                ground_ray_length: 6.0,
                ground_ray_offset: (0.0, -24.0),
                flip_delay: 0.1,
            )
        "#;

        let def: MovementTuningDef = ron_options().from_str(source).expect("tuning should parse");
        assert_eq!(def.move_speed, 340.0);
        assert_eq!(def.ground_ray_offset, (0.0, -24.0));
    }
}
