//! Generation inputs and their validation.

use serde::{Deserialize, Serialize};

use crate::error::MapError;

use super::passage::DEFAULT_PASSAGE_RADIUS;
use super::seed::runtime_seed;

pub const MAX_FILL_PERCENT: u8 = 100;
pub const MAX_SMOOTHING_ITERATIONS: u8 = 10;
pub const MAX_WALL_THRESHOLD: u8 = 8;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub width: usize,
    pub height: usize,
    pub seed: String,
    /// Callers resolve this with [`GeneratorConfig::with_resolved_seed`];
    /// generation itself always uses `seed`.
    pub use_random_seed: bool,
    pub fill_percent: u8,
    pub smoothing_iterations: u8,
    pub wall_threshold: u8,
    pub connect_rooms: bool,
    pub remove_walls: bool,
    pub remove_rooms: bool,
    pub wall_size_threshold: usize,
    pub room_size_threshold: usize,
    pub passage_radius: u8,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            width: 80,
            height: 45,
            seed: "cavegen".to_string(),
            use_random_seed: false,
            fill_percent: 47,
            smoothing_iterations: 5,
            wall_threshold: 4,
            connect_rooms: true,
            remove_walls: true,
            remove_rooms: true,
            wall_size_threshold: 50,
            room_size_threshold: 50,
            passage_radius: DEFAULT_PASSAGE_RADIUS,
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), MapError> {
        for (field, value) in [("width", self.width), ("height", self.height)] {
            if value == 0 {
                return Err(MapError::invalid(field, "must be positive"));
            }
            if i32::try_from(value).is_err() {
                return Err(MapError::invalid(field, format!("{value} exceeds the coordinate range")));
            }
        }
        check_at_most("fill_percent", self.fill_percent, MAX_FILL_PERCENT)?;
        check_at_most("smoothing_iterations", self.smoothing_iterations, MAX_SMOOTHING_ITERATIONS)?;
        check_at_most("wall_threshold", self.wall_threshold, MAX_WALL_THRESHOLD)?;
        // A zero radius carves only the 8-connected line, which can leave
        // merged rooms apart in the 4-connected sense.
        if self.passage_radius == 0 {
            return Err(MapError::invalid("passage_radius", "must be at least 1"));
        }
        Ok(())
    }

    /// Swaps in a fresh runtime seed when `use_random_seed` is set.
    pub fn with_resolved_seed(mut self) -> Self {
        if self.use_random_seed {
            self.seed = runtime_seed();
        }
        self
    }
}

fn check_at_most(field: &'static str, value: u8, max: u8) -> Result<(), MapError> {
    if value > max {
        return Err(MapError::invalid(field, format!("must be at most {max}, got {value}")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(GeneratorConfig::default().validate(), Ok(()));
    }

    #[test]
    fn out_of_range_fields_are_named_in_the_error() {
        let cases = [
            (GeneratorConfig { width: 0, ..GeneratorConfig::default() }, "width"),
            (GeneratorConfig { height: 0, ..GeneratorConfig::default() }, "height"),
            (GeneratorConfig { fill_percent: 101, ..GeneratorConfig::default() }, "fill_percent"),
            (
                GeneratorConfig { smoothing_iterations: 11, ..GeneratorConfig::default() },
                "smoothing_iterations",
            ),
            (GeneratorConfig { wall_threshold: 9, ..GeneratorConfig::default() }, "wall_threshold"),
            (GeneratorConfig { passage_radius: 0, ..GeneratorConfig::default() }, "passage_radius"),
        ];

        for (config, expected_field) in cases {
            match config.validate() {
                Err(MapError::InvalidConfiguration { field, .. }) => {
                    assert_eq!(field, expected_field)
                }
                other => panic!("expected {expected_field} to be rejected, got {other:?}"),
            }
        }
    }

    #[test]
    fn boundary_values_are_accepted() {
        let config = GeneratorConfig {
            width: 1,
            height: 1,
            fill_percent: 100,
            smoothing_iterations: 10,
            wall_threshold: 8,
            passage_radius: 1,
            ..GeneratorConfig::default()
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn zero_passage_radius_is_rejected_with_a_reason() {
        let config = GeneratorConfig { passage_radius: 0, ..GeneratorConfig::default() };
        let err = config.validate().expect_err("radius 0 cannot join rooms");
        assert_eq!(err.to_string(), "invalid configuration: `passage_radius` must be at least 1");
    }

    #[test]
    fn fixed_seed_is_kept_and_random_seed_is_replaced() {
        let fixed = GeneratorConfig { seed: "fixed".to_string(), ..GeneratorConfig::default() };
        assert_eq!(fixed.clone().with_resolved_seed().seed, "fixed");

        let random = GeneratorConfig { use_random_seed: true, ..fixed };
        assert_ne!(random.with_resolved_seed().seed, "fixed");
    }
}
