use thiserror::Error;

use crate::types::Coord;

/// Everything the engine can reject. Generation itself is total once a
/// configuration has been accepted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    #[error("invalid configuration: `{field}` {reason}")]
    InvalidConfiguration { field: &'static str, reason: String },

    #[error("coordinate ({}, {}) is outside the {width}x{height} grid", .coord.x, .coord.y)]
    OutOfBounds { coord: Coord, width: usize, height: usize },
}

impl MapError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration { field, reason: reason.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let invalid = MapError::invalid("wall_threshold", "must be at most 8, got 9");
        assert_eq!(
            invalid.to_string(),
            "invalid configuration: `wall_threshold` must be at most 8, got 9"
        );

        let out_of_bounds = MapError::OutOfBounds { coord: Coord::new(4, -1), width: 3, height: 2 };
        assert_eq!(out_of_bounds.to_string(), "coordinate (4, -1) is outside the 3x2 grid");
    }
}
