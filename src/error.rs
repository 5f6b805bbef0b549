use thiserror::Error;

/// A compiled-in constant that cannot describe a playable game.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    #[error("{name} range is empty: min {min} > max {max}")]
    EmptyRange {
        name: &'static str,
        min: i64,
        max: i64,
    },

    #[error("frames per second must be non-zero")]
    ZeroFrameRate,
}
