//! Tuning knobs for the reseed and expansion heuristics.
//!
//! Densities follow the seeding draw: each cell draws a value in `0..10`
//! and comes alive when the draw is strictly greater than the density, so
//! a density of 5 adds roughly 40% live cells and 9 adds none.

use thiserror::Error;

/// Upper bound (exclusive) of the per-cell seeding draw
pub const SEED_DRAW_RANGE: u8 = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} density {value} is outside 0..={max}")]
    DensityOutOfRange { name: &'static str, value: u8, max: u8 },
    #[error("{name} threshold must be at least 1")]
    ZeroThreshold { name: &'static str },
    /// Streaks saturate at `u8::MAX` and must be able to exceed the threshold
    #[error("{name} threshold {value} is above {max}")]
    ThresholdTooLarge { name: &'static str, value: u8, max: u8 },
}

/// Heuristic parameters for [`LifeEngine`](super::LifeEngine)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Empty ticks tolerated before the board is reseeded
    pub empty_threshold: u8,
    /// Equal-population ticks tolerated before expansion is armed
    pub stable_threshold: u8,
    /// Density used when reseeding an empty board
    pub reseed_density: u8,
    /// Density used for an external seed request
    pub inject_density: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            empty_threshold: 7,
            stable_threshold: 42,
            reseed_density: 5,
            inject_density: 8,
        }
    }
}

impl EngineConfig {
    pub fn with_empty_threshold(mut self, ticks: u8) -> Self {
        self.empty_threshold = ticks;
        self
    }

    pub fn with_stable_threshold(mut self, ticks: u8) -> Self {
        self.stable_threshold = ticks;
        self
    }

    pub fn with_reseed_density(mut self, density: u8) -> Self {
        self.reseed_density = density;
        self
    }

    pub fn with_inject_density(mut self, density: u8) -> Self {
        self.inject_density = density;
        self
    }

    /// Check every field is usable by the engine
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_density("reseed", self.reseed_density)?;
        check_density("inject", self.inject_density)?;
        check_threshold("empty", self.empty_threshold)?;
        check_threshold("stable", self.stable_threshold)?;
        Ok(())
    }
}

fn check_density(name: &'static str, value: u8) -> Result<(), ConfigError> {
    let max = SEED_DRAW_RANGE - 1;
    if value > max {
        return Err(ConfigError::DensityOutOfRange { name, value, max });
    }
    Ok(())
}

fn check_threshold(name: &'static str, value: u8) -> Result<(), ConfigError> {
    if value == 0 {
        return Err(ConfigError::ZeroThreshold { name });
    }
    let max = u8::MAX - 1;
    if value > max {
        return Err(ConfigError::ThresholdTooLarge { name, value, max });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = EngineConfig::default();
        assert_eq!(config.empty_threshold, 7);
        assert_eq!(config.stable_threshold, 42);
        assert_eq!(config.reseed_density, 5);
        assert_eq!(config.inject_density, 8);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_density_out_of_range() {
        let config = EngineConfig::default().with_reseed_density(10);
        assert_eq!(
            config.validate(),
            Err(ConfigError::DensityOutOfRange { name: "reseed", value: 10, max: 9 })
        );

        let config = EngineConfig::default().with_inject_density(200);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DensityOutOfRange { name: "inject", .. })
        ));
    }

    #[test]
    fn test_zero_threshold() {
        let config = EngineConfig::default().with_stable_threshold(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroThreshold { name: "stable" }));

        let config = EngineConfig::default().with_empty_threshold(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroThreshold { name: "empty" }));
    }

    #[test]
    fn test_threshold_must_leave_room_to_exceed() {
        let config = EngineConfig::default().with_stable_threshold(u8::MAX);
        assert_eq!(
            config.validate(),
            Err(ConfigError::ThresholdTooLarge { name: "stable", value: 255, max: 254 })
        );

        let config = EngineConfig::default().with_empty_threshold(u8::MAX);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ThresholdTooLarge { name: "empty", .. })
        ));

        let config = EngineConfig::default()
            .with_empty_threshold(254)
            .with_stable_threshold(254);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_error_messages() {
        let err = EngineConfig::default().with_reseed_density(12).validate().unwrap_err();
        assert_eq!(err.to_string(), "reseed density 12 is outside 0..=9");

        let err = EngineConfig::default().with_stable_threshold(0).validate().unwrap_err();
        assert_eq!(err.to_string(), "stable threshold must be at least 1");

        let err = EngineConfig::default().with_empty_threshold(255).validate().unwrap_err();
        assert_eq!(err.to_string(), "empty threshold 255 is above 254");
    }
}
