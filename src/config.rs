//! Allocator configuration.

use crate::moves::DEFAULT_MAX_ATTEMPTS;
use crate::sa::{CoolingSchedule, SaConfig};

/// Parameters of one allocation search.
///
/// # Defaults
///
/// ```
/// use u_roomalloc::AllocatorConfig;
///
/// let config = AllocatorConfig::default();
/// assert_eq!(config.max_rooms_per_house, 3);
/// assert_eq!(config.max_people_per_room, 2);
/// assert!(config.validate().is_ok());
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_roomalloc::AllocatorConfig;
///
/// let config = AllocatorConfig::default()
///     .with_layout(4, 3)
///     .with_temperatures(10.0, 0.01)
///     .with_seed(7);
/// assert_eq!(config.seed, Some(7));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AllocatorConfig {
    /// Rooms opened per house by the initial fill.
    pub max_rooms_per_house: usize,

    /// Occupants placed per room by the initial fill.
    pub max_people_per_room: usize,

    /// Starting temperature.
    pub temp_max: f64,

    /// The search stops once the temperature is no longer above this.
    pub temp_min: f64,

    /// Linear cooling decrement applied after every proposal.
    pub cooling_step: f64,

    /// Cap on rejection-sampling draws per room swap.
    pub max_move_attempts: usize,

    /// Random seed. `None` gives a different search on every run.
    pub seed: Option<u64>,
}

impl Default for AllocatorConfig {
    fn default() -> Self {
        Self {
            max_rooms_per_house: 3,
            max_people_per_room: 2,
            temp_max: 15.0,
            temp_min: 0.001,
            cooling_step: 0.001,
            max_move_attempts: DEFAULT_MAX_ATTEMPTS,
            seed: None,
        }
    }
}

impl AllocatorConfig {
    pub fn with_layout(mut self, max_rooms_per_house: usize, max_people_per_room: usize) -> Self {
        self.max_rooms_per_house = max_rooms_per_house;
        self.max_people_per_room = max_people_per_room;
        self
    }

    pub fn with_temperatures(mut self, temp_max: f64, temp_min: f64) -> Self {
        self.temp_max = temp_max;
        self.temp_min = temp_min;
        self
    }

    pub fn with_cooling_step(mut self, step: f64) -> Self {
        self.cooling_step = step;
        self
    }

    pub fn with_max_move_attempts(mut self, n: usize) -> Self {
        self.max_move_attempts = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The annealing parameters: one proposal per level, linear cooling.
    ///
    /// The seed is not copied; [`crate::allocate`] seeds one RNG from
    /// `self.seed` and shares it between the initial fill and the search.
    pub fn to_sa_config(&self) -> SaConfig {
        SaConfig::default()
            .with_initial_temperature(self.temp_max)
            .with_min_temperature(self.temp_min)
            .with_cooling(CoolingSchedule::Linear {
                step: self.cooling_step,
            })
            .with_iterations_per_temperature(1)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_rooms_per_house == 0 {
            return Err("max_rooms_per_house must be at least 1".into());
        }
        if self.max_people_per_room == 0 {
            return Err("max_people_per_room must be at least 1".into());
        }
        if self.max_move_attempts == 0 {
            return Err("max_move_attempts must be at least 1".into());
        }
        self.to_sa_config().validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AllocatorConfig::default();
        assert!((config.temp_max - 15.0).abs() < 1e-10);
        assert!((config.temp_min - 0.001).abs() < 1e-15);
        assert!((config.cooling_step - 0.001).abs() < 1e-15);
        assert_eq!(config.max_move_attempts, DEFAULT_MAX_ATTEMPTS);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_to_sa_config() {
        let sa = AllocatorConfig::default().with_seed(3).to_sa_config();
        assert_eq!(sa.cooling, CoolingSchedule::Linear { step: 0.001 });
        assert_eq!(sa.iterations_per_temperature, 1);
        assert_eq!(sa.seed, None);
        assert!((sa.initial_temperature - 15.0).abs() < 1e-10);
    }

    #[test]
    fn test_validate_bad_layout() {
        assert!(AllocatorConfig::default()
            .with_layout(0, 2)
            .validate()
            .is_err());
        assert!(AllocatorConfig::default()
            .with_layout(3, 0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_bad_temperatures() {
        assert!(AllocatorConfig::default()
            .with_temperatures(1.0, 2.0)
            .validate()
            .is_err());
        assert!(AllocatorConfig::default()
            .with_cooling_step(-0.1)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_zero_attempts() {
        assert!(AllocatorConfig::default()
            .with_max_move_attempts(0)
            .validate()
            .is_err());
    }
}
