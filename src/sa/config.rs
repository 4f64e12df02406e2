//! SA configuration and cooling schedules.

/// Cooling schedule for temperature reduction.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CoolingSchedule {
    /// Linear cooling: `T_{k+1} = T_k - step`.
    ///
    /// Runs for a fixed number of levels, `(T_0 - T_min) / step`.
    Linear {
        /// Amount subtracted per temperature level. Must be positive.
        step: f64,
    },

    /// Geometric (exponential) cooling: `T_{k+1} = alpha * T_k`.
    ///
    /// Typical `alpha`: 0.95–0.99.
    Geometric {
        /// Cooling factor in (0, 1). Higher = slower cooling.
        alpha: f64,
    },
}

impl Default for CoolingSchedule {
    fn default() -> Self {
        CoolingSchedule::Linear { step: 0.001 }
    }
}

impl CoolingSchedule {
    /// Temperature after one cooling step from `temperature`.
    pub fn next(&self, temperature: f64) -> f64 {
        match *self {
            CoolingSchedule::Linear { step } => temperature - step,
            CoolingSchedule::Geometric { alpha } => temperature * alpha,
        }
    }
}

/// Configuration for the Simulated Annealing algorithm.
///
/// # Examples
///
/// ```
/// use u_roomalloc::sa::{SaConfig, CoolingSchedule};
///
/// let config = SaConfig::default()
///     .with_initial_temperature(15.0)
///     .with_min_temperature(0.001)
///     .with_cooling(CoolingSchedule::Linear { step: 0.001 })
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Initial temperature. Higher values allow more exploration.
    pub initial_temperature: f64,

    /// Minimum temperature. The algorithm stops once T is no longer above this.
    pub min_temperature: f64,

    /// Cooling schedule.
    pub cooling: CoolingSchedule,

    /// Number of neighbor proposals at each temperature level.
    pub iterations_per_temperature: usize,

    /// Maximum total iterations (hard budget). 0 = no limit.
    pub max_iterations: usize,

    /// Random seed for reproducibility. `None` draws a fresh seed.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 15.0,
            min_temperature: 0.001,
            cooling: CoolingSchedule::default(),
            iterations_per_temperature: 1,
            max_iterations: 0,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_cooling(mut self, cooling: CoolingSchedule) -> Self {
        self.cooling = cooling;
        self
    }

    pub fn with_iterations_per_temperature(mut self, n: usize) -> Self {
        self.iterations_per_temperature = n;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.initial_temperature <= 0.0 {
            return Err("initial_temperature must be positive".into());
        }
        if self.min_temperature <= 0.0 {
            return Err("min_temperature must be positive".into());
        }
        if self.min_temperature >= self.initial_temperature {
            return Err("min_temperature must be less than initial_temperature".into());
        }
        if self.iterations_per_temperature == 0 {
            return Err("iterations_per_temperature must be at least 1".into());
        }
        match self.cooling {
            CoolingSchedule::Linear { step } => {
                if !(step > 0.0 && step.is_finite()) {
                    return Err(format!("linear step must be positive, got {step}"));
                }
            }
            CoolingSchedule::Geometric { alpha } => {
                if alpha <= 0.0 || alpha >= 1.0 {
                    return Err(format!("geometric alpha must be in (0, 1), got {alpha}"));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SaConfig::default();
        assert!((config.initial_temperature - 15.0).abs() < 1e-10);
        assert!((config.min_temperature - 0.001).abs() < 1e-15);
        assert_eq!(config.iterations_per_temperature, 1);
        assert_eq!(config.cooling, CoolingSchedule::Linear { step: 0.001 });
    }

    #[test]
    fn test_validate_ok() {
        assert!(SaConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_bad_temperature() {
        let config = SaConfig::default().with_initial_temperature(-1.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_min_ge_initial() {
        let config = SaConfig::default()
            .with_initial_temperature(10.0)
            .with_min_temperature(20.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bad_alpha() {
        let config = SaConfig::default().with_cooling(CoolingSchedule::Geometric { alpha: 1.5 });
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bad_step() {
        let config = SaConfig::default().with_cooling(CoolingSchedule::Linear { step: 0.0 });
        assert!(config.validate().is_err());
        let config = SaConfig::default().with_cooling(CoolingSchedule::Linear { step: f64::NAN });
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_inner_iterations() {
        let config = SaConfig::default().with_iterations_per_temperature(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_cooling_next() {
        let linear = CoolingSchedule::Linear { step: 0.5 };
        assert!((linear.next(2.0) - 1.5).abs() < 1e-12);
        let geometric = CoolingSchedule::Geometric { alpha: 0.5 };
        assert!((geometric.next(2.0) - 1.0).abs() < 1e-12);
    }
}
