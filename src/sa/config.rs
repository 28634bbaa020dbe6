//! Annealing parameters.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Configuration for a knapsack annealing run.
///
/// Temperature decays geometrically, `T_{k+1} = cooling_rate * T_k`, and
/// only on iterations whose candidate fits under the weight cap.
///
/// # Examples
///
/// ```
/// use u_knapsack::AnnealConfig;
///
/// let config = AnnealConfig::default()
///     .with_initial_temperature(500.0)
///     .with_min_temperature(0.01)
///     .with_cooling_rate(0.95)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnealConfig {
    /// Starting temperature. Higher values accept more worsening moves early.
    pub initial_temperature: f64,

    /// The search stops once the temperature is no longer above this floor.
    pub min_temperature: f64,

    /// Geometric cooling factor in (0, 1). Higher = slower cooling.
    pub cooling_rate: f64,

    /// Random draws allowed while looking for a feasible start. 0 = no limit.
    pub max_init_attempts: usize,

    /// Hard cap on candidate evaluations, feasible or not. 0 = no limit.
    pub max_iterations: usize,

    /// Random seed for reproducibility. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1000.0,
            min_temperature: 0.1,
            cooling_rate: 0.9,
            max_init_attempts: 1_000_000,
            max_iterations: 0,
            seed: None,
        }
    }
}

impl AnnealConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_max_init_attempts(mut self, n: usize) -> Self {
        self.max_init_attempts = n;
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
    ///
    /// Rejects parameters under which the cooling loop would not terminate
    /// (`cooling_rate >= 1`) or would never run (`min >= initial`).
    pub fn validate(&self) -> Result<()> {
        if !(self.initial_temperature > 0.0) || !self.initial_temperature.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "initial_temperature must be positive and finite, got {}",
                self.initial_temperature
            )));
        }
        if !(self.min_temperature > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "min_temperature must be positive, got {}",
                self.min_temperature
            )));
        }
        if self.min_temperature >= self.initial_temperature {
            return Err(Error::InvalidConfig(
                "min_temperature must be less than initial_temperature".into(),
            ));
        }
        if !(self.cooling_rate > 0.0 && self.cooling_rate < 1.0) {
            return Err(Error::InvalidConfig(format!(
                "cooling_rate must be in (0, 1), got {}",
                self.cooling_rate
            )));
        }
        Ok(())
    }

    /// Number of feasible iterations needed to cool from the initial
    /// temperature down to the floor.
    ///
    /// Fails on configurations [`validate`](Self::validate) rejects, since
    /// those never reach the floor.
    pub fn cooling_steps(&self) -> Result<usize> {
        self.validate()?;
        let mut t = self.initial_temperature;
        let mut steps = 0;
        while t > self.min_temperature {
            t *= self.cooling_rate;
            steps += 1;
        }
        Ok(steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnnealConfig::default();
        assert!((config.initial_temperature - 1000.0).abs() < 1e-10);
        assert!((config.min_temperature - 0.1).abs() < 1e-15);
        assert!((config.cooling_rate - 0.9).abs() < 1e-15);
        assert_eq!(config.max_iterations, 0);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_validate_ok() {
        assert!(AnnealConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_bad_temperature() {
        let config = AnnealConfig::default().with_initial_temperature(-1.0);
        assert!(config.validate().is_err());
        let config = AnnealConfig::default().with_initial_temperature(f64::NAN);
        assert!(config.validate().is_err());
        let config = AnnealConfig::default().with_min_temperature(0.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_min_ge_initial() {
        let config = AnnealConfig::default()
            .with_initial_temperature(10.0)
            .with_min_temperature(10.0);
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_bad_cooling_rate() {
        for rate in [0.0, 1.0, 1.5, -0.5, f64::NAN] {
            let config = AnnealConfig::default().with_cooling_rate(rate);
            assert!(config.validate().is_err(), "rate {rate} should be rejected");
        }
    }

    #[test]
    fn test_cooling_steps_default() {
        // 1000 * 0.9^k <= 0.1 first holds at k = 88.
        assert_eq!(AnnealConfig::default().cooling_steps().unwrap(), 88);
    }

    #[test]
    fn test_cooling_steps_rejects_non_cooling_rate() {
        for rate in [1.0, 1.5] {
            let config = AnnealConfig::default().with_cooling_rate(rate);
            assert!(
                matches!(config.cooling_steps(), Err(Error::InvalidConfig(_))),
                "rate {rate} should be rejected"
            );
        }
    }

    #[test]
    fn test_deserialize_partial() {
        let config: AnnealConfig =
            serde_json::from_str(r#"{"cooling_rate": 0.5, "seed": 3}"#).unwrap();
        assert!((config.cooling_rate - 0.5).abs() < 1e-15);
        assert_eq!(config.seed, Some(3));
        assert!((config.initial_temperature - 1000.0).abs() < 1e-10);
    }
}
