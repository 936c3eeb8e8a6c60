// ─────────────────────────────────────────────────────────────────────
// Delta-Code Lab — Search Configuration
// ─────────────────────────────────────────────────────────────────────

use serde::{Deserialize, Serialize};

use crate::error::{DeltaError, DeltaResult};

/// Tunables for the simulated-annealing search loop.
///
/// Greedy descent and structural search only take an iteration budget;
/// everything else here is annealing-specific.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Iteration budget for one annealing run.
    /// Default: 50_000.
    pub max_iterations: usize,

    /// Starting temperature.
    /// Default: 100.0.
    pub initial_temp: f64,

    /// Multiplicative temperature decay, applied every iteration
    /// whether or not the candidate was accepted.
    /// Default: 0.995.
    pub cooling_rate: f64,

    /// Re-heat threshold: once the temperature falls below this floor
    /// it is reset to `initial_temp` to escape stagnation.
    /// Default: 0.1.
    pub temp_floor: f64,

    /// Seed for the deterministic mutation RNG.
    /// Default: 42.
    pub seed: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_iterations: 50_000,
            initial_temp: 100.0,
            cooling_rate: 0.995,
            temp_floor: 0.1,
            seed: 42,
        }
    }
}

impl SearchConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> DeltaResult<()> {
        if self.max_iterations == 0 {
            return Err(DeltaError::Config(
                "max_iterations must be >= 1".to_string(),
            ));
        }
        if self.initial_temp <= 0.0 || !self.initial_temp.is_finite() {
            return Err(DeltaError::Config(format!(
                "initial_temp must be finite and > 0, got {}",
                self.initial_temp
            )));
        }
        if !(0.0 < self.cooling_rate && self.cooling_rate < 1.0) {
            return Err(DeltaError::Config(format!(
                "cooling_rate must be in (0, 1), got {}",
                self.cooling_rate
            )));
        }
        if self.temp_floor <= 0.0 || self.temp_floor >= self.initial_temp {
            return Err(DeltaError::Config(format!(
                "temp_floor must be in (0, initial_temp), got {}",
                self.temp_floor
            )));
        }
        Ok(())
    }

    /// Load from JSON string.
    pub fn from_json(json: &str) -> DeltaResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| DeltaError::Config(format!("JSON parse error: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SearchConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let cfg = SearchConfig {
            max_iterations: 0,
            ..SearchConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_cooling_rate_bounds() {
        for bad in [0.0, 1.0, 1.5, -0.1] {
            let cfg = SearchConfig {
                cooling_rate: bad,
                ..SearchConfig::default()
            };
            assert!(cfg.validate().is_err(), "cooling_rate {bad} should fail");
        }
    }

    #[test]
    fn test_temp_floor_must_be_below_initial() {
        let cfg = SearchConfig {
            initial_temp: 1.0,
            temp_floor: 1.0,
            ..SearchConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_from_json_roundtrip() {
        let cfg = SearchConfig::default();
        let json = serde_json::to_string(&cfg).unwrap();
        let parsed = SearchConfig::from_json(&json).unwrap();
        assert_eq!(parsed.max_iterations, cfg.max_iterations);
        assert_eq!(parsed.seed, cfg.seed);
        assert!((parsed.initial_temp - cfg.initial_temp).abs() < 1e-12);
    }

    #[test]
    fn test_from_json_garbage() {
        assert!(SearchConfig::from_json("not json").is_err());
    }
}
