//! Colony solver configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Edge-selection and pheromone-update rule of a colony.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Ant System: roulette selection, every ant deposits.
    #[default]
    AntSystem,
    /// Ant System plus an extra deposit on the best-so-far tour.
    ElitistAntSystem,
    /// Ant Colony System: greedy choice with probability `q0`, only the
    /// best-so-far tour deposits.
    AntColonySystem,
}

/// Parameters of a colony solve.
///
/// Every field has a default, so `ColonyConfig::default()` is a complete
/// configuration. Use the `with_*` methods to override individual values.
///
/// # Examples
///
/// ```
/// use u_aco::colony::{ColonyConfig, Mode};
///
/// let config = ColonyConfig::default()
///     .with_mode(Mode::AntColonySystem)
///     .with_colony_size(10)
///     .with_steps(20)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.colony_size, 10);
///
/// assert!(ColonyConfig::default().with_steps(0).validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColonyConfig {
    /// Ants per step.
    pub colony_size: usize,
    /// Number of generations.
    pub steps: usize,
    /// Edge-selection and deposit rule.
    pub mode: Mode,
    /// Pheromone exponent.
    pub alpha: f64,
    /// Inverse-distance exponent.
    pub beta: f64,
    /// Evaporation rate ρ, in `(0, 1)`.
    pub evaporation_rate: f64,
    /// Probability of the greedy choice in [`Mode::AntColonySystem`].
    pub q0: f64,
    /// Deposit numerator Q: a tour of length L deposits Q / L.
    pub deposit_factor: f64,
    /// Best-so-far deposit multiplier in [`Mode::ElitistAntSystem`].
    pub elitist_weight: f64,
    /// Initial intensity τ0. `None` uses 1 / (n · L_nn), where L_nn is the
    /// nearest-neighbor tour length.
    pub initial_pheromone: Option<f64>,
    /// Lower bound on every intensity.
    pub min_pheromone: f64,
    /// Return to the start after the last node.
    pub closed: bool,
    /// RNG seed. `None` seeds from the operating system.
    pub seed: Option<u64>,
    /// Soft deadline in seconds, checked between steps.
    pub time_limit_secs: Option<f64>,
    /// Stop after this many consecutive steps without improvement.
    pub stagnation_limit: Option<usize>,
    /// Run 2-opt on each step's best tour.
    pub local_search: bool,
    /// Construct ants on the rayon thread pool.
    pub parallel: bool,
}

impl Default for ColonyConfig {
    fn default() -> Self {
        Self {
            colony_size: 15,
            steps: 50,
            mode: Mode::AntSystem,
            alpha: 1.0,
            beta: 3.0,
            evaporation_rate: 0.1,
            q0: 0.9,
            deposit_factor: 1.0,
            elitist_weight: 2.0,
            initial_pheromone: None,
            min_pheromone: 1e-12,
            closed: true,
            seed: None,
            time_limit_secs: None,
            stagnation_limit: None,
            local_search: false,
            parallel: true,
        }
    }
}

impl ColonyConfig {
    pub fn with_colony_size(mut self, colony_size: usize) -> Self {
        self.colony_size = colony_size;
        self
    }

    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn with_evaporation_rate(mut self, rho: f64) -> Self {
        self.evaporation_rate = rho;
        self
    }

    pub fn with_q0(mut self, q0: f64) -> Self {
        self.q0 = q0;
        self
    }

    pub fn with_deposit_factor(mut self, q: f64) -> Self {
        self.deposit_factor = q;
        self
    }

    pub fn with_elitist_weight(mut self, weight: f64) -> Self {
        self.elitist_weight = weight;
        self
    }

    pub fn with_initial_pheromone(mut self, tau0: f64) -> Self {
        self.initial_pheromone = Some(tau0);
        self
    }

    pub fn with_min_pheromone(mut self, floor: f64) -> Self {
        self.min_pheromone = floor;
        self
    }

    pub fn with_closed(mut self, closed: bool) -> Self {
        self.closed = closed;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_time_limit_secs(mut self, secs: f64) -> Self {
        self.time_limit_secs = Some(secs);
        self
    }

    pub fn with_stagnation_limit(mut self, steps: usize) -> Self {
        self.stagnation_limit = Some(steps);
        self
    }

    pub fn with_local_search(mut self, enabled: bool) -> Self {
        self.local_search = enabled;
        self
    }

    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Checks every field's range.
    pub fn validate(&self) -> Result<()> {
        if self.colony_size == 0 {
            return Err(Error::invalid_input("colony_size must be positive"));
        }
        if self.steps == 0 {
            return Err(Error::invalid_input("steps must be positive"));
        }
        non_negative("alpha", self.alpha)?;
        non_negative("beta", self.beta)?;
        non_negative("elitist_weight", self.elitist_weight)?;
        if !(self.evaporation_rate > 0.0 && self.evaporation_rate < 1.0) {
            return Err(Error::invalid_input(format!(
                "evaporation_rate {} outside (0, 1)",
                self.evaporation_rate
            )));
        }
        if !(0.0..=1.0).contains(&self.q0) {
            return Err(Error::invalid_input(format!(
                "q0 {} outside [0, 1]",
                self.q0
            )));
        }
        positive("deposit_factor", self.deposit_factor)?;
        positive("min_pheromone", self.min_pheromone)?;
        if let Some(tau0) = self.initial_pheromone {
            positive("initial_pheromone", tau0)?;
        }
        if let Some(secs) = self.time_limit_secs {
            non_negative("time_limit_secs", secs)?;
        }
        if self.stagnation_limit == Some(0) {
            return Err(Error::invalid_input("stagnation_limit must be positive"));
        }
        Ok(())
    }
}

fn non_negative(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::invalid_input(format!(
            "{name} must be finite and non-negative, got {value}"
        )))
    }
}

fn positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::invalid_input(format!(
            "{name} must be finite and positive, got {value}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = ColonyConfig::default();
        assert_eq!(c.colony_size, 15);
        assert_eq!(c.steps, 50);
        assert_eq!(c.mode, Mode::AntSystem);
        assert_eq!(c.alpha, 1.0);
        assert_eq!(c.evaporation_rate, 0.1);
        assert!(c.closed);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let c = ColonyConfig::default()
            .with_colony_size(3)
            .with_steps(4)
            .with_alpha(0.5)
            .with_beta(5.0)
            .with_q0(0.0)
            .with_closed(false)
            .with_initial_pheromone(0.2)
            .with_stagnation_limit(3);
        assert_eq!(c.colony_size, 3);
        assert_eq!(c.steps, 4);
        assert_eq!(c.alpha, 0.5);
        assert_eq!(c.beta, 5.0);
        assert_eq!(c.q0, 0.0);
        assert!(!c.closed);
        assert_eq!(c.initial_pheromone, Some(0.2));
        assert_eq!(c.stagnation_limit, Some(3));
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_sizes() {
        assert!(ColonyConfig::default().with_colony_size(0).validate().is_err());
        assert!(ColonyConfig::default().with_steps(0).validate().is_err());
        assert!(ColonyConfig::default().with_stagnation_limit(0).validate().is_err());
    }

    #[test]
    fn test_rejects_out_of_range_constants() {
        let base = ColonyConfig::default();
        assert!(base.clone().with_evaporation_rate(0.0).validate().is_err());
        assert!(base.clone().with_evaporation_rate(1.0).validate().is_err());
        assert!(base.clone().with_q0(1.5).validate().is_err());
        assert!(base.clone().with_alpha(-1.0).validate().is_err());
        assert!(base.clone().with_beta(f64::NAN).validate().is_err());
        assert!(base.clone().with_deposit_factor(0.0).validate().is_err());
        assert!(base.clone().with_min_pheromone(0.0).validate().is_err());
        assert!(base.clone().with_initial_pheromone(-0.1).validate().is_err());
        assert!(base.with_time_limit_secs(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_error_kind_is_invalid_input() {
        let err = ColonyConfig::default().with_colony_size(0).validate().unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }
}
