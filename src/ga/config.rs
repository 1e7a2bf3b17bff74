//! GA configuration.
//!
//! [`GaConfig`] holds the parameters that control the evolutionary loop.
//! Operator parameters that belong to the encoding (mutation rate,
//! offspring repair) live on [`KnightTourProblem`](super::KnightTourProblem).

use crate::error::{TourError, TourResult};

/// Default tournament size.
pub const DEFAULT_TOURNAMENT_SIZE: usize = 5;

/// Configuration for the Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use u_knightour::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_generations, 1000);
/// assert_eq!(config.tournament_size, 5);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_knightour::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(50)
///     .with_max_generations(200)
///     .with_tournament_size(3)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals in the population.
    ///
    /// The best `population_size / 2` survive each generation unchanged.
    pub population_size: usize,

    /// Maximum number of generations before termination.
    pub max_generations: usize,

    /// Number of distinct individuals sampled per tournament.
    ///
    /// Must not exceed `population_size`.
    pub tournament_size: usize,

    /// Whether to evaluate offspring in parallel using rayon.
    ///
    /// Only takes effect with the `parallel` feature. Evaluation is pure,
    /// so results match the sequential path.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 1000,
            tournament_size: DEFAULT_TOURNAMENT_SIZE,
            parallel: false,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of individuals carried over unchanged each generation.
    pub fn elite_count(&self) -> usize {
        self.population_size / 2
    }

    /// Validates the configuration.
    pub fn validate(&self) -> TourResult<()> {
        if self.population_size == 0 {
            return Err(TourError::InvalidConfig(
                "population_size must be at least 1".into(),
            ));
        }
        if self.max_generations == 0 {
            return Err(TourError::InvalidConfig(
                "max_generations must be at least 1".into(),
            ));
        }
        if self.tournament_size == 0 {
            return Err(TourError::InvalidConfig(
                "tournament_size must be at least 1".into(),
            ));
        }
        if self.tournament_size > self.population_size {
            return Err(TourError::TournamentTooLarge {
                tournament_size: self.tournament_size,
                population_size: self.population_size,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 100);
        assert_eq!(config.max_generations, 1000);
        assert_eq!(config.tournament_size, 5);
        assert!(!config.parallel);
        assert!(config.seed.is_none());
        assert_eq!(config.elite_count(), 50);
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(30)
            .with_max_generations(10)
            .with_tournament_size(4)
            .with_parallel(true)
            .with_seed(9);
        assert_eq!(config.population_size, 30);
        assert_eq!(config.max_generations, 10);
        assert_eq!(config.tournament_size, 4);
        assert!(config.parallel);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_validate_ok() {
        assert!(GaConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_empty_population() {
        let config = GaConfig::default().with_population_size(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_generations() {
        let config = GaConfig::default().with_max_generations(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_tournament_too_large() {
        let config = GaConfig::default()
            .with_population_size(4)
            .with_tournament_size(5);
        assert_eq!(
            config.validate(),
            Err(TourError::TournamentTooLarge {
                tournament_size: 5,
                population_size: 4
            })
        );
    }

    #[test]
    fn test_validate_tournament_equal_population() {
        let config = GaConfig::default()
            .with_population_size(5)
            .with_tournament_size(5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_odd_population_elites() {
        let config = GaConfig::default().with_population_size(7);
        assert_eq!(config.elite_count(), 3);
    }
}
