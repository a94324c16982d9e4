use crate::{
    accumulator::ValueAccumulator,
    error::{Result, ShapleyError},
    types::{Player, ShapleyOutput},
    validation::{check_players, check_trials},
    value_function::CoalitionValue,
};
use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};

/// Approximate Shapley values from `trials` uniformly random orderings.
///
/// One working copy of the player set is shuffled in place before each
/// trial, so orderings are drawn with replacement and may repeat. The
/// estimate converges to [`exact`](crate::exact::exact) as `trials` grows.
/// Pass a seeded `rng` for reproducible estimates.
pub fn monte_carlo<P, V, F, R>(
    players: &[P],
    value_fn: &F,
    trials: usize,
    rng: &mut R,
) -> Result<ShapleyOutput<P>>
where
    P: Player,
    V: Into<f64>,
    F: CoalitionValue<P, V> + ?Sized,
    R: Rng + ?Sized,
{
    check_trials(trials)?;
    check_players(players)?;
    if players.is_empty() {
        return Err(ShapleyError::DivisionByZero);
    }
    log::debug!(
        "monte carlo estimate over {} players with {trials} trials",
        players.len()
    );

    let mut acc = ValueAccumulator::<P, f64>::new(players);
    let mut ordering = players.to_vec();
    for _ in 0..trials {
        ordering.shuffle(rng);
        log::trace!("ordering {ordering:?}");
        let marginals = value_fn.marginal_values(&ordering);
        acc.record(&ordering, marginals, Into::into)?;
    }

    acc.finish(|sum, count| sum / count as f64)
}

/// Monte Carlo settings, with an optional seed for reproducible runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonteCarlo {
    pub trials: usize,
    pub seed: Option<u64>,
}

impl MonteCarlo {
    pub fn new(trials: usize) -> Self {
        Self { trials, seed: None }
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Run [`monte_carlo`] with a generator built from these settings
    pub fn estimate<P, V, F>(&self, players: &[P], value_fn: &F) -> Result<ShapleyOutput<P>>
    where
        P: Player,
        V: Into<f64>,
        F: CoalitionValue<P, V> + ?Sized,
    {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        monte_carlo(players, value_fn, self.trials, &mut rng)
    }
}
