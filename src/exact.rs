use crate::{
    accumulator::ValueAccumulator,
    error::Result,
    permutations::orderings,
    types::{Player, ShapleyOutput},
    utils::ordering_count,
    validation::check_players,
    value_function::CoalitionValue,
};

/// Compute exact Shapley values by visiting every ordering of `players`.
///
/// `value_fn` is called once per ordering, so the cost grows as `n!`; keep
/// the player set small or use [`monte_carlo`](crate::monte_carlo::monte_carlo).
///
/// Fails with [`DivisionByZero`](crate::ShapleyError::DivisionByZero) on an
/// empty player set.
pub fn exact<P, V, F>(players: &[P], value_fn: &F) -> Result<ShapleyOutput<P>>
where
    P: Player,
    V: Into<f64>,
    F: CoalitionValue<P, V> + ?Sized,
{
    check_players(players)?;
    log::debug!(
        "exact aggregation over {} players ({:?} orderings)",
        players.len(),
        ordering_count(players.len())
    );

    let mut acc = ValueAccumulator::<P, f64>::new(players);
    for ordering in orderings(players) {
        log::trace!("ordering {ordering:?}");
        let marginals = value_fn.marginal_values(&ordering);
        acc.record(&ordering, marginals, Into::into)?;
    }

    log::debug!("exact aggregation visited {} orderings", acc.count());
    acc.finish(|sum, count| sum / count as f64)
}
