use crate::{
    error::{Result, ShapleyError},
    types::{MarginalValues, Player},
    validation::check_marginals,
};
use num_traits::Zero;
use std::{collections::BTreeMap, ops::AddAssign};

/// Running sums of marginal values, plus the number of orderings seen.
///
/// Owned by a single aggregation call and consumed by [`finish`](Self::finish).
#[derive(Debug)]
pub(crate) struct ValueAccumulator<P: Player, S> {
    sums: BTreeMap<P, S>,
    count: usize,
}

impl<P, S> ValueAccumulator<P, S>
where
    P: Player,
    S: Zero + AddAssign,
{
    pub(crate) fn new(players: &[P]) -> Self {
        let sums = players.iter().map(|p| (p.clone(), S::zero())).collect();
        Self { sums, count: 0 }
    }

    /// Add one ordering's marginal values, converting each with `convert`
    pub(crate) fn record<V>(
        &mut self,
        ordering: &[P],
        marginals: MarginalValues<P, V>,
        convert: impl Fn(V) -> S,
    ) -> Result<()> {
        for (player, value) in check_marginals(ordering, marginals)? {
            *self.sums.entry(player).or_insert_with(S::zero) += convert(value);
        }
        self.count += 1;
        Ok(())
    }

    pub(crate) fn count(&self) -> usize {
        self.count
    }

    /// Divide every sum by the number of recorded orderings
    pub(crate) fn finish<R>(self, divide: impl Fn(S, usize) -> R) -> Result<BTreeMap<P, R>> {
        if self.count == 0 {
            return Err(ShapleyError::DivisionByZero);
        }
        let count = self.count;
        Ok(self
            .sums
            .into_iter()
            .map(|(player, sum)| (player, divide(sum, count)))
            .collect())
    }
}
