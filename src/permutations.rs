use crate::types::Player;
use itertools::{Itertools, structs::Permutations};
use std::vec::IntoIter;

/// Lazy iterator over every ordering of a player set.
///
/// Yields `n!` orderings for `n` players, each exactly once. An empty player
/// set yields no orderings at all, so aggregating over it has nothing to
/// divide by.
pub struct Orderings<P: Player> {
    inner: Option<Permutations<IntoIter<P>>>,
}

/// Enumerate all orderings of `players`
pub fn orderings<P: Player>(players: &[P]) -> Orderings<P> {
    let inner = match players.is_empty() {
        true => None,
        false => Some(players.to_vec().into_iter().permutations(players.len())),
    };
    Orderings { inner }
}

impl<P: Player> Iterator for Orderings<P> {
    type Item = Vec<P>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            Some(inner) => inner.size_hint(),
            None => (0, Some(0)),
        }
    }
}
