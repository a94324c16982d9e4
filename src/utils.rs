use std::fmt::Debug;

/// Render a player for error messages
pub(crate) fn describe<P: Debug>(player: &P) -> String {
    format!("{player:?}")
}

/// Factorials that fit in a u64 (0! through 20!)
pub(crate) const FACTORIAL_LIMIT: usize = 21;
pub(crate) const FACTORIALS: [u64; FACTORIAL_LIMIT] = {
    let mut facts = [1u64; FACTORIAL_LIMIT];
    let mut i = 1;
    while i < FACTORIAL_LIMIT {
        facts[i] = facts[i - 1] * (i as u64);
        i += 1;
    }
    facts
};

/// Number of orderings of `n_players` players, if it fits in a u64
pub fn ordering_count(n_players: usize) -> Option<u64> {
    FACTORIALS.get(n_players).copied()
}
