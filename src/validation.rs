use crate::{
    error::{Result, ShapleyError},
    types::{MarginalValues, Player},
    utils::describe,
};
use std::collections::BTreeSet;

/// Validate the player set; players must be distinct
pub fn check_players<P: Player>(players: &[P]) -> Result<()> {
    let mut seen = BTreeSet::new();
    for player in players {
        if !seen.insert(player) {
            return Err(ShapleyError::DuplicatePlayer {
                player: describe(player),
            });
        }
    }
    Ok(())
}

/// Validate the trial count for Monte Carlo sampling
pub fn check_trials(trials: usize) -> Result<()> {
    match trials {
        0 => Err(ShapleyError::InvalidTrialCount { trials: 0 }),
        _ => Ok(()),
    }
}

/// Pair every player of `ordering` with its marginal value.
///
/// Fails if the value function left a player out or reported one that is not
/// part of the ordering.
pub fn check_marginals<P: Player, V>(
    ordering: &[P],
    mut marginals: MarginalValues<P, V>,
) -> Result<Vec<(P, V)>> {
    let mut paired = Vec::with_capacity(ordering.len());
    for player in ordering {
        match marginals.remove(player) {
            Some(value) => paired.push((player.clone(), value)),
            None => {
                return Err(ShapleyError::MissingPlayer {
                    player: describe(player),
                });
            }
        }
    }

    if let Some(extra) = marginals.keys().next() {
        return Err(ShapleyError::UnexpectedPlayer {
            player: describe(extra),
        });
    }

    Ok(paired)
}
