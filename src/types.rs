use num_rational::BigRational;
use std::{collections::BTreeMap, fmt::Debug};

/// Anything that can identify a player.
///
/// `Ord` keeps results in a deterministic order, `Debug` is used when a
/// player has to be named in an error.
pub trait Player: Ord + Clone + Debug {}

impl<T: Ord + Clone + Debug> Player for T {}

/// One join order of every player
pub type Ordering<'a, P> = &'a [P];

/// Marginal contribution of each player for one ordering
pub type MarginalValues<P, V> = BTreeMap<P, V>;

/// Floating point Shapley value per player
pub type ShapleyOutput<P> = BTreeMap<P, f64>;

/// Exact rational Shapley value per player
pub type FractionOutput<P> = BTreeMap<P, BigRational>;
