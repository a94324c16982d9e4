//! Shapley value computation for cooperative games
//!
//! The Shapley value of a player is its marginal contribution averaged over
//! every order in which the players could join the coalition. This library
//! computes it exactly (as floats or as exact fractions) by enumerating all
//! orderings, or approximately by sampling random orderings.

mod accumulator;
pub mod error;
pub mod exact;
pub mod fraction;
pub mod monte_carlo;
pub mod permutations;
pub mod report;
pub mod rideshare;
pub mod types;
pub mod utils;
pub mod validation;
pub mod value_function;

// Re-export main types and functions
pub use error::{ErrorKind, Result, ShapleyError};
pub use exact::exact;
pub use fraction::{ExactValue, exact_fraction};
pub use monte_carlo::{MonteCarlo, monte_carlo};
pub use permutations::{Orderings, orderings};
pub use report::{ShapleyValue, format_mapping, summarize, summarize_fractions};
pub use types::{FractionOutput, MarginalValues, Ordering, Player, ShapleyOutput};
pub use utils::ordering_count;
pub use value_function::CoalitionValue;
