use crate::{
    accumulator::ValueAccumulator,
    error::Result,
    permutations::orderings,
    types::{FractionOutput, Player},
    utils::ordering_count,
    validation::check_players,
    value_function::CoalitionValue,
};
use num_bigint::BigInt;
use num_rational::BigRational;

/// Marginal values that convert losslessly into a rational number.
///
/// Implemented for the primitive integers, `BigInt` and `BigRational`.
/// Floating point types are left out on purpose: an `f64` is rarely the
/// value the caller meant.
pub trait ExactValue {
    fn into_rational(self) -> BigRational;
}

macro_rules! exact_integer {
    ($($t:ty),*) => {
        $(
            impl ExactValue for $t {
                fn into_rational(self) -> BigRational {
                    BigRational::from_integer(BigInt::from(self))
                }
            }
        )*
    };
}

exact_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl ExactValue for BigInt {
    fn into_rational(self) -> BigRational {
        BigRational::from_integer(self)
    }
}

impl ExactValue for BigRational {
    fn into_rational(self) -> BigRational {
        self
    }
}

/// Same as [`exact`](crate::exact::exact), but returns exact fractions.
///
/// Each result is the accumulated sum divided by the number of orderings,
/// reduced to lowest terms. With integer marginal values the denominator
/// always divides `n!`. Rational marginal values are accepted as well; the
/// arithmetic stays exact, but the result no longer has that structure.
///
/// Fails with [`DivisionByZero`](crate::ShapleyError::DivisionByZero) on an
/// empty player set.
pub fn exact_fraction<P, V, F>(players: &[P], value_fn: &F) -> Result<FractionOutput<P>>
where
    P: Player,
    V: ExactValue,
    F: CoalitionValue<P, V> + ?Sized,
{
    check_players(players)?;
    log::debug!(
        "fraction aggregation over {} players ({:?} orderings)",
        players.len(),
        ordering_count(players.len())
    );

    let mut acc = ValueAccumulator::<P, BigRational>::new(players);
    for ordering in orderings(players) {
        log::trace!("ordering {ordering:?}");
        let marginals = value_fn.marginal_values(&ordering);
        acc.record(&ordering, marginals, ExactValue::into_rational)?;
    }

    log::debug!("fraction aggregation visited {} orderings", acc.count());
    acc.finish(|sum, count| sum / BigRational::from_integer(BigInt::from(count)))
}
