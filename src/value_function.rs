use crate::types::{MarginalValues, Ordering, Player};

/// A cooperative game seen through its marginal contributions.
///
/// Given an ordering that contains every player exactly once, an
/// implementation returns the value each player adds when joining after all
/// of its predecessors. The returned map must contain exactly the players of
/// the ordering; the aggregators reject anything else.
///
/// Any `Fn(&[P]) -> MarginalValues<P, V>` is a `CoalitionValue`, so plain
/// functions and closures can be passed directly.
pub trait CoalitionValue<P: Player, V> {
    fn marginal_values(&self, ordering: Ordering<'_, P>) -> MarginalValues<P, V>;
}

impl<P, V, F> CoalitionValue<P, V> for F
where
    P: Player,
    F: Fn(&[P]) -> MarginalValues<P, V>,
{
    fn marginal_values(&self, ordering: Ordering<'_, P>) -> MarginalValues<P, V> {
        self(ordering)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Flat(i64);

    impl CoalitionValue<char, i64> for Flat {
        fn marginal_values(&self, ordering: &[char]) -> MarginalValues<char, i64> {
            ordering.iter().map(|&p| (p, self.0)).collect()
        }
    }

    fn first_takes_all(ordering: &[u8]) -> MarginalValues<u8, f64> {
        ordering
            .iter()
            .enumerate()
            .map(|(i, &p)| (p, if i == 0 { 1.0 } else { 0.0 }))
            .collect()
    }

    #[test]
    fn test_struct_implementation() {
        let values = Flat(4).marginal_values(&['a', 'b']);
        assert_eq!(values.len(), 2);
        assert_eq!(values[&'a'], 4);
        assert_eq!(values[&'b'], 4);
    }

    #[test]
    fn test_function_pointer_and_closure() {
        let values = first_takes_all.marginal_values(&[3, 1, 2]);
        assert_eq!(values[&3], 1.0);
        assert_eq!(values[&1], 0.0);

        let offset = 10;
        let closure = |ordering: &[u8]| -> MarginalValues<u8, u32> {
            ordering.iter().map(|&p| (p, p as u32 + offset)).collect()
        };
        let values = closure.marginal_values(&[1, 2]);
        assert_eq!(values[&1], 11);
        assert_eq!(values[&2], 12);
    }
}
