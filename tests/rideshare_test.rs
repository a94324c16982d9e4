use coalition_shapley::{
    exact, exact_fraction, format_mapping, ordering_count,
    rideshare::{riders, rideshare_values},
};
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;

fn ratio(numer: i64, denom: i64) -> BigRational {
    BigRational::new(BigInt::from(numer), BigInt::from(denom))
}

#[test]
fn test_three_riders_exact() {
    // Rider 1 only pays when first in (2 of 6 orderings), rider 3 always
    // pays the last stretch of road.
    let result = exact(&riders(3), &rideshare_values).expect("exact should succeed");

    let expected = [(1, 1.0 / 3.0), (2, 5.0 / 6.0), (3, 11.0 / 6.0)];
    assert_eq!(result.len(), 3);
    for (rider, value) in expected {
        assert!(
            (result[&rider] - value).abs() < 1e-12,
            "Rider {rider} mismatch: expected {value}, got {}",
            result[&rider]
        );
    }

    let total: f64 = result.values().sum();
    assert!((total - 3.0).abs() < 1e-12);
}

#[test]
fn test_three_riders_fraction() {
    let result = exact_fraction(&riders(3), &rideshare_values).expect("fraction should succeed");

    assert_eq!(result[&1], ratio(1, 3));
    assert_eq!(result[&2], ratio(5, 6));
    assert_eq!(result[&3], ratio(11, 6));
    assert_eq!(format_mapping(&result), "{1: 1/3, 2: 5/6, 3: 11/6}");

    // Denominators divide 3! and the sum is exact
    let count = BigInt::from(ordering_count(3).unwrap());
    for value in result.values() {
        assert!((&count % value.denom()).is_zero());
    }
    let total: BigRational = result.values().sum();
    assert_eq!(total, BigRational::from_integer(BigInt::from(3)));
}

#[test]
fn test_fare_is_fully_split() {
    for n in 1..=6 {
        let result = exact_fraction(&riders(n), &rideshare_values).unwrap();
        let total: BigRational = result.values().sum();
        assert_eq!(total, BigRational::from_integer(BigInt::from(n)));

        let count = BigInt::from(ordering_count(n as usize).unwrap());
        assert!(result.values().all(|v| (&count % v.denom()).is_zero()));
    }
}

#[test]
fn test_farther_riders_pay_more() {
    let result = exact(&riders(5), &rideshare_values).unwrap();
    let values: Vec<f64> = result.values().copied().collect();
    assert!(values.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_float_and_fraction_agree() {
    use num_traits::ToPrimitive;

    let floats = exact(&riders(5), &rideshare_values).unwrap();
    let fractions = exact_fraction(&riders(5), &rideshare_values).unwrap();
    for (rider, value) in &floats {
        let exact_value = fractions[rider].to_f64().unwrap();
        assert!((value - exact_value).abs() < 1e-9);
    }
}
