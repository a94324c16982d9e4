use coalition_shapley::{
    ShapleyOutput, exact, monte_carlo,
    rideshare::{riders, rideshare_values},
};
use rand::{SeedableRng, rngs::StdRng};

const SEEDS: u64 = 8;

fn max_error(estimate: &ShapleyOutput<u32>, reference: &ShapleyOutput<u32>) -> f64 {
    reference
        .iter()
        .map(|(rider, value)| (estimate[rider] - value).abs())
        .fold(0.0, f64::max)
}

/// Mean (over seeds) of the worst per-rider error for a given trial count
fn mean_error(trials: usize, reference: &ShapleyOutput<u32>) -> f64 {
    let players = riders(3);
    let total: f64 = (0..SEEDS)
        .map(|seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            let estimate = monte_carlo(&players, &rideshare_values, trials, &mut rng)
                .expect("sampling should succeed");
            max_error(&estimate, reference)
        })
        .sum();
    total / SEEDS as f64
}

#[test]
fn test_error_shrinks_with_more_trials() {
    let reference = exact(&riders(3), &rideshare_values).unwrap();

    let coarse = mean_error(100, &reference);
    let medium = mean_error(2_500, &reference);
    let fine = mean_error(62_500, &reference);

    assert!(coarse > medium, "coarse {coarse} <= medium {medium}");
    assert!(medium > fine, "medium {medium} <= fine {fine}");
    assert!(fine < 0.05, "fine estimate too far off: {fine}");
}

#[test]
fn test_estimate_covers_every_player() {
    let mut rng = StdRng::seed_from_u64(11);
    let estimate = monte_carlo(&riders(6), &rideshare_values, 1, &mut rng).unwrap();
    assert_eq!(estimate.len(), 6);

    // A single ordering always splits the full fare
    let total: f64 = estimate.values().sum();
    assert_eq!(total, 6.0);
}

#[test]
fn test_large_player_set_is_sampled() {
    // 12! orderings would be too many to enumerate here
    let mut rng = StdRng::seed_from_u64(3);
    let estimate = monte_carlo(&riders(12), &rideshare_values, 20_000, &mut rng).unwrap();

    let total: f64 = estimate.values().sum();
    assert!((total - 12.0).abs() < 1e-9);
    assert!(estimate[&12] > estimate[&1]);
}
