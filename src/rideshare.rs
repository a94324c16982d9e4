//! Shared taxi ride.
//!
//! Riders leave a bar in one taxi heading down a single road. Each rider is
//! identified by the distance to their home, and the fare is the total
//! distance driven. A rider joining the ride adds the stretch of road beyond
//! the farthest rider already on board, or nothing if someone lives farther.

use crate::types::MarginalValues;

/// Marginal cost of each rider joining in `ordering`
pub fn rideshare_values(ordering: &[u32]) -> MarginalValues<u32, u32> {
    let mut farthest = 0;
    let mut values = MarginalValues::new();
    for &rider in ordering {
        values.insert(rider, rider.saturating_sub(farthest));
        farthest = farthest.max(rider);
    }
    values
}

/// Riders `1..=n`, one per mile marker
pub fn riders(n: u32) -> Vec<u32> {
    (1..=n).collect()
}
