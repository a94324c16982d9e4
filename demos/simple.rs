use coalition_shapley::{
    MarginalValues, MonteCarlo, error::Result, exact, exact_fraction, format_mapping,
};

/// Airport game: each airline needs a runway of a given length, and the
/// runway costs whatever the longest requirement so far costs.
fn runway_cost(ordering: &[&'static str]) -> MarginalValues<&'static str, u32> {
    let mut built = 0;
    let mut values = MarginalValues::new();
    for &airline in ordering {
        let needed = match airline {
            "Regional" => 8,
            "Domestic" => 11,
            _ => 13,
        };
        values.insert(airline, needed.max(built) - built);
        built = built.max(needed);
    }
    values
}

fn main() -> Result<()> {
    let airlines = ["Regional", "Domestic", "International"];

    println!("exact:       {}", format_mapping(&exact(&airlines, &runway_cost)?));
    println!(
        "fraction:    {}",
        format_mapping(&exact_fraction(&airlines, &runway_cost)?)
    );
    println!(
        "monte carlo: {}",
        format_mapping(&MonteCarlo::new(10_000).seed(1).estimate(&airlines, &runway_cost)?)
    );

    Ok(())
}
