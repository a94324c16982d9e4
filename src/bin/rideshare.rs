use clap::{ArgAction, Parser, ValueEnum};
use coalition_shapley::{
    MonteCarlo, ShapleyError, ShapleyValue, exact, exact_fraction, format_mapping,
    ordering_count,
    rideshare::{riders, rideshare_values},
    summarize, summarize_fractions,
};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::{collections::BTreeMap, error::Error, process::ExitCode};
use tabled::{Table, settings::Style};

/// Split a shared taxi fare between riders living 1..=N miles from the bar
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of players
    #[arg(long)]
    players: u32,

    /// Find the exact solution
    #[arg(long)]
    exact: bool,

    /// Find the exact solution as fractions
    #[arg(long)]
    fraction: bool,

    /// Iterations for the Monte Carlo approximation
    #[arg(long = "monte-carlo", value_name = "TRIALS", allow_negative_numbers = true)]
    monte_carlo: Option<i64>,

    /// Seed for the Monte Carlo generator
    #[arg(long)]
    seed: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Plain)]
    format: Format,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Plain,
    Json,
    Table,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if let Err(e) = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("Logging unavailable: {e}");
    }
}

fn print_table(rows: Vec<ShapleyValue>) {
    let table = Table::new(rows)
        .with(Style::psql().remove_horizontals())
        .to_string();
    println!("{table}");
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let players = riders(cli.players);
    log::info!(
        "{} riders, {:?} orderings",
        players.len(),
        ordering_count(players.len())
    );

    if cli.exact {
        let output = exact(&players, &rideshare_values)?;
        match cli.format {
            Format::Plain => println!("{}", format_mapping(&output)),
            Format::Json => println!("{}", serde_json::to_string(&output)?),
            Format::Table => print_table(summarize(&output)),
        }
    }

    if cli.fraction {
        let output = exact_fraction(&players, &rideshare_values)?;
        match cli.format {
            Format::Plain => println!("{}", format_mapping(&output)),
            Format::Json => {
                let rendered: BTreeMap<u32, String> = output
                    .iter()
                    .map(|(player, value)| (*player, value.to_string()))
                    .collect();
                println!("{}", serde_json::to_string(&rendered)?)
            }
            Format::Table => print_table(summarize_fractions(&output)),
        }
    }

    if let Some(trials) = cli.monte_carlo {
        let trials = usize::try_from(trials)
            .ok()
            .filter(|&t| t > 0)
            .ok_or(ShapleyError::InvalidTrialCount { trials })?;
        let config = MonteCarlo {
            trials,
            seed: cli.seed,
        };
        log::info!("sampling {trials} orderings (seed: {:?})", cli.seed);
        let output = config.estimate(&players, &rideshare_values)?;
        match cli.format {
            Format::Plain => println!("{}", format_mapping(&output)),
            Format::Json => println!("{}", serde_json::to_string(&output)?),
            Format::Table => print_table(summarize(&output)),
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error computing Shapley values: {e}");
            ExitCode::FAILURE
        }
    }
}
