//! Planter console driver
//!
//! Pots the scenario's plants, prints every plant before each tick, and
//! stops as soon as one of them dies.
//!
//! Usage:
//!   cargo run -p planter-sim
//!   cargo run -p planter-sim -- --seed 42 --max-ticks 200
//!   cargo run -p planter-sim -- --scenario garden.json --quiet
//!
//! Log level comes from `RUST_LOG` (default `debug`).

use planter_logic::prelude::*;
use tracing_subscriber::EnvFilter;

const SEPARATOR: &str = "-----------------";

// ── Command line ────────────────────────────────────────────────────────

#[derive(Debug, Default)]
struct Options {
    scenario: Option<String>,
    seed: Option<u64>,
    max_ticks: Option<u64>,
    quiet: bool,
}

#[derive(Debug)]
enum CliError {
    MissingValue(&'static str),
    BadNumber { flag: &'static str, value: String },
    UnknownFlag(String),
    Scenario(ScenarioError),
}

impl From<ScenarioError> for CliError {
    fn from(e: ScenarioError) -> Self {
        CliError::Scenario(e)
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::MissingValue(flag) => write!(f, "{} needs a value", flag),
            CliError::BadNumber { flag, value } => {
                write!(f, "{} expects a whole number, got '{}'", flag, value)
            }
            CliError::UnknownFlag(flag) => write!(f, "unknown argument '{}'", flag),
            CliError::Scenario(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CliError {}

fn parse_number(flag: &'static str, value: Option<String>) -> Result<u64, CliError> {
    let value = value.ok_or(CliError::MissingValue(flag))?;
    value
        .parse()
        .map_err(|_| CliError::BadNumber { flag, value })
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Options, CliError> {
    let mut opts = Options::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--scenario" => {
                opts.scenario = Some(args.next().ok_or(CliError::MissingValue("--scenario"))?);
            }
            "--seed" => opts.seed = Some(parse_number("--seed", args.next())?),
            "--max-ticks" => opts.max_ticks = Some(parse_number("--max-ticks", args.next())?),
            "--quiet" | "-q" => opts.quiet = true,
            _ => return Err(CliError::UnknownFlag(arg)),
        }
    }
    Ok(opts)
}

/// Stock scenario unless a file is given; flags override the file.
fn build_scenario(opts: &Options) -> Result<Scenario, CliError> {
    let mut scenario = match &opts.scenario {
        Some(path) => Scenario::load(path)?,
        None => Scenario::default(),
    };
    if let Some(seed) = opts.seed {
        scenario.seed = seed;
    }
    if opts.max_ticks.is_some() {
        scenario.max_ticks = opts.max_ticks;
    }
    scenario.validate()?;
    Ok(scenario)
}

// ── Report ──────────────────────────────────────────────────────────────

fn print_plants(plants: &[&Plant]) {
    for plant in plants {
        println!("{}", plant);
        println!("{}", SEPARATOR);
    }
}

fn run(opts: &Options) -> Result<(), CliError> {
    let scenario = build_scenario(opts)?;
    let mut sim = Simulation::new(&scenario, SystemCalendar);

    let quiet = opts.quiet;
    let summary = sim.run_with(|s| {
        if !quiet {
            let all: Vec<&Plant> = s.planter().plants().iter().collect();
            print_plants(&all);
        }
    });

    log::info!("Stopped after {} ticks", summary.ticks);

    let planter = sim.planter();
    if planter.has_dead_plants() {
        println!("found dead plants:");
        print_plants(&planter.dead_plants());
    }
    println!("living:");
    print_plants(&planter.live_plants());
    Ok(())
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = parse_args(std::env::args().skip(1)).and_then(|opts| run(&opts));
    if let Err(e) = result {
        eprintln!("planter-sim: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_args_is_stock_scenario() {
        let opts = parse_args(args(&[])).unwrap();
        assert!(!opts.quiet);
        assert_eq!(build_scenario(&opts).unwrap(), Scenario::default());
    }

    #[test]
    fn test_flags_override_scenario() {
        let opts = parse_args(args(&["--seed", "42", "--max-ticks", "9", "-q"])).unwrap();
        assert!(opts.quiet);
        let scenario = build_scenario(&opts).unwrap();
        assert_eq!(scenario.seed, 42);
        assert_eq!(scenario.max_ticks, Some(9));
        assert_eq!(scenario.plants, Scenario::default().plants);
    }

    #[test]
    fn test_bad_number() {
        let err = parse_args(args(&["--seed", "lots"])).unwrap_err();
        assert!(matches!(err, CliError::BadNumber { flag: "--seed", .. }));
    }

    #[test]
    fn test_missing_value() {
        let err = parse_args(args(&["--max-ticks"])).unwrap_err();
        assert!(matches!(err, CliError::MissingValue("--max-ticks")));
    }

    #[test]
    fn test_unknown_flag() {
        let err = parse_args(args(&["--fast"])).unwrap_err();
        assert_eq!(err.to_string(), "unknown argument '--fast'");
    }

    #[test]
    fn test_zero_tick_limit_rejected() {
        let opts = parse_args(args(&["--max-ticks", "0"])).unwrap();
        assert!(matches!(
            build_scenario(&opts),
            Err(CliError::Scenario(ScenarioError::ZeroTickLimit))
        ));
    }
}
