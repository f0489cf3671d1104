//! Balance simulator CLI.
//!
//! Plays seeded players up the procedural floors and reports how far they get.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                     # Default: 200 runs to floor 30
//!   cargo run --bin simulate -- -n 50 -f 60      # 50 runs to floor 60
//!   cargo run --bin simulate -- --seed 42 --json # Reproducible run, JSON report
//!   RUST_LOG=arise=debug cargo run --bin simulate -- -n 1 --state

use arise::save::save_state;
use arise::simulator::{run_simulation, simulate_player, SimConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::env;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let options = parse_args(&args);
    let config = &options.config;

    if options.dump_state {
        let rng = StdRng::seed_from_u64(config.seed.unwrap_or(0));
        let (_, state) = simulate_player(config, rng);
        match save_state(&state) {
            Ok(json) => println!("{}", json),
            Err(err) => {
                eprintln!("Failed to serialize state: {}", err);
                std::process::exit(1);
            }
        }
        return;
    }

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              ARISE BALANCE SIMULATOR                          ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Target Floor:   {}", config.target_floor);
    println!("  Max Attempts:   {}", config.max_attempts_per_run);
    println!("  Upgrade Gear:   {}", config.upgrade_gear);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(config);
    println!("{}", report.to_text());

    if options.json {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        match std::fs::write(&filename, report.to_json()) {
            Ok(()) => println!("JSON report saved to: {}", filename),
            Err(err) => eprintln!("Failed to write JSON report: {}", err),
        }
    }
}

struct Options {
    config: SimConfig,
    json: bool,
    dump_state: bool,
}

fn parse_args(args: &[String]) -> Options {
    let mut options = Options {
        config: SimConfig::default(),
        json: false,
        dump_state: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    options.config.num_runs = args[i + 1].parse().unwrap_or(200);
                    i += 1;
                }
            }
            "-f" | "--floor" => {
                if i + 1 < args.len() {
                    options.config.target_floor = args[i + 1].parse().unwrap_or(30);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    options.config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-a" | "--attempts" => {
                if i + 1 < args.len() {
                    options.config.max_attempts_per_run = args[i + 1].parse().unwrap_or(2_000);
                    i += 1;
                }
            }
            "--no-upgrade" => {
                options.config.upgrade_gear = false;
            }
            "--json" => {
                options.json = true;
            }
            "--state" => {
                options.dump_state = true;
            }
            "-v" | "--verbose" => {
                options.config.verbosity = 2;
            }
            "--quick" => {
                options.config = SimConfig::quick();
            }
            "--deep" => {
                options.config = SimConfig::deep_climb();
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    options
}

fn print_help() {
    println!("Arise Balance Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>      Number of simulated players (default: 200)");
    println!("    -f, --floor <F>     Target floor to clear (default: 30)");
    println!("    -s, --seed <S>      Random seed for reproducibility");
    println!("    -a, --attempts <A>  Dungeon attempts per player (default: 2000)");
    println!("    --no-upgrade        Never spend shards on upgrades");
    println!("    --json              Also write the report as JSON");
    println!("    --state             Print one player's final state as JSON and exit");
    println!("    --quick             Preset: 20 runs to floor 10");
    println!("    --deep              Preset: 50 runs to floor 80");
    println!("    -v, --verbose       Print every run");
    println!("    -h, --help          Show this help");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=arise=debug) for engine tracing on stderr.");
}
