//! Fight balance simulator CLI.
//!
//! Run Monte Carlo fight simulations over a roster.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                      # Default: 1000 fights, demo roster
//!   cargo run --bin simulate -- -n 100 --seed 42  # Reproducible 100-fight batch
//!   cargo run --bin simulate -- -r roster.json --ids 1,2,5

use arena::build_info::BUILD_DATE;
use arena::character::{demo_roster, Character};
use arena::combat::{run_fight, FightSettings};
use arena::simulator::{run_simulation, SimConfig};
use arena::store;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::env;
use std::process;

struct CliOptions {
    config: SimConfig,
    settings: FightSettings,
    roster_path: Option<String>,
    ids: Option<Vec<u32>>,
    save_json: bool,
    show_fight_log: bool,
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let opts = parse_args(&args);

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║                 ARENA FIGHT SIMULATOR                         ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Build:          {}", BUILD_DATE);
    println!("Fights:         {}", opts.config.num_fights);
    if let Some(seed) = opts.config.seed {
        println!("Seed:           {}", seed);
    }

    let roster = load_roster(&opts);
    let names: Vec<String> = roster
        .iter()
        .map(|c| format!("{} ({})", c.name, c.class.as_str()))
        .collect();
    println!("Roster:         {}", names.join(", "));
    println!();

    if opts.show_fight_log {
        print_one_fight(&roster, &opts);
        println!();
    }

    println!("Running simulation...");
    println!();

    let report = match run_simulation(&roster, &opts.settings, &opts.config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Simulation failed: {e}");
            process::exit(1);
        }
    };

    println!("{}", report.to_text());

    if opts.save_json {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        std::fs::write(&filename, report.to_json()).expect("Failed to write JSON report");
        println!("JSON report saved to: {}", filename);
    }
}

fn load_roster(opts: &CliOptions) -> Vec<Character> {
    let full = match &opts.roster_path {
        Some(path) => match store::load_json(path) {
            Ok(roster) => roster,
            Err(e) => {
                eprintln!("Failed to load roster from {path}: {e}");
                process::exit(1);
            }
        },
        None => demo_roster(),
    };
    match &opts.ids {
        Some(ids) => store::select_by_ids(&full, ids),
        None => full,
    }
}

/// Print one full fight log before the batch, for eyeballing the flow.
fn print_one_fight(roster: &[Character], opts: &CliOptions) {
    let mut rng = match opts.config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    match run_fight(roster, &opts.settings, &mut rng) {
        Ok(outcome) => {
            for line in &outcome.log {
                println!("{line}");
            }
        }
        Err(e) => {
            eprintln!("Fight failed: {e}");
            process::exit(1);
        }
    }
}

fn parse_args(args: &[String]) -> CliOptions {
    let mut opts = CliOptions {
        config: SimConfig::default(),
        settings: FightSettings::default(),
        roster_path: None,
        ids: None,
        save_json: false,
        show_fight_log: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--fights" => {
                if i + 1 < args.len() {
                    opts.config.num_fights = args[i + 1].parse().unwrap_or(1000);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    opts.config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-r" | "--roster" => {
                if i + 1 < args.len() {
                    opts.roster_path = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--ids" => {
                if i + 1 < args.len() {
                    let ids: Vec<u32> = args[i + 1]
                        .split(',')
                        .filter_map(|part| part.trim().parse().ok())
                        .collect();
                    opts.ids = Some(ids);
                    i += 1;
                }
            }
            "--crit-rate" => {
                if i + 1 < args.len() {
                    opts.settings.critical_punch_rate = args[i + 1].parse().unwrap_or(15);
                    i += 1;
                }
            }
            "--crit-damage" => {
                if i + 1 < args.len() {
                    opts.settings.critical_punch_damage = args[i + 1].parse().unwrap_or(40);
                    i += 1;
                }
            }
            "--one-punch-rate" => {
                if i + 1 < args.len() {
                    opts.settings.one_punch_rate = args[i + 1].parse().unwrap_or(50);
                    i += 1;
                }
            }
            "--log" => {
                opts.show_fight_log = true;
            }
            "--json" => {
                opts.save_json = true;
            }
            "-v" | "--verbose" => {
                opts.config.verbosity = 2;
            }
            "--quick" => {
                opts.config = SimConfig::quick();
            }
            "-h" | "--help" => {
                print_help();
                process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    opts
}

fn print_help() {
    println!("Arena Fight Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --fights <N>        Number of fights to simulate (default: 1000)");
    println!("    -s, --seed <S>          Random seed for reproducibility");
    println!("    -r, --roster <FILE>     Load roster from a JSON file");
    println!("    --ids <A,B,C>           Fight only these roster ids");
    println!("    --crit-rate <P>         Critical punch rate percent (default: 15)");
    println!("    --crit-damage <D>       Critical punch damage (default: 40)");
    println!("    --one-punch-rate <P>    Finishing punch rate percent (default: 50)");
    println!("    --log                   Print one full fight log before the batch");
    println!("    --json                  Save a JSON report");
    println!("    -v, --verbose           Per-fight output");
    println!("    --quick                 Quick check (100 fights)");
    println!("    -h, --help              Show this help");
    println!();
    println!("EXAMPLES:");
    println!("    cargo run --bin simulate                       # Default run");
    println!("    cargo run --bin simulate -- -n 100 --seed 42   # Reproducible batch");
    println!("    cargo run --bin simulate -- --log --quick      # Show a fight, then 100 more");
    println!("    cargo run --bin simulate -- -r roster.json --ids 1,2,5");
}
