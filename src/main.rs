//! Simulator entry point — CLI wiring and multi-run driver.

use std::path::Path;
use std::process;

use evse_sim::config::ScenarioConfig;
use evse_sim::io::export::{RunSeries, export_csv};
use evse_sim::sim::engine::Engine;

/// Parsed CLI arguments.
struct CliArgs {
    scenario_path: Option<String>,
    seed_override: Option<u64>,
    runs_override: Option<usize>,
    stations_override: Option<usize>,
    telemetry_out: Option<String>,
}

fn print_help() {
    eprintln!("evse-sim — EV charging-station utilization simulator");
    eprintln!();
    eprintln!("Usage: evse-sim [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --scenario <path>        Load scenario from TOML config file");
    eprintln!("  --seed <u64>             Override base random seed");
    eprintln!("  --runs <usize>           Override number of seeded runs");
    eprintln!("  --stations <usize>       Override station count");
    eprintln!("  --telemetry-out <path>   Export per-tick power series to CSV");
    eprintln!("  --help                   Show this help message");
    eprintln!();
    eprintln!("Without --scenario the baseline year-long scenario is used.");
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        scenario_path: None,
        seed_override: None,
        runs_override: None,
        stations_override: None,
        telemetry_out: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            "--scenario" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --scenario requires a path argument");
                    process::exit(1);
                }
                cli.scenario_path = Some(args[i].clone());
            }
            "--seed" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --seed requires a u64 argument");
                    process::exit(1);
                }
                if let Ok(s) = args[i].parse::<u64>() {
                    cli.seed_override = Some(s);
                } else {
                    eprintln!("error: --seed value \"{}\" is not a valid u64", args[i]);
                    process::exit(1);
                }
            }
            "--runs" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --runs requires a usize argument");
                    process::exit(1);
                }
                if let Ok(r) = args[i].parse::<usize>() {
                    cli.runs_override = Some(r);
                } else {
                    eprintln!("error: --runs value \"{}\" is not a valid usize", args[i]);
                    process::exit(1);
                }
            }
            "--stations" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --stations requires a usize argument");
                    process::exit(1);
                }
                if let Ok(n) = args[i].parse::<usize>() {
                    cli.stations_override = Some(n);
                } else {
                    eprintln!(
                        "error: --stations value \"{}\" is not a valid usize",
                        args[i]
                    );
                    process::exit(1);
                }
            }
            "--telemetry-out" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --telemetry-out requires a path argument");
                    process::exit(1);
                }
                cli.telemetry_out = Some(args[i].clone());
            }
            other => {
                eprintln!("error: unknown argument \"{other}\"");
                print_help();
                process::exit(1);
            }
        }
        i += 1;
    }

    cli
}

fn main() {
    let cli = parse_args();

    let mut scenario = if let Some(ref path) = cli.scenario_path {
        match ScenarioConfig::from_toml_file(Path::new(path)) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else {
        ScenarioConfig::baseline()
    };

    if let Some(seed) = cli.seed_override {
        scenario.simulation.base_seed = seed;
    }
    if let Some(runs) = cli.runs_override {
        scenario.simulation.runs = runs;
    }
    if let Some(count) = cli.stations_override {
        scenario.station.count = count;
    }

    let errors = scenario.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    println!("Running simulations to validate results:");
    println!();
    println!(
        "Theoretical maximum should be {:.0} kW",
        scenario.sim_config_for_run(0).theoretical_max_power_kw()
    );
    println!("Actual maximum should be between 77-121 kW");
    println!("Concurrency factor should be between 35-55%");
    println!();
    println!("Results:");

    let mut telemetry: Vec<RunSeries> = Vec::new();

    for run in 0..scenario.simulation.runs {
        let sim_config = scenario.sim_config_for_run(run);
        let seed = sim_config.seed;
        let mut engine = Engine::new(sim_config);
        let report = engine.run();

        println!();
        println!("Simulation {}:", run + 1);
        println!("{report}");

        if cli.telemetry_out.is_some() {
            telemetry.push(RunSeries {
                seed,
                power_by_tick: engine.power_by_tick().to_vec(),
            });
        }
    }

    if let Some(ref path) = cli.telemetry_out {
        if let Err(e) = export_csv(&telemetry, Path::new(path)) {
            eprintln!("error: failed to write CSV: {e}");
            process::exit(1);
        }
        eprintln!("Telemetry written to {path}");
    }
}
