//! pv-sim entry point — CLI wiring and config-driven simulation.

use std::path::Path;
use std::process;

use pv_sim::battery::Battery;
use pv_sim::config::ScenarioConfig;
use pv_sim::io::export::export_csv;
use pv_sim::io::import::{read_series_csv, resample_series};
use pv_sim::profile::{DemandProfile, SolarProfile};
use pv_sim::sim::engine::{Engine, Storage};
use pv_sim::sim::summary::SummaryReport;
use pv_sim::sim::types::{IntervalSample, SimConfig};

/// Seed offset for the solar RNG to avoid correlation with the demand noise.
const SOLAR_SEED_OFFSET: u64 = 1;

/// Parsed CLI arguments.
struct CliArgs {
    scenario_path: Option<String>,
    preset: Option<String>,
    seed_override: Option<u64>,
    input_path: Option<String>,
    resample_factor: Option<usize>,
    output_path: Option<String>,
}

fn print_help() {
    eprintln!("pv-sim — Residential PV + battery self-consumption simulator");
    eprintln!();
    eprintln!("Usage: pv-sim [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --scenario <path>   Load scenario from TOML config file");
    eprintln!("  --preset <name>     Use a built-in preset (baseline, no_battery, high_solar)");
    eprintln!("  --seed <u64>        Override random seed for profile generation");
    eprintln!("  --input <path>      Read a prepared load/solar CSV series instead of");
    eprintln!("                      generating synthetic profiles");
    eprintln!("  --resample <n>      Linearly upsample the --input series by factor n");
    eprintln!("                      (e.g. 4 turns an hourly series into 15-minute)");
    eprintln!("  --output <path>     Export per-interval flow records to CSV");
    eprintln!("  --help              Show this help message");
    eprintln!();
    eprintln!("If no --scenario or --preset is given, the baseline preset is used.");
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        scenario_path: None,
        preset: None,
        seed_override: None,
        input_path: None,
        resample_factor: None,
        output_path: None,
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
            "--preset" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --preset requires a name argument");
                    process::exit(1);
                }
                cli.preset = Some(args[i].clone());
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
            "--input" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --input requires a path argument");
                    process::exit(1);
                }
                cli.input_path = Some(args[i].clone());
            }
            "--resample" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --resample requires a positive integer factor");
                    process::exit(1);
                }
                match args[i].parse::<usize>() {
                    Ok(f) if f > 0 => cli.resample_factor = Some(f),
                    _ => {
                        eprintln!(
                            "error: --resample value \"{}\" is not a positive integer",
                            args[i]
                        );
                        process::exit(1);
                    }
                }
            }
            "--output" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --output requires a path argument");
                    process::exit(1);
                }
                cli.output_path = Some(args[i].clone());
            }
            other => {
                eprintln!("error: unknown argument \"{other}\"");
                print_help();
                process::exit(1);
            }
        }
        i += 1;
    }

    if cli.resample_factor.is_some() && cli.input_path.is_none() {
        eprintln!("error: --resample only applies to an --input series");
        process::exit(1);
    }

    cli
}

/// Builds the interval series: either from a prepared CSV or synthetic profiles.
fn build_series(cli: &CliArgs, scenario: &ScenarioConfig, sim: &SimConfig) -> Vec<IntervalSample> {
    if let Some(ref path) = cli.input_path {
        let series = match read_series_csv(Path::new(path)) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        };
        return match cli.resample_factor {
            Some(factor) => resample_series(&series, factor),
            None => series,
        };
    }

    let d = &scenario.demand;
    let load = DemandProfile::new(
        d.annual_kwh,
        d.amp_frac,
        d.phase_rad,
        d.noise_std,
        sim,
        sim.seed,
    )
    .generate();

    let s = &scenario.solar;
    let solar = SolarProfile::new(
        s.kw_peak,
        s.sunrise_idx,
        s.sunset_idx,
        s.noise_std,
        sim,
        sim.seed.wrapping_add(SOLAR_SEED_OFFSET),
    )
    .generate();

    load.into_iter()
        .zip(solar)
        .map(|(l, s)| IntervalSample::new(l, s))
        .collect()
}

fn main() {
    let cli = parse_args();

    // Load config: --scenario takes priority, then --preset, then baseline default
    let mut scenario = if let Some(ref path) = cli.scenario_path {
        match ScenarioConfig::from_toml_file(Path::new(path)) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else if let Some(ref name) = cli.preset {
        match ScenarioConfig::from_preset(name) {
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
        scenario.simulation.seed = seed;
    }

    // Validate before anything runs
    let errors = scenario.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    let sim = SimConfig::new(
        scenario.simulation.steps_per_day,
        scenario.simulation.days,
        scenario.simulation.seed,
    );

    let series = build_series(&cli, &scenario, &sim);

    let bat = &scenario.battery;
    let storage = if bat.capacity_kwh > 0.0 {
        Storage::Battery(Battery::new(
            bat.capacity_kwh,
            bat.initial_soc,
            bat.eta_charge,
            bat.eta_discharge,
            bat.min_soc,
        ))
    } else {
        Storage::PassThrough
    };

    let mut engine = Engine::new(sim, scenario.simulation.price_per_kwh, storage);
    let records = engine.run(&series);

    let summary = SummaryReport::from_records(&records);
    println!("{summary}");

    if let Some(ref path) = cli.output_path {
        if let Err(e) = export_csv(&records, Path::new(path)) {
            eprintln!("error: failed to write CSV: {e}");
            process::exit(1);
        }
        eprintln!("Flow records written to {path}");
    }
}
