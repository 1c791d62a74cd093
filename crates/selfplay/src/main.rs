//! Self-play CLI
//!
//! Play engine-vs-engine games and report the outcome.

use std::env;
use std::path::Path;
use std::process::ExitCode;

use selfplay::{create_engine, MatchConfig, MatchRunner};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Chess self-play runner");
    println!();
    println!("Usage:");
    println!("  selfplay [--config FILE] [--engine1 SPEC] [--engine2 SPEC] [--games N]");
    println!("           [--max-plies N] [--seed S] [--parallel] [--output FILE] [--quiet]");
    println!();
    println!("Engines:");
    println!("  random        - Uniformly random legal move");
    println!("  rollout       - Random playouts, default width and depth");
    println!("  rollout:W:D   - Random playouts, width W, depth D");
    println!();
    println!("Examples:");
    println!("  selfplay --engine1 rollout:50:2 --engine2 random --games 20");
    println!("  RUST_LOG=debug selfplay --config match.toml --output results.json");
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<&String>) -> Result<T, String> {
    let value = value.ok_or_else(|| format!("{} needs a value", flag))?;
    value
        .parse()
        .map_err(|_| format!("invalid value for {}: {}", flag, value))
}

/// Build the match config: file first (if given), then flag overrides.
fn parse_args(args: &[String]) -> Result<MatchConfig, String> {
    let mut config = MatchConfig::default();

    if let Some(pos) = args.iter().position(|a| a == "--config" || a == "-c") {
        let path = args
            .get(pos + 1)
            .ok_or_else(|| "--config needs a value".to_string())?;
        config = MatchConfig::load(Path::new(path))?;
    }

    let mut i = 0;
    while i < args.len() {
        let next = args.get(i + 1);
        match args[i].as_str() {
            "--config" | "-c" => i += 1,
            "--engine1" | "-1" => {
                config.engine1 = parse_value(&args[i], next)?;
                i += 1;
            }
            "--engine2" | "-2" => {
                config.engine2 = parse_value(&args[i], next)?;
                i += 1;
            }
            "--games" | "-g" => {
                config.num_games = parse_value(&args[i], next)?;
                i += 1;
            }
            "--max-plies" => {
                config.max_plies = parse_value(&args[i], next)?;
                i += 1;
            }
            "--seed" => {
                config.seed = Some(parse_value(&args[i], next)?);
                i += 1;
            }
            "--output" | "-o" => {
                config.output = Some(parse_value(&args[i], next)?);
                i += 1;
            }
            "--parallel" => config.parallel = true,
            "--quiet" | "-q" => config.verbose = false,
            other => return Err(format!("Unknown argument: {}", other)),
        }
        i += 1;
    }
    Ok(config)
}

fn run(config: MatchConfig) -> Result<(), String> {
    let mut engine1 = create_engine(&config.engine1, config.seed, config.parallel)?;
    let mut engine2 = create_engine(
        &config.engine2,
        config.seed.map(|s| s.wrapping_add(1)),
        config.parallel,
    )?;

    println!("=== Match: {} vs {} ===", config.engine1, config.engine2);
    println!("Games: {}, max plies: {}", config.num_games, config.max_plies);
    println!();
    info!(?config, "starting match");

    let output = config.output.clone();
    let runner = MatchRunner::new(config);
    let report = runner.run_match(engine1.as_mut(), engine2.as_mut())?;

    println!();
    report.print_report();

    if let Some(path) = output {
        report.save(Path::new(&path))?;
        println!("Results saved to {}", path);
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.iter().any(|a| a == "help" || a == "--help" || a == "-h") {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let result = parse_args(&args).and_then(run);
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            print_usage();
            ExitCode::FAILURE
        }
    }
}
