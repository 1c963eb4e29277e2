//! # Beam Response CLI
//!
//! Terminal front-end for `beam_core`.
//!
//! ```text
//! beam_cli [request.json] [--settings settings.json] [--output report.json]
//! ```
//!
//! Without a request file the CLI prompts for each input. Set `RUST_LOG=debug`
//! to see engine dispatch.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use log::{debug, info};

use beam_core::file_io::{load_request, load_settings, save_report};
use beam_core::{
    AnalysisReport, AnalysisRequest, AnalysisSettings, Beam, BeamAnalysis, CalcError, Material,
    Quantity, SIMPLY_SUPPORTED, TWO_SPAN_UNEQUAL,
};

#[derive(Debug, Default)]
struct Args {
    request: Option<PathBuf>,
    settings: Option<PathBuf>,
    output: Option<PathBuf>,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args::default();
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--settings" => {
                args.settings = Some(iter.next().ok_or("--settings needs a path")?.into());
            }
            "--output" | "-o" => {
                args.output = Some(iter.next().ok_or("--output needs a path")?.into());
            }
            other if other.starts_with('-') => return Err(format!("unknown flag: {}", other)),
            other => args.request = Some(other.into()),
        }
    }
    Ok(args)
}

fn read_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input).ok()?;
    Some(input.trim().to_string())
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    read_line(prompt)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn prompt_string(prompt: &str, default: &str) -> String {
    match read_line(prompt) {
        Some(s) if !s.is_empty() => s,
        _ => default.to_string(),
    }
}

fn prompt_request() -> AnalysisRequest {
    println!("Conditions: {}, {}", SIMPLY_SUPPORTED, TWO_SPAN_UNEQUAL);
    let condition = prompt_string("Support condition [simply-supported]: ", SIMPLY_SUPPORTED);
    let primary = prompt_f64("Primary span [4.0]: ", 4.0);
    let secondary = if condition == TWO_SPAN_UNEQUAL {
        prompt_f64("Secondary span [5.0]: ", 5.0)
    } else {
        0.0
    };
    let load = prompt_f64("Uniform load [10.0]: ", 10.0);
    let e = prompt_f64("Elastic modulus E [200000.0]: ", 200_000.0);
    let i = prompt_f64("Moment of inertia I [0.0001]: ", 0.0001);
    println!();

    let material = Arc::new(Material::new("User", [("E", e), ("I", i)]));
    AnalysisRequest::new(Beam::new(primary, secondary, material), load, condition)
}

fn run(args: &Args) -> Result<AnalysisReport, CalcError> {
    let settings = match &args.settings {
        Some(path) => load_settings(path)?,
        None => AnalysisSettings::default(),
    };
    debug!("settings: {:?}", settings);

    let request = match &args.request {
        Some(path) => {
            info!("loading request from {}", path.display());
            load_request(path)?
        }
        None => prompt_request(),
    };

    let engine = BeamAnalysis::with_settings(settings);
    let report = request.run(&engine)?;

    if let Some(path) = &args.output {
        save_report(&report, path)?;
        info!("report saved to {}", path.display());
    }
    Ok(report)
}

fn print_report(report: &AnalysisReport) {
    println!("═══════════════════════════════════════");
    println!("  BEAM RESPONSE RESULTS");
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  Condition: {}", report.condition);
    println!("  Spans:     {} + {}", report.beam.primary_span(), report.beam.secondary_span());
    println!("  Load:      {}", report.load);
    println!("  Material:  {} (EI = {})", report.beam.material(), report.beam.material().flexural_rigidity());
    println!();
    println!("Reactions:");
    for (n, r) in report.reactions.iter().enumerate() {
        println!("  R{} = {:.4}", n + 1, r);
    }
    println!("  Residual  {:.2e}", report.equilibrium_residual());
    println!();
    println!("Extremes:");
    for quantity in Quantity::ALL {
        let max = report.diagram(quantity).max;
        println!("  {:<15} {:>12.6} at x = {:.3}", quantity.display_name(), max.value, max.position);
    }
    println!();
    println!("═══════════════════════════════════════");

    println!();
    println!("JSON Output (for API use):");
    if let Ok(json) = serde_json::to_string_pretty(report) {
        println!("{}", json);
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    println!("Beam Response CLI");
    println!("=================");
    println!();

    let args = match parse_args() {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            eprintln!("Usage: beam_cli [request.json] [--settings settings.json] [--output report.json]");
            return ExitCode::from(2);
        }
    };

    match run(&args) {
        Ok(report) => {
            print_report(&report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}
