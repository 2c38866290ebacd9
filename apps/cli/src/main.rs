// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CLI tool: create exterior and interior walls from the curves in a scene file
//!
//! Usage:
//!   curvewall <scene.json> [--output <report.json>] [--reject-conics]

mod config;
mod logging;
mod report;
mod scene;

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use curvewall_core::InternalUnits;

use config::Config;
use report::RunSummary;
use scene::Scene;

#[derive(Debug, Clone, PartialEq)]
struct CliArgs {
    scene: PathBuf,
    output: Option<PathBuf>,
    reject_conics: bool,
}

/// Parse everything after the program name. `Ok(None)` means help was asked for.
fn parse_args(args: &[String]) -> Result<Option<CliArgs>, String> {
    let Some(first) = args.first() else {
        return Ok(None);
    };
    if first == "--help" || first == "-h" {
        return Ok(None);
    }

    let mut parsed = CliArgs {
        scene: PathBuf::from(first),
        output: None,
        reject_conics: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--output" | "-o" => {
                i += 1;
                let path = args
                    .get(i)
                    .ok_or_else(|| "Missing value for --output".to_string())?;
                parsed.output = Some(PathBuf::from(path));
            }
            "--reject-conics" => {
                parsed.reject_conics = true;
            }
            other => return Err(format!("Unknown option: {}", other)),
        }
        i += 1;
    }
    Ok(Some(parsed))
}

fn print_usage() {
    println!(
        r#"Curve to Wall Generator

Usage: curvewall <scene.json> [options]

Options:
  -o, --output <file>   Write the run report as JSON
  --reject-conics       Reject ellipses during curve validation
  -h, --help            Show this help

Environment:
  RUST_LOG                    Log filter (default: info,curvewall=debug)
  CURVEWALL_LOG_DIR           Log directory (default: system temp dir)
  CURVEWALL_LOG_FILES         Rotated log files to keep (default: 5)
  CURVEWALL_LOG_MAX_BYTES     Log file size before rotation (default: 5 MiB)
  CURVEWALL_ACCEPT_CONICS     Accept ellipses during validation (default: true)
  CURVEWALL_HEIGHT_UNIT       Unit of the wall heights (default: ft)
  CURVEWALL_EXTERIOR_HEIGHT   Exterior wall height (default: 25)
  CURVEWALL_INTERIOR_HEIGHT   Interior wall height (default: 12)
"#
    );
}

fn run(args: CliArgs, config: &Config) -> Result<()> {
    tracing::info!(
        scene = %args.scene.display(),
        log_dir = %config.log_dir.display(),
        height_unit = %config.height_unit,
        exterior_height = config.exterior_height,
        interior_height = config.interior_height,
        "Starting curvewall"
    );

    let scene = Scene::load(&args.scene)?;
    let (mut doc, request) = scene.into_document()?;
    let run_config = config.run_config(args.reject_conics);

    let report = curvewall_processing::run(&mut doc, &request, &run_config, &InternalUnits)
        .context("Wall creation failed")?;
    let summary = RunSummary::new(&report, &doc);

    println!(
        "Created {} exterior and {} interior walls on '{}' ({} pruned, {} joins)",
        summary.exterior_walls,
        summary.interior_walls,
        summary.level.name,
        summary.pruned_walls,
        summary.joins_made
    );
    for issue in &summary.quality_issues {
        println!("  quality: {}", issue);
    }

    if let Some(output) = &args.output {
        let json = serde_json::to_string_pretty(&summary).context("Cannot serialize report")?;
        std::fs::write(output, json)
            .with_context(|| format!("Cannot write report to '{}'", output.display()))?;
        println!("Report written to {}", output.display());
    }
    Ok(())
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    let parsed = match parse_args(&args) {
        Ok(Some(parsed)) => parsed,
        Ok(None) => {
            print_usage();
            return ExitCode::SUCCESS;
        }
        Err(message) => {
            eprintln!("{}", message);
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    let config = Config::from_env();
    let _guard = match logging::init(&config) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            return ExitCode::FAILURE;
        }
    };

    match run(parsed, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "Run failed");
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
