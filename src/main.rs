// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use anyhow::{anyhow, Result};
use splice::pattern::STEP_COUNT;
use splice::{decode_file, encode_file, PatternFile};
use std::env;
use tracing::{debug, Level};

fn print_usage() {
    println!("SPLICE - Drum Pattern Codec");
    println!();
    println!("Usage: splice [--verbose] <COMMAND>");
    println!();
    println!("Commands:");
    println!("  show <file.splice>                    Print a pattern");
    println!("  to-yaml <file.splice> [out.yaml]      Convert a pattern to YAML");
    println!("  from-yaml <in.yaml> <out.splice>      Build a pattern from YAML");
    println!("  toggle <file.splice> <track> <step>   Flip one step (0-15) in place");
    println!("  --help                                Show this help message");
}

fn show(path: &str) -> Result<()> {
    let pattern = decode_file(path)?;
    print!("{}", pattern);
    Ok(())
}

fn to_yaml(path: &str, out: Option<&str>) -> Result<()> {
    let pattern = decode_file(path)?;
    let doc = PatternFile::from_pattern(&pattern);
    match out {
        Some(out) => {
            doc.save(out)?;
            println!("Wrote {}", out);
        }
        None => print!("{}", doc.to_yaml()?),
    }
    Ok(())
}

fn from_yaml(path: &str, out: &str) -> Result<()> {
    let pattern = PatternFile::load(path)?.to_pattern()?;
    encode_file(&pattern, out)?;
    println!("Wrote {} ({} tracks)", out, pattern.tracks.len());
    Ok(())
}

fn toggle(path: &str, track_name: &str, step: &str) -> Result<()> {
    let step: usize = step
        .parse()
        .ok()
        .filter(|s| *s < STEP_COUNT)
        .ok_or_else(|| anyhow!("Invalid step: {} (expected 0-{})", step, STEP_COUNT - 1))?;

    let mut pattern = decode_file(path)?;
    let track = pattern
        .track_by_name_mut(track_name)
        .ok_or_else(|| anyhow!("No track named {:?} in {}", track_name, path))?;
    if let Some(active) = track.steps.toggle(step) {
        debug!(track = track_name, step, active, "toggled step");
    }

    encode_file(&pattern, path)?;
    print!("{}", pattern);
    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let mut args: Vec<String> = env::args().skip(1).collect();
    let verbose = args.iter().any(|a| a == "--verbose" || a == "-v");
    args.retain(|a| a != "--verbose" && a != "-v");
    init_logging(verbose);

    if args.is_empty() {
        println!("SPLICE - Drum Pattern Codec");
        println!("Run with --help for usage information");
        return Ok(());
    }

    match args[0].as_str() {
        "show" => {
            if args.len() < 2 {
                eprintln!("Error: show requires a pattern file");
                std::process::exit(1);
            }
            show(&args[1])?;
        }
        "to-yaml" => {
            if args.len() < 2 {
                eprintln!("Error: to-yaml requires a pattern file");
                std::process::exit(1);
            }
            to_yaml(&args[1], args.get(2).map(String::as_str))?;
        }
        "from-yaml" => {
            if args.len() < 3 {
                eprintln!("Error: from-yaml requires an input YAML file and an output path");
                std::process::exit(1);
            }
            from_yaml(&args[1], &args[2])?;
        }
        "toggle" => {
            if args.len() < 4 {
                eprintln!("Error: toggle requires a pattern file, a track name and a step");
                std::process::exit(1);
            }
            toggle(&args[1], &args[2], &args[3])?;
        }
        "--help" | "-h" => {
            print_usage();
        }
        _ => {
            eprintln!("Unknown command: {}", args[0]);
            print_usage();
            std::process::exit(1);
        }
    }

    Ok(())
}
