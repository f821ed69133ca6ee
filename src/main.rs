// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use std::env;
use std::process;

use anyhow::{bail, Result};
use scales::{circle_of_fifths, derive_scale, modes, Settings};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("SCALES - Musical scale lookup");
    println!();
    println!("Usage: scales [--config <PATH>] <COMMAND>");
    println!();
    println!("Commands:");
    println!("  scale --root <ROOT> --mode <MODE>   Print the notes of a scale");
    println!("  notes [--list] <NOTE>...            List the scales matching 7 notes");
    println!("  roots                               List valid roots");
    println!("  modes                               List supported modes");
    println!();
    println!("Options:");
    println!("  --config <PATH>         Load settings from a YAML file");
    println!("  --help                  Show this help message");
}

fn init_logging(settings: &Settings) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&settings.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Remove `--config <PATH>` from the arguments and load it
fn take_settings(args: &mut Vec<String>) -> Result<Settings> {
    let Some(pos) = args.iter().position(|a| a == "--config") else {
        return Ok(Settings::default());
    };
    if pos + 1 >= args.len() {
        bail!("--config requires a path");
    }
    let path = args.remove(pos + 1);
    args.remove(pos);
    Settings::load(path)
}

/// Value following a flag such as `--root`
fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

/// Notes may be given as separate arguments or comma-separated
fn split_notes(args: &[String]) -> Vec<String> {
    args.iter()
        .filter(|a| a.as_str() != "--list")
        .flat_map(|a| a.split([',', ' ']))
        .filter(|n| !n.is_empty())
        .map(str::to_string)
        .collect()
}

fn show_scale(args: &[String], settings: &Settings) {
    let (Some(root), Some(mode)) = (flag_value(args, "--root"), flag_value(args, "--mode")) else {
        eprintln!("Error: scale requires --root and --mode");
        print_usage();
        process::exit(1);
    };

    match derive_scale(root, mode) {
        Ok(scale) => println!("{}", scale.describe(settings.include_octave)),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn show_matches(args: &[String], settings: &Settings) {
    let notes = split_notes(args);
    if notes.is_empty() {
        eprintln!("Error: notes requires a list of notes");
        print_usage();
        process::exit(1);
    }

    let resolver = settings.resolver();
    debug!(?notes, workers = resolver.workers(), "identifying scales");
    match resolver.resolve_notes(&notes) {
        Ok(found) => println!("{}", found.join(", ")),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn main() -> Result<()> {
    let mut args: Vec<String> = env::args().collect();
    let settings = take_settings(&mut args)?;
    init_logging(&settings);

    if args.len() < 2 {
        println!("Must provide a command [scale, notes, roots, modes]");
        println!("Run with --help for usage information");
        process::exit(1);
    }

    match args[1].as_str() {
        "scale" => show_scale(&args[2..], &settings),
        "notes" => show_matches(&args[2..], &settings),
        "roots" => println!("{}", circle_of_fifths().join(", ")),
        "modes" => {
            let names: Vec<&str> = modes().iter().map(|m| m.name()).collect();
            println!("{}", names.join(", "));
        }
        "--help" | "-h" => {
            print_usage();
        }
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
            process::exit(1);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|a| a.to_string()).collect()
    }

    #[test]
    fn test_split_notes() {
        let notes = split_notes(&args(&["--list", "C,D,E", "F G", "A,,B", ""]));
        assert_eq!(notes, vec!["C", "D", "E", "F", "G", "A", "B"]);
    }

    #[test]
    fn test_split_notes_without_list_flag() {
        let notes = split_notes(&args(&["C", "D", "E", "F", "G", "A", "B"]));
        assert_eq!(notes.len(), 7);
        assert!(split_notes(&args(&["--list"])).is_empty());
    }

    #[test]
    fn test_flag_value() {
        let a = args(&["--root", "Eb", "--mode", "Harmonic Minor"]);
        assert_eq!(flag_value(&a, "--root"), Some("Eb"));
        assert_eq!(flag_value(&a, "--mode"), Some("Harmonic Minor"));

        let missing = args(&["--mode", "Major", "--root"]);
        assert_eq!(flag_value(&missing, "--root"), None);
        assert_eq!(flag_value(&missing, "--config"), None);
    }

    #[test]
    fn test_take_settings_without_config() {
        let mut a = args(&["scales", "roots"]);
        let settings = take_settings(&mut a).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(a, args(&["scales", "roots"]));
    }

    #[test]
    fn test_take_settings_removes_config_flag() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scales.yaml");
        std::fs::write(&path, "workers: 3\n").unwrap();
        let path = path.to_string_lossy().to_string();

        let mut a = args(&["scales", "notes", "--config", path.as_str(), "C", "D"]);
        let settings = take_settings(&mut a).unwrap();
        assert_eq!(settings.workers, Some(3));
        assert_eq!(a, args(&["scales", "notes", "C", "D"]));
    }

    #[test]
    fn test_take_settings_requires_path() {
        let mut a = args(&["scales", "modes", "--config"]);
        let err = take_settings(&mut a).unwrap_err();
        assert_eq!(err.to_string(), "--config requires a path");
    }
}
