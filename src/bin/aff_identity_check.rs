use aff12_check::deviation_from_identity_file;
use aff12_check::io::write_json_file;
use log::warn;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct CheckConfig {
    pub inputs: Vec<PathBuf>,
    pub tolerance: f64,
    #[serde(default)]
    pub json_out: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<CheckConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    if config.inputs.is_empty() {
        return Err("Config lists no input files".to_string());
    }
    if !config.tolerance.is_finite() || config.tolerance < 0.0 {
        return Err(format!(
            "Tolerance must be a non-negative finite number, got {}",
            config.tolerance
        ));
    }

    let mut entries = Vec::with_capacity(config.inputs.len());
    for input in &config.inputs {
        let deviation = deviation_from_identity_file(input).map_err(|e| e.to_string())?;
        let within_tolerance = deviation <= config.tolerance;
        if !within_tolerance {
            warn!(
                "{}: deviation {deviation:.6} exceeds tolerance {:.6}",
                input.display(),
                config.tolerance
            );
        }
        println!(
            "{} {deviation:.6} {}",
            input.display(),
            if within_tolerance { "ok" } else { "EXCEEDS" }
        );
        entries.push(CheckEntry {
            path: input.clone(),
            deviation,
            within_tolerance,
        });
    }

    let n_within = entries.iter().filter(|e| e.within_tolerance).count();
    let report = CheckReport {
        tolerance: config.tolerance,
        all_within_tolerance: n_within == entries.len(),
        entries,
    };

    if let Some(json_out) = &config.json_out {
        write_json_file(json_out, &report)?;
        println!("Saved QC report to {}", json_out.display());
    }

    println!(
        "{} of {} transforms within tolerance {:.6}",
        n_within,
        report.entries.len(),
        report.tolerance
    );

    Ok(())
}

fn usage() -> String {
    "Usage: aff_identity_check <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CheckEntry {
    path: PathBuf,
    deviation: f64,
    within_tolerance: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CheckReport {
    tolerance: f64,
    all_within_tolerance: bool,
    entries: Vec<CheckEntry>,
}
