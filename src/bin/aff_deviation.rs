use aff12_check::deviation_from_identity_file;
use std::env;
use std::path::Path;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let files: Vec<String> = env::args().skip(1).collect();
    if files.is_empty() {
        return Err(usage());
    }

    let multiple = files.len() > 1;
    for file in &files {
        let deviation =
            deviation_from_identity_file(Path::new(file)).map_err(|e| e.to_string())?;
        if multiple {
            println!("{file} {deviation:.6}");
        } else {
            println!("{deviation:.6}");
        }
    }

    Ok(())
}

fn usage() -> String {
    "Usage: aff_deviation <aff12-file> [<aff12-file> ...]".to_string()
}
