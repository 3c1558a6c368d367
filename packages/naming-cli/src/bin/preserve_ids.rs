use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;
use std::process;
use std::rc::Rc;

use module_naming::logging::{ConsoleLogger, LogLevel};
use module_naming::RunMode;
use module_naming_cli::{run, BuildManifest};

fn main() {
    let matches = Command::new("preserve-ids")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compute stable module ids and preserved exports for a build manifest")
        .arg(
            Arg::new("manifest")
                .short('m')
                .long("manifest")
                .value_name("PATH")
                .help("Path to the build manifest (JSON)")
                .default_value("build.json"),
        )
        .arg(
            Arg::new("dll")
                .long("dll")
                .action(ArgAction::SetTrue)
                .help("Link-library build: store ids in module metadata only"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Log every assigned id"),
        )
        .get_matches();

    let manifest_path = matches
        .get_one::<String>("manifest")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("build.json"));
    let run_mode = matches.get_flag("dll").then_some(RunMode::Dll);
    let level = if matches.get_flag("verbose") {
        LogLevel::Debug
    } else {
        LogLevel::Warn
    };
    let logger = Rc::new(ConsoleLogger::new("preserve-ids", level));

    if !manifest_path.exists() {
        eprintln!("Error: Manifest not found: {:?}", manifest_path);
        process::exit(1);
    }

    let manifest = BuildManifest::load(&manifest_path).unwrap_or_else(|e| {
        eprintln!("Failed to load manifest: {:#}", e);
        process::exit(1);
    });

    let report = match run(&manifest, run_mode, logger) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Module naming failed: {}", e);
            process::exit(1);
        }
    };

    match report.to_json() {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Failed to write report: {}", e);
            process::exit(1);
        }
    }
}
