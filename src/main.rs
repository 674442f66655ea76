//! multispan - Terminal article reader with merged summary/detail rows

mod config;
mod error;
mod logging;
#[cfg(feature = "tui")]
mod tui;

use anyhow::Context;
use config::Config;
use logging::LogTarget;
use multispan_core::storage::{load_articles, write_text};
use multispan_core::{Article, GridBinding};
use std::env;
use std::path::PathBuf;
use tracing::{info, warn};

fn print_usage() {
    eprintln!("Usage: multispan [OPTIONS] [FILE]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  [FILE]                    Articles file to open (.toml)");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -o, --output <FILE>       Export as boxed text (non-interactive)");
    eprintln!("  -c, --config <FILE>       Load settings from TOML file");
    eprintln!("  --log-file <FILE>         Append log output to FILE");
    eprintln!("  --no-detail               Do not merge detail rows");
    eprintln!("  -h, --help                Print help");
}

struct Args {
    file_path: Option<PathBuf>,
    output_file: Option<PathBuf>,
    config_file: Option<PathBuf>,
    log_file: Option<PathBuf>,
    no_detail: bool,
}

fn parse_args() -> Args {
    let args: Vec<String> = env::args().collect();
    let mut parsed = Args {
        file_path: None,
        output_file: None,
        config_file: None,
        log_file: None,
        no_detail: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_usage();
                std::process::exit(0);
            }
            "-o" | "--output" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --output requires a file path");
                    std::process::exit(1);
                }
                parsed.output_file = Some(PathBuf::from(&args[i]));
            }
            "-c" | "--config" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --config requires a file path");
                    std::process::exit(1);
                }
                parsed.config_file = Some(PathBuf::from(&args[i]));
            }
            "--log-file" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --log-file requires a file path");
                    std::process::exit(1);
                }
                parsed.log_file = Some(PathBuf::from(&args[i]));
            }
            "--no-detail" => parsed.no_detail = true,
            arg if arg.starts_with('-') => {
                eprintln!("Error: Unknown option: {}", arg);
                print_usage();
                std::process::exit(1);
            }
            _ => {
                if parsed.file_path.is_none() {
                    parsed.file_path = Some(PathBuf::from(&args[i]));
                } else {
                    eprintln!("Error: Unexpected argument: {}", args[i]);
                    print_usage();
                    std::process::exit(1);
                }
            }
        }
        i += 1;
    }
    parsed
}

/// Articles with a body count as fetched; the viewer has no fetcher of its own.
fn has_body(article: &Article) -> bool {
    !article.text.trim().is_empty()
}

fn run(args: Args, config: Config) -> anyhow::Result<()> {
    let articles = match args.file_path.as_ref() {
        Some(path) => load_articles(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => Vec::new(),
    };
    info!(articles = articles.len(), "loaded articles");

    let binding = GridBinding::with_records(
        articles,
        config.columns.clone(),
        config.binding.clone(),
        has_body,
    );

    if let Some(output_path) = args.output_file {
        let widths = config.widths(binding.columns());
        write_text(&output_path, &binding, &widths, config.detail_height)
            .with_context(|| format!("Failed to export {}", output_path.display()))?;
        println!("Exported to {}", output_path.display());
        return Ok(());
    }

    run_viewer(binding, config, args.file_path)
}

#[cfg(feature = "tui")]
fn run_viewer(binding: GridBinding, config: Config, file_path: Option<PathBuf>) -> anyhow::Result<()> {
    let mut app = tui::App::new(binding, config, file_path);
    tui::run(&mut app)?;
    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_viewer(
    _binding: GridBinding,
    _config: Config,
    _file_path: Option<PathBuf>,
) -> anyhow::Result<()> {
    anyhow::bail!("built without the terminal UI; use --output to export")
}

fn main() {
    let args = parse_args();

    let (mut config, mut warnings) = config::load_config(args.config_file.as_ref());
    if args.no_detail {
        config.binding.combine_detail = false;
    }

    let target = match args.log_file.clone().or_else(|| config.log_file.clone()) {
        Some(path) => LogTarget::File(path),
        None if args.output_file.is_some() => LogTarget::Stderr,
        None => LogTarget::Off,
    };
    warnings.extend(logging::init_logging(&target, &config.log_level));
    for warning in &warnings {
        warn!("{}", warning);
        eprintln!("Warning: {}", warning);
    }

    if let Err(e) = run(args, config) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
