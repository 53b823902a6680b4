//! headmark: number notebook sections and keep their table of contents current.
#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, Subcommand};
use headmark::document::{Action, Document};
use headmark::{config, input, Synchronizer};
use log::LevelFilter;
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

#[derive(Parser)]
#[command(name = "headmark")]
#[command(about = "Section numbering and table of contents for notebooks", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// File extensions to match
    #[arg(long, short = 'e', value_name = "EXT", global = true)]
    ext: Vec<String>,

    /// Print results to stdout instead of writing files
    #[arg(long, global = true)]
    dry_run: bool,

    /// Show debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Number headings (or remove numbering), fix links and refresh the table of contents
    Sync {
        /// Files or directories to process
        #[arg(value_name = "PATH", required = true)]
        paths: Vec<PathBuf>,
    },
    /// Rebuild the table of contents, creating it if missing
    Toc {
        /// Files or directories to process
        #[arg(value_name = "PATH", required = true)]
        paths: Vec<PathBuf>,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(e) = simple_logger::SimpleLogger::new()
        .with_level(LevelFilter::Trace)
        .init()
    {
        eprintln!("Logging unavailable: {e}");
    }
    log::set_max_level(LevelFilter::Warn);
    let mut cfg = config::Config::load();

    // Narrow logging to the configured level once the config is known
    log::set_max_level(if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::from_str(&cfg.log_level).unwrap_or(LevelFilter::Warn)
    });

    // Override config with command line args
    if !args.ext.is_empty() {
        cfg.file_extensions = args.ext;
    }

    let (action, paths) = match args.command {
        Command::Sync { paths } => (Action::Synchronize, paths),
        Command::Toc { paths } => (Action::RebuildToc, paths),
    };

    let options = cfg.outline_options();
    let synchronizer = Synchronizer::new(options.clone());
    let mut failed = false;

    let documents = input::find_documents(&paths, &cfg.file_extensions);
    if documents.is_empty() {
        eprintln!("No matching files found");
        return ExitCode::SUCCESS;
    }

    for found in documents {
        let result = found.and_then(|path| {
            let mut doc = Document::load(&path, &options)?;
            let report = action.run(&synchronizer, &mut doc.notebook);
            if let Some(alert) = report.alert() {
                log::warn!("{}:\n{alert}", path.display());
            }
            if args.dry_run {
                print!("{}", doc.render()?);
            } else {
                doc.save()?;
            }
            Ok(())
        });
        if let Err(e) = result {
            eprintln!("Error: {e}");
            failed = true;
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
