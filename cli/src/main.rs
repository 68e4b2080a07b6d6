//! DropSort - Command-line front-end for the file organizing engine.
//!
//! Collects sources and options, runs the engine on a worker thread, and
//! renders progress, reports, and history as text.

mod progress;
mod worker;

use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use engine::{
    cleanse, fs_ops, history, scan, settings, CancelToken, RenamePattern, SourceFile,
    TransferOutcome, TransferRequest,
};

use crate::progress::TransferEvent;

/// DropSort - move files into categorized folders
#[derive(Parser, Debug)]
#[command(name = "dropsort")]
#[command(version = "0.1.0")]
#[command(about = "Sort files into categorized folders with optional renaming")]
struct Cli {
    /// Settings file
    #[arg(
        long,
        value_name = "PATH",
        default_value = "dropsort_settings.json",
        global = true
    )]
    settings: PathBuf,

    /// History file
    #[arg(
        long,
        value_name = "PATH",
        default_value = "dropsort_history.json",
        global = true
    )]
    history_file: PathBuf,

    /// Log filter (trace, debug, info, warn, error)
    #[arg(long, value_name = "LEVEL", default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Move files (or folder contents) into the target directory
    Organize(OrganizeArgs),
    /// List a folder's files grouped by category
    Scan(ScanArgs),
    /// Strip preset substrings from text
    Clean(CleanArgs),
    /// Show recent transfer history
    History(HistoryArgs),
}

#[derive(Args, Debug)]
struct OrganizeArgs {
    /// Files or folders to move; folders expand recursively
    #[arg(value_name = "SOURCE", required = true)]
    sources: Vec<PathBuf>,

    /// Target directory (defaults to the remembered one)
    #[arg(long, value_name = "PATH")]
    dest: Option<PathBuf>,

    /// Sort recognized files into category subfolders
    #[arg(long, conflicts_with = "flat")]
    categorize: bool,

    /// Keep everything directly under the target directory
    #[arg(long)]
    flat: bool,

    /// Rename images to timestamp-derived names
    #[arg(long, conflicts_with = "keep_names")]
    rename_images: bool,

    /// Keep original image names
    #[arg(long)]
    keep_names: bool,

    /// Timestamp pattern: seconds or millis
    #[arg(long, value_name = "PATTERN")]
    pattern: Option<String>,

    /// Custom display name (single file source only)
    #[arg(long, value_name = "NAME")]
    name: Option<String>,

    /// Persist the effective options back to the settings file
    #[arg(long)]
    remember: bool,
}

#[derive(Args, Debug)]
struct ScanArgs {
    #[arg(value_name = "FOLDER")]
    folder: PathBuf,

    /// Only list files whose name contains this text
    #[arg(long, value_name = "TEXT")]
    filter: Option<String>,
}

#[derive(Args, Debug)]
struct CleanArgs {
    /// File with one pattern per line
    #[arg(long, value_name = "PATH")]
    presets: PathBuf,

    /// Input file (stdin when omitted)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct HistoryArgs {
    /// Also print absolute destination paths
    #[arg(long)]
    paths: bool,
}

fn main() {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let exit_code = match run_cli(&cli) {
        Ok(()) => 0,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            2
        }
    };

    process::exit(exit_code);
}

/// Main CLI logic - separated for testability
fn run_cli(cli: &Cli) -> Result<(), String> {
    match &cli.command {
        Command::Organize(args) => run_organize(cli, args),
        Command::Scan(args) => run_scan(args),
        Command::Clean(args) => run_clean(args),
        Command::History(args) => run_history(cli, args),
    }
}

fn run_organize(cli: &Cli, args: &OrganizeArgs) -> Result<(), String> {
    let mut saved = settings::load(&cli.settings);

    let target_dir = args
        .dest
        .clone()
        .unwrap_or_else(|| saved.target_dir.clone());
    let categorize = if args.categorize {
        true
    } else if args.flat {
        false
    } else {
        saved.categorize_files
    };
    let auto_rename = if args.rename_images {
        true
    } else if args.keep_names {
        false
    } else {
        saved.auto_rename_images
    };
    let pattern = match &args.pattern {
        Some(p) => RenamePattern::from_str(p)
            .ok_or_else(|| format!("Invalid pattern '{}'. Must be 'seconds' or 'millis'", p))?,
        None => saved.rename_pattern,
    };

    if args.name.is_some() && (args.sources.len() != 1 || args.sources[0].is_dir()) {
        return Err("--name requires exactly one file source".to_string());
    }

    let mut sources = Vec::new();
    for path in &args.sources {
        if path.is_dir() {
            let mut found = fs_ops::collect_sources(path)
                .map_err(|e| format!("Could not read folder {}: {}", path.display(), e))?;
            sources.append(&mut found);
        } else if path.exists() {
            match &args.name {
                Some(name) => sources.push(SourceFile::with_name(path, name.clone())),
                None => sources.push(SourceFile::new(path)),
            }
        } else {
            return Err(format!("Source does not exist: {}", path.display()));
        }
    }
    if sources.is_empty() {
        return Err("Nothing to move".to_string());
    }

    let request = TransferRequest::new(sources, target_dir.clone(), categorize, auto_rename, pattern);
    let events = worker::spawn_transfer(request, CancelToken::new());

    let mut outcome: Option<TransferOutcome> = None;
    for event in events.iter() {
        match event {
            TransferEvent::Started { total_files } => {
                eprintln!("Moving {} files to {}", total_files, target_dir.display());
            }
            TransferEvent::Progress { percent, label } => {
                eprintln!("[{:3}%] {}", percent, label);
            }
            TransferEvent::Completed { outcome: done } => {
                outcome = Some(done);
                break;
            }
            TransferEvent::SetupFailed { title, message } => {
                return Err(format!("{}: {}", title, message));
            }
        }
    }
    let outcome = outcome.ok_or_else(|| "worker exited without a result".to_string())?;

    eprintln!();
    eprintln!(
        "Summary: {} moved, {} failed",
        outcome.processed.len(),
        outcome.errors.len()
    );
    for file in &outcome.processed {
        println!("  {} -> {}", file.name, file.folder);
    }
    if !outcome.errors.is_empty() {
        eprintln!();
        eprintln!("Failed files:");
        for err in &outcome.errors {
            eprintln!("  {}: {}", err.source.display(), err.message);
        }
    }

    if !outcome.processed.is_empty() {
        let mut entries = history::load(&cli.history_file);
        if let Err(e) = history::append(&cli.history_file, &mut entries, outcome.processed.clone())
        {
            eprintln!("Warning: could not record history: {}", e);
        }
    }

    if args.remember {
        saved.target_dir = target_dir;
        saved.categorize_files = categorize;
        saved.auto_rename_images = auto_rename;
        saved.rename_pattern = pattern;
        if let Err(e) = settings::save(&cli.settings, &saved) {
            eprintln!("Warning: could not save settings: {}", e);
        }
    }

    if outcome.is_clean() {
        Ok(())
    } else {
        Err("One or more files failed to move".to_string())
    }
}

fn run_scan(args: &ScanArgs) -> Result<(), String> {
    let listing =
        scan::scan_folder(&args.folder, args.filter.as_deref()).map_err(|e| e.to_string())?;

    if listing.is_empty() {
        println!("No recognized files in {}", args.folder.display());
        return Ok(());
    }
    for group in &listing.groups {
        if group.files.is_empty() {
            continue;
        }
        println!("{} ({})", group.folder, group.files.len());
        for file in &group.files {
            println!("  {}", file.display());
        }
    }
    Ok(())
}

fn run_clean(args: &CleanArgs) -> Result<(), String> {
    let presets = fs::read_to_string(&args.presets)
        .map_err(|e| format!("Could not read presets {}: {}", args.presets.display(), e))?;
    let input = match &args.input {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| format!("Could not read input {}: {}", path.display(), e))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| format!("Could not read stdin: {}", e))?;
            buf
        }
    };

    print!("{}", cleanse::cleanse_text(&input, &presets));
    Ok(())
}

fn run_history(cli: &Cli, args: &HistoryArgs) -> Result<(), String> {
    let entries = history::load(&cli.history_file);
    if entries.is_empty() {
        println!("No history recorded");
        return Ok(());
    }
    for entry in history::recent(&entries) {
        println!("{}", entry.time);
        for file in &entry.files {
            if args.paths {
                println!("  {} -> {} ({})", file.name, file.folder, file.path.display());
            } else {
                println!("  {} -> {}", file.name, file.folder);
            }
        }
    }
    Ok(())
}
