// Wed Aug 26 2026 - Alex

use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use memhunter::output::{write_json, ReportRenderer};
use memhunter::{ScanConfig, ScanOrchestrator, YaraRuleSet};
use std::path::PathBuf;

const EXIT_MATCHES: i32 = 0;
const EXIT_NO_MATCHES: i32 = 1;
const EXIT_FAILURE: i32 = 2;

#[derive(Parser, Debug)]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "YARA signature scanner for live process memory", long_about = None)]
struct Args {
    /// Rule file or directory searched recursively for .yar files
    rules: PathBuf,

    /// Target process id
    pid: i32,

    #[arg(short, long)]
    verbose: bool,

    /// Only scan committed regions
    #[arg(long)]
    committed_only: bool,

    /// Per-region scan timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: i32,

    /// Also write the scan result as JSON
    #[arg(long)]
    json: Option<PathBuf>,

    #[arg(long)]
    no_progress: bool,

    #[arg(long)]
    no_banner: bool,
}

fn main() {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(
        if args.verbose { "debug" } else { "warn" },
    ))
    .init();

    if !args.no_banner {
        println!("{}", "memhunter - process memory signature scanner".cyan().bold());
        println!("{}", "=".repeat(50).cyan());
        println!();
    }

    let config = ScanConfig::new(args.rules.clone(), args.pid)
        .with_committed_only(args.committed_only)
        .with_timeout(args.timeout)
        .with_verbose(args.verbose);

    if let Err(e) = config.validate() {
        eprintln!("{} Invalid arguments: {}", "[!]".red(), e);
        std::process::exit(EXIT_FAILURE);
    }

    println!("{} Config:", "\\_".cyan());
    println!("  | Rule Path:  {}", config.rules_path.display());
    println!("  | Process ID: {}", config.pid);
    println!();

    let progress = if !args.no_progress {
        let pb = ProgressBar::new(100);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}% {msg}")
                .unwrap()
                .progress_chars("#>-"),
        );
        pb.set_message("Loading rules...");
        Some(pb)
    } else {
        None
    };

    let (rules, summary) = match YaraRuleSet::from_path(&config.rules_path) {
        Ok(loaded) => loaded,
        Err(e) => {
            if let Some(pb) = &progress {
                pb.finish_and_clear();
            }
            eprintln!("{} Failed to load rules: {}", "[!]".red(), e);
            std::process::exit(EXIT_FAILURE);
        }
    };

    println!(
        "{} Loaded {}/{} rule files from {}",
        "[+]".green(),
        summary.loaded,
        summary.total,
        config.rules_path.display()
    );

    if let Some(pb) = &progress {
        pb.set_message(format!("Scanning process {}...", config.pid));
        pb.set_position(30);
    }

    let orchestrator = ScanOrchestrator::new(rules.with_timeout(config.scan_timeout_secs))
        .with_committed_only(config.committed_only);

    let result = match orchestrator.scan_process(config.pid) {
        Ok(result) => result,
        Err(e) => {
            if let Some(pb) = &progress {
                pb.finish_and_clear();
            }
            eprintln!("{} Scan failed: {}", "[!]".red(), e);
            std::process::exit(EXIT_FAILURE);
        }
    };

    if let Some(pb) = &progress {
        pb.set_message("Rendering report...");
        pb.set_position(90);
        pb.finish_and_clear();
    }

    println!();
    ReportRenderer::new().print(&result);

    if let Some(json_path) = &args.json {
        if let Err(e) = write_json(&result, json_path) {
            eprintln!("{} Failed to write JSON report: {}", "[!]".red(), e);
            std::process::exit(EXIT_FAILURE);
        }
        println!("{} JSON report saved to: {}", "[+]".green(), json_path.display());
    }

    if result.has_matches() {
        std::process::exit(EXIT_MATCHES);
    }

    println!("{} No matches found", "[!]".yellow());
    std::process::exit(EXIT_NO_MATCHES);
}
