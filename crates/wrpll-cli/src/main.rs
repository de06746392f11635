//! WRPLL CLI - divider calculator for display pixel clocks.
//!
//! A command-line interface over `wrpll-core`. Computes WRPLL dividers for
//! pixel clocks, prints their error budgets, and checks the search against
//! the reference divider table (exiting non-zero on any mismatch).

mod logger;

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, LevelFilter};
use serde::Serialize;
use std::time::{Duration, Instant};
use wrpll_core::config::{lc, limits, post_divider};
use wrpll_core::progress::ProgressReporter;
use wrpll_core::table::{self, TmdsClock, WRPLL_TMDS_CLOCK_TABLE};
use wrpll_core::verify::{verify_table, verify_table_parallel};
use wrpll_core::{budget_for_clock, try_compute_many_parallel, try_compute_rnp, WrpllDividers};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// CLI arguments structure.
#[derive(Parser)]
#[command(name = "wrpll", version, about = "WRPLL divider calculator for display pixel clocks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Target pixel clocks in Hz.
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    clocks: Vec<u32>,

    /// Print results as JSON.
    #[arg(long)]
    json: bool,

    /// Run sequentially (disable parallelism).
    #[arg(short, long)]
    seq: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Check the search against every entry of the reference divider table.
    Verify {
        /// Check entries one at a time on the main thread.
        #[arg(short, long)]
        seq: bool,
        /// Do not draw the progress bar.
        #[arg(long)]
        no_progress: bool,
    },
    /// Print the error budget of each clock.
    Budget {
        /// Pixel clocks in Hz.
        #[arg(required = true)]
        clocks: Vec<u32>,
    },
    /// Compare the reference table entry of a clock with the computed dividers.
    Lookup {
        /// Pixel clock in Hz.
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        clock: u32,
    },
}

/// One computed clock, as printed by `--json`.
#[derive(Serialize)]
struct DividerReport {
    clock_hz: u32,
    budget_ppm: u32,
    bypass: bool,
    dividers: WrpllDividers,
    output_hz: f64,
    deviation_ppm: f64,
    ref_mhz: f64,
    vco_mhz: f64,
}

impl DividerReport {
    fn new(clock_hz: u32, dividers: WrpllDividers) -> Self {
        Self {
            clock_hz,
            budget_ppm: budget_for_clock(clock_hz),
            bypass: dividers == WrpllDividers::BYPASS,
            dividers,
            output_hz: dividers.output_hz(),
            deviation_ppm: dividers.deviation_ppm(clock_hz),
            ref_mhz: dividers.ref_mhz(),
            vco_mhz: dividers.vco_mhz(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose)?;

    match &cli.command {
        Some(Commands::Verify { seq, no_progress }) => {
            run_verify(WRPLL_TMDS_CLOCK_TABLE, !seq, !no_progress)
        }
        Some(Commands::Budget { clocks }) => {
            for &clock in clocks {
                println!("{} Hz: budget {} ppm", clock, budget_for_clock(clock));
            }
            Ok(())
        }
        Some(Commands::Lookup { clock }) => run_lookup(*clock),
        None => {
            if cli.clocks.is_empty() {
                // No argument provided, show help
                use clap::CommandFactory;
                Cli::command().print_help()?;
                return Ok(());
            }
            run_compute(&cli.clocks, cli.json, !cli.seq)
        }
    }
}

fn print_configuration() {
    println!("--- Execution Configuration ---");
    println!("wrpll v{}", VERSION);
    println!(
        "LC PLL: {} MHz, r2 {}..={}, p {}..={} step {}.",
        lc::LC_FREQ,
        limits::R2_MIN,
        limits::R2_MAX,
        post_divider::P_MIN,
        post_divider::P_MAX,
        post_divider::P_INC
    );
}

/// Computes and prints the dividers for each clock.
///
/// # Arguments
///
/// * `clocks` - Target pixel clocks in Hz, all non-zero.
/// * `json` - Print a JSON array instead of the text report.
/// * `parallel` - Search the clocks on the rayon pool.
fn run_compute(clocks: &[u32], json: bool, parallel: bool) -> anyhow::Result<()> {
    let start = Instant::now();
    let results = if parallel {
        try_compute_many_parallel(clocks)?
    } else {
        clocks
            .iter()
            .map(|&clock| try_compute_rnp(clock))
            .collect::<Result<Vec<_>, _>>()?
    };
    let duration = start.elapsed();
    info!("computed {} clocks in {}", clocks.len(), format_duration(duration));

    let reports: Vec<DividerReport> = clocks
        .iter()
        .zip(results)
        .map(|(&clock, dividers)| DividerReport::new(clock, dividers))
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    print_configuration();
    println!(
        "Mode: {} ({} clocks).",
        if parallel { "Parallel" } else { "Sequential" },
        clocks.len()
    );
    println!();
    println!("--- Dividers ---");
    for report in &reports {
        let d = report.dividers;
        println!(
            "{} Hz: r2={} n2={} p={}{}",
            report.clock_hz,
            d.r2,
            d.n2,
            d.p,
            if report.bypass { " [bypass]" } else { "" }
        );
        println!(
            "    budget {} ppm, output {:.1} Hz ({:+.3} ppm), ref {:.3} MHz, VCO {:.3} MHz",
            report.budget_ppm, report.output_hz, report.deviation_ppm, report.ref_mhz, report.vco_mhz
        );
    }
    println!();
    println!("Calculation time: {}", format_duration(duration));

    Ok(())
}

/// Runs the table verification.
///
/// Every entry is checked before the outcome is decided; any mismatch makes
/// the command fail. Mismatches are printed once, to stdout.
fn run_verify(table: &[TmdsClock], parallel: bool, show_progress: bool) -> anyhow::Result<()> {
    print_configuration();
    println!(
        "Verifying {} reference entries ({}).",
        table.len(),
        if parallel { "parallel" } else { "sequential" }
    );
    println!();

    let pb = if progress_visible(show_progress, log::max_level()) {
        ProgressBar::new(100)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("Progress: {percent:>3}% [{bar:40.green/dim}] ETA: {eta}")?
            .progress_chars("██░"),
    );
    let pb_clone = pb.clone();
    let reporter: ProgressReporter =
        Box::new(move |fraction| pb_clone.set_position((fraction * 100.0).round() as u64));

    let start = Instant::now();
    let report = if parallel {
        verify_table_parallel(table, Some(&reporter))
    } else {
        verify_table(table, Some(&reporter))
    };
    let duration = start.elapsed();
    pb.finish_and_clear();

    for mismatch in &report.mismatches {
        println!("{}", mismatch);
    }

    println!("--- Verification Summary ---");
    println!(
        "Checked {} entries in {}: {} mismatches.",
        report.checked,
        format_duration(duration),
        report.mismatches.len()
    );

    if !report.is_success() {
        anyhow::bail!(
            "{} of {} reference entries differ",
            report.mismatches.len(),
            report.checked
        );
    }
    println!("Global Status: Success. All computed dividers match the reference table.");
    Ok(())
}

/// The bar shares stderr with the logger, so it stays hidden once per-search
/// debug logs are enabled.
fn progress_visible(requested: bool, max_level: LevelFilter) -> bool {
    requested && max_level < LevelFilter::Debug
}

/// Prints the reference entry for `clock` next to the computed dividers.
fn run_lookup(clock: u32) -> anyhow::Result<()> {
    let computed = try_compute_rnp(clock)?;

    match table::lookup(clock) {
        Some(entry) => {
            println!("Reference: {} (r2,n2,p)", entry.dividers);
            println!("Computed:  {} (r2,n2,p)", computed);
            if entry.dividers == computed {
                println!("Status: Match.");
            } else {
                println!("Status: Differs.");
            }
        }
        None => {
            println!("{} Hz is not in the reference table.", clock);
            println!("Computed:  {} (r2,n2,p)", computed);
        }
    }

    Ok(())
}

/// Formats a duration into a human-readable string (ms or s).
fn format_duration(duration: Duration) -> String {
    let millis = duration.as_millis();
    if millis < 1 {
        let micros = duration.as_micros();
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else if millis < 1000 {
        format!("{}ms", millis)
    } else {
        format!("{:.2}s", duration.as_secs_f64())
    }
}
