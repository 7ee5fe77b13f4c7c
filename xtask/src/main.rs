use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "optslot workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the slot benchmarks and write a Markdown report
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,
    },
    /// Run the test suite for every feature combination
    Test,
}

const BENCH: &str = "slot_benchmark";

const FEATURE_SETS: &[&[&str]] = &[&[], &["tracing"], &["proptest"], &["tracing", "proptest"]];

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench { quick, report_only } => {
            if !report_only {
                run_benchmarks(quick)?;
            }
            generate_report()?;
        }
        Commands::Test => run_tests()?,
    }

    Ok(())
}

fn run_tests() -> Result<()> {
    for features in FEATURE_SETS {
        let joined = features.join(",");
        println!("\n>>> Testing with features: [{}]", joined);

        let mut cmd = Command::new("cargo");
        cmd.args(["test", "-p", "optslot"]);
        if !features.is_empty() {
            cmd.arg("--features").arg(&joined);
        }

        let status = cmd
            .status()
            .with_context(|| format!("Failed to run tests for [{}]", joined))?;
        if !status.success() {
            anyhow::bail!("Tests failed for features [{}]", joined);
        }
    }
    Ok(())
}

fn run_benchmarks(quick: bool) -> Result<()> {
    println!("Running slot benchmarks...");
    let start = Instant::now();

    let mut cmd = Command::new("cargo");
    cmd.env("CARGO_INCREMENTAL", "0");
    cmd.args(["bench", "-p", "optslot", "--bench", BENCH]);

    // Args for the test runner (Criterion) go after --
    cmd.arg("--");
    if quick {
        cmd.arg("--measurement-time").arg("0.1");
        cmd.arg("--noplot");
        cmd.arg("--sample-size").arg("10");
    }

    let status = cmd.status().context("Failed to run benchmarks")?;
    if !status.success() {
        anyhow::bail!("Benchmark run failed");
    }

    println!("Finished in {:.2?}", start.elapsed());
    Ok(())
}

/// Mean time per iteration, keyed by `group/function`.
type Results = BTreeMap<String, f64>;

fn generate_report() -> Result<()> {
    println!("\n>>> Generating Report...");

    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    let mut results = Results::new();
    collect_results(criterion_dir, &mut results)?;

    let report_path = Path::new("benchmark_results/report.md");
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(report_path)
        .with_context(|| format!("Failed to create {}", report_path.display()))?;

    writeln!(file, "# Slot Benchmark Report")?;
    writeln!(file)?;
    writeln!(file, "| Benchmark | Mean | Ops/s |")?;
    writeln!(file, "|---|---|---|")?;

    for (name, time_ns) in &results {
        let ops = 1e9 / time_ns;
        let ops_str = if ops > 1_000_000.0 {
            format!("{:.2}M", ops / 1_000_000.0)
        } else if ops > 1_000.0 {
            format!("{:.2}K", ops / 1_000.0)
        } else {
            format!("{:.0}", ops)
        };
        writeln!(file, "| {} | {:.2} ns | {} |", name, time_ns, ops_str)?;
    }

    println!("Report written to {}", report_path.display());
    Ok(())
}

/// Walks `target/criterion` for `<group>/<function>/new/estimates.json`.
fn collect_results(dir: &Path, results: &mut Results) -> Result<()> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to read {}", dir.display()))?;

    for entry in entries {
        let path = entry
            .with_context(|| format!("Failed to read entry in {}", dir.display()))?
            .path();
        if path.is_dir() {
            collect_results(&path, results)?;
        } else if path.file_name().and_then(|s| s.to_str()) == Some("estimates.json") {
            if let Some((name, time_ns)) = read_estimate(&path)? {
                results.insert(name, time_ns);
            }
        }
    }
    Ok(())
}

fn read_estimate(path: &Path) -> Result<Option<(String, f64)>> {
    // Structure: .../<group>/<function>/new/estimates.json
    let Some(run_dir) = path.parent() else {
        return Ok(None);
    };
    if run_dir.file_name().and_then(|s| s.to_str()) != Some("new") {
        return Ok(None);
    }
    let Some(function_dir) = run_dir.parent() else {
        return Ok(None);
    };
    let Some(group_dir) = function_dir.parent() else {
        return Ok(None);
    };

    let name: PathBuf = [group_dir, function_dir]
        .iter()
        .filter_map(|p| p.file_name())
        .collect();

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let json: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("Malformed estimates in {}", path.display()))?;

    let time_ns = json
        .get("mean")
        .and_then(|m| m.get("point_estimate"))
        .and_then(serde_json::Value::as_f64)
        .unwrap_or(0.0);
    if time_ns <= 0.0 {
        return Ok(None);
    }

    Ok(Some((name.display().to_string(), time_ns)))
}
