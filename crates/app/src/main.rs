//! attest - declarative HTTP endpoint-testing CLI
//!
//! Discovers suite files, runs each suite against its configured target,
//! and prints a colorized pass/fail report per suite.

mod render;

use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use attest_application::SuiteRunner;
use attest_infrastructure::{discover_suites, load_suite, ReqwestHttpClient};
use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::render::{render, Palette};

/// Declarative HTTP endpoint testing.
#[derive(Debug, Parser)]
#[command(name = "attest", version, about)]
struct Cli {
    /// Suite file, or a directory scanned for `.yaml`/`.yml` suite files.
    path: PathBuf,

    /// When to colorize the report output.
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    color: ColorMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorMode {
    /// Color when stdout is a terminal.
    Auto,
    /// Always color.
    Always,
    /// Never color.
    Never,
}

impl ColorMode {
    fn palette(self) -> Palette {
        match self {
            Self::Always => Palette::colored(),
            Self::Never => Palette::plain(),
            Self::Auto => {
                if std::io::stdout().is_terminal() {
                    Palette::colored()
                } else {
                    Palette::plain()
                }
            }
        }
    }
}

/// What happened to one suite file during the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SuiteOutcome {
    /// Loaded and every test case passed.
    Passed,
    /// Loaded, but at least one test case failed an assertion.
    AssertionsFailed,
    /// The file could not be read or decoded.
    LoadFailed,
}

/// Maps a run's result to the process exit code: 0 when every suite
/// loaded and fully passed, 1 when any assertion failed or a file failed
/// to load, 2 on usage errors.
fn exit_code(run: &Result<Vec<SuiteOutcome>, String>) -> u8 {
    match run {
        Err(_) => 2,
        Ok(outcomes) => {
            if outcomes.iter().all(|o| *o == SuiteOutcome::Passed) {
                0
            } else {
                1
            }
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let result = run(cli).await;
    if let Err(message) = &result {
        eprintln!("attest: {message}");
    }
    ExitCode::from(exit_code(&result))
}

/// Runs every discovered suite and collects the per-file outcomes.
async fn run(cli: Cli) -> Result<Vec<SuiteOutcome>, String> {
    let files = collect_suite_files(&cli.path).await?;
    let palette = cli.color.palette();

    let client = ReqwestHttpClient::new().map_err(|e| e.to_string())?;
    let runner = SuiteRunner::new(Arc::new(client));

    let mut outcomes = Vec::with_capacity(files.len());
    for file in files {
        match load_suite(&file).await {
            Ok(suite) => {
                let report = runner.run(&suite).await;
                print!("{}", render(&suite, &report, &palette));
                outcomes.push(if report.all_passed() {
                    SuiteOutcome::Passed
                } else {
                    SuiteOutcome::AssertionsFailed
                });
            }
            Err(e) => {
                // A malformed file fails that suite only; the rest of the
                // run continues.
                tracing::warn!(error = %e, "skipping suite file");
                outcomes.push(SuiteOutcome::LoadFailed);
            }
        }
    }

    Ok(outcomes)
}

/// Resolves the CLI path to a list of suite files.
async fn collect_suite_files(path: &Path) -> Result<Vec<PathBuf>, String> {
    let metadata = tokio::fs::metadata(path)
        .await
        .map_err(|e| format!("{}: {e}", path.display()))?;

    if metadata.is_dir() {
        let files = discover_suites(path).await.map_err(|e| e.to_string())?;
        if files.is_empty() {
            return Err(format!("no suite files found in {}", path.display()));
        }
        Ok(files)
    } else {
        Ok(vec![path.to_path_buf()])
    }
}
