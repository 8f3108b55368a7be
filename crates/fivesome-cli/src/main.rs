use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use fivesome_cli::{CliError, load_rules};
use fivesome_cli::report::Report;
use fivesome_cli::scorecard::Scorecard;

/// Play a written scorecard through the Fivesome engine and print standings.
#[derive(Debug, Parser)]
#[command(name = "fivesome", version)]
struct Args {
    /// Scorecard TOML file.
    scorecard: PathBuf,
    /// Rules file. Must exist and parse; without it ./fivesome.toml is used
    /// when present.
    #[arg(long)]
    rules: Option<PathBuf>,
    /// Print standings as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            tracing::error!(error = %e, "Scorecard run failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        },
    }
}

fn run(args: &Args) -> Result<String, CliError> {
    let rules = load_rules(args.rules.as_deref())?;

    let card = Scorecard::load(&args.scorecard)?;
    let game = card.play(&rules)?;
    let report = Report::from_game(&game);

    if args.json {
        Ok(report.to_json()?)
    } else {
        Ok(report.render_text())
    }
}
