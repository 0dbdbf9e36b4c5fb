use std::process::ExitCode;

use clap::Parser;
use secant_cli::{
    Args, execute,
    report::{render_json, render_text},
};
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let outcome = match execute(&args) {
        Ok(outcome) => outcome,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::from(2);
        }
    };

    let rendered = if args.json {
        match render_json(&outcome) {
            Ok(json) => json + "\n",
            Err(err) => {
                error!(%err, "failed to serialize outcome");
                return ExitCode::FAILURE;
            }
        }
    } else {
        render_text(&outcome)
    };

    print!("{rendered}");
    if outcome.result.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
