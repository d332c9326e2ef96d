use clap::Parser;
use fairplay::cli::EXIT_FATAL;
use fairplay::verify_reveal;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Check a revealed key against the HMAC published before the round
#[derive(Parser)]
#[command(name = "fairplay-verify")]
#[command(about = "Verify a fairplay commitment after the key is revealed", long_about = None)]
struct Cli {
    /// HMAC printed at the start of the round
    #[arg(long)]
    hmac: String,

    /// Key printed after the round
    #[arg(long)]
    key: String,

    /// Computer move printed after the round
    #[arg(value_name = "MOVE", allow_hyphen_values = true)]
    move_name: String,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let report = match verify_reveal(&cli.hmac, &cli.key, &cli.move_name) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_FATAL);
        }
    };
    tracing::debug!(verified = report.verified, "checked reveal");

    if cli.json {
        match report.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::from(EXIT_FATAL);
            }
        }
    } else if report.verified {
        println!("Verified: {} matches the published HMAC", report.move_name);
    } else {
        println!("Mismatch: {} does not match the published HMAC", report.move_name);
    }

    if report.verified {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
