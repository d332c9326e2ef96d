use clap::Parser;
use fairplay::cli::{classify_args, play, Invocation, EXIT_FATAL};
use fairplay::commitment::CommitmentEngine;
use fairplay::console::IoConsole;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Version info from build.rs
const VERSION: &str = env!("FAIRPLAY_VERSION");
const PROFILE: &str = env!("FAIRPLAY_PROFILE");
const GIT_HASH: &str = env!("FAIRPLAY_GIT_HASH");

/// Flag surface; move lists never reach clap so names like `-V` or `--` stay moves
#[derive(Parser)]
#[command(name = "fairplay")]
#[command(
    author,
    about = "Provably-fair rock-paper-scissors with any odd number of moves",
    long_about = None,
    override_usage = "fairplay <MOVE> <MOVE> <MOVE>... (odd number of non-repeating strings)"
)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,
}

fn init_tracing() {
    // Logs go to stderr so stdout stays the game transcript
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    let args = std::env::args_os()
        .skip(1)
        .map(|a| a.to_string_lossy().into_owned());

    let moves = match classify_args(args) {
        Invocation::Flag(flag) => {
            // clap prints help itself and exits
            let cli = Cli::parse_from(["fairplay", flag.as_str()]);
            if cli.version {
                println!("fairplay {} {} ({})", PROFILE, VERSION, GIT_HASH);
            }
            return ExitCode::SUCCESS;
        }
        Invocation::Play(moves) => moves,
    };

    let mut console = IoConsole::stdio();
    match play(moves, CommitmentEngine::system(), &mut console) {
        Ok(end) => ExitCode::from(end.exit_code()),
        Err(e) => {
            tracing::debug!(error = ?e, "session aborted");
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_FATAL)
        }
    }
}
