use std::process::ExitCode;

use clap::Parser;
use tutor_mascot_lib::RunOptions;

#[derive(Parser)]
#[command(
    name = "tutor-mascot",
    about = "Talk to a tutor mascot backed by a question-answering service",
    version
)]
struct Cli {
    /// Base URL of the question-answering service
    #[arg(long, env = "TUTOR_API_BASE")]
    api_base: Option<String>,

    /// Disable speech synthesis and recognition
    #[arg(long)]
    no_speech: bool,

    /// Keep at most one exchange in flight
    #[arg(long)]
    serialized: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let options = RunOptions {
        api_base: cli.api_base,
        no_speech: cli.no_speech,
        serialized: cli.serialized,
        verbose: cli.verbose,
    };

    match tutor_mascot_lib::run(options).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("tutor-mascot: {}", e);
            ExitCode::FAILURE
        }
    }
}
