use std::process::ExitCode;

use clap::Parser;
use kubegen::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    kubegen::logging::init();

    let cli = Cli::parse();
    match cli.run(&mut std::io::stdout()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
