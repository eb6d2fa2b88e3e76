//! The `discmark` binary.

use std::process::ExitCode;

use clap::Parser;
use discmark_cli::{CliArgs, Discmark};

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    let result = match Discmark::from_args("discmark", &args) {
        Ok(app) => app.run(args).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
