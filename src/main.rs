mod adapters;
mod application;
mod cli;
mod ports;
mod shared;
mod wwn_resolution;

use adapters::outbound::process::SystemCommandRunner;
use application::dto::WwnRequest;
use application::use_cases::ResolveWwnUseCase;
use cli::{Args, Command};
use shared::error::ExitCode;
use shared::Result;
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run() -> Result<()> {
    let args = Args::parse_args();

    match args.command {
        Command::Wwn { blockdev } => {
            // Wire the real process runner into the use case
            let runner = SystemCommandRunner::new();
            let use_case = ResolveWwnUseCase::new(runner);

            let response = use_case.execute(WwnRequest::new(blockdev))?;
            println!("{}", response.wwn);
        }
    }

    Ok(())
}
