//! Binary entry point for netwatch.
//!
//! Everything interesting lives in the library; this file only wires
//! options to the tick loop and maps failures to exit codes.

use std::process::ExitCode;

use netwatch::config::{Cli, Command, ValidatedConfig, write_default_config};

mod app;
mod run;

use app::{exit_code, print_config_hint, setup_tracing};

#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();

    // Verbosity comes straight off the CLI, so logging can start before
    // the config file is even touched.
    setup_tracing(cli.verbose);

    // `netwatch init` writes the template and exits without loading config.
    if let Some(Command::Init { output }) = &cli.command {
        return match write_default_config(output) {
            Ok(()) => {
                println!("Wrote configuration template to {}", output.display());
                exit_code::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {e}");
                exit_code::CONFIG_ERROR
            }
        };
    }

    let config = match ValidatedConfig::load(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            print_config_hint(&e);
            return exit_code::CONFIG_ERROR;
        }
    };

    tracing::info!("netwatch starting: {config}");

    let runtime = tokio::runtime::Runtime::new().expect("Failed to create Tokio runtime");
    match runtime.block_on(run::execute(config)) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::error!("netwatch stopped: {e}");
            exit_code::runtime_error()
        }
    }
}
