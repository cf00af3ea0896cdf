//! Serial Terminal Build - packages the application into a single executable.
//!
//! This binary verifies the packaging tool is installed (installing it on
//! demand), attaches the application icon when present, invokes the packager,
//! and reports the outcome with actionable diagnostics.

use std::process;

use serial_terminal_build::cli;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
