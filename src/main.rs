//! Kodegen Parcel - Build configuration resolver.
//!
//! This binary resolves the parcel kind, target, phase and output location of a
//! build from explicit options and editor-style build arguments, and prints the
//! artifact path the build invoker should use.

use kodegen_bundler_parcel::{ParcelError, cli};
use std::process;

fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match cli::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let ParcelError::Config(config) = &e {
                eprintln!("  key: -{}", config.key());
            }
            for suggestion in e.recovery_suggestions() {
                eprintln!("  hint: {}", suggestion);
            }
            if e.is_recoverable() {
                eprintln!("  note: the failure came from the environment; retrying may succeed");
            }
            1
        }
    };

    process::exit(exit_code);
}
