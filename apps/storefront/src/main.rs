//! # Pet Paradise Storefront Entry Point
//!
//! Runs a scripted storefront session against the mock catalog and logs
//! every step. The session itself lives in `lib.rs` for better testability.

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match paradise_storefront::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Storefront session failed");
            ExitCode::FAILURE
        }
    }
}
