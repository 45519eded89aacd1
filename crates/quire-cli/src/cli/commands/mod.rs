//! CLI command handlers.

pub mod articles;
pub mod auth;
pub mod config;

use anyhow::{Result, bail};
use quire_app::AppState;

/// Prints the latest status message. An error-level status becomes the
/// command's error.
fn report_status(state: &AppState) -> Result<()> {
    match &state.status {
        Some(status) if status.is_error() => bail!("{}", status.text),
        Some(status) if !status.text.is_empty() => println!("{}", status.text),
        _ => {}
    }
    Ok(())
}
