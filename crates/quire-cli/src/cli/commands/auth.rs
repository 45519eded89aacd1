//! Login/logout command handlers.

use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::{Context, Result, bail};
use quire_app::{AppRuntime, Credentials, UiEvent};

use super::report_status;

pub async fn login(mut runtime: AppRuntime, username: String, password: String) -> Result<()> {
    runtime
        .run(UiEvent::Login(Credentials::new(username, password)))
        .await;
    report_status(&runtime.state)
}

pub fn logout(mut runtime: AppRuntime) -> Result<()> {
    runtime.dispatch(UiEvent::Logout);
    report_status(&runtime.state)
}

/// Reads one line from stdin, prompting only when attached to a terminal.
pub fn read_password() -> Result<String> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        eprint!("Password: ");
        io::stderr().flush().ok();
    }

    let mut line = String::new();
    stdin
        .lock()
        .read_line(&mut line)
        .context("read password from stdin")?;
    let password = line.trim_end_matches(['\r', '\n']).to_string();
    if password.is_empty() {
        bail!("No password given");
    }
    Ok(password)
}
