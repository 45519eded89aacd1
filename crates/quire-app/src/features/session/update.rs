//! Session reducer.
//!
//! Handles login/logout transitions and the redirect taken when the server
//! rejects the stored token.

use quire_core::api::ApiRequest;
use quire_core::models::LoginResponse;

use super::{SessionState, View};
use crate::common::TaskKind;
use crate::effects::UiEffect;
use crate::events::{CredentialAction, Credentials};
use crate::state::{AppState, StatusMessage};

/// Status text shown after an explicit logout.
pub const FAREWELL_MESSAGE: &str = "Goodbye!";

pub fn login(state: &mut AppState, credentials: Credentials) -> Vec<UiEffect> {
    state.session = SessionState::LoggingIn;
    let Credentials { username, password } = credentials;
    state.begin_operation(
        TaskKind::Login,
        ApiRequest::Login { username, password },
    )
}

pub fn on_logged_in(state: &mut AppState, response: LoginResponse) -> Vec<UiEffect> {
    state.status = Some(StatusMessage::info(response.message));
    state.session = SessionState::LoggedIn;
    state.view = View::Articles;
    vec![UiEffect::StoreToken {
        token: response.token,
    }]
}

/// Non-rejection login failure: back to logged out, view untouched.
pub fn on_login_failed(state: &mut AppState) -> Vec<UiEffect> {
    state.session = SessionState::LoggedOut;
    vec![]
}

/// Explicit logout. No network call; safe to repeat.
///
/// Any outstanding operation is abandoned: its completion arrives stale.
pub fn logout(state: &mut AppState) -> Vec<UiEffect> {
    state.tasks.clear();
    state.tasks.end_session(state.task_seq.peek());
    state.status = Some(StatusMessage::info(FAREWELL_MESSAGE));
    state.session = SessionState::LoggedOut;
    state.view = View::Login;
    vec![UiEffect::ClearToken]
}

/// Taken on any authentication rejection. Keeps the failing operation's
/// status message. Rejections for tickets issued before this point are
/// ignored afterwards.
pub fn redirect_to_login(state: &mut AppState) -> Vec<UiEffect> {
    tracing::debug!("authentication rejected; redirecting to login");
    state.tasks.end_session(state.task_seq.peek());
    state.session = SessionState::LoggedOut;
    state.view = View::Login;
    vec![UiEffect::ClearToken]
}

/// The token could not be written or removed. A failed store ends the
/// session just begun.
pub fn on_credentials_failed(
    state: &mut AppState,
    action: CredentialAction,
    error: &str,
) -> Vec<UiEffect> {
    let text = match action {
        CredentialAction::Store => {
            state.session = SessionState::LoggedOut;
            state.view = View::Login;
            format!("Could not save the session token: {error}")
        }
        CredentialAction::Clear => format!("Could not remove the stored session token: {error}"),
    };
    state.status = Some(StatusMessage::error(text));
    vec![]
}
