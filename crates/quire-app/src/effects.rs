//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! The reducer itself never touches the network or the credential store.

use std::fmt;

use quire_core::api::ApiRequest;
use quire_core::credentials::mask_token;

use crate::common::TaskId;

#[derive(Clone, PartialEq, Eq)]
pub enum UiEffect {
    /// Spawn a backend call; its completion comes back tagged with `task`.
    SendRequest { task: TaskId, request: ApiRequest },

    /// Persist the token returned by login.
    StoreToken { token: String },

    /// Remove the stored token (logout or rejection).
    ClearToken,
}

impl fmt::Debug for UiEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UiEffect::SendRequest { task, request } => f
                .debug_struct("SendRequest")
                .field("task", task)
                .field("request", request)
                .finish(),
            UiEffect::StoreToken { token } => f
                .debug_struct("StoreToken")
                .field("token", &mask_token(token))
                .finish(),
            UiEffect::ClearToken => f.write_str("ClearToken"),
        }
    }
}
