//! UI event types.
//!
//! Every input to the reducer is a `UiEvent`: front-end actions and the
//! completions the runtime posts to its inbox.

use std::fmt;

use quire_core::api::{ApiResponse, ApiResult};
use quire_core::models::ArticleId;

use crate::common::TaskCompleted;
use crate::features::form::DraftField;

/// Username/password pair for the credential exchange.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Which token persistence step failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialAction {
    Store,
    Clear,
}

/// Completion of a network operation, tagged with its ticket.
pub type RequestCompleted = TaskCompleted<ApiResult<ApiResponse>>;

#[derive(Debug)]
pub enum UiEvent {
    Login(Credentials),
    Logout,
    LoadArticles,
    DeleteArticle { id: ArticleId },

    /// Select an article into the draft.
    EditArticle { id: ArticleId },
    CancelEdit,
    DraftInput { field: DraftField, value: String },
    SubmitDraft,

    /// Posted by the runtime when a spawned request finishes.
    RequestCompleted(RequestCompleted),

    /// Posted by the runtime when the credential store refuses a write.
    CredentialsFailed {
        action: CredentialAction,
        error: String,
    },
}
