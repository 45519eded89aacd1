//! Effect handlers.
//!
//! The request handler is a pure async function returning a `UiEvent`; the
//! runtime spawns it and posts the result to the inbox. Token persistence is
//! synchronous and returns an event only when the store fails.

use quire_core::api::{ApiClient, ApiError, ApiRequest};
use quire_core::credentials::SessionContext;

use crate::common::{TaskCompleted, TaskId};
use crate::events::{CredentialAction, UiEvent};

/// Completion posted for a request task that never produced one.
pub fn abandoned_request(task: TaskId) -> UiEvent {
    UiEvent::RequestCompleted(TaskCompleted {
        id: task,
        result: Err(ApiError::transport("request task ended without a result")),
    })
}

pub async fn send_request(client: ApiClient, task: TaskId, request: ApiRequest) -> UiEvent {
    let op = request.label();
    let result = client.execute(request).await;
    if let Err(err) = &result {
        tracing::debug!(task = task.0, op, error_kind = %err.kind, "request failed");
    }
    UiEvent::RequestCompleted(TaskCompleted { id: task, result })
}

pub fn store_token(session: &SessionContext, token: &str) -> Option<UiEvent> {
    let err = session.store_token(token).err()?;
    tracing::warn!("failed to persist token: {err:#}");
    Some(UiEvent::CredentialsFailed {
        action: CredentialAction::Store,
        error: format!("{err:#}"),
    })
}

pub fn clear_token(session: &SessionContext) -> Option<UiEvent> {
    let err = session.clear().err()?;
    tracing::warn!("failed to clear stored token: {err:#}");
    Some(UiEvent::CredentialsFailed {
        action: CredentialAction::Clear,
        error: format!("{err:#}"),
    })
}
