//! Operation envelope shared by login and the four article operations.
//!
//! `begin_operation`: clear status, take the next ticket, mark busy, emit the
//! request. `settle_operation`: apply the success or report the failure, then
//! clear busy. Stale completions are dropped unless they reject the session.

use quire_core::api::{
    ApiError, ApiErrorKind, ApiRequest, ApiResponse, ApiResult, GENERIC_FAILURE_MESSAGE,
};

use crate::common::{TaskId, TaskKind};
use crate::effects::UiEffect;
use crate::events::RequestCompleted;
use crate::features::{articles, session};
use crate::state::{AppState, StatusMessage};

impl AppState {
    pub fn begin_operation(&mut self, kind: TaskKind, request: ApiRequest) -> Vec<UiEffect> {
        self.status = None;
        let task = self.task_seq.next_id();
        self.tasks.on_started(task, kind);
        tracing::debug!(task = task.0, op = kind.label(), "operation started");
        vec![UiEffect::SendRequest { task, request }]
    }

    pub fn settle_operation(&mut self, completed: RequestCompleted) -> Vec<UiEffect> {
        let RequestCompleted { id, result } = completed;
        let Some(kind) = self.tasks.active_kind(id) else {
            return self.settle_stale(id, result);
        };

        let effects = match result.and_then(|response| apply_success(self, kind, response)) {
            Ok(effects) => effects,
            Err(err) => report_failure(self, kind, &err),
        };
        self.tasks.finish_if_active(id);
        tracing::debug!(task = id.0, op = kind.label(), "operation settled");
        effects
    }

    /// A superseded completion never touches the collection or Busy, but a
    /// rejection from the current session still ends it.
    fn settle_stale(&mut self, id: TaskId, result: ApiResult<ApiResponse>) -> Vec<UiEffect> {
        match result {
            Err(err) if err.is_unauthorized() && self.tasks.in_current_session(id) => {
                tracing::debug!(task = id.0, "stale completion rejected the session");
                self.status = Some(StatusMessage::error(err.message));
                session::update::redirect_to_login(self)
            }
            _ => {
                tracing::debug!(task = id.0, "dropping stale completion");
                vec![]
            }
        }
    }
}

/// Applies a success payload. A payload of the wrong shape for `kind` is
/// reported as a parse failure.
fn apply_success(
    state: &mut AppState,
    kind: TaskKind,
    response: ApiResponse,
) -> Result<Vec<UiEffect>, ApiError> {
    let effects = match (kind, response) {
        (TaskKind::Login, ApiResponse::LoggedIn(body)) => session::update::on_logged_in(state, body),
        (TaskKind::ListArticles, ApiResponse::Articles(body)) => {
            articles::update::on_listed(state, body)
        }
        (TaskKind::CreateArticle, ApiResponse::Article(body)) => {
            articles::update::on_created(state, body)
        }
        (TaskKind::UpdateArticle { id }, ApiResponse::Article(body)) => {
            articles::update::on_updated(state, id, body)
        }
        (TaskKind::DeleteArticle { id }, ApiResponse::Deleted(body)) => {
            articles::update::on_deleted(state, id, body)
        }
        (kind, _) => {
            return Err(ApiError {
                kind: ApiErrorKind::Parse,
                status: None,
                message: GENERIC_FAILURE_MESSAGE.to_string(),
                details: Some(format!("unexpected payload for {}", kind.label())),
            });
        }
    };
    Ok(effects)
}

fn report_failure(state: &mut AppState, kind: TaskKind, err: &ApiError) -> Vec<UiEffect> {
    tracing::debug!(
        op = kind.label(),
        error_kind = %err.kind,
        status = ?err.status,
        details = ?err.details,
        "operation failed"
    );
    state.status = Some(StatusMessage::error(err.message.clone()));

    if err.is_unauthorized() {
        session::update::redirect_to_login(state)
    } else if kind == TaskKind::Login {
        session::update::on_login_failed(state)
    } else {
        vec![]
    }
}
