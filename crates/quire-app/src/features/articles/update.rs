//! Article repository reducer.
//!
//! Each operation goes through the operation envelope; the `on_*` handlers
//! run only for the completion holding the current ticket.

use quire_core::api::ApiRequest;
use quire_core::models::{
    ArticleFields, ArticleId, ArticleResponse, ArticlesResponse, MessageResponse,
};

use crate::common::TaskKind;
use crate::effects::UiEffect;
use crate::state::{AppState, StatusMessage};

pub fn list(state: &mut AppState) -> Vec<UiEffect> {
    state.begin_operation(TaskKind::ListArticles, ApiRequest::ListArticles)
}

pub fn create(state: &mut AppState, fields: ArticleFields) -> Vec<UiEffect> {
    state.begin_operation(TaskKind::CreateArticle, ApiRequest::CreateArticle { fields })
}

pub fn update(state: &mut AppState, id: ArticleId, fields: ArticleFields) -> Vec<UiEffect> {
    state.begin_operation(
        TaskKind::UpdateArticle { id },
        ApiRequest::UpdateArticle { id, fields },
    )
}

pub fn delete(state: &mut AppState, id: ArticleId) -> Vec<UiEffect> {
    state.begin_operation(
        TaskKind::DeleteArticle { id },
        ApiRequest::DeleteArticle { id },
    )
}

pub fn on_listed(state: &mut AppState, response: ArticlesResponse) -> Vec<UiEffect> {
    state.articles.replace_all(response.articles);
    state.status = Some(StatusMessage::info(response.message));
    vec![]
}

pub fn on_created(state: &mut AppState, response: ArticleResponse) -> Vec<UiEffect> {
    state.articles.append(response.article);
    state.draft.reset();
    state.status = Some(StatusMessage::info(response.message));
    vec![]
}

pub fn on_updated(
    state: &mut AppState,
    id: ArticleId,
    response: ArticleResponse,
) -> Vec<UiEffect> {
    let article = response.article;
    if article.id != id {
        tracing::warn!(
            requested = id,
            returned = article.id,
            "update returned a different article id"
        );
    }
    if !state.articles.replace(article) {
        tracing::debug!(id, "updated article is not in the local collection");
    }
    state.draft.reset();
    state.status = Some(StatusMessage::info(response.message));
    vec![]
}

pub fn on_deleted(
    state: &mut AppState,
    id: ArticleId,
    response: MessageResponse,
) -> Vec<UiEffect> {
    state.articles.remove(id);
    if state.draft.editing_id == Some(id) {
        state.draft.reset();
    }
    state.status = Some(StatusMessage::info(response.message));
    vec![]
}
