//! Form controller reducer.

use quire_core::models::ArticleId;

use super::DraftField;
use crate::effects::UiEffect;
use crate::features::articles;
use crate::state::AppState;

pub fn input(state: &mut AppState, field: DraftField, value: &str) -> Vec<UiEffect> {
    state.draft.set(field, value);
    vec![]
}

/// Selects an article for editing. Unknown ids leave the draft alone.
pub fn edit(state: &mut AppState, id: ArticleId) -> Vec<UiEffect> {
    match state.articles.get(id) {
        Some(article) => state.draft.load(article),
        None => tracing::debug!(id, "edit requested for an unknown article"),
    }
    vec![]
}

pub fn cancel(state: &mut AppState) -> Vec<UiEffect> {
    state.draft.reset();
    vec![]
}

/// Routes the draft to update (edit mode) or create. A draft failing the
/// gate produces nothing.
pub fn submit(state: &mut AppState) -> Vec<UiEffect> {
    let fields = match state.draft.validate() {
        Ok(fields) => fields,
        Err(err) => {
            tracing::debug!(%err, "draft rejected by validation");
            return vec![];
        }
    };
    match state.draft.editing_id {
        Some(id) => articles::update::update(state, id, fields),
        None => articles::update::create(state, fields),
    }
}
