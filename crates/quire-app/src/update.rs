//! Reducer.
//!
//! All state mutations happen here. The runtime calls `update(state, event)`
//! and executes the returned effects.

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::{articles, form, session};
use crate::state::AppState;

pub fn update(state: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Login(credentials) => session::update::login(state, credentials),
        UiEvent::Logout => session::update::logout(state),
        UiEvent::LoadArticles => articles::update::list(state),
        UiEvent::DeleteArticle { id } => articles::update::delete(state, id),
        UiEvent::EditArticle { id } => form::update::edit(state, id),
        UiEvent::CancelEdit => form::update::cancel(state),
        UiEvent::DraftInput { field, value } => form::update::input(state, field, &value),
        UiEvent::SubmitDraft => form::update::submit(state),
        UiEvent::RequestCompleted(completed) => state.settle_operation(completed),
        UiEvent::CredentialsFailed { action, error } => {
            session::update::on_credentials_failed(state, action, &error)
        }
    }
}

#[cfg(test)]
mod tests {
    use quire_core::api::{ApiError, ApiRequest, ApiResponse, ApiResult, GENERIC_FAILURE_MESSAGE};
    use quire_core::models::{
        Article, ArticleFields, ArticleId, ArticleResponse, ArticlesResponse, LoginResponse,
        MessageResponse, Topic,
    };

    use super::*;
    use crate::common::{TaskCompleted, TaskId};
    use crate::events::{CredentialAction, Credentials};
    use crate::features::articles::ArticlesState;
    use crate::features::form::DraftField;
    use crate::features::session::{FAREWELL_MESSAGE, SessionState, View};
    use crate::state::StatusLevel;

    fn article(id: ArticleId, title: &str) -> Article {
        Article {
            id,
            title: title.to_string(),
            text: format!("{title} body"),
            topic: Topic::React,
        }
    }

    fn logged_in_with(items: Vec<Article>) -> AppState {
        let mut app = AppState::new(true);
        app.articles = ArticlesState::with_articles(items);
        app
    }

    fn sent_request(effects: &[UiEffect]) -> (TaskId, ApiRequest) {
        match effects {
            [UiEffect::SendRequest { task, request }] => (*task, request.clone()),
            other => panic!("expected a single SendRequest, got {other:?}"),
        }
    }

    fn complete(app: &mut AppState, id: TaskId, result: ApiResult<ApiResponse>) -> Vec<UiEffect> {
        update(app, UiEvent::RequestCompleted(TaskCompleted { id, result }))
    }

    fn unauthorized() -> ApiError {
        ApiError::http_status(401, r#"{"message":"Token expired"}"#)
    }

    fn fill_draft(app: &mut AppState, title: &str, text: &str, topic: &str) {
        for (field, value) in [
            (DraftField::Title, title),
            (DraftField::Text, text),
            (DraftField::Topic, topic),
        ] {
            update(
                app,
                UiEvent::DraftInput {
                    field,
                    value: value.to_string(),
                },
            );
        }
    }

    #[test]
    fn test_initial_state_follows_stored_token() {
        let fresh = AppState::new(false);
        assert_eq!(fresh.session, SessionState::LoggedOut);
        assert_eq!(fresh.view, View::Login);

        let resumed = AppState::new(true);
        assert_eq!(resumed.session, SessionState::LoggedIn);
        assert_eq!(resumed.view, View::Articles);
        assert!(!resumed.is_busy());
    }

    #[test]
    fn test_login_success_stores_token_and_navigates() {
        let mut app = AppState::new(false);
        let effects = update(&mut app, UiEvent::Login(Credentials::new("foo", "12345678")));
        let (task, request) = sent_request(&effects);
        assert!(matches!(request, ApiRequest::Login { ref username, .. } if username == "foo"));
        assert_eq!(app.session, SessionState::LoggingIn);
        assert!(app.is_busy());

        let effects = complete(
            &mut app,
            task,
            Ok(ApiResponse::LoggedIn(LoginResponse {
                token: "tok-123".to_string(),
                message: "Welcome back, foo!".to_string(),
            })),
        );

        assert_eq!(
            effects,
            vec![UiEffect::StoreToken {
                token: "tok-123".to_string()
            }]
        );
        assert_eq!(app.session, SessionState::LoggedIn);
        assert_eq!(app.view, View::Articles);
        assert_eq!(app.status_text(), Some("Welcome back, foo!"));
        assert!(!app.is_busy());
    }

    #[test]
    fn test_login_server_failure_keeps_view() {
        let mut app = AppState::new(false);
        let (task, _) = sent_request(&update(
            &mut app,
            UiEvent::Login(Credentials::new("foo", "bad")),
        ));

        let effects = complete(
            &mut app,
            task,
            Err(ApiError::http_status(
                422,
                r#"{"message":"Invalid credentials"}"#,
            )),
        );

        assert!(effects.is_empty());
        assert_eq!(app.session, SessionState::LoggedOut);
        assert_eq!(app.view, View::Login);
        let status = app.status.as_ref().unwrap();
        assert_eq!(status.text, "Invalid credentials");
        assert_eq!(status.level, StatusLevel::Error);
        assert!(!app.is_busy());
    }

    #[test]
    fn test_login_rejection_takes_redirect_path() {
        let mut app = AppState::new(false);
        let (task, _) = sent_request(&update(
            &mut app,
            UiEvent::Login(Credentials::new("foo", "bad")),
        ));

        let effects = complete(&mut app, task, Err(unauthorized()));

        assert_eq!(effects, vec![UiEffect::ClearToken]);
        assert_eq!(app.session, SessionState::LoggedOut);
        assert_eq!(app.view, View::Login);
        assert_eq!(app.status_text(), Some("Token expired"));
    }

    #[test]
    fn test_logout_twice_is_harmless() {
        let mut app = logged_in_with(vec![article(1, "a")]);
        for _ in 0..2 {
            let effects = update(&mut app, UiEvent::Logout);
            assert_eq!(effects, vec![UiEffect::ClearToken]);
            assert_eq!(app.session, SessionState::LoggedOut);
            assert_eq!(app.view, View::Login);
            assert_eq!(app.status_text(), Some(FAREWELL_MESSAGE));
        }
    }

    #[test]
    fn test_delete_removes_matching_article() {
        let mut app = logged_in_with(vec![article(1, "a"), article(2, "b"), article(3, "c")]);
        let (task, request) = sent_request(&update(&mut app, UiEvent::DeleteArticle { id: 3 }));
        assert_eq!(request, ApiRequest::DeleteArticle { id: 3 });
        assert!(app.is_busy());

        complete(
            &mut app,
            task,
            Ok(ApiResponse::Deleted(MessageResponse {
                message: "Article 3 was deleted".to_string(),
            })),
        );

        let ids: Vec<_> = app.articles.items().iter().map(|a| a.id).collect();
        assert_eq!(ids, [1, 2]);
        assert!(!app.is_busy());
        assert_eq!(app.status_text(), Some("Article 3 was deleted"));
    }

    #[test]
    fn test_create_appends_returned_article() {
        let mut app = logged_in_with(vec![article(1, "a")]);
        fill_draft(&mut app, "T title", "X text", "Node");
        let (task, request) = sent_request(&update(&mut app, UiEvent::SubmitDraft));
        assert!(matches!(request, ApiRequest::CreateArticle { .. }));

        let created = Article {
            id: 9,
            title: "T title".to_string(),
            text: "X text".to_string(),
            topic: Topic::Node,
        };
        complete(
            &mut app,
            task,
            Ok(ApiResponse::Article(ArticleResponse {
                article: created.clone(),
                message: "Created".to_string(),
            })),
        );

        assert_eq!(app.articles.len(), 2);
        assert_eq!(app.articles.items().last(), Some(&created));
        assert_eq!(app.status_text(), Some("Created"));
        assert_eq!(app.draft.title, "");
        assert!(app.draft.editing_id.is_none());
    }

    #[test]
    fn test_submit_routes_by_draft_mode() {
        let mut app = logged_in_with(vec![article(4, "Closures")]);
        fill_draft(&mut app, "New one", "Some text", "React");
        let (_, request) = sent_request(&update(&mut app, UiEvent::SubmitDraft));
        assert_eq!(
            request,
            ApiRequest::CreateArticle {
                fields: ArticleFields {
                    title: "New one".to_string(),
                    text: "Some text".to_string(),
                    topic: Topic::React,
                }
            }
        );

        let mut app = logged_in_with(vec![article(4, "Closures")]);
        update(&mut app, UiEvent::EditArticle { id: 4 });
        assert_eq!(app.draft.heading(), "Edit Article");
        let (_, request) = sent_request(&update(&mut app, UiEvent::SubmitDraft));
        assert!(matches!(request, ApiRequest::UpdateArticle { id: 4, .. }));
    }

    #[test]
    fn test_invalid_draft_produces_no_request() {
        let mut app = logged_in_with(vec![]);
        fill_draft(&mut app, "ab", "abcdef", "React");
        let effects = update(&mut app, UiEvent::SubmitDraft);

        assert!(effects.is_empty());
        assert!(!app.is_busy());
        assert!(app.status.is_none());
        assert_eq!(app.draft.title, "ab");
    }

    #[test]
    fn test_edit_unknown_id_is_noop() {
        let mut app = logged_in_with(vec![article(1, "a")]);
        fill_draft(&mut app, "keep", "me", "");
        let before = app.draft.clone();
        update(&mut app, UiEvent::EditArticle { id: 42 });
        assert_eq!(app.draft, before);
    }

    #[test]
    fn test_cancel_resets_draft() {
        let mut app = logged_in_with(vec![article(1, "a")]);
        update(&mut app, UiEvent::EditArticle { id: 1 });
        update(&mut app, UiEvent::CancelEdit);
        assert_eq!(app.draft.heading(), "Create Article");
        assert_eq!(app.draft.title, "");
    }

    #[test]
    fn test_update_then_list_reflects_server_state() {
        let mut app = logged_in_with(vec![article(1, "a"), article(2, "b")]);
        update(&mut app, UiEvent::EditArticle { id: 2 });
        update(
            &mut app,
            UiEvent::DraftInput {
                field: DraftField::Title,
                value: "b edited".to_string(),
            },
        );
        let (task, _) = sent_request(&update(&mut app, UiEvent::SubmitDraft));
        let edited = article(2, "b edited");
        complete(
            &mut app,
            task,
            Ok(ApiResponse::Article(ArticleResponse {
                article: edited.clone(),
                message: "Updated".to_string(),
            })),
        );
        assert_eq!(app.articles.get(2), Some(&edited));
        assert!(app.draft.editing_id.is_none());

        let (task, _) = sent_request(&update(&mut app, UiEvent::LoadArticles));
        let latest = article(2, "b edited again");
        complete(
            &mut app,
            task,
            Ok(ApiResponse::Articles(ArticlesResponse {
                articles: vec![article(1, "a"), latest.clone()],
                message: "Here are your articles".to_string(),
            })),
        );
        assert_eq!(app.articles.get(2), Some(&latest));
    }

    #[test]
    fn test_rejection_redirects_for_every_article_operation() {
        let starts: [fn(&mut AppState) -> Vec<UiEffect>; 4] = [
            |app: &mut AppState| update(app, UiEvent::LoadArticles),
            |app: &mut AppState| update(app, UiEvent::DeleteArticle { id: 1 }),
            |app: &mut AppState| {
                fill_draft(app, "Title", "Text", "Node");
                update(app, UiEvent::SubmitDraft)
            },
            |app: &mut AppState| {
                update(app, UiEvent::EditArticle { id: 1 });
                update(app, UiEvent::SubmitDraft)
            },
        ];

        for start in starts {
            let mut app = logged_in_with(vec![article(1, "Alpha")]);
            let (task, _) = sent_request(&start(&mut app));

            let effects = complete(&mut app, task, Err(unauthorized()));

            assert_eq!(effects, vec![UiEffect::ClearToken]);
            assert_eq!(app.session, SessionState::LoggedOut);
            assert_eq!(app.view, View::Login);
            assert_eq!(app.status_text(), Some("Token expired"));
            assert_eq!(app.articles.len(), 1);
            assert!(!app.is_busy());
        }
    }

    #[test]
    fn test_transport_failure_uses_generic_message() {
        let mut app = logged_in_with(vec![article(1, "a")]);
        let (task, _) = sent_request(&update(&mut app, UiEvent::LoadArticles));

        let effects = complete(&mut app, task, Err(ApiError::transport("connection refused")));

        assert!(effects.is_empty());
        assert_eq!(app.session, SessionState::LoggedIn);
        assert_eq!(app.view, View::Articles);
        assert_eq!(app.status_text(), Some(GENERIC_FAILURE_MESSAGE));
        assert_eq!(app.articles.len(), 1);
    }

    #[test]
    fn test_stale_completion_is_dropped() {
        let mut app = logged_in_with(vec![article(1, "a"), article(2, "b")]);
        let (first, _) = sent_request(&update(&mut app, UiEvent::LoadArticles));
        let (second, _) = sent_request(&update(&mut app, UiEvent::DeleteArticle { id: 2 }));

        let effects = complete(
            &mut app,
            first,
            Ok(ApiResponse::Articles(ArticlesResponse {
                articles: vec![],
                message: "old".to_string(),
            })),
        );
        assert!(effects.is_empty());
        assert_eq!(app.articles.len(), 2);
        assert!(app.is_busy());
        assert!(app.status.is_none());

        complete(
            &mut app,
            second,
            Ok(ApiResponse::Deleted(MessageResponse {
                message: "deleted".to_string(),
            })),
        );
        assert!(!app.is_busy());
        assert_eq!(app.articles.len(), 1);
    }

    #[test]
    fn test_logout_abandons_outstanding_operation() {
        let mut app = logged_in_with(vec![article(1, "a")]);
        let (task, _) = sent_request(&update(&mut app, UiEvent::LoadArticles));
        update(&mut app, UiEvent::Logout);
        assert!(!app.is_busy());

        let effects = complete(&mut app, task, Err(unauthorized()));
        assert!(effects.is_empty());
        assert_eq!(app.status_text(), Some(FAREWELL_MESSAGE));
    }

    #[test]
    fn test_new_operation_clears_previous_status() {
        let mut app = logged_in_with(vec![]);
        app.status = Some(crate::state::StatusMessage::error("old failure"));
        update(&mut app, UiEvent::LoadArticles);
        assert!(app.status.is_none());
    }

    #[test]
    fn test_mismatched_payload_reports_failure() {
        let mut app = logged_in_with(vec![article(1, "a")]);
        let (task, _) = sent_request(&update(&mut app, UiEvent::LoadArticles));

        complete(
            &mut app,
            task,
            Ok(ApiResponse::Deleted(MessageResponse::default())),
        );

        assert_eq!(app.status_text(), Some(GENERIC_FAILURE_MESSAGE));
        assert_eq!(app.articles.len(), 1);
        assert!(!app.is_busy());
    }

    #[test]
    fn test_superseded_rejection_still_ends_session() {
        let mut app = logged_in_with(vec![article(1, "Alpha"), article(2, "Beta")]);
        let (list, _) = sent_request(&update(&mut app, UiEvent::LoadArticles));
        let (delete, _) = sent_request(&update(&mut app, UiEvent::DeleteArticle { id: 2 }));

        let effects = complete(&mut app, list, Err(unauthorized()));

        assert_eq!(effects, vec![UiEffect::ClearToken]);
        assert_eq!(app.session, SessionState::LoggedOut);
        assert_eq!(app.view, View::Login);
        assert_eq!(app.status_text(), Some("Token expired"));
        assert_eq!(app.articles.len(), 2);
        assert!(app.is_busy());

        let effects = complete(&mut app, delete, Err(ApiError::transport("connection reset")));

        assert!(effects.is_empty());
        assert_eq!(app.status_text(), Some(GENERIC_FAILURE_MESSAGE));
        assert_eq!(app.articles.len(), 2);
        assert!(!app.is_busy());
    }

    #[test]
    fn test_rejection_from_previous_session_is_ignored() {
        let mut app = logged_in_with(vec![article(1, "Alpha")]);
        let (old, _) = sent_request(&update(&mut app, UiEvent::LoadArticles));
        update(&mut app, UiEvent::Logout);
        let (login, _) = sent_request(&update(
            &mut app,
            UiEvent::Login(Credentials::new("foo", "12345678")),
        ));
        complete(
            &mut app,
            login,
            Ok(ApiResponse::LoggedIn(LoginResponse {
                token: "fresh".to_string(),
                message: "Welcome back, foo!".to_string(),
            })),
        );

        let effects = complete(&mut app, old, Err(unauthorized()));

        assert!(effects.is_empty());
        assert_eq!(app.session, SessionState::LoggedIn);
        assert_eq!(app.view, View::Articles);
        assert_eq!(app.status_text(), Some("Welcome back, foo!"));
    }

    #[test]
    fn test_second_stale_rejection_does_not_redirect_again() {
        let mut app = logged_in_with(vec![article(1, "Alpha")]);
        let (first, _) = sent_request(&update(&mut app, UiEvent::LoadArticles));
        let (second, _) = sent_request(&update(&mut app, UiEvent::DeleteArticle { id: 1 }));
        let (third, _) = sent_request(&update(&mut app, UiEvent::LoadArticles));

        assert_eq!(
            complete(&mut app, first, Err(unauthorized())),
            vec![UiEffect::ClearToken]
        );
        assert!(complete(&mut app, second, Err(unauthorized())).is_empty());

        assert_eq!(
            complete(&mut app, third, Err(unauthorized())),
            vec![UiEffect::ClearToken]
        );
        assert!(!app.is_busy());
    }

    #[test]
    fn test_failed_token_store_ends_new_session() {
        let mut app = AppState::new(false);
        let (login, _) = sent_request(&update(
            &mut app,
            UiEvent::Login(Credentials::new("foo", "12345678")),
        ));
        let effects = complete(
            &mut app,
            login,
            Ok(ApiResponse::LoggedIn(LoginResponse {
                token: "tok".to_string(),
                message: "Welcome back, foo!".to_string(),
            })),
        );
        assert!(matches!(effects.as_slice(), [UiEffect::StoreToken { .. }]));

        let effects = update(
            &mut app,
            UiEvent::CredentialsFailed {
                action: CredentialAction::Store,
                error: "permission denied".to_string(),
            },
        );

        assert!(effects.is_empty());
        assert_eq!(app.session, SessionState::LoggedOut);
        assert_eq!(app.view, View::Login);
        let status = app.status.as_ref().unwrap();
        assert_eq!(status.level, StatusLevel::Error);
        assert_eq!(
            status.text,
            "Could not save the session token: permission denied"
        );
    }

    #[test]
    fn test_failed_token_clear_replaces_farewell() {
        let mut app = logged_in_with(vec![]);
        assert_eq!(update(&mut app, UiEvent::Logout), vec![UiEffect::ClearToken]);

        update(
            &mut app,
            UiEvent::CredentialsFailed {
                action: CredentialAction::Clear,
                error: "read-only file system".to_string(),
            },
        );

        assert_eq!(app.session, SessionState::LoggedOut);
        assert_eq!(app.view, View::Login);
        let status = app.status.as_ref().unwrap();
        assert!(status.is_error());
        assert_eq!(
            status.text,
            "Could not remove the stored session token: read-only file system"
        );
    }
}
