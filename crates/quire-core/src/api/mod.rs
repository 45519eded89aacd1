//! Articles API client.
//!
//! - `client`: authenticated request factory and typed endpoint calls
//! - `error`: error taxonomy shared by every call

mod client;
mod error;

use std::fmt;

pub use client::ApiClient;
pub use error::{ApiError, ApiErrorKind, ApiResult, GENERIC_FAILURE_MESSAGE};

use crate::models::{
    ArticleFields, ArticleId, ArticleResponse, ArticlesResponse, LoginResponse, MessageResponse,
};

/// One backend call, as data.
///
/// Produced by the app reducer and executed by [`ApiClient::execute`].
#[derive(Clone, PartialEq, Eq)]
pub enum ApiRequest {
    Login { username: String, password: String },
    ListArticles,
    CreateArticle { fields: ArticleFields },
    UpdateArticle { id: ArticleId, fields: ArticleFields },
    DeleteArticle { id: ArticleId },
}

impl ApiRequest {
    /// Short label for logs.
    pub fn label(&self) -> &'static str {
        match self {
            ApiRequest::Login { .. } => "login",
            ApiRequest::ListArticles => "list_articles",
            ApiRequest::CreateArticle { .. } => "create_article",
            ApiRequest::UpdateArticle { .. } => "update_article",
            ApiRequest::DeleteArticle { .. } => "delete_article",
        }
    }
}

// Passwords stay out of Debug output.
impl fmt::Debug for ApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiRequest::Login { username, .. } => f
                .debug_struct("Login")
                .field("username", username)
                .field("password", &"***")
                .finish(),
            ApiRequest::ListArticles => f.write_str("ListArticles"),
            ApiRequest::CreateArticle { fields } => f
                .debug_struct("CreateArticle")
                .field("fields", fields)
                .finish(),
            ApiRequest::UpdateArticle { id, fields } => f
                .debug_struct("UpdateArticle")
                .field("id", id)
                .field("fields", fields)
                .finish(),
            ApiRequest::DeleteArticle { id } => {
                f.debug_struct("DeleteArticle").field("id", id).finish()
            }
        }
    }
}

/// Success payload of an [`ApiRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiResponse {
    LoggedIn(LoginResponse),
    Articles(ArticlesResponse),
    Article(ArticleResponse),
    Deleted(MessageResponse),
}
