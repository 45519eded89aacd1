use reqwest::header::AUTHORIZATION;
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;

use super::{ApiError, ApiRequest, ApiResponse, ApiResult};
use crate::credentials::SessionContext;
use crate::models::{
    ArticleFields, ArticleId, ArticleResponse, ArticlesResponse, LoginRequest, LoginResponse,
    MessageResponse,
};

/// Standard User-Agent header for quire API requests.
pub const USER_AGENT: &str = concat!("quire/", env!("CARGO_PKG_VERSION"));

/// Articles API client.
///
/// Builds every outgoing request and attaches the stored token verbatim as
/// the `Authorization` header. No retries, no token refresh, no timeout.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    session: SessionContext,
}

impl ApiClient {
    /// Creates a client for `base_url` (e.g. `http://localhost:9000/api`).
    pub fn new(base_url: impl Into<String>, session: SessionContext) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: reqwest::Client::new(),
            session,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Builds a request without credentials.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, self.url(path))
            .header(reqwest::header::USER_AGENT, USER_AGENT)
    }

    /// Builds a request carrying the current token, read at call time.
    ///
    /// Without a stored token the header is omitted and the server is
    /// expected to reject the call.
    pub fn authorized(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.request(method, path);
        match self.session.token() {
            Ok(Some(token)) => builder.header(AUTHORIZATION, token),
            Ok(None) => builder,
            Err(err) => {
                tracing::warn!(error = %err, "failed to read stored token; sending without it");
                builder
            }
        }
    }

    async fn send<T: DeserializeOwned>(builder: RequestBuilder) -> ApiResult<T> {
        let response = builder
            .send()
            .await
            .map_err(|err| ApiError::transport(err.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| ApiError::transport(err.to_string()))?;

        if !status.is_success() {
            let err = ApiError::http_status(status.as_u16(), &body);
            tracing::debug!(status = status.as_u16(), kind = %err.kind, "request failed");
            return Err(err);
        }

        serde_json::from_str(&body).map_err(|err| ApiError::parse(status.as_u16(), err.to_string()))
    }

    /// `POST /login` (unauthenticated credential exchange).
    pub async fn login(&self, username: &str, password: &str) -> ApiResult<LoginResponse> {
        let body = LoginRequest { username, password };
        Self::send(self.request(Method::POST, "/login").json(&body)).await
    }

    /// `GET /articles`.
    pub async fn list_articles(&self) -> ApiResult<ArticlesResponse> {
        Self::send(self.authorized(Method::GET, "/articles")).await
    }

    /// `POST /articles`.
    pub async fn create_article(&self, fields: &ArticleFields) -> ApiResult<ArticleResponse> {
        Self::send(self.authorized(Method::POST, "/articles").json(fields)).await
    }

    /// `PUT /articles/{id}`. The id travels in the path only.
    pub async fn update_article(
        &self,
        id: ArticleId,
        fields: &ArticleFields,
    ) -> ApiResult<ArticleResponse> {
        Self::send(
            self.authorized(Method::PUT, &format!("/articles/{id}"))
                .json(fields),
        )
        .await
    }

    /// `DELETE /articles/{id}`.
    pub async fn delete_article(&self, id: ArticleId) -> ApiResult<MessageResponse> {
        Self::send(self.authorized(Method::DELETE, &format!("/articles/{id}"))).await
    }

    /// Executes a request described as data.
    pub async fn execute(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        tracing::debug!(request = request.label(), "sending request");
        match request {
            ApiRequest::Login { username, password } => self
                .login(&username, &password)
                .await
                .map(ApiResponse::LoggedIn),
            ApiRequest::ListArticles => self.list_articles().await.map(ApiResponse::Articles),
            ApiRequest::CreateArticle { fields } => self
                .create_article(&fields)
                .await
                .map(ApiResponse::Article),
            ApiRequest::UpdateArticle { id, fields } => self
                .update_article(id, &fields)
                .await
                .map(ApiResponse::Article),
            ApiRequest::DeleteArticle { id } => {
                self.delete_article(id).await.map(ApiResponse::Deleted)
            }
        }
    }
}
