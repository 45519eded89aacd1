//! Wire models for the articles API.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Server-assigned article identifier.
pub type ArticleId = i64;

/// Fixed set of article topics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Topic {
    JavaScript,
    React,
    Node,
}

impl Topic {
    /// Returns all topics in display order.
    pub fn all() -> &'static [Topic] {
        &[Topic::JavaScript, Topic::React, Topic::Node]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::JavaScript => "JavaScript",
            Topic::React => "React",
            Topic::Node => "Node",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Topic {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Topic::all()
            .iter()
            .copied()
            .find(|topic| topic.as_str() == value.trim())
            .ok_or_else(|| {
                format!("Unknown topic: {value} (expected one of JavaScript, React, Node)")
            })
    }
}

/// An article as returned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    #[serde(rename = "article_id", alias = "id")]
    pub id: ArticleId,
    pub title: String,
    pub text: String,
    pub topic: Topic,
}

impl Article {
    /// Editable fields of this article (everything except the id).
    pub fn fields(&self) -> ArticleFields {
        ArticleFields {
            title: self.title.clone(),
            text: self.text.clone(),
            topic: self.topic,
        }
    }
}

/// Request body for create and update. Never carries an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleFields {
    pub title: String,
    pub text: String,
    pub topic: Topic,
}

/// `POST /login` body.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// `POST /login` success payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub message: String,
}

/// `GET /articles` success payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ArticlesResponse {
    pub articles: Vec<Article>,
    #[serde(default)]
    pub message: String,
}

/// `POST /articles` and `PUT /articles/{id}` success payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ArticleResponse {
    pub article: Article,
    #[serde(default)]
    pub message: String,
}

/// `DELETE /articles/{id}` success payload, and the body of error responses.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}
