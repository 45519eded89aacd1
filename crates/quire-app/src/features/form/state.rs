//! Article draft and its validation gate.

use quire_core::models::{Article, ArticleFields, ArticleId, Topic};

/// Maximum title length, enforced on input.
pub const TITLE_MAX_CHARS: usize = 50;
/// Maximum text length, enforced on input.
pub const TEXT_MAX_CHARS: usize = 200;
/// Minimum trimmed length of title and text.
pub const MIN_CHARS: usize = 3;

/// Editable field of the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Text,
    Topic,
}

/// Create mode (no id) or edit mode (id of the article being edited).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftMode {
    Create,
    Edit(ArticleId),
}

/// Why a draft cannot be submitted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("title must be at least {MIN_CHARS} characters")]
    TitleTooShort,
    #[error("text must be at least {MIN_CHARS} characters")]
    TextTooShort,
    #[error("a topic must be selected")]
    MissingTopic,
    #[error("unknown topic: {0}")]
    UnknownTopic(String),
}

/// The single editable draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub text: String,
    pub topic: String,
    pub editing_id: Option<ArticleId>,
}

fn capped(value: &str, max_chars: usize) -> String {
    value.chars().take(max_chars).collect()
}

impl Draft {
    pub fn mode(&self) -> DraftMode {
        self.editing_id.map_or(DraftMode::Create, DraftMode::Edit)
    }

    /// Form heading for the current mode.
    pub fn heading(&self) -> &'static str {
        match self.mode() {
            DraftMode::Create => "Create Article",
            DraftMode::Edit(_) => "Edit Article",
        }
    }

    pub fn set_title(&mut self, value: &str) {
        self.title = capped(value, TITLE_MAX_CHARS);
    }

    pub fn set_text(&mut self, value: &str) {
        self.text = capped(value, TEXT_MAX_CHARS);
    }

    pub fn set_topic(&mut self, value: &str) {
        self.topic = value.to_string();
    }

    pub fn set(&mut self, field: DraftField, value: &str) {
        match field {
            DraftField::Title => self.set_title(value),
            DraftField::Text => self.set_text(value),
            DraftField::Topic => self.set_topic(value),
        }
    }

    /// Copies an existing article into the draft and enters edit mode.
    pub fn load(&mut self, article: &Article) {
        self.set_title(&article.title);
        self.set_text(&article.text);
        self.topic = article.topic.to_string();
        self.editing_id = Some(article.id);
    }

    /// Back to an empty create-mode draft.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Checks the gate and returns the request body on success.
    pub fn validate(&self) -> Result<ArticleFields, DraftError> {
        if self.title.trim().chars().count() < MIN_CHARS {
            return Err(DraftError::TitleTooShort);
        }
        if self.text.trim().chars().count() < MIN_CHARS {
            return Err(DraftError::TextTooShort);
        }
        let topic = self.topic.trim();
        if topic.is_empty() {
            return Err(DraftError::MissingTopic);
        }
        let Ok(topic) = topic.parse::<Topic>() else {
            return Err(DraftError::UnknownTopic(topic.to_string()));
        };

        Ok(ArticleFields {
            title: self.title.clone(),
            text: self.text.clone(),
            topic,
        })
    }

    /// Whether submit is enabled.
    pub fn is_submittable(&self) -> bool {
        self.validate().is_ok()
    }
}
