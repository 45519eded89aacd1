//! Application state composition.
//!
//! ```text
//! AppState
//! ├── session: SessionState   (logged out / logging in / logged in)
//! ├── view: View              (navigation target)
//! ├── articles: ArticlesState (local article collection)
//! ├── draft: Draft            (the single editable draft)
//! ├── status: Option<StatusMessage>
//! ├── task_seq: TaskSeq       (ticket generator)
//! └── tasks: TaskState        (current ticket, drives Busy)
//! ```

use crate::common::{TaskSeq, TaskState};
use crate::features::articles::ArticlesState;
use crate::features::form::Draft;
use crate::features::session::{SessionState, View};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Error,
}

/// Outcome text of the latest operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: StatusLevel::Info,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: StatusLevel::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == StatusLevel::Error
    }
}

#[derive(Debug, Default)]
pub struct AppState {
    pub session: SessionState,
    pub view: View,
    pub articles: ArticlesState,
    pub draft: Draft,
    pub status: Option<StatusMessage>,
    pub task_seq: TaskSeq,
    pub tasks: TaskState,
}

impl AppState {
    /// Initial state. A persisted token resumes the session on the
    /// articles view.
    pub fn new(has_token: bool) -> Self {
        if has_token {
            Self {
                session: SessionState::LoggedIn,
                view: View::Articles,
                ..Self::default()
            }
        } else {
            Self::default()
        }
    }

    /// True exactly while the latest operation's ticket is outstanding.
    pub fn is_busy(&self) -> bool {
        self.tasks.is_running()
    }

    pub fn status_text(&self) -> Option<&str> {
        self.status.as_ref().map(|status| status.text.as_str())
    }
}
