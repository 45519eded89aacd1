use quire_core::models::ArticleId;

/// Ticket handed out when an operation starts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(pub u64);

/// Monotonic ticket generator.
#[derive(Debug, Default)]
pub struct TaskSeq {
    next: u64,
}

impl TaskSeq {
    /// The id the next call to `next_id` will hand out.
    pub fn peek(&self) -> TaskId {
        TaskId(self.next)
    }

    pub fn next_id(&mut self) -> TaskId {
        let id = TaskId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

/// The network operation a ticket belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    Login,
    ListArticles,
    CreateArticle,
    UpdateArticle { id: ArticleId },
    DeleteArticle { id: ArticleId },
}

impl TaskKind {
    pub fn label(&self) -> &'static str {
        match self {
            TaskKind::Login => "login",
            TaskKind::ListArticles => "list_articles",
            TaskKind::CreateArticle => "create_article",
            TaskKind::UpdateArticle { .. } => "update_article",
            TaskKind::DeleteArticle { .. } => "delete_article",
        }
    }
}

#[derive(Debug)]
pub struct TaskCompleted<E> {
    pub id: TaskId,
    pub result: E,
}

/// Lifecycle of the most recent operation (stored in `AppState`, mutated
/// only by the reducer).
///
/// Starting a new operation supersedes the previous ticket: a completion
/// for any other id is stale.
///
/// Tickets below `session_floor` were issued before the last logout or
/// rejection and no longer speak for the current session.
#[derive(Debug, Default, Clone)]
pub struct TaskState {
    pub active: Option<TaskId>,
    pub kind: Option<TaskKind>,
    pub session_floor: TaskId,
}

impl TaskState {
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    pub fn on_started(&mut self, id: TaskId, kind: TaskKind) {
        self.active = Some(id);
        self.kind = Some(kind);
    }

    /// Returns the operation kind if `id` is the current ticket.
    pub fn active_kind(&self, id: TaskId) -> Option<TaskKind> {
        if self.active == Some(id) {
            self.kind
        } else {
            None
        }
    }

    pub fn finish_if_active(&mut self, id: TaskId) -> bool {
        let ok = self.active == Some(id);
        if ok {
            self.clear();
        }
        ok
    }

    pub fn clear(&mut self) {
        self.active = None;
        self.kind = None;
    }

    /// Marks every ticket below `next` as belonging to an ended session.
    /// The active ticket, if any, is left alone.
    pub fn end_session(&mut self, next: TaskId) {
        self.session_floor = self.session_floor.max(next);
    }

    pub fn in_current_session(&self, id: TaskId) -> bool {
        id >= self.session_floor
    }
}
