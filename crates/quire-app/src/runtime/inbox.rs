use tokio::sync::mpsc;

use crate::events::UiEvent;

/// Sender for the runtime's event inbox.
pub type UiEventSender = mpsc::UnboundedSender<UiEvent>;

/// Receiver for the runtime's event inbox.
pub type UiEventReceiver = mpsc::UnboundedReceiver<UiEvent>;

/// Inbox handle owned by one spawned effect.
///
/// If the task ends without calling `send` (a panic unwinds through it), the
/// fallback event is posted on drop instead.
pub struct InboxGuard {
    tx: UiEventSender,
    fallback: Option<UiEvent>,
}

impl InboxGuard {
    pub fn new(tx: UiEventSender, fallback: UiEvent) -> Self {
        Self {
            tx,
            fallback: Some(fallback),
        }
    }

    pub fn send(mut self, event: UiEvent) {
        self.fallback = None;
        let _ = self.tx.send(event);
    }
}

impl Drop for InboxGuard {
    fn drop(&mut self) {
        if let Some(event) = self.fallback.take() {
            tracing::warn!("effect task ended without a result; posting fallback");
            let _ = self.tx.send(event);
        }
    }
}
