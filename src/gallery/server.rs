use std::collections::HashMap;
use tokio::sync::{RwLock, mpsc};
use uuid::Uuid;

/// Cross-session notifications fanned out to every connected visitor.
#[derive(Debug, Clone)]
pub enum Broadcast {
    /// The blog snapshot changed (add / edit / like).
    BlogsChanged,
    /// A post was deleted; sessions with it open must close their dialog.
    BlogDeleted { id: i64 },
}

/// Registry of all live gallery sessions.
///
/// Blog mutations arrive over the REST API, so the handler layer pushes a
/// broadcast here and each WebSocket session re-renders (or force-closes
/// its blog dialog) on receipt.
pub struct GalleryServer {
    sessions: RwLock<HashMap<Uuid, mpsc::UnboundedSender<Broadcast>>>,
}

impl GalleryServer {
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Register a new session. Returns its id and the receiver the
    /// session task should listen on.
    pub async fn join(&self) -> (Uuid, mpsc::UnboundedReceiver<Broadcast>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let session_id = Uuid::new_v4();

        let mut sessions = self.sessions.write().await;
        sessions.insert(session_id, tx);
        tracing::debug!("gallery session {session_id} joined ({} live)", sessions.len());

        (session_id, rx)
    }

    pub async fn leave(&self, session_id: Uuid) {
        let mut sessions = self.sessions.write().await;
        sessions.remove(&session_id);
        tracing::debug!("gallery session {session_id} left ({} live)", sessions.len());
    }

    /// Send a notification to every live session. A failed send means the
    /// receiver is gone; its session task cleans itself up on exit.
    pub async fn broadcast(&self, message: Broadcast) {
        let sessions = self.sessions.read().await;
        for sender in sessions.values() {
            let _ = sender.send(message.clone());
        }
    }
}

impl Default for GalleryServer {
    fn default() -> Self {
        Self::new()
    }
}
