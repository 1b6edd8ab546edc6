use chrono::{DateTime, Utc};
use infomaniak_mcp::protocol::ClientInfo;
use infomaniak_mcp::McpSession;
use parking_lot::RwLock;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone)]
struct SessionEntry {
    session: Arc<McpSession>,
    created_at: DateTime<Utc>,
}

/// Public view of a live session
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub session_id: String,
    pub created_at: DateTime<Utc>,
    pub client: Option<ClientInfo>,
}

/// Live HTTP sessions keyed by their `mcp-session-id`.
///
/// Every insert, lookup and removal goes through the lock.
#[derive(Default)]
pub struct SessionRegistry {
    sessions: RwLock<HashMap<String, SessionEntry>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a session under a freshly minted identifier
    pub fn insert(&self, session: Arc<McpSession>) -> String {
        let mut sessions = self.sessions.write();
        let mut id = Uuid::new_v4().to_string();
        while sessions.contains_key(&id) {
            id = Uuid::new_v4().to_string();
        }
        sessions.insert(
            id.clone(),
            SessionEntry {
                session,
                created_at: Utc::now(),
            },
        );
        id
    }

    pub fn get(&self, id: &str) -> Option<Arc<McpSession>> {
        self.sessions
            .read()
            .get(id)
            .map(|entry| entry.session.clone())
    }

    /// Release a session; `false` when the id was unknown
    pub fn remove(&self, id: &str) -> bool {
        self.sessions.write().remove(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.read().is_empty()
    }

    /// Summaries ordered by creation time
    pub fn list(&self) -> Vec<SessionSummary> {
        let mut summaries: Vec<SessionSummary> = self
            .sessions
            .read()
            .iter()
            .map(|(id, entry)| SessionSummary {
                session_id: id.clone(),
                created_at: entry.created_at,
                client: entry.session.client_info(),
            })
            .collect();
        summaries.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        summaries
    }

    /// Drop every session, returning how many were open
    pub fn close_all(&self) -> usize {
        let mut sessions = self.sessions.write();
        let count = sessions.len();
        sessions.clear();
        count
    }
}
