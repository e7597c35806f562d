//! Per-viewer session store.
//!
//! Each browser tab gets its own [`DashboardSession`], keyed by a random id.
//! Sessions never share selection state. A session that has not been opened
//! or changed for longer than the store's TTL is dropped the next time a
//! session is created.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

use crate::error::DashboardResult;
use crate::services::{Dashboard, DashboardSession};

#[derive(Debug, Clone)]
struct SessionEntry {
    session: DashboardSession,
    updated_at: chrono::DateTime<chrono::Utc>,
}

impl SessionEntry {
    fn is_live(&self, now: chrono::DateTime<chrono::Utc>, ttl: Duration) -> bool {
        // A timestamp ahead of `now` counts as fresh.
        (now - self.updated_at)
            .to_std()
            .map_or(true, |idle| idle < ttl)
    }
}

/// In-memory session store.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, SessionEntry>>>,
    ttl: Duration,
}

impl SessionStore {
    /// Store whose sessions expire after `ttl` without activity.
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Open a session on the dashboard's initial site and return its id.
    /// Idle sessions are evicted first.
    pub fn create(&self, dashboard: &Dashboard) -> DashboardResult<(String, DashboardSession)> {
        let session = dashboard.open_session()?;
        let session_id = Uuid::new_v4().to_string();
        let now = chrono::Utc::now();

        let mut sessions = self.sessions.write();
        let evicted = Self::retain_live(&mut sessions, now, self.ttl);
        sessions.insert(
            session_id.clone(),
            SessionEntry {
                session: session.clone(),
                updated_at: now,
            },
        );
        log::debug!(
            "Opened session {} ({} idle sessions evicted, {} open)",
            session_id,
            evicted,
            sessions.len()
        );
        Ok((session_id, session))
    }

    /// Drop every session idle for at least the TTL as of `now`.
    /// Returns the number removed.
    pub fn evict_idle(&self, now: chrono::DateTime<chrono::Utc>) -> usize {
        Self::retain_live(&mut self.sessions.write(), now, self.ttl)
    }

    fn retain_live(
        sessions: &mut HashMap<String, SessionEntry>,
        now: chrono::DateTime<chrono::Utc>,
        ttl: Duration,
    ) -> usize {
        let before = sessions.len();
        sessions.retain(|_, entry| entry.is_live(now, ttl));
        before - sessions.len()
    }

    pub fn get(&self, session_id: &str) -> Option<DashboardSession> {
        self.sessions
            .read()
            .get(session_id)
            .map(|entry| entry.session.clone())
    }

    /// Apply a selector change to one session.
    ///
    /// `None` if the session does not exist; otherwise the outcome of
    /// [`DashboardSession::on_selection_changed`]. A rejected change leaves the
    /// stored session untouched.
    pub fn change_selection(
        &self,
        dashboard: &Dashboard,
        session_id: &str,
        name: &str,
    ) -> Option<DashboardResult<DashboardSession>> {
        let mut sessions = self.sessions.write();
        let entry = sessions.get_mut(session_id)?;
        let outcome = entry
            .session
            .on_selection_changed(dashboard, name)
            .map(|_| ());
        Some(outcome.map(|()| {
            entry.updated_at = chrono::Utc::now();
            entry.session.clone()
        }))
    }

    pub fn remove(&self, session_id: &str) -> bool {
        self.sessions.write().remove(session_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.read().is_empty()
    }
}
