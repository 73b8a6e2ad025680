//! Per-caller session state.
//!
//! Sessions live in memory, keyed by a random id carried in a cookie, and
//! expire after a period without requests.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use academics_api_types::FlashMessage;
use academics_core::domain::RegistrationContext;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "academics_session";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Finds the session id in a `Cookie` request header value.
    pub fn from_cookie_header(header: &str) -> Option<Self> {
        header
            .split(';')
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == SESSION_COOKIE)
            .and_then(|(_, value)| value.trim().parse().ok())
    }

    pub fn set_cookie_value(&self) -> String {
        format!("{SESSION_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax", self.0)
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionData {
    pub registration: RegistrationContext,
    pub flash: Vec<FlashMessage>,
}

impl SessionData {
    pub fn flash(&mut self, message: FlashMessage) {
        self.flash.push(message);
    }

    pub fn take_flash(&mut self) -> Vec<FlashMessage> {
        std::mem::take(&mut self.flash)
    }
}

struct SessionEntry {
    data: SessionData,
    last_seen: Instant,
}

#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, SessionEntry>>>,
    idle_ttl: Duration,
}

impl SessionStore {
    pub fn new(idle_ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            idle_ttl,
        }
    }

    /// Data for `id`, or a fresh empty session when the id is unknown or
    /// has expired.
    pub async fn load(&self, id: Option<SessionId>) -> (SessionId, SessionData) {
        let Some(id) = id else {
            return (SessionId::new(), SessionData::default());
        };

        let mut sessions = self.sessions.write().await;
        match sessions.remove(&id) {
            Some(entry) if entry.last_seen.elapsed() < self.idle_ttl => {
                sessions.insert(
                    id,
                    SessionEntry {
                        data: entry.data.clone(),
                        last_seen: Instant::now(),
                    },
                );
                (id, entry.data)
            }
            Some(_) => {
                debug!(session_id = %id, "session expired");
                (SessionId::new(), SessionData::default())
            }
            None => (SessionId::new(), SessionData::default()),
        }
    }

    pub async fn save(&self, id: SessionId, data: SessionData) {
        let ttl = self.idle_ttl;
        let mut sessions = self.sessions.write().await;
        sessions.retain(|_, entry| entry.last_seen.elapsed() < ttl);
        sessions.insert(
            id,
            SessionEntry {
                data,
                last_seen: Instant::now(),
            },
        );
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use academics_core::domain::{Cohort, DepartmentId, Semester};

    fn cohort() -> Cohort {
        Cohort {
            department_id: DepartmentId::new(2),
            semester: Semester::new(5).expect("5 is a valid semester"),
        }
    }

    #[test]
    fn session_id_is_found_among_other_cookies() {
        let id = SessionId::new();
        let header = format!("theme=dark; {SESSION_COOKIE}={id}; lang=en");

        assert_eq!(SessionId::from_cookie_header(&header), Some(id));
        assert_eq!(SessionId::from_cookie_header("theme=dark"), None);
        assert_eq!(
            SessionId::from_cookie_header(&format!("{SESSION_COOKIE}=garbage")),
            None
        );
    }

    #[tokio::test]
    async fn saved_session_is_loaded_back() {
        let store = SessionStore::new(Duration::from_secs(60));
        let (id, mut data) = store.load(None).await;
        data.registration.select_cohort(cohort());
        store.save(id, data).await;

        let (loaded_id, loaded) = store.load(Some(id)).await;

        assert_eq!(loaded_id, id);
        assert_eq!(loaded.registration.cohort(), Some(cohort()));
    }

    #[tokio::test]
    async fn expired_session_starts_over() {
        let store = SessionStore::new(Duration::ZERO);
        let (id, mut data) = store.load(None).await;
        data.registration.select_cohort(cohort());
        store.save(id, data).await;

        let (new_id, loaded) = store.load(Some(id)).await;

        assert_ne!(new_id, id);
        assert_eq!(loaded.registration.cohort(), None);
        assert_eq!(store.len().await, 0);
    }

    #[test]
    fn flash_messages_are_consumed_once() {
        let mut data = SessionData::default();
        data.flash(FlashMessage::error("Email already exists."));

        assert_eq!(data.take_flash().len(), 1);
        assert!(data.take_flash().is_empty());
    }
}
