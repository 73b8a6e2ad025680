//! Session extractor for handlers that read or write wizard state.

use std::convert::Infallible;
use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::{HeaderName, header, request::Parts};
use axum::response::AppendHeaders;

use super::AppState;
use crate::session::{SessionData, SessionId, SessionStore};

pub struct CallerSession {
    pub id: SessionId,
    pub data: SessionData,
}

impl CallerSession {
    /// Persists the (possibly modified) data and returns the cookie header
    /// that binds the caller to it.
    pub async fn commit(self, store: &SessionStore) -> AppendHeaders<[(HeaderName, String); 1]> {
        let cookie = self.id.set_cookie_value();
        store.save(self.id, self.data).await;
        AppendHeaders([(header::SET_COOKIE, cookie)])
    }
}

impl FromRequestParts<Arc<AppState>> for CallerSession {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let id = parts
            .headers
            .get(header::COOKIE)
            .and_then(|value| value.to_str().ok())
            .and_then(SessionId::from_cookie_header);
        let (id, data) = state.sessions.load(id).await;
        Ok(Self { id, data })
    }
}
