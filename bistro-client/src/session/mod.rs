//! Session context
//!
//! Holds the token pair, role and table-number hint of the signed-in staff
//! member or guest. A `Session` is created explicitly and handed to the
//! clients that need it; clones share the same state.
//!
//! Lifecycle: `start` on login, `set_tokens` on refresh, `end` on logout.
//! Every change is written through to the configured [`SessionStorage`].

mod storage;

pub use storage::{FileSessionStorage, MemorySessionStorage, SessionStorage};

use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use shared::client::TokenPair;
use shared::models::{Role, TableNumber};
use shared::token::{RefreshDecision, TokenPayload, refresh_decision};

use crate::ClientResult;

/// Persisted session state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionData {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub role: Option<Role>,
    /// Last table the guest ordered from; kept across logouts
    pub table_number: Option<TableNumber>,
}

/// Shared session handle
#[derive(Debug, Clone)]
pub struct Session {
    data: Arc<RwLock<SessionData>>,
    storage: Arc<dyn SessionStorage>,
}

impl Session {
    /// Create a session backed by `storage`, restoring what it holds
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        let data = match storage.load() {
            Ok(Some(data)) => {
                tracing::debug!(role = ?data.role, "Session restored from storage");
                data
            }
            Ok(None) => SessionData::default(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load session, starting empty");
                SessionData::default()
            }
        };
        Self {
            data: Arc::new(RwLock::new(data)),
            storage,
        }
    }

    /// Session that is never persisted
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemorySessionStorage::new()))
    }

    /// Begin a session with a freshly issued token pair
    pub fn start(&self, tokens: TokenPair) -> ClientResult<()> {
        let payload = TokenPayload::decode(&tokens.access_token)?;
        {
            let mut data = self.data.write();
            data.access_token = Some(tokens.access_token);
            data.refresh_token = Some(tokens.refresh_token);
            data.role = Some(payload.role);
        }
        tracing::info!(user_id = payload.user_id, role = ?payload.role, "Session started");
        self.persist();
        Ok(())
    }

    /// Replace the token pair after a refresh
    pub fn set_tokens(&self, tokens: TokenPair) -> ClientResult<()> {
        let payload = TokenPayload::decode(&tokens.access_token)?;
        {
            let mut data = self.data.write();
            data.access_token = Some(tokens.access_token);
            data.refresh_token = Some(tokens.refresh_token);
            data.role = Some(payload.role);
        }
        tracing::debug!(exp = payload.exp, "Session tokens refreshed");
        self.persist();
        Ok(())
    }

    /// End the session; the table hint survives
    pub fn end(&self) {
        {
            let mut data = self.data.write();
            data.access_token = None;
            data.refresh_token = None;
            data.role = None;
        }
        tracing::info!("Session ended");
        self.persist();
    }

    pub fn is_active(&self) -> bool {
        self.data.read().access_token.is_some()
    }

    pub fn access_token(&self) -> Option<String> {
        self.data.read().access_token.clone()
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.data.read().refresh_token.clone()
    }

    pub fn role(&self) -> Option<Role> {
        self.data.read().role
    }

    pub fn table_number(&self) -> Option<TableNumber> {
        self.data.read().table_number
    }

    pub fn set_table_number(&self, table_number: Option<TableNumber>) {
        self.data.write().table_number = table_number;
        self.persist();
    }

    /// Snapshot of the current state
    pub fn snapshot(&self) -> SessionData {
        self.data.read().clone()
    }

    /// Refresh decision for the current tokens at `now` (Unix seconds)
    ///
    /// No session, or tokens that cannot be decoded, count as expired.
    pub fn refresh_decision_at(&self, now: i64) -> RefreshDecision {
        let (access, refresh) = {
            let data = self.data.read();
            match (&data.access_token, &data.refresh_token) {
                (Some(a), Some(r)) => (a.clone(), r.clone()),
                _ => return RefreshDecision::Expired,
            }
        };
        match (TokenPayload::decode(&access), TokenPayload::decode(&refresh)) {
            (Ok(access), Ok(refresh)) => refresh_decision(&access, &refresh, now),
            _ => {
                tracing::warn!("Stored tokens are unreadable");
                RefreshDecision::Expired
            }
        }
    }

    fn persist(&self) {
        let data = self.snapshot();
        let result = if data == SessionData::default() {
            self.storage.clear()
        } else {
            self.storage.save(&data)
        };
        if let Err(e) = result {
            tracing::warn!(error = %e, "Failed to persist session");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::token::{TokenType, encode_unsigned};

    fn token(role: Role, token_type: TokenType, iat: i64, exp: i64) -> String {
        encode_unsigned(&TokenPayload {
            user_id: 1,
            role,
            token_type,
            exp,
            iat,
        })
    }

    fn pair(role: Role, access_exp: i64, refresh_exp: i64) -> TokenPair {
        TokenPair {
            access_token: token(role, TokenType::AccessToken, 0, access_exp),
            refresh_token: token(role, TokenType::RefreshToken, 0, refresh_exp),
        }
    }

    #[test]
    fn test_start_and_end() {
        let session = Session::in_memory();
        assert!(!session.is_active());

        session.start(pair(Role::Guest, 900, 86_400)).unwrap();
        session.set_table_number(Some(3));
        assert!(session.is_active());
        assert_eq!(session.role(), Some(Role::Guest));

        session.end();
        assert!(!session.is_active());
        assert_eq!(session.role(), None);
        assert_eq!(session.table_number(), Some(3));
    }

    #[test]
    fn test_start_rejects_unreadable_token() {
        let session = Session::in_memory();
        let result = session.start(TokenPair {
            access_token: "garbage".into(),
            refresh_token: "garbage".into(),
        });
        assert!(result.is_err());
        assert!(!session.is_active());
    }

    #[test]
    fn test_clones_share_state() {
        let session = Session::in_memory();
        let other = session.clone();
        session.start(pair(Role::Owner, 900, 86_400)).unwrap();
        assert!(other.is_active());
    }

    #[test]
    fn test_restores_from_storage() {
        let storage = Arc::new(MemorySessionStorage::new());
        let session = Session::new(storage.clone());
        session.start(pair(Role::Employee, 900, 86_400)).unwrap();

        let restored = Session::new(storage);
        assert_eq!(restored.role(), Some(Role::Employee));
        assert!(restored.is_active());
    }

    #[test]
    fn test_refresh_decision() {
        let session = Session::in_memory();
        assert_eq!(session.refresh_decision_at(0), RefreshDecision::Expired);

        session.start(pair(Role::Owner, 900, 86_400)).unwrap();
        assert_eq!(session.refresh_decision_at(10), RefreshDecision::Fresh);
        assert_eq!(session.refresh_decision_at(700), RefreshDecision::Refresh);
        assert_eq!(session.refresh_decision_at(90_000), RefreshDecision::Expired);
    }
}
