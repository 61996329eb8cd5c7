use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::PortfolioHolding;

/// One authenticated session: who logged in, when, and the append-only
/// virtual-holdings collection that lives for the session.
#[derive(Debug, Clone)]
pub struct Session {
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub holdings: Vec<PortfolioHolding>,
}

/// Process-wide session state gated by a static credential table.
/// There is one logical writer per session; the lock guards the map.
pub struct SessionStore {
    credentials: HashMap<String, String>,
    sessions: RwLock<HashMap<Uuid, Session>>,
}

impl SessionStore {
    pub fn new(credentials: HashMap<String, String>) -> Self {
        Self {
            credentials,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Exact credential match creates a session and returns its token.
    /// Any other pair is rejected and no session state is mutated.
    pub async fn login(&self, email: &str, password: &str) -> Option<Uuid> {
        let stored = self.credentials.get(email)?;
        if stored != password {
            return None;
        }

        let token = Uuid::new_v4();
        self.sessions.write().await.insert(
            token,
            Session {
                email: email.to_string(),
                created_at: Utc::now(),
                holdings: Vec::new(),
            },
        );
        Some(token)
    }

    pub async fn email_for(&self, token: Uuid) -> Option<String> {
        self.sessions
            .read()
            .await
            .get(&token)
            .map(|s| s.email.clone())
    }

    /// Drops the session and its holdings. Returns false for an unknown
    /// token.
    pub async fn logout(&self, token: Uuid) -> bool {
        self.sessions.write().await.remove(&token).is_some()
    }

    /// Append holdings to the session's collection (never replaces).
    /// Returns the new total, or `None` if the session is gone.
    pub async fn append_holdings(
        &self,
        token: Uuid,
        new: Vec<PortfolioHolding>,
    ) -> Option<usize> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&token)?;
        session.holdings.extend(new);
        Some(session.holdings.len())
    }

    pub async fn holdings(&self, token: Uuid) -> Option<Vec<PortfolioHolding>> {
        self.sessions
            .read()
            .await
            .get(&token)
            .map(|s| s.holdings.clone())
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}
