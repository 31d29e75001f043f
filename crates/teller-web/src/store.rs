//! Session store: maps browser-tab IDs to their conversation sessions.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use teller_ai::Session;
use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;
use uuid::Uuid;

/// How often the reaper looks for idle sessions.
const REAP_INTERVAL: Duration = Duration::from_secs(60);

/// A session shared between the request handlers of one tab. The mutex
/// serialises sends so only one turn is in flight per tab.
pub type SharedSession = Arc<Mutex<Session>>;

struct Entry {
    session: SharedSession,
    last_used: Instant,
}

/// Thread-safe session store.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, Entry>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the session for `id`, creating it with `make` on first use.
    /// Either way the session's idle clock restarts.
    pub async fn get_or_create<F>(&self, id: Uuid, make: F) -> SharedSession
    where
        F: FnOnce() -> Session,
    {
        let mut map = self.sessions.write().await;
        let entry = map.entry(id).or_insert_with(|| {
            tracing::debug!(session_id = %id, "Creating session");
            Entry {
                session: Arc::new(Mutex::new(make())),
                last_used: Instant::now(),
            }
        });
        entry.last_used = Instant::now();
        entry.session.clone()
    }

    /// Fetch an existing session without creating one.
    pub async fn get(&self, id: Uuid) -> Option<SharedSession> {
        let mut map = self.sessions.write().await;
        let entry = map.get_mut(&id)?;
        entry.last_used = Instant::now();
        Some(entry.session.clone())
    }

    /// Restart the idle clock of `id`, if it is still stored.
    pub async fn touch(&self, id: Uuid) {
        if let Some(entry) = self.sessions.write().await.get_mut(&id) {
            entry.last_used = Instant::now();
        }
    }

    /// Drop sessions idle for longer than `max_age`. Returns how many went.
    ///
    /// A locked session has a send in flight and is never idle, however
    /// long the model call has been running.
    pub async fn reap_stale(&self, max_age: Duration) -> usize {
        let mut map = self.sessions.write().await;
        let now = Instant::now();
        let before = map.len();
        map.retain(|id, entry| {
            let busy = entry.session.try_lock().is_err();
            let stale = !busy && now.duration_since(entry.last_used) > max_age;
            if stale {
                tracing::info!(session_id = %id, "Reaping idle session");
            }
            !stale
        });
        before - map.len()
    }

    /// Number of live sessions.
    pub async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

/// Spawn the background task that reaps idle sessions every minute.
pub fn spawn_reaper(store: SessionStore, ttl: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(REAP_INTERVAL);
        ticker.tick().await;
        loop {
            ticker.tick().await;
            let reaped = store.reap_stale(ttl).await;
            let count = store.count().await;
            tracing::debug!(reaped, sessions = count, "Reaper tick");
        }
    })
}
