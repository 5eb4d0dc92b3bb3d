use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::booking_store::BookingStore;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashKind {
    Success,
    Error,
    Info,
}

/// One-shot message shown on the next page render.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Flash {
    pub kind: FlashKind,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: FlashKind::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: FlashKind::Error, message: message.into() }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self { kind: FlashKind::Info, message: message.into() }
    }
}

#[derive(Debug)]
pub struct Session {
    pub bookings: BookingStore,
    pub flash: Option<Flash>,
    last_seen: DateTime<Utc>,
}

impl Session {
    fn new(now: DateTime<Utc>) -> Self {
        Self {
            bookings: BookingStore::new(),
            flash: None,
            last_seen: now,
        }
    }

    pub fn take_flash(&mut self) -> Option<Flash> {
        self.flash.take()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionHandle {
    pub id: Uuid,
    /// True when the session was minted by this request and the client has
    /// not been told its id yet.
    pub is_new: bool,
}

/// Owns every live session. Each session exclusively owns its booking store;
/// nothing is shared between sessions.
pub struct SessionRegistry {
    sessions: Mutex<HashMap<Uuid, Session>>,
    idle_ttl: Duration,
}

impl SessionRegistry {
    pub fn new(idle_ttl: Duration) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            idle_ttl,
        }
    }

    pub fn resolve(&self, requested: Option<Uuid>) -> SessionHandle {
        self.resolve_at(requested, Utc::now())
    }

    pub fn resolve_at(&self, requested: Option<Uuid>, now: DateTime<Utc>) -> SessionHandle {
        let mut sessions = self.sessions.lock().unwrap_or_else(PoisonError::into_inner);

        let before = sessions.len();
        sessions.retain(|_, s| now - s.last_seen <= self.idle_ttl);
        let expired = before - sessions.len();
        if expired > 0 {
            tracing::info!(expired, "dropped idle sessions");
        }

        if let Some(id) = requested {
            if let Some(session) = sessions.get_mut(&id) {
                session.last_seen = now;
                return SessionHandle { id, is_new: false };
            }
        }

        let id = Uuid::new_v4();
        sessions.insert(id, Session::new(now));
        tracing::debug!(session = %id, "session created");
        SessionHandle { id, is_new: true }
    }

    /// Runs `f` with exclusive access to the session. A session that vanished
    /// since it was resolved is recreated empty.
    pub fn with_session<R>(&self, id: Uuid, f: impl FnOnce(&mut Session) -> R) -> R {
        let mut sessions = self.sessions.lock().unwrap_or_else(PoisonError::into_inner);
        let session = sessions
            .entry(id)
            .or_insert_with(|| Session::new(Utc::now()));
        f(session)
    }

    pub fn len(&self) -> usize {
        self.sessions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
