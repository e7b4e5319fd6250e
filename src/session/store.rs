// src/session/store.rs
use crate::session::token::{generate_session_token, hash_token};
use parking_lot::Mutex;
use std::collections::HashMap;
use tracing::debug;

pub const SESSION_COOKIE: &str = "session";
pub const SESSION_TTL_SECS: i64 = 60 * 60 * 24 * 7; // 7 days
/// Past this, starting a session evicts the one closest to expiry.
pub const MAX_SESSIONS: usize = 10_000;

#[derive(Debug, Clone, Copy)]
struct SessionState {
    show_all: bool,
    expires_at: i64,
}

/// A session after a toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionHandle {
    pub token: String,
    /// True when the token was minted for this request and the cookie still
    /// has to be set.
    pub is_new: bool,
    pub show_all: bool,
}

/// In-memory per-browser UI state, keyed by the token's SHA-256.
/// Lost on restart. Sessions only exist for browsers that pressed the
/// toggle; plain reads never insert.
pub struct SessionStore {
    ttl_secs: i64,
    capacity: usize,
    sessions: Mutex<HashMap<[u8; 32], SessionState>>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(SESSION_TTL_SECS)
    }
}

impl SessionStore {
    pub fn new(ttl_secs: i64) -> Self {
        Self::with_capacity(ttl_secs, MAX_SESSIONS)
    }

    pub fn with_capacity(ttl_secs: i64, capacity: usize) -> Self {
        Self {
            ttl_secs,
            capacity: capacity.max(1),
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// The cookie's `show_all` flag. Missing, unknown, and expired tokens
    /// read as `false`. A live session has its expiry pushed out.
    pub fn show_all(&self, raw_token: Option<&str>, now: i64) -> bool {
        let Some(token) = raw_token else {
            return false;
        };

        let mut sessions = self.sessions.lock();
        sessions.retain(|_, s| s.expires_at > now);

        match sessions.get_mut(&hash_token(token)) {
            Some(state) => {
                state.expires_at = now + self.ttl_secs;
                state.show_all
            }
            None => false,
        }
    }

    /// Flips `show_all` and returns the new value. An unknown token starts a
    /// fresh session with the flag on, so the first press always shows all.
    pub fn toggle_show_all(&self, raw_token: Option<&str>, now: i64) -> SessionHandle {
        let mut sessions = self.sessions.lock();
        sessions.retain(|_, s| s.expires_at > now);

        if let Some(token) = raw_token {
            if let Some(state) = sessions.get_mut(&hash_token(token)) {
                state.show_all = !state.show_all;
                state.expires_at = now + self.ttl_secs;
                return SessionHandle {
                    token: token.to_string(),
                    is_new: false,
                    show_all: state.show_all,
                };
            }
        }

        if sessions.len() >= self.capacity {
            let oldest = sessions
                .iter()
                .min_by_key(|(_, s)| s.expires_at)
                .map(|(key, _)| *key);
            if let Some(key) = oldest {
                sessions.remove(&key);
            }
        }

        let token = generate_session_token();
        sessions.insert(
            hash_token(&token),
            SessionState {
                show_all: true,
                expires_at: now + self.ttl_secs,
            },
        );
        debug!(active = sessions.len(), "session started");

        SessionHandle {
            token,
            is_new: true,
            show_all: true,
        }
    }

    pub fn active_sessions(&self) -> usize {
        self.sessions.lock().len()
    }
}
