use chrono::{DateTime, Utc};
use log::{debug, info};
use std::sync::Arc;

use super::session_model::Session;
use super::session_store::SessionStore;
use crate::errors::{Result, SessionError};

/// The signed-in user for this run, if any.
pub struct SessionContext {
    store: Arc<dyn SessionStore>,
    current: Option<Session>,
}

impl SessionContext {
    /// Reads the persisted session (or none) from the store.
    pub fn initialize(store: Arc<dyn SessionStore>) -> Result<Self> {
        let current = store.load()?;
        match &current {
            Some(session) => debug!("Restored session for user {}", session.username),
            None => debug!("No persisted session"),
        }
        Ok(Self { store, current })
    }

    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    /// Signed in with a session that has not expired at `now`.
    pub fn is_authenticated(&self, now: DateTime<Utc>) -> bool {
        self.current.as_ref().is_some_and(|s| !s.is_expired(now))
    }

    /// The current session, or why there is none usable.
    pub fn require(&self, now: DateTime<Utc>) -> Result<&Session> {
        match self.current.as_ref() {
            None => Err(SessionError::NotAuthenticated.into()),
            Some(session) if session.is_expired(now) => Err(SessionError::Expired.into()),
            Some(session) => Ok(session),
        }
    }

    /// Persists and replaces the current session.
    pub fn sign_in(&mut self, session: Session) -> Result<()> {
        self.store.save(&session)?;
        info!("Signed in as {}", session.username);
        self.current = Some(session);
        Ok(())
    }

    /// Clears the session from memory and from the store.
    pub fn sign_out(&mut self) -> Result<()> {
        self.store.clear()?;
        if let Some(session) = self.current.take() {
            info!("Signed out {}", session.username);
        }
        Ok(())
    }
}
