//! Session persistence.

use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::session_model::Session;
use crate::errors::{Result, SessionError};

const CURRENT_VERSION: u32 = 1;

/// Where the session survives between runs.
pub trait SessionStore: Send + Sync {
    /// Returns the persisted session, or `None` when nobody is signed in.
    fn load(&self) -> Result<Option<Session>>;

    fn save(&self, session: &Session) -> Result<()>;

    /// Removes any persisted session. Clearing an empty store is not an error.
    fn clear(&self) -> Result<()>;
}

/// Process-local store for tests and ephemeral runs.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    session: Mutex<Option<Session>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: Session) -> Self {
        Self {
            session: Mutex::new(Some(session)),
        }
    }
}

impl SessionStore for InMemorySessionStore {
    fn load(&self) -> Result<Option<Session>> {
        let guard = self
            .session
            .lock()
            .map_err(|_| SessionError::Store("Session store lock poisoned".into()))?;
        Ok(guard.clone())
    }

    fn save(&self, session: &Session) -> Result<()> {
        let mut guard = self
            .session
            .lock()
            .map_err(|_| SessionError::Store("Session store lock poisoned".into()))?;
        *guard = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut guard = self
            .session
            .lock()
            .map_err(|_| SessionError::Store("Session store lock poisoned".into()))?;
        *guard = None;
        Ok(())
    }
}

#[derive(Serialize, Deserialize)]
struct PersistedSession {
    version: u32,
    session: Session,
}

/// JSON file store. A missing or empty file means no session; an unreadable
/// file is logged and also treated as no session.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn guard(&self) -> Result<std::sync::MutexGuard<'_, ()>> {
        self.lock
            .lock()
            .map_err(|_| SessionError::Store("Session store lock poisoned".into()).into())
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<Session>> {
        let _guard = self.guard()?;
        if !self.path.exists() {
            return Ok(None);
        }

        let raw = fs::read(&self.path)?;
        if raw.is_empty() {
            return Ok(None);
        }

        match serde_json::from_slice::<PersistedSession>(&raw) {
            Ok(persisted) => Ok(Some(persisted.session)),
            Err(e) => {
                warn!(
                    "Ignoring unreadable session file {}: {}",
                    self.path.display(),
                    e
                );
                Ok(None)
            }
        }
    }

    fn save(&self, session: &Session) -> Result<()> {
        let _guard = self.guard()?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let persisted = PersistedSession {
            version: CURRENT_VERSION,
            session: session.clone(),
        };
        let json = serde_json::to_string_pretty(&persisted)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let _guard = self.guard()?;
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
