//! Tests for the session context and its stores.

use super::*;
use crate::errors::{Error, SessionError};
use chrono::{Duration, TimeZone, Utc};
use std::sync::Arc;
use tempfile::tempdir;

fn sample_session() -> Session {
    Session::new("u-1", "alice", "access-token").with_refresh_token("refresh-token")
}

// ==================== SessionContext ====================

#[test]
fn test_initialize_without_persisted_session() {
    let ctx = SessionContext::initialize(Arc::new(InMemorySessionStore::new())).unwrap();
    assert!(ctx.current().is_none());
    assert!(!ctx.is_authenticated(Utc::now()));
    assert!(matches!(
        ctx.require(Utc::now()),
        Err(Error::Session(SessionError::NotAuthenticated))
    ));
}

#[test]
fn test_initialize_restores_persisted_session() {
    let store = Arc::new(InMemorySessionStore::with_session(sample_session()));
    let ctx = SessionContext::initialize(store).unwrap();
    assert_eq!(ctx.current().map(|s| s.username.as_str()), Some("alice"));
    assert!(ctx.is_authenticated(Utc::now()));
}

#[test]
fn test_sign_in_persists_and_sign_out_clears() {
    let store = Arc::new(InMemorySessionStore::new());
    let mut ctx = SessionContext::initialize(store.clone()).unwrap();

    ctx.sign_in(sample_session()).unwrap();
    assert_eq!(store.load().unwrap(), Some(sample_session()));

    ctx.sign_out().unwrap();
    assert!(ctx.current().is_none());
    assert_eq!(store.load().unwrap(), None);

    let restored = SessionContext::initialize(store).unwrap();
    assert!(restored.current().is_none());
}

#[test]
fn test_expired_session_is_not_authenticated() {
    let now = Utc.with_ymd_and_hms(2026, 1, 10, 12, 0, 0).unwrap();
    let session = sample_session().with_expiry(now - Duration::minutes(1));
    let ctx =
        SessionContext::initialize(Arc::new(InMemorySessionStore::with_session(session))).unwrap();

    assert!(ctx.current().is_some());
    assert!(!ctx.is_authenticated(now));
    assert!(matches!(
        ctx.require(now),
        Err(Error::Session(SessionError::Expired))
    ));
}

#[test]
fn test_session_without_expiry_never_expires() {
    let far_future = Utc.with_ymd_and_hms(2100, 1, 1, 0, 0, 0).unwrap();
    assert!(!sample_session().is_expired(far_future));
}

// ==================== FileSessionStore ====================

#[test]
fn test_file_store_missing_file_is_no_session() {
    let dir = tempdir().unwrap();
    let store = FileSessionStore::new(dir.path().join("session.json"));
    assert_eq!(store.load().unwrap(), None);
    // Clearing a missing file is fine
    store.clear().unwrap();
}

#[test]
fn test_file_store_round_trip_and_clear() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("session.json");
    let store = FileSessionStore::new(&path);

    let session = sample_session().with_expiry(Utc.with_ymd_and_hms(2030, 5, 1, 0, 0, 0).unwrap());
    store.save(&session).unwrap();
    assert!(path.exists());
    assert_eq!(store.load().unwrap(), Some(session));

    store.clear().unwrap();
    assert!(!path.exists());
    assert_eq!(store.load().unwrap(), None);
}

#[test]
fn test_file_store_corrupt_file_is_no_session() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, "{ not json").unwrap();

    let store = FileSessionStore::new(&path);
    assert_eq!(store.load().unwrap(), None);
}

#[test]
fn test_context_over_file_store() {
    let dir = tempdir().unwrap();
    let store: Arc<dyn SessionStore> =
        Arc::new(FileSessionStore::new(dir.path().join("session.json")));

    let mut ctx = SessionContext::initialize(store.clone()).unwrap();
    ctx.sign_in(sample_session()).unwrap();

    let restored = SessionContext::initialize(store.clone()).unwrap();
    assert_eq!(restored.current(), Some(&sample_session()));

    ctx.sign_out().unwrap();
    assert!(SessionContext::initialize(store).unwrap().current().is_none());
}
