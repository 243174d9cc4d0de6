//! End-to-end session scenario: boot, login, reload, logout, reload.

use std::sync::Arc;

use imgjob_client::config::ClientConfig;
use imgjob_client::routes::{self, RouteName, ViewId};
use imgjob_client::state::session::{Persistence, SessionStore};
use imgjob_client::util::storage::MemoryStorage;

fn boot(storage: &MemoryStorage) -> SessionStore {
    SessionStore::initialize(Arc::new(storage.clone()), &ClientConfig::default())
}

#[test]
fn login_reload_logout_scenario() {
    let browser = MemoryStorage::new();

    let mut session = boot(&browser);
    assert!(!session.logged_in());

    assert_eq!(session.set_token("abc123"), Persistence::Persisted);
    assert!(session.logged_in());
    assert_eq!(session.token(), "abc123");
    assert_eq!(browser.peek("token").as_deref(), Some("abc123"));

    let mut session = boot(&browser);
    assert!(session.logged_in());
    assert_eq!(session.token(), "abc123");

    assert_eq!(session.log_out(), Persistence::Persisted);
    assert!(!session.logged_in());
    assert_eq!(session.token(), "");
    assert_eq!(browser.peek("token").as_deref(), Some(""));

    let session = boot(&browser);
    assert!(!session.logged_in());
    assert_eq!(session.token(), "");
}

#[test]
fn storage_full_keeps_session_for_this_tab_only() {
    let browser = MemoryStorage::new();
    let mut session =
        SessionStore::initialize(Arc::new(browser.rejecting_writes()), &ClientConfig::default());

    assert_eq!(session.set_token("abc123"), Persistence::NotPersisted);
    assert!(session.logged_in());

    assert!(!boot(&browser).logged_in());
}

#[test]
fn login_redirect_target_is_the_submit_job_view() {
    let home = routes::resolve(RouteName::Home.path()).map(|r| r.view);
    assert_eq!(home, Some(ViewId::SubmitJob));
    assert_eq!(routes::resolve("/login").map(|r| r.name), Some(RouteName::Login));
    assert_eq!(routes::resolve("/register").map(|r| r.name), Some(RouteName::Register));
}

#[test]
fn returning_user_sees_logged_out_first_then_logged_in_after_mount() {
    let browser = MemoryStorage::with_entry("token", "abc123");
    let config = ClientConfig::default();

    let mut session = imgjob_client::app::initial_session(Arc::new(browser.clone()), &config);
    assert!(!session.logged_in());

    session.load();
    assert!(session.logged_in());
    assert_eq!(session.authorization_header().as_deref(), Some("Token abc123"));
}
