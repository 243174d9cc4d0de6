use super::*;
use crate::util::storage::MemoryStorage;

#[test]
fn first_render_matches_between_server_and_browser() {
    let config = ClientConfig::default();
    let server = initial_session(Arc::new(BrowserStorage), &config);
    let browser = initial_session(Arc::new(MemoryStorage::with_entry("token", "abc123")), &config);

    assert_eq!(server.state(), browser.state());
    assert!(!browser.logged_in());
}

#[test]
fn returning_user_is_logged_in_after_mount_load() {
    let config = ClientConfig::default();
    let mut session = initial_session(Arc::new(MemoryStorage::with_entry("token", "abc123")), &config);

    session.load();
    assert!(session.logged_in());
    assert_eq!(session.token(), "abc123");
}

#[test]
fn mount_load_does_not_write() {
    let storage = MemoryStorage::with_entry("token", "abc123");
    let mut session = initial_session(Arc::new(storage.rejecting_writes()), &ClientConfig::default());

    session.load();
    assert!(session.logged_in());
    assert_eq!(storage.peek("token").as_deref(), Some("abc123"));
}
