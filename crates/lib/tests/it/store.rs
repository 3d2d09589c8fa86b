//! Tests for the storage layer shared across components.

use std::sync::Arc;

use qrlink::{
    ClientRegistry, SessionStore,
    constants::{CLIENTS_KEY, CURRENT_USER_KEY, DEFAULT_ADMIN_EMAIL, USERS_KEY},
    defaults::DEFAULT_ADMIN_PASSWORD,
    store::{InMemory, Storage},
};

use crate::helpers::{client_account, client_record, test_storage};

#[test]
fn components_share_one_storage_instance() {
    let storage = test_storage();
    let sessions = SessionStore::new(storage.clone() as Arc<dyn Storage>);
    let registry = ClientRegistry::new(storage.clone() as Arc<dyn Storage>);

    sessions
        .login(DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_PASSWORD)
        .unwrap();
    sessions
        .register_user(client_account("client@example.com", "Secret1!"))
        .unwrap();
    registry
        .add_client(client_record("http://example.com/x"))
        .unwrap();

    // All three slots live side by side in the same store
    assert!(storage.get(USERS_KEY).unwrap().is_some());
    assert!(storage.get(CURRENT_USER_KEY).unwrap().is_some());
    assert!(storage.get(CLIENTS_KEY).unwrap().is_some());
}

#[test]
fn full_state_survives_save_and_load() {
    let storage = test_storage();
    let sessions = SessionStore::new(storage.clone() as Arc<dyn Storage>);
    let registry = ClientRegistry::new(storage.clone() as Arc<dyn Storage>);

    sessions
        .register_user(client_account("client@example.com", "Secret1!"))
        .unwrap();
    let client = registry
        .add_client(client_record("http://example.com/x"))
        .unwrap();
    sessions.login("client@example.com", "Secret1!").unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("qrlink.json");
    storage.save_to_file(&path).unwrap();

    let reloaded = Arc::new(InMemory::load_from_file(&path).unwrap());
    let sessions = SessionStore::new(reloaded.clone() as Arc<dyn Storage>);
    let registry = ClientRegistry::new(reloaded as Arc<dyn Storage>);

    // The session, the account, and the record all came back
    let current = sessions.current_user().unwrap().expect("session restored");
    assert_eq!(current.email, "client@example.com");
    assert!(registry.get_client(&client.id).is_ok());
    assert!(sessions.login("client@example.com", "Secret1!").is_ok());
}

#[test]
fn storage_is_usable_through_the_trait_object() {
    let storage: Arc<dyn Storage> = test_storage();

    storage.set("key", "value".to_string()).unwrap();
    assert_eq!(storage.get("key").unwrap(), Some("value".to_string()));

    // Downcasting reaches implementation-specific persistence
    let concrete = storage
        .as_any()
        .downcast_ref::<InMemory>()
        .expect("backed by InMemory");
    let dir = tempfile::tempdir().unwrap();
    concrete.save_to_file(dir.path().join("state.json")).unwrap();
}
