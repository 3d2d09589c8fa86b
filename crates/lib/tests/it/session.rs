//! Tests for the login flow and user registration.

use qrlink::{
    constants::{CURRENT_USER_KEY, DEFAULT_ADMIN_EMAIL, USERS_KEY},
    defaults::DEFAULT_ADMIN_PASSWORD,
    session::{Role, SessionError},
    store::Storage,
};

use crate::helpers::{client_account, test_session_store};

#[test]
fn login_with_default_admin_yields_admin_session() {
    let (_storage, sessions) = test_session_store();

    let user = sessions
        .login(DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_PASSWORD)
        .expect("default admin can log in");

    assert_eq!(user.role, Role::Admin);
    assert!(user.password_hash.is_none(), "session copy is stripped");

    let current = sessions.current_user().unwrap().expect("session persisted");
    assert_eq!(current.email, DEFAULT_ADMIN_EMAIL);
    assert_eq!(current.role, Role::Admin);
    assert!(sessions.is_admin().unwrap());
    assert!(!sessions.is_client().unwrap());
}

#[test]
fn login_is_case_insensitive_on_email() {
    let (_storage, sessions) = test_session_store();

    let user = sessions
        .login("ADMIN@QRCODE.COM", DEFAULT_ADMIN_PASSWORD)
        .expect("case-insensitive lookup");
    assert_eq!(user.email, DEFAULT_ADMIN_EMAIL);
}

#[test]
fn login_with_wrong_password_leaves_no_session() {
    let (_storage, sessions) = test_session_store();

    let err = sessions
        .login(DEFAULT_ADMIN_EMAIL, "wrong")
        .expect_err("wrong password rejected");
    assert!(err.is_authentication_error());

    assert!(sessions.current_user().unwrap().is_none());
}

#[test]
fn login_with_unknown_email_leaves_no_session() {
    let (_storage, sessions) = test_session_store();

    let err = sessions
        .login("nobody@example.com", "whatever")
        .expect_err("unknown email rejected");
    assert!(err.is_not_found());
    assert!(matches!(
        err,
        qrlink::Error::Session(SessionError::UserNotFound { .. })
    ));

    assert!(sessions.current_user().unwrap().is_none());
}

#[test]
fn session_role_matches_stored_record() {
    let (_storage, sessions) = test_session_store();

    sessions
        .register_user(client_account("client@example.com", "Secret1!"))
        .unwrap();

    let user = sessions.login("client@example.com", "Secret1!").unwrap();
    assert_eq!(user.role, Role::Client);
    assert!(sessions.is_client().unwrap());
    assert!(!sessions.is_admin().unwrap());
}

#[test]
fn logout_clears_the_session() {
    let (_storage, sessions) = test_session_store();

    sessions
        .login(DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_PASSWORD)
        .unwrap();
    assert!(sessions.current_user().unwrap().is_some());

    sessions.logout().unwrap();
    assert!(sessions.current_user().unwrap().is_none());

    // Logging out twice is fine
    sessions.logout().unwrap();
}

#[test]
fn register_rejects_duplicate_email_case_insensitively() {
    let (_storage, sessions) = test_session_store();

    sessions
        .register_user(client_account("client@example.com", "Secret1!"))
        .unwrap();

    let err = sessions
        .register_user(client_account("CLIENT@example.com", "Other2!"))
        .expect_err("duplicate email rejected");
    assert!(err.is_conflict());
}

#[test]
fn register_rejects_existing_admin_email() {
    let (_storage, sessions) = test_session_store();

    let err = sessions
        .register_user(client_account(DEFAULT_ADMIN_EMAIL, "Secret1!"))
        .expect_err("admin email is taken");
    assert!(err.is_conflict());
}

#[test]
fn register_requires_a_password() {
    let (_storage, sessions) = test_session_store();

    let mut account = client_account("client@example.com", "");
    account.password = None;
    let err = sessions.register_user(account).expect_err("no password");
    assert!(err.is_validation_error());

    let empty = client_account("client@example.com", "");
    let err = sessions.register_user(empty).expect_err("empty password");
    assert!(err.is_validation_error());
}

#[test]
fn stored_list_never_contains_plaintext_secrets() {
    let (storage, sessions) = test_session_store();

    sessions
        .register_user(client_account("client@example.com", "Secret1!"))
        .unwrap();

    let raw = storage.get(USERS_KEY).unwrap().expect("list persisted");
    assert!(!raw.contains("Secret1!"));
    assert!(raw.contains("$argon2"));
}

#[test]
fn persisted_session_entry_is_credential_stripped() {
    let (storage, sessions) = test_session_store();

    sessions
        .login(DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_PASSWORD)
        .unwrap();

    let raw = storage
        .get(CURRENT_USER_KEY)
        .unwrap()
        .expect("session persisted");
    assert!(!raw.contains("password_hash"));
    assert!(!raw.contains("$argon2"));
}

#[test]
fn malformed_user_list_falls_back_to_defaults() {
    let (storage, sessions) = test_session_store();
    storage.set(USERS_KEY, "{not json".to_string()).unwrap();

    let users = sessions.users().unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].email, DEFAULT_ADMIN_EMAIL);
}

#[test]
fn valid_list_missing_admin_is_reseeded() {
    let (storage, sessions) = test_session_store();

    sessions
        .register_user(client_account("client@example.com", "Secret1!"))
        .unwrap();

    // Drop the admin from the persisted list
    let raw = storage.get(USERS_KEY).unwrap().unwrap();
    let mut users: Vec<serde_json::Value> = serde_json::from_str(&raw).unwrap();
    users.retain(|u| u["email"] != DEFAULT_ADMIN_EMAIL);
    storage
        .set(USERS_KEY, serde_json::to_string(&users).unwrap())
        .unwrap();

    let loaded = sessions.users().unwrap();
    assert_eq!(loaded[0].email, DEFAULT_ADMIN_EMAIL);
    assert!(loaded.iter().any(|u| u.email == "client@example.com"));
}

#[test]
fn malformed_session_entry_reads_as_logged_out() {
    let (storage, sessions) = test_session_store();
    storage
        .set(CURRENT_USER_KEY, "]broken".to_string())
        .unwrap();

    assert!(sessions.current_user().unwrap().is_none());
    assert!(!sessions.is_admin().unwrap());
}

#[test]
fn registered_account_survives_a_storage_reload() {
    let (storage, sessions) = test_session_store();

    sessions
        .register_user(client_account("client@example.com", "Secret1!"))
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("qrlink.json");
    storage.save_to_file(&path).unwrap();

    let reloaded = std::sync::Arc::new(qrlink::store::InMemory::load_from_file(&path).unwrap());
    let sessions = qrlink::SessionStore::new(reloaded);
    let user = sessions.login("client@example.com", "Secret1!").unwrap();
    assert_eq!(user.role, Role::Client);
}
