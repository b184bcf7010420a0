//! End-to-end registration and login flow against the in-memory store.

use std::sync::Arc;

use chrono::NaiveDate;

use account_registry::errors::{AppError, OptionExt};
use account_registry::infra::{MemoryUserStore, MockSessionGate, NullSessionGate, UserRepository};
use account_registry::services::{
    AuthService, Authenticator, RegistrationOutcome, RegistrationRequest, ServiceContainer,
    Services,
};

fn request(email: &str, username: &str) -> RegistrationRequest {
    RegistrationRequest {
        email: email.to_string(),
        username: username.to_string(),
        birth_date: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
        password: "Str0ng!Pass".to_string(),
    }
}

fn container(repo: Arc<MemoryUserStore>) -> Services {
    Services::from_collaborators(repo, Arc::new(NullSessionGate))
}

#[tokio::test]
async fn test_register_then_duplicate_handle() {
    let repo = Arc::new(MemoryUserStore::new());
    let services = container(repo.clone());

    let outcome = services
        .registration()
        .register(request("new@example.com", "newuser"))
        .await
        .unwrap();
    let id = match outcome {
        RegistrationOutcome::Created { id } => id,
        other => panic!("expected Created, got {:?}", other),
    };
    assert!(id > 0);

    // Same handle, different address
    let outcome = services
        .registration()
        .register(request("other@example.com", "newuser"))
        .await
        .unwrap();
    assert_eq!(outcome, RegistrationOutcome::AlreadyExists);

    // Same address, different handle
    let outcome = services
        .registration()
        .register(request("new@example.com", "otheruser"))
        .await
        .unwrap();
    assert_eq!(outcome, RegistrationOutcome::AlreadyExists);

    // The stored record is the one the first call wrote
    let stored = repo
        .find_by_id(id)
        .await
        .unwrap()
        .ok_or_not_found()
        .unwrap();
    assert_eq!(stored.username, "newuser");
    assert_eq!(stored.email, "new@example.com");
}

#[tokio::test]
async fn test_register_weak_password_leaves_store_empty() {
    let repo = Arc::new(MemoryUserStore::new());
    let services = container(repo.clone());

    let mut bad = request("new@example.com", "newuser");
    bad.password = "weak".to_string();

    let outcome = services.registration().register(bad).await.unwrap();
    assert_eq!(
        outcome,
        RegistrationOutcome::Invalid {
            reason: "Password is not strong enough".to_string()
        }
    );
    assert!(repo.find_by_username("newuser").await.unwrap().is_none());
}

#[tokio::test]
async fn test_login_round_trip() {
    let repo = Arc::new(MemoryUserStore::new());
    let services = container(repo.clone());

    services
        .registration()
        .register(request("login@example.com", "loginuser"))
        .await
        .unwrap();

    let mut sessions = MockSessionGate::new();
    sessions
        .expect_start_session()
        .withf(|id| *id > 0)
        .returning(|_| Ok(()));
    sessions.expect_end_session().returning(|| Ok(()));

    let auth = Authenticator::new(repo, Arc::new(sessions));

    let user = auth.login("loginuser", "Str0ng!Pass").await.unwrap();
    assert_eq!(user.username, "loginuser");
    assert!(user.id > 0);

    auth.logout().await.unwrap();
}

#[tokio::test]
async fn test_login_wrong_password_rejected() {
    let repo = Arc::new(MemoryUserStore::new());
    let services = container(repo.clone());

    services
        .registration()
        .register(request("login@example.com", "loginuser"))
        .await
        .unwrap();

    let mut sessions = MockSessionGate::new();
    sessions.expect_start_session().never();

    let auth = Authenticator::new(repo, Arc::new(sessions));
    let result = auth.login("loginuser", "Wr0ng!Pass").await;

    assert!(matches!(result, Err(AppError::InvalidCredentials)));
}

#[tokio::test]
async fn test_login_unknown_username_rejected() {
    let repo = Arc::new(MemoryUserStore::new());

    let mut sessions = MockSessionGate::new();
    sessions.expect_start_session().never();

    let auth = Authenticator::new(repo, Arc::new(sessions));
    let result = auth.login("ghost", "Str0ng!Pass").await;

    assert!(matches!(result, Err(AppError::InvalidCredentials)));
}

#[tokio::test]
async fn test_verify_credential_against_stored_hash() {
    let repo = Arc::new(MemoryUserStore::new());
    let services = container(repo.clone());

    services
        .registration()
        .register(request("check@example.com", "checkuser"))
        .await
        .unwrap();

    let stored = repo.find_by_username("checkuser").await.unwrap().unwrap();
    let auth = services.auth();

    assert!(auth.verify_credential(&stored.password_hash, "Str0ng!Pass"));
    assert!(!auth.verify_credential(&stored.password_hash, "Other!Pass1"));
}
