use test_utils::{builder::TestBuilder, context::TestContext, factory::user};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{AuthGuard, Permission},
        session::AuthSession,
    },
};

async fn context_with_users() -> TestContext {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    // Initialize the session alongside the database.
    test.session().await.unwrap();
    test
}

/// Tests that a caller without a login session is rejected.
///
/// Expected: AuthError::UserNotInSession (mapped to 401).
#[tokio::test]
async fn rejects_unauthenticated_caller() {
    let test = context_with_users().await;
    let db = test.db.as_ref().unwrap();
    let session = test.session.as_ref().unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));
}

/// Tests that any authenticated user passes the protected tier.
#[tokio::test]
async fn allows_authenticated_user_without_permissions() {
    let test = context_with_users().await;
    let db = test.db.as_ref().unwrap();
    let session = test.session.as_ref().unwrap();

    let user = user::create_user(db).await.unwrap();
    AuthSession::new(session).set_user_id(user.id).await.unwrap();

    let resolved = AuthGuard::new(db, session).require(&[]).await.unwrap();
    assert_eq!(resolved.id, user.id);
}

/// Tests that a regular user is rejected from the admin tier.
///
/// Expected: AuthError::AccessDenied (mapped to 403).
#[tokio::test]
async fn rejects_non_admin_on_admin_permission() {
    let test = context_with_users().await;
    let db = test.db.as_ref().unwrap();
    let session = test.session.as_ref().unwrap();

    let user = user::create_user(db).await.unwrap();
    AuthSession::new(session).set_user_id(user.id).await.unwrap();

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
}

/// Tests that an admin passes the admin tier.
#[tokio::test]
async fn allows_admin_on_admin_permission() {
    let test = context_with_users().await;
    let db = test.db.as_ref().unwrap();
    let session = test.session.as_ref().unwrap();

    let admin = user::create_admin(db).await.unwrap();
    AuthSession::new(session).set_user_id(admin.id).await.unwrap();

    let resolved = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await
        .unwrap();
    assert_eq!(resolved.id, admin.id);
}

/// Tests a session pointing at a deleted user.
///
/// Expected: AuthError::UserNotInDatabase (mapped to 401).
#[tokio::test]
async fn rejects_stale_session_user() {
    let test = context_with_users().await;
    let db = test.db.as_ref().unwrap();
    let session = test.session.as_ref().unwrap();

    AuthSession::new(session).set_user_id(4711).await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(4711)))
    ));
}
