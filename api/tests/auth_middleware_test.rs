//! Integration tests for the session auth gate on protected routes.

mod common;

use actix_web::{http::StatusCode, test};
use uuid::Uuid;

use common::{harness, harness_with, FailingSessionStore};
use fr_api::app::create_app;
use fr_api::middleware::rate_limit::RateLimiter;
use fr_core::services::session::SessionStore;

#[actix_web::test]
async fn protected_route_without_token_is_unauthorized() {
    let h = harness();
    let app = test::init_service(create_app(
        h.state.clone(),
        h.gate_store.clone(),
        RateLimiter::disabled(),
    ))
    .await;

    let req = test::TestRequest::get()
        .uri(&format!("/profile/{}", Uuid::new_v4()))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body = test::read_body(resp).await;
    assert_eq!(body, r#""Unauthorized - no token provided""#.as_bytes());
}

#[actix_web::test]
async fn protected_route_with_garbage_token_is_unauthorized() {
    let h = harness();
    let app = test::init_service(create_app(
        h.state.clone(),
        h.gate_store.clone(),
        RateLimiter::disabled(),
    ))
    .await;

    let req = test::TestRequest::get()
        .uri(&format!("/profile/{}", Uuid::new_v4()))
        .insert_header(("authorization", "garbage-token"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body = test::read_body(resp).await;
    assert_eq!(body, r#""Unauthorized - invalid token""#.as_bytes());
}

#[actix_web::test]
async fn protected_route_with_valid_token_passes_the_gate() {
    let h = harness();
    let (user_id, token) = h.signed_in_user("a@b.com", "longpassword1").await;
    let app = test::init_service(create_app(
        h.state.clone(),
        h.gate_store.clone(),
        RateLimiter::disabled(),
    ))
    .await;

    let req = test::TestRequest::get()
        .uri(&format!("/profile/{}", user_id))
        .insert_header(("authorization", token))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["id"].as_str().unwrap(), user_id.to_string());
    assert_eq!(body["email"], "a@b.com");
}

#[actix_web::test]
async fn expired_session_is_unauthorized() {
    let h = harness();
    let (user_id, token) = h.signed_in_user("a@b.com", "longpassword1").await;

    // Re-register the token with a zero TTL: the store no longer returns it
    h.store.set(&token, user_id, 0).await.unwrap();

    let app = test::init_service(create_app(
        h.state.clone(),
        h.gate_store.clone(),
        RateLimiter::disabled(),
    ))
    .await;

    let req = test::TestRequest::get()
        .uri(&format!("/profile/{}", user_id))
        .insert_header(("authorization", token))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body = test::read_body(resp).await;
    assert_eq!(body, r#""Unauthorized - invalid token""#.as_bytes());
}

#[actix_web::test]
async fn session_for_another_user_is_forbidden() {
    let h = harness();
    let (_alice_id, alice_token) = h.signed_in_user("alice@b.com", "longpassword1").await;
    let (bob_id, _bob_token) = h.signed_in_user("bob@b.com", "longpassword2").await;

    let app = test::init_service(create_app(
        h.state.clone(),
        h.gate_store.clone(),
        RateLimiter::disabled(),
    ))
    .await;

    // Alice's valid session must not open Bob's profile
    let req = test::TestRequest::get()
        .uri(&format!("/profile/{}", bob_id))
        .insert_header(("authorization", alice_token))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body = test::read_body(resp).await;
    assert_eq!(body, r#""Forbidden""#.as_bytes());
}

#[actix_web::test]
async fn store_outage_at_the_gate_is_a_server_fault() {
    let h = harness_with(FailingSessionStore, false);
    let app = test::init_service(create_app(
        h.state.clone(),
        h.gate_store.clone(),
        RateLimiter::disabled(),
    ))
    .await;

    // The gate cannot tell whether this token is valid; it must answer
    // with a server fault, not "not logged in"
    let req = test::TestRequest::get()
        .uri(&format!("/profile/{}", Uuid::new_v4()))
        .insert_header(("authorization", "any-token"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = test::read_body(resp).await;
    assert_eq!(body, r#""Server error""#.as_bytes());
}
