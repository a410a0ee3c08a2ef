mod common;
mod support;

use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::problem_details::assert_problem_details;
use serde_json::{json, Value};
use support::{create_test_app, seeded_state, ADMIN_EMAIL, ADMIN_ID, ADMIN_PASSWORD};

fn login_request(body: Value) -> actix_http::Request {
    test::TestRequest::post()
        .uri("/login")
        .set_json(body)
        .to_request()
}

#[actix_web::test]
async fn login_returns_verifiable_token() {
    let state = seeded_state();
    let app = create_test_app(state.clone()).await;

    let resp = test::call_service(
        &app,
        login_request(json!({ "email": ADMIN_EMAIL, "password": ADMIN_PASSWORD })),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key(common::REQUEST_ID));

    let body: Value = test::read_body_json(resp).await;
    let data = common::data(&body);
    assert_eq!(data["principal_id"], ADMIN_ID);
    assert_eq!(data["email"], ADMIN_EMAIL);

    let token = data["token"].as_str().expect("token should be a string");
    let claims = state.auth.validate_token(token).expect("issued token should validate");
    assert_eq!(claims.principal_id, ADMIN_ID);
    assert_eq!(claims.email, ADMIN_EMAIL);
}

#[actix_web::test]
async fn wrong_password_is_invalid_password() {
    let app = create_test_app(seeded_state()).await;

    let resp = test::call_service(
        &app,
        login_request(json!({ "email": ADMIN_EMAIL, "password": "s2" })),
    )
    .await;

    assert_problem_details(resp, "INVALID_PASSWORD", StatusCode::BAD_REQUEST).await;
}

#[actix_web::test]
async fn unknown_email_is_invalid_email() {
    let app = create_test_app(seeded_state()).await;

    let resp = test::call_service(
        &app,
        login_request(json!({ "email": "nobody@xsports.id", "password": "s1" })),
    )
    .await;

    assert_problem_details(resp, "INVALID_EMAIL", StatusCode::BAD_REQUEST).await;
}

#[actix_web::test]
async fn empty_fields_are_rejected_in_order() {
    let app = create_test_app(seeded_state()).await;

    let resp = test::call_service(&app, login_request(json!({ "email": "", "password": "x" }))).await;
    assert_problem_details(resp, "INVALID_EMAIL", StatusCode::BAD_REQUEST).await;

    let resp = test::call_service(
        &app,
        login_request(json!({ "email": "a@b.com", "password": "" })),
    )
    .await;
    assert_problem_details(resp, "INVALID_PASSWORD", StatusCode::BAD_REQUEST).await;

    // Missing fields behave like empty ones.
    let resp = test::call_service(&app, login_request(json!({}))).await;
    assert_problem_details(resp, "INVALID_EMAIL", StatusCode::BAD_REQUEST).await;
}

#[actix_web::test]
async fn malformed_json_is_bad_request() {
    let app = create_test_app(seeded_state()).await;

    let req = test::TestRequest::post()
        .uri("/login")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"email\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details(resp, "BAD_REQUEST", StatusCode::BAD_REQUEST).await;
}

#[actix_web::test]
async fn error_trace_id_matches_request_id() {
    let app = create_test_app(seeded_state()).await;

    let resp = test::call_service(
        &app,
        login_request(json!({ "email": ADMIN_EMAIL, "password": "nope" })),
    )
    .await;

    let request_id = resp
        .headers()
        .get(common::REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
        .expect("x-request-id should be set");
    let problem = assert_problem_details(resp, "INVALID_PASSWORD", StatusCode::BAD_REQUEST).await;
    assert_eq!(problem.trace_id, request_id);
}

#[actix_web::test]
async fn health_reports_ok_without_db() {
    let app = create_test_app(seeded_state()).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["db"], "disabled");
    assert_eq!(body["app_version"], env!("CARGO_PKG_VERSION"));
}
