#[macro_use]
mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::{Value, json};

use common::{bearer, seed_blog, seed_user, test_state};

#[actix_web::test]
async fn test_register_with_short_password_is_rejected() {
    let state = test_state();
    let app = spawn_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(json!({ "username": "root", "name": "Superuser", "password": "sa" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "password must be at least 3 characters long");
}

#[actix_web::test]
async fn test_register_hides_password_hash() {
    let state = test_state();
    let app = spawn_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(json!({ "username": "root", "name": "Superuser", "password": "sal" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["username"], "root");
    assert_eq!(body["blogs"], json!([]));
    assert!(body.get("passwordHash").is_none());
    assert!(body.get("password_hash").is_none());
    assert!(body.get("password").is_none());
}

#[actix_web::test]
async fn test_register_duplicate_username() {
    let state = test_state();
    seed_user(&state, "root", "sekret").await;
    let app = spawn_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(json!({ "username": "root", "name": "Again", "password": "salainen" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "expected `username` to be unique");
}

#[actix_web::test]
async fn test_list_users_populates_blogs() {
    let state = test_state();
    let (owner, _) = seed_user(&state, "root", "sekret").await;
    let blog = seed_blog(&state, &owner, "React patterns", 7).await;
    let app = spawn_app!(state);

    let req = test::TestRequest::get().uri("/api/users").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let blogs = &body[0]["blogs"];
    assert_eq!(blogs[0]["id"], blog.id.to_string());
    assert_eq!(blogs[0]["title"], "React patterns");
    assert!(blogs[0].get("likes").is_none());
}

#[actix_web::test]
async fn test_login_issues_usable_token() {
    let state = test_state();
    seed_user(&state, "root", "sekret").await;
    let app = spawn_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/login")
        .set_json(json!({ "username": "root", "password": "sekret" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["username"], "root");
    assert_eq!(body["name"], "root name");
    let token = body["token"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri("/api/blogs")
        .insert_header(bearer(&token))
        .set_json(json!({ "title": "T", "url": "https://x" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
}

#[actix_web::test]
async fn test_login_with_wrong_password() {
    let state = test_state();
    seed_user(&state, "root", "sekret").await;
    let app = spawn_app!(state);

    for (username, password) in [("root", "wrong"), ("nobody", "sekret")] {
        let req = test::TestRequest::post()
            .uri("/api/login")
            .set_json(json!({ "username": username, "password": password }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "invalid username or password");
    }
}

#[actix_web::test]
async fn test_health() {
    let state = test_state();
    let app = spawn_app!(state);

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
}

#[actix_web::test]
async fn test_unknown_endpoint() {
    let state = test_state();
    let app = spawn_app!(state);

    for uri in ["/api/nothing-here", "/elsewhere"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "unknown endpoint");
    }
}

#[actix_web::test]
async fn test_username_with_surrounding_space_is_distinct() {
    let state = test_state();
    seed_user(&state, "root", "sekret").await;
    let app = spawn_app!(state);

    let req = test::TestRequest::post()
        .uri("/api/users")
        .set_json(json!({ "username": " root", "name": "Spaced", "password": "salainen" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["username"], " root");
}
