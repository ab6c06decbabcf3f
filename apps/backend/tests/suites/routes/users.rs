use actix_web::http::StatusCode;
use serde_json::json;

use crate::support::http::{delete, get, post};
use crate::support::{build_test_state, create_test_app, factory};

#[actix_web::test]
async fn create_then_get_user() {
    let state = build_test_state().await.unwrap();
    let app = create_test_app(state).with_prod_routes().build().await;

    let (status, body) = post(
        &app,
        "/users",
        json!({"email": "luke@tatooine.org", "password": "blue-milk"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["msg"], "User created successfully");
    assert_eq!(body["user"]["email"], "luke@tatooine.org");
    assert_eq!(body["user"]["favorites"], json!([]));
    assert!(body["user"].get("password").is_none());

    let id = body["user"]["id"].as_i64().unwrap();
    let (status, user) = get(&app, &format!("/users/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user["id"], id);
    assert_eq!(user["email"], "luke@tatooine.org");
    assert!(user.get("password").is_none());
}

#[actix_web::test]
async fn list_users_in_id_order() {
    let state = build_test_state().await.unwrap();
    factory::user(&state, "leia@alderaan.gov").await;
    factory::user(&state, "han@falcon.io").await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let (status, body) = get(&app, "/users").await;
    assert_eq!(status, StatusCode::OK);
    let emails: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["email"].as_str().unwrap())
        .collect();
    assert_eq!(emails, vec!["leia@alderaan.gov", "han@falcon.io"]);
}

#[actix_web::test]
async fn unknown_user_is_404() {
    let state = build_test_state().await.unwrap();
    let app = create_test_app(state).with_prod_routes().build().await;

    let (status, body) = get(&app, "/users/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "USER_NOT_FOUND");
    assert_eq!(body["detail"], "User 999 not found");
}

#[actix_web::test]
async fn duplicate_email_is_409_and_leaves_one_row() {
    let state = build_test_state().await.unwrap();
    let app = create_test_app(state).with_prod_routes().build().await;

    let payload = json!({"email": "vader@empire.gov", "password": "dark"});
    let (status, _) = post(&app, "/users", payload.clone()).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = post(&app, "/users", payload).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "UNIQUE_EMAIL");

    let (_, users) = get(&app, "/users").await;
    assert_eq!(users.as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn delete_user_returns_view_then_404() {
    let state = build_test_state().await.unwrap();
    let user = factory::user(&state, "obiwan@jedi.org").await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let (status, body) = delete(&app, &format!("/users/{}", user.id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["msg"], "User deleted");
    assert_eq!(body["user"]["email"], "obiwan@jedi.org");

    let (status, _) = get(&app, &format!("/users/{}", user.id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = delete(&app, &format!("/users/{}", user.id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "USER_NOT_FOUND");
}

#[actix_web::test]
async fn invalid_email_and_blank_password_are_validation_errors() {
    let state = build_test_state().await.unwrap();
    let app = create_test_app(state).with_prod_routes().build().await;

    let (status, body) = post(
        &app,
        "/users",
        json!({"email": "not-an-email", "password": "x"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");

    let (status, body) = post(
        &app,
        "/users",
        json!({"email": "r2@astromech.io", "password": "  "}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[actix_web::test]
async fn missing_field_is_bad_request() {
    let state = build_test_state().await.unwrap();
    let app = create_test_app(state).with_prod_routes().build().await;

    let (status, body) = post(&app, "/users", json!({"email": "c3po@protocol.io"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
    assert!(body["detail"].as_str().unwrap().contains("password"));
}

#[actix_web::test]
async fn trailing_slash_is_tolerated() {
    let state = build_test_state().await.unwrap();
    factory::user(&state, "lando@bespin.com").await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let (status, body) = get(&app, "/users/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn listing_more_users_than_bind_limit_succeeds() {
    let state = build_test_state().await.unwrap();
    factory::many_users(&state, 40_000).await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let (status, body) = get(&app, "/users").await;
    assert_eq!(status, StatusCode::OK);
    let users = body.as_array().unwrap();
    assert_eq!(users.len(), 40_000);
    assert_eq!(users[0]["email"], "bulk-0@holonet.test");
}
