use actix_web::http::StatusCode;
use serde_json::json;

use crate::common::id_of;
use crate::support::http::{delete, get, post};
use crate::support::{build_test_state, create_test_app, factory};

#[actix_web::test]
async fn member_gains_exactly_one_profile() {
    let state = build_test_state().await.unwrap();
    let app = create_test_app(state).with_prod_routes().build().await;

    let (status, body) = post(
        &app,
        "/members",
        json!({"username": "mando", "password": "this-is-the-way"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["msg"], "Member created successfully");
    assert!(body["member"]["profile"].is_null());
    assert!(body["member"].get("password").is_none());
    let member_id = id_of(&body, "member");

    let (status, body) = post(
        &app,
        &format!("/members/{member_id}/profile"),
        json!({"full_name": "Din Djarin"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["msg"], "Profile created successfully");
    assert_eq!(body["profile"]["member_id"], member_id);
    assert_eq!(body["profile"]["full_name"], "Din Djarin");

    let (_, member) = get(&app, &format!("/members/{member_id}")).await;
    assert_eq!(member["profile"], body["profile"]);

    let (status, err) = post(
        &app,
        &format!("/members/{member_id}/profile"),
        json!({"full_name": "Someone Else"}),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(err["code"], "UNIQUE_PROFILE");

    let (_, member) = get(&app, &format!("/members/{member_id}")).await;
    assert_eq!(member["profile"]["full_name"], "Din Djarin");
}

#[actix_web::test]
async fn profile_for_unknown_member_is_404() {
    let state = build_test_state().await.unwrap();
    let app = create_test_app(state).with_prod_routes().build().await;

    let (status, body) = post(&app, "/members/42/profile", json!({})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "MEMBER_NOT_FOUND");
}

#[actix_web::test]
async fn deleting_member_removes_profile() {
    let state = build_test_state().await.unwrap();
    let member = factory::member(&state, "grogu").await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let (status, _) = post(
        &app,
        &format!("/members/{}/profile", member.id),
        json!({"full_name": "Din Grogu"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = delete(&app, &format!("/members/{}", member.id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["msg"], "Member deleted");
    assert_eq!(body["member"]["profile"]["full_name"], "Din Grogu");

    let (status, _) = get(&app, &format!("/members/{}", member.id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (_, all) = get(&app, "/members").await;
    assert_eq!(all, json!([]));
}
