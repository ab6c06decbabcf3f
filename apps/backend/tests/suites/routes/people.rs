use actix_web::http::StatusCode;
use serde_json::json;

use crate::support::http::{delete, get, post};
use crate::support::{build_test_state, create_test_app, factory};

#[actix_web::test]
async fn people_crud_round_trip() {
    let state = build_test_state().await.unwrap();
    let app = create_test_app(state).with_prod_routes().build().await;

    let (status, body) = post(
        &app,
        "/people",
        json!({"name": "Yoda", "description": "Jedi Master"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["msg"], "People created successfully");
    let id = body["people"]["id"].as_i64().unwrap();
    assert_eq!(
        body["people"],
        json!({"id": id, "name": "Yoda", "description": "Jedi Master"})
    );

    let (status, fetched) = get(&app, &format!("/people/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, body["people"]);

    let (_, all) = get(&app, "/people").await;
    assert_eq!(all, json!([body["people"].clone()]));

    let (status, deleted) = delete(&app, &format!("/people/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["msg"], "people deleted");
    assert_eq!(deleted["people"], body["people"]);

    let (status, err) = get(&app, &format!("/people/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(err["code"], "PEOPLE_NOT_FOUND");
}

#[actix_web::test]
async fn description_is_optional() {
    let state = build_test_state().await.unwrap();
    let app = create_test_app(state).with_prod_routes().build().await;

    let (status, body) = post(&app, "/people", json!({"name": "Chewbacca"})).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["people"]["description"].is_null());
}

#[actix_web::test]
async fn over_long_description_is_rejected() {
    let state = build_test_state().await.unwrap();
    let app = create_test_app(state).with_prod_routes().build().await;

    let (status, body) = post(
        &app,
        "/people",
        json!({"name": "Jar Jar", "description": "m".repeat(281)}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[actix_web::test]
async fn deleting_a_favorited_person_is_a_conflict() {
    let state = build_test_state().await.unwrap();
    let user = factory::user(&state, "rey@jakku.net").await;
    let person = factory::person(&state, "BB-8").await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let (status, _) = post(
        &app,
        &format!("/users/{}/people", user.id),
        json!({"people_id": person.id}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = delete(&app, &format!("/people/{}", person.id)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "FK_VIOLATION");

    let (status, _) = get(&app, &format!("/people/{}", person.id)).await;
    assert_eq!(status, StatusCode::OK);
}
