use actix_web::http::StatusCode;
use serde_json::json;

use crate::support::http::{delete, get, post};
use crate::support::{build_test_state, create_test_app, factory};

#[actix_web::test]
async fn planet_create_returns_planet_under_both_keys() {
    let state = build_test_state().await.unwrap();
    let app = create_test_app(state).with_prod_routes().build().await;

    let (status, body) = post(
        &app,
        "/planets",
        json!({"name": "Hoth", "climate": "frozen", "terrain": "tundra"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["msg"], "Planet created successfully");
    assert_eq!(body["people"], body["planet"]);
    let id = body["planet"]["id"].as_i64().unwrap();
    assert_eq!(
        body["planet"],
        json!({"id": id, "name": "Hoth", "climate": "frozen", "terrain": "tundra"})
    );

    let (status, fetched) = get(&app, &format!("/planets/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, body["planet"]);
}

#[actix_web::test]
async fn delete_planet_lives_under_planets() {
    let state = build_test_state().await.unwrap();
    let planet = factory::planet(&state, "Alderaan").await;
    let person = factory::person(&state, "Bail Organa").await;
    let app = create_test_app(state).with_prod_routes().build().await;

    // /people/{id} addresses people, never planets
    let (status, _) = delete(&app, &format!("/people/{}", person.id)).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = get(&app, &format!("/planets/{}", planet.id)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = delete(&app, &format!("/planets/{}", planet.id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["msg"], "planet deleted");
    assert_eq!(body["planet"]["name"], "Alderaan");

    let (status, body) = get(&app, &format!("/planets/{}", planet.id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "PLANET_NOT_FOUND");
}

#[actix_web::test]
async fn deleting_a_favorited_planet_is_a_conflict() {
    let state = build_test_state().await.unwrap();
    let user = factory::user(&state, "poe@resistance.org").await;
    let planet = factory::planet(&state, "Yavin 4").await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let (status, _) = post(
        &app,
        &format!("/users/{}/planets", user.id),
        json!({"planet_id": planet.id}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = delete(&app, &format!("/planets/{}", planet.id)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "FK_VIOLATION");

    let (_, planets) = get(&app, "/planets").await;
    assert_eq!(planets.as_array().unwrap().len(), 1);
}
