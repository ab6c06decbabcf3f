use std::fmt::Debug;

use holonet::repos::{customers, favorites, members, people, planets, stores, students, users};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;

use crate::support::{build_test_state, factory};

#[actix_web::test]
async fn user_view_never_carries_password() {
    let state = build_test_state().await.unwrap();
    let user = factory::user(&state, "mace@jedi.org").await;

    let value = serde_json::to_value(&user).unwrap();
    assert_eq!(
        value,
        json!({"id": user.id, "email": "mace@jedi.org", "favorites": []})
    );
}

#[actix_web::test]
async fn favorites_are_grouped_per_user() {
    let state = build_test_state().await.unwrap();
    let first = factory::user(&state, "kit@jedi.org").await;
    let second = factory::user(&state, "plo@jedi.org").await;
    let person = factory::person(&state, "Shaak Ti").await;
    let planet = factory::planet(&state, "Dantooine").await;
    let db = factory::db(&state);

    favorites::add_people(db, first.id, person.id).await.unwrap();
    favorites::add_planet(db, first.id, planet.id).await.unwrap();
    favorites::add_planet(db, second.id, planet.id).await.unwrap();

    let grouped = favorites::favorites_by_user(db, &[first.id, second.id])
        .await
        .unwrap();
    assert_eq!(grouped[&first.id].len(), 2);
    assert_eq!(grouped[&second.id].len(), 1);
    assert_eq!(
        grouped[&second.id][0].planet.as_ref().map(|p| p.name.as_str()),
        Some("Dantooine")
    );

    let listed = users::list_users(db).await.unwrap();
    assert_eq!(listed[0].favorites, grouped[&first.id]);
    assert_eq!(listed[1].favorites, grouped[&second.id]);
}

#[actix_web::test]
async fn optional_fields_stay_null() {
    let state = build_test_state().await.unwrap();
    let db = factory::db(&state);

    let person = people::create_people(db, "Tarkin", None).await.unwrap();
    let planet = planets::create_planet(db, "Death Star", None, None)
        .await
        .unwrap();

    assert_eq!(
        serde_json::to_value(&person).unwrap(),
        json!({"id": person.id, "name": "Tarkin", "description": null})
    );
    assert_eq!(
        serde_json::to_value(&planet).unwrap(),
        json!({"id": planet.id, "name": "Death Star", "climate": null, "terrain": null})
    );
}

fn assert_round_trip<T: Serialize + DeserializeOwned + PartialEq + Debug>(view: &T) {
    let encoded = serde_json::to_string(view).unwrap();
    let decoded: T = serde_json::from_str(&encoded).unwrap();
    assert_eq!(&decoded, view, "{encoded}");
}

#[actix_web::test]
async fn every_view_survives_json() {
    let state = build_test_state().await.unwrap();
    let db = factory::db(&state);

    let user = factory::user(&state, "satine@mandalore.gov").await;
    let person = factory::person(&state, "Bo-Katan").await;
    let planet = factory::planet(&state, "Mandalore").await;
    favorites::add_people(db, user.id, person.id).await.unwrap();
    let favorite = favorites::add_planet(db, user.id, planet.id).await.unwrap();
    let user = users::require_user(db, user.id).await.unwrap();

    let member = factory::member(&state, "paz").await;
    let profile = members::create_profile(db, member.id, Some("Paz Vizsla"))
        .await
        .unwrap();
    let member = members::require_member(db, member.id).await.unwrap();

    let store = factory::store(&state, "Beskar Forge").await;
    let product = factory::product(&state, store.id, "Pauldron", 99.95).await;
    let product = stores::require_product(db, product.id).await.unwrap();

    let customer = factory::customer(&state, "Armorer").await;
    let order = customers::create_order(db, customer.id, "Ingot", 4)
        .await
        .unwrap();
    let customer = customers::require_customer(db, customer.id).await.unwrap();

    let student = factory::student(&state, "Koska").await;
    let course = factory::course(&state, "Jetpack Drills").await;
    let student = students::enrol(db, student.id, course.id).await.unwrap();
    let course = students::require_course(db, course.id).await.unwrap();

    assert_round_trip(&user);
    assert_round_trip(&person);
    assert_round_trip(&planet);
    assert_round_trip(&favorite);
    assert_round_trip(&member);
    assert_round_trip(&profile);
    assert_round_trip(&store);
    assert_round_trip(&product);
    assert_round_trip(&customer);
    assert_round_trip(&order);
    assert_round_trip(&student);
    assert_round_trip(&course);
}
