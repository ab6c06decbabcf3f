use holonet::adapters::{people_sea, planets_sea};
use holonet::repos::{favorites, users};

use crate::support::{build_test_state, factory};

// Above SQLite's per-statement bind limit (32766).
const MANY: i64 = 40_000;

#[actix_web::test]
async fn favorites_lookup_accepts_more_ids_than_bind_limit() {
    let state = build_test_state().await.unwrap();
    let user = factory::user(&state, "wedge@rogue.squadron").await;
    let planet = factory::planet(&state, "Corellia").await;
    let db = factory::db(&state);
    favorites::add_planet(db, user.id, planet.id).await.unwrap();

    let ids: Vec<i64> = (1..=MANY).collect();
    let grouped = favorites::favorites_by_user(db, &ids).await.unwrap();
    assert_eq!(grouped.len(), 1);
    assert_eq!(grouped[&user.id].len(), 1);

    assert_eq!(planets_sea::find_planets_by_ids(db, &ids).await.unwrap().len(), 1);
    assert!(people_sea::find_people_by_ids(db, &ids).await.unwrap().is_empty());
}

#[actix_web::test]
async fn listing_many_users_keeps_their_favorites() {
    let state = build_test_state().await.unwrap();
    factory::many_users(&state, MANY as usize).await;
    let planet = factory::planet(&state, "Kessel").await;
    let db = factory::db(&state);
    favorites::add_planet(db, MANY, planet.id).await.unwrap();

    let listed = users::list_users(db).await.unwrap();
    assert_eq!(listed.len(), MANY as usize);
    let last = listed.last().unwrap();
    assert_eq!(last.id, MANY);
    assert_eq!(last.favorites.len(), 1);
    assert_eq!(
        last.favorites[0].planet.as_ref().map(|p| p.name.as_str()),
        Some("Kessel")
    );
}
