use holonet::errors::domain::{ConflictKind, DomainError, NotFoundKind};
use holonet::repos::{favorites, planets, stores, users};

use crate::support::{build_test_state, factory};

#[actix_web::test]
async fn referenced_planet_is_restricted() {
    let state = build_test_state().await.unwrap();
    let user = factory::user(&state, "thrawn@chiss.gov").await;
    let planet = factory::planet(&state, "Csilla").await;
    let db = factory::db(&state);

    favorites::add_planet(db, user.id, planet.id).await.unwrap();

    let err = planets::delete_planet(db, planet.id).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Conflict(ConflictKind::ForeignKey, _)
    ));
    assert!(planets::find_planet(db, planet.id).await.unwrap().is_some());
}

#[actix_web::test]
async fn user_delete_cascades_to_favorites() {
    let state = build_test_state().await.unwrap();
    let user = factory::user(&state, "pellaeon@empire.gov").await;
    let planet = factory::planet(&state, "Bastion").await;
    let db = factory::db(&state);

    favorites::add_planet(db, user.id, planet.id).await.unwrap();

    let deleted = users::delete_user(db, user.id).await.unwrap();
    assert_eq!(deleted.favorites.len(), 1);

    let grouped = favorites::favorites_by_user(db, &[user.id]).await.unwrap();
    assert!(grouped.get(&user.id).map_or(true, Vec::is_empty));

    planets::delete_planet(db, planet.id).await.unwrap();
}

#[actix_web::test]
async fn deleting_missing_rows_is_not_found() {
    let state = build_test_state().await.unwrap();
    let db = factory::db(&state);

    let err = users::delete_user(db, 12).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound(NotFoundKind::User, _)));

    let err = stores::delete_store(db, 12).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound(NotFoundKind::Store, _)));
}

#[actix_web::test]
async fn duplicate_email_maps_to_unique_email() {
    let state = build_test_state().await.unwrap();
    factory::user(&state, "ventress@dathomir.net").await;
    let db = factory::db(&state);

    let err = users::create_user(db, "ventress@dathomir.net", "x")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Conflict(ConflictKind::UniqueEmail, _)
    ));
    assert_eq!(users::list_users(db).await.unwrap().len(), 1);
}
