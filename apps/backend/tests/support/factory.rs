//! Seed rows straight through the repos, bypassing HTTP.

use holonet::entities::users as users_entity;
use holonet::repos::{customers, members, people, planets, stores, students, users};
use holonet::AppState;
use sea_orm::{DatabaseConnection, EntityTrait, NotSet, Set};

pub fn db(state: &AppState) -> &DatabaseConnection {
    state.db().expect("test state has a database")
}

pub async fn user(state: &AppState, email: &str) -> users::User {
    users::create_user(db(state), email, "hunter2").await.unwrap()
}

pub async fn person(state: &AppState, name: &str) -> people::People {
    people::create_people(db(state), name, Some("seeded"))
        .await
        .unwrap()
}

pub async fn planet(state: &AppState, name: &str) -> planets::Planet {
    planets::create_planet(db(state), name, Some("arid"), Some("desert"))
        .await
        .unwrap()
}

pub async fn member(state: &AppState, username: &str) -> members::Member {
    members::create_member(db(state), username, "hunter2")
        .await
        .unwrap()
}

pub async fn store(state: &AppState, name: &str) -> stores::Store {
    stores::create_store(db(state), name).await.unwrap()
}

pub async fn product(state: &AppState, store_id: i64, name: &str, price: f64) -> stores::Product {
    stores::create_product(db(state), store_id, name, price)
        .await
        .unwrap()
}

pub async fn customer(state: &AppState, name: &str) -> customers::Customer {
    customers::create_customer(db(state), name).await.unwrap()
}

pub async fn student(state: &AppState, name: &str) -> students::Student {
    students::create_student(db(state), name).await.unwrap()
}

pub async fn course(state: &AppState, name: &str) -> students::Course {
    students::create_course(db(state), name).await.unwrap()
}

/// Bulk-insert `count` users (`bulk-<n>@holonet.test`) in multi-row statements.
pub async fn many_users(state: &AppState, count: usize) {
    let rows: Vec<users_entity::ActiveModel> = (0..count)
        .map(|n| users_entity::ActiveModel {
            id: NotSet,
            email: Set(format!("bulk-{n}@holonet.test")),
            password: Set("hunter2".to_string()),
        })
        .collect();
    for chunk in rows.chunks(500) {
        users_entity::Entity::insert_many(chunk.to_vec())
            .exec(db(state))
            .await
            .unwrap();
    }
}
