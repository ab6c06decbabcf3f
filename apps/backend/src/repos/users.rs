//! User repository functions for domain layer (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;
use serde::{Deserialize, Serialize};

use crate::adapters::users_sea as users_adapter;
use crate::entities::users as users_entity;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::favorites::{self, Favorite};

/// Serialized user. The stored password is never part of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub favorites: Vec<Favorite>,
}

pub(crate) async fn require_user_row<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<users_entity::Model, DomainError> {
    users_adapter::find_user_by_id(conn, user_id)
        .await?
        .ok_or_else(|| DomainError::missing(NotFoundKind::User, user_id))
}

pub async fn list_users<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<User>, DomainError> {
    let rows = users_adapter::list_users(conn).await?;
    let ids: Vec<i64> = rows.iter().map(|u| u.id).collect();
    let mut favorites = favorites::favorites_by_user(conn, &ids).await?;

    Ok(rows
        .into_iter()
        .map(|model| {
            let favs = favorites.remove(&model.id).unwrap_or_default();
            User::with_favorites(model, favs)
        })
        .collect())
}

pub async fn find_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Option<User>, DomainError> {
    let Some(model) = users_adapter::find_user_by_id(conn, user_id).await? else {
        return Ok(None);
    };
    let mut favorites = favorites::favorites_by_user(conn, &[user_id]).await?;
    let favs = favorites.remove(&user_id).unwrap_or_default();
    Ok(Some(User::with_favorites(model, favs)))
}

pub async fn require_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<User, DomainError> {
    find_user(conn, user_id)
        .await?
        .ok_or_else(|| DomainError::missing(NotFoundKind::User, user_id))
}

/// Duplicate email surfaces as `Conflict(UniqueEmail)` from the unique index.
pub async fn create_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    email: &str,
    password: &str,
) -> Result<User, DomainError> {
    let model =
        users_adapter::create_user(conn, users_adapter::UserCreate::new(email, password)).await?;
    Ok(User::with_favorites(model, Vec::new()))
}

/// Deletes the user (favorites cascade) and returns the pre-delete view.
pub async fn delete_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<User, DomainError> {
    let user = require_user(conn, user_id).await?;
    users_adapter::delete_user(conn, user_id).await?;
    Ok(user)
}

impl User {
    fn with_favorites(model: users_entity::Model, favorites: Vec<Favorite>) -> Self {
        Self {
            id: model.id,
            email: model.email,
            favorites,
        }
    }
}
