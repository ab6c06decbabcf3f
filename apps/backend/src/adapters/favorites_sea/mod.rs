//! SeaORM adapter for the favorites table.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use super::IN_LIST_CHUNK;
use crate::entities::favorites;

pub mod dto;

pub use dto::FavoriteCreate;

/// Favorites of `user_ids`, queried in chunks of [`IN_LIST_CHUNK`] ids.
pub async fn find_by_user_ids<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_ids: &[i64],
) -> Result<Vec<favorites::Model>, sea_orm::DbErr> {
    let mut rows = Vec::new();
    for chunk in user_ids.chunks(IN_LIST_CHUNK) {
        let batch = favorites::Entity::find()
            .filter(favorites::Column::UserId.is_in(chunk.iter().copied()))
            .order_by_asc(favorites::Column::Id)
            .all(conn)
            .await?;
        rows.extend(batch);
    }
    Ok(rows)
}

pub async fn create_favorite<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: FavoriteCreate,
) -> Result<favorites::Model, sea_orm::DbErr> {
    let favorite_active = favorites::ActiveModel {
        id: NotSet,
        user_id: Set(dto.user_id),
        planet_id: Set(dto.planet_id),
        people_id: Set(dto.people_id),
    };

    favorite_active.insert(conn).await
}
