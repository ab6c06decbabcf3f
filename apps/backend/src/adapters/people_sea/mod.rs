//! SeaORM adapter for the people table.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use super::IN_LIST_CHUNK;
use crate::entities::people;

pub mod dto;

pub use dto::PeopleCreate;

pub async fn list_people<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<people::Model>, sea_orm::DbErr> {
    people::Entity::find()
        .order_by_asc(people::Column::Id)
        .all(conn)
        .await
}

pub async fn find_people_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    people_id: i64,
) -> Result<Option<people::Model>, sea_orm::DbErr> {
    people::Entity::find_by_id(people_id).one(conn).await
}

pub async fn find_people_by_ids<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    ids: &[i64],
) -> Result<Vec<people::Model>, sea_orm::DbErr> {
    let mut rows = Vec::new();
    for chunk in ids.chunks(IN_LIST_CHUNK) {
        let batch = people::Entity::find()
            .filter(people::Column::Id.is_in(chunk.iter().copied()))
            .all(conn)
            .await?;
        rows.extend(batch);
    }
    Ok(rows)
}

pub async fn create_people<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: PeopleCreate,
) -> Result<people::Model, sea_orm::DbErr> {
    let people_active = people::ActiveModel {
        id: NotSet,
        name: Set(dto.name),
        description: Set(dto.description),
    };

    people_active.insert(conn).await
}

pub async fn delete_people<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    people_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let res = people::Entity::delete_by_id(people_id).exec(conn).await?;
    Ok(res.rows_affected)
}
