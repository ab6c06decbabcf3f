//! SeaORM adapter for the planets table.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use super::IN_LIST_CHUNK;
use crate::entities::planets;

pub mod dto;

pub use dto::PlanetCreate;

pub async fn list_planets<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<planets::Model>, sea_orm::DbErr> {
    planets::Entity::find()
        .order_by_asc(planets::Column::Id)
        .all(conn)
        .await
}

pub async fn find_planet_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    planet_id: i64,
) -> Result<Option<planets::Model>, sea_orm::DbErr> {
    planets::Entity::find_by_id(planet_id).one(conn).await
}

pub async fn find_planets_by_ids<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    ids: &[i64],
) -> Result<Vec<planets::Model>, sea_orm::DbErr> {
    let mut rows = Vec::new();
    for chunk in ids.chunks(IN_LIST_CHUNK) {
        let batch = planets::Entity::find()
            .filter(planets::Column::Id.is_in(chunk.iter().copied()))
            .all(conn)
            .await?;
        rows.extend(batch);
    }
    Ok(rows)
}

pub async fn create_planet<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: PlanetCreate,
) -> Result<planets::Model, sea_orm::DbErr> {
    let planet_active = planets::ActiveModel {
        id: NotSet,
        name: Set(dto.name),
        climate: Set(dto.climate),
        terrain: Set(dto.terrain),
    };

    planet_active.insert(conn).await
}

pub async fn delete_planet<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    planet_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let res = planets::Entity::delete_by_id(planet_id).exec(conn).await?;
    Ok(res.rows_affected)
}
