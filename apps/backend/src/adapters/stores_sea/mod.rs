//! SeaORM adapter for stores and their products.

use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, NotSet, QueryOrder, Set};

use crate::entities::{products, stores};

pub mod dto;

pub use dto::{ProductCreate, StoreCreate};

pub async fn list_stores<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<stores::Model>, sea_orm::DbErr> {
    stores::Entity::find()
        .order_by_asc(stores::Column::Id)
        .all(conn)
        .await
}

pub async fn find_store_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    store_id: i64,
) -> Result<Option<stores::Model>, sea_orm::DbErr> {
    stores::Entity::find_by_id(store_id).one(conn).await
}

pub async fn create_store<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: StoreCreate,
) -> Result<stores::Model, sea_orm::DbErr> {
    let store_active = stores::ActiveModel {
        id: NotSet,
        name: Set(dto.name),
    };

    store_active.insert(conn).await
}

pub async fn delete_store<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    store_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let res = stores::Entity::delete_by_id(store_id).exec(conn).await?;
    Ok(res.rows_affected)
}

pub async fn list_products_with_store<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<(products::Model, Option<stores::Model>)>, sea_orm::DbErr> {
    products::Entity::find()
        .find_also_related(stores::Entity)
        .order_by_asc(products::Column::Id)
        .all(conn)
        .await
}

pub async fn find_product_with_store<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    product_id: i64,
) -> Result<Option<(products::Model, Option<stores::Model>)>, sea_orm::DbErr> {
    products::Entity::find_by_id(product_id)
        .find_also_related(stores::Entity)
        .one(conn)
        .await
}

pub async fn create_product<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ProductCreate,
) -> Result<products::Model, sea_orm::DbErr> {
    let product_active = products::ActiveModel {
        id: NotSet,
        name: Set(dto.name),
        price: Set(dto.price),
        store_id: Set(dto.store_id),
    };

    product_active.insert(conn).await
}

pub async fn delete_product<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    product_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let res = products::Entity::delete_by_id(product_id).exec(conn).await?;
    Ok(res.rows_affected)
}
