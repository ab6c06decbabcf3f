//! SeaORM adapter for customers and their orders.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::{customers, orders};

pub mod dto;

pub use dto::{CustomerCreate, OrderCreate};

pub async fn list_customers_with_orders<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<(customers::Model, Vec<orders::Model>)>, sea_orm::DbErr> {
    customers::Entity::find()
        .find_with_related(orders::Entity)
        .order_by_asc(customers::Column::Id)
        .order_by_asc(orders::Column::Id)
        .all(conn)
        .await
}

pub async fn find_customer_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    customer_id: i64,
) -> Result<Option<customers::Model>, sea_orm::DbErr> {
    customers::Entity::find_by_id(customer_id).one(conn).await
}

pub async fn find_orders_by_customer<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    customer_id: i64,
) -> Result<Vec<orders::Model>, sea_orm::DbErr> {
    orders::Entity::find()
        .filter(orders::Column::CustomerId.eq(customer_id))
        .order_by_asc(orders::Column::Id)
        .all(conn)
        .await
}

pub async fn create_customer<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: CustomerCreate,
) -> Result<customers::Model, sea_orm::DbErr> {
    let customer_active = customers::ActiveModel {
        id: NotSet,
        name: Set(dto.name),
    };

    customer_active.insert(conn).await
}

pub async fn delete_customer<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    customer_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let res = customers::Entity::delete_by_id(customer_id)
        .exec(conn)
        .await?;
    Ok(res.rows_affected)
}

pub async fn find_order_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    order_id: i64,
) -> Result<Option<orders::Model>, sea_orm::DbErr> {
    orders::Entity::find_by_id(order_id).one(conn).await
}

pub async fn create_order<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: OrderCreate,
) -> Result<orders::Model, sea_orm::DbErr> {
    let order_active = orders::ActiveModel {
        id: NotSet,
        product: Set(dto.product),
        quantity: Set(dto.quantity),
        customer_id: Set(dto.customer_id),
    };

    order_active.insert(conn).await
}

pub async fn delete_order<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    order_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let res = orders::Entity::delete_by_id(order_id).exec(conn).await?;
    Ok(res.rows_affected)
}
