//! Stores and the products they sell.

use sea_orm::ConnectionTrait;
use serde::{Deserialize, Serialize};

use crate::adapters::stores_sea as stores_adapter;
use crate::entities::{products as products_entity, stores as stores_entity};
use crate::errors::domain::{DomainError, NotFoundKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub store_id: i64,
    pub store_name: Option<String>,
}

pub async fn list_stores<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Store>, DomainError> {
    let rows = stores_adapter::list_stores(conn).await?;
    Ok(rows.into_iter().map(Store::from).collect())
}

pub async fn require_store<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    store_id: i64,
) -> Result<Store, DomainError> {
    stores_adapter::find_store_by_id(conn, store_id)
        .await?
        .map(Store::from)
        .ok_or_else(|| DomainError::missing(NotFoundKind::Store, store_id))
}

pub async fn create_store<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<Store, DomainError> {
    let model = stores_adapter::create_store(
        conn,
        stores_adapter::StoreCreate {
            name: name.to_string(),
        },
    )
    .await?;
    Ok(Store::from(model))
}

/// Stores with products are protected by the foreign key (`Conflict(ForeignKey)`).
pub async fn delete_store<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    store_id: i64,
) -> Result<Store, DomainError> {
    let store = require_store(conn, store_id).await?;
    stores_adapter::delete_store(conn, store_id).await?;
    Ok(store)
}

pub async fn list_products<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Product>, DomainError> {
    let rows = stores_adapter::list_products_with_store(conn).await?;
    Ok(rows.into_iter().map(Product::from).collect())
}

pub async fn require_product<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    product_id: i64,
) -> Result<Product, DomainError> {
    stores_adapter::find_product_with_store(conn, product_id)
        .await?
        .map(Product::from)
        .ok_or_else(|| DomainError::missing(NotFoundKind::Product, product_id))
}

/// Adds a product to an existing store.
pub async fn create_product<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    store_id: i64,
    name: &str,
    price: f64,
) -> Result<Product, DomainError> {
    let store = require_store(conn, store_id).await?;
    let model = stores_adapter::create_product(
        conn,
        stores_adapter::ProductCreate {
            store_id,
            name: name.to_string(),
            price,
        },
    )
    .await?;
    Ok(Product {
        id: model.id,
        name: model.name,
        price: model.price,
        store_id: model.store_id,
        store_name: Some(store.name),
    })
}

pub async fn delete_product<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    product_id: i64,
) -> Result<Product, DomainError> {
    let product = require_product(conn, product_id).await?;
    stores_adapter::delete_product(conn, product_id).await?;
    Ok(product)
}

impl From<stores_entity::Model> for Store {
    fn from(model: stores_entity::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}

impl From<(products_entity::Model, Option<stores_entity::Model>)> for Product {
    fn from((product, store): (products_entity::Model, Option<stores_entity::Model>)) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            store_id: product.store_id,
            store_name: store.map(|s| s.name),
        }
    }
}
