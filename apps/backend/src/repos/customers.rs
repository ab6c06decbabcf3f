//! Customers and their orders.

use sea_orm::ConnectionTrait;
use serde::{Deserialize, Serialize};

use crate::adapters::customers_sea as customers_adapter;
use crate::entities::{customers as customers_entity, orders as orders_entity};
use crate::errors::domain::{DomainError, NotFoundKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub product: String,
    pub quantity: i32,
    pub customer_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub orders: Vec<Order>,
}

pub async fn list_customers<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Customer>, DomainError> {
    let rows = customers_adapter::list_customers_with_orders(conn).await?;
    Ok(rows.into_iter().map(Customer::from).collect())
}

pub async fn require_customer<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    customer_id: i64,
) -> Result<Customer, DomainError> {
    let model = customers_adapter::find_customer_by_id(conn, customer_id)
        .await?
        .ok_or_else(|| DomainError::missing(NotFoundKind::Customer, customer_id))?;
    let orders = customers_adapter::find_orders_by_customer(conn, customer_id).await?;
    Ok(Customer::from((model, orders)))
}

pub async fn create_customer<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<Customer, DomainError> {
    let model = customers_adapter::create_customer(
        conn,
        customers_adapter::CustomerCreate {
            name: name.to_string(),
        },
    )
    .await?;
    Ok(Customer::from((model, Vec::new())))
}

/// Customers with orders are protected by the foreign key (`Conflict(ForeignKey)`).
pub async fn delete_customer<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    customer_id: i64,
) -> Result<Customer, DomainError> {
    let customer = require_customer(conn, customer_id).await?;
    customers_adapter::delete_customer(conn, customer_id).await?;
    Ok(customer)
}

pub async fn require_order<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    order_id: i64,
) -> Result<Order, DomainError> {
    customers_adapter::find_order_by_id(conn, order_id)
        .await?
        .map(Order::from)
        .ok_or_else(|| DomainError::missing(NotFoundKind::Order, order_id))
}

/// Places an order for an existing customer.
pub async fn create_order<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    customer_id: i64,
    product: &str,
    quantity: i32,
) -> Result<Order, DomainError> {
    if customers_adapter::find_customer_by_id(conn, customer_id)
        .await?
        .is_none()
    {
        return Err(DomainError::missing(NotFoundKind::Customer, customer_id));
    }
    let model = customers_adapter::create_order(
        conn,
        customers_adapter::OrderCreate {
            customer_id,
            product: product.to_string(),
            quantity,
        },
    )
    .await?;
    Ok(Order::from(model))
}

pub async fn delete_order<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    order_id: i64,
) -> Result<Order, DomainError> {
    let order = require_order(conn, order_id).await?;
    customers_adapter::delete_order(conn, order_id).await?;
    Ok(order)
}

impl From<orders_entity::Model> for Order {
    fn from(model: orders_entity::Model) -> Self {
        Self {
            id: model.id,
            product: model.product,
            quantity: model.quantity,
            customer_id: model.customer_id,
        }
    }
}

impl From<(customers_entity::Model, Vec<orders_entity::Model>)> for Customer {
    fn from((customer, orders): (customers_entity::Model, Vec<orders_entity::Model>)) -> Self {
        Self {
            id: customer.id,
            name: customer.name,
            orders: orders.into_iter().map(Order::from).collect(),
        }
    }
}
