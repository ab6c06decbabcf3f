//! Customers plus their orders (`/customers/**`, `/orders/**`).

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;

use super::validate;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::{PathId, ValidatedJson};
use crate::repos::customers;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateCustomerRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    pub product: String,
    pub quantity: i32,
}

impl CreateOrderRequest {
    fn validate(&self) -> Result<(), AppError> {
        validate::required_text("product", &self.product, 80)?;
        if self.quantity <= 0 {
            return Err(AppError::invalid(
                ErrorCode::ValidationError,
                "quantity must be positive",
            ));
        }
        Ok(())
    }
}

async fn list_customers(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let rows = with_txn(&app_state, |txn| {
        Box::pin(async move { customers::list_customers(txn).await.map_err(AppError::from) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(rows))
}

async fn get_customer(
    customer_id: PathId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let customer_id = customer_id.get();
    let customer = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            customers::require_customer(txn, customer_id)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(customer))
}

async fn create_customer(
    app_state: web::Data<AppState>,
    body: ValidatedJson<CreateCustomerRequest>,
) -> Result<HttpResponse, AppError> {
    let payload = body.into_inner();
    validate::required_text("name", &payload.name, 80)?;

    let customer = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            customers::create_customer(txn, &payload.name)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    tracing::info!(customer_id = customer.id, "customers.created");

    Ok(HttpResponse::Ok().json(json!({
        "msg": "Customer created successfully",
        "customer": customer,
    })))
}

async fn delete_customer(
    customer_id: PathId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let customer_id = customer_id.get();
    let customer = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            customers::delete_customer(txn, customer_id)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    tracing::info!(customer_id, "customers.deleted");

    Ok(HttpResponse::Ok().json(json!({
        "msg": "Customer deleted",
        "customer": customer,
    })))
}

async fn create_order(
    customer_id: PathId,
    app_state: web::Data<AppState>,
    body: ValidatedJson<CreateOrderRequest>,
) -> Result<HttpResponse, AppError> {
    let customer_id = customer_id.get();
    let payload = body.into_inner();
    payload.validate()?;

    let order = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            customers::create_order(txn, customer_id, &payload.product, payload.quantity)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    tracing::info!(customer_id, order_id = order.id, "orders.created");

    Ok(HttpResponse::Ok().json(json!({
        "msg": "Order created successfully",
        "order": order,
    })))
}

async fn get_order(
    order_id: PathId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let order_id = order_id.get();
    let order = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            customers::require_order(txn, order_id)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(order))
}

async fn delete_order(
    order_id: PathId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let order_id = order_id.get();
    let order = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            customers::delete_order(txn, order_id)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    tracing::info!(order_id, "orders.deleted");

    Ok(HttpResponse::Ok().json(json!({
        "msg": "Order deleted",
        "order": order,
    })))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/customers")
            .route(web::get().to(list_customers))
            .route(web::post().to(create_customer)),
    )
    .service(
        web::resource("/customers/{id}")
            .route(web::get().to(get_customer))
            .route(web::delete().to(delete_customer)),
    )
    .route("/customers/{id}/orders", web::post().to(create_order))
    .service(
        web::resource("/orders/{id}")
            .route(web::get().to(get_order))
            .route(web::delete().to(delete_order)),
    );
}
