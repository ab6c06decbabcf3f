//! Stores plus the products they sell (`/stores/**`, `/products/**`).

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;

use super::validate;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::{PathId, ValidatedJson};
use crate::repos::stores;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateStoreRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub price: f64,
}

impl CreateProductRequest {
    fn validate(&self) -> Result<(), AppError> {
        validate::required_text("name", &self.name, 80)?;
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(AppError::invalid(
                ErrorCode::ValidationError,
                "price must be a non-negative number",
            ));
        }
        Ok(())
    }
}

async fn list_stores(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let rows = with_txn(&app_state, |txn| {
        Box::pin(async move { stores::list_stores(txn).await.map_err(AppError::from) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(rows))
}

async fn get_store(
    store_id: PathId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let store_id = store_id.get();
    let store = with_txn(&app_state, move |txn| {
        Box::pin(async move { stores::require_store(txn, store_id).await.map_err(AppError::from) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(store))
}

async fn create_store(
    app_state: web::Data<AppState>,
    body: ValidatedJson<CreateStoreRequest>,
) -> Result<HttpResponse, AppError> {
    let payload = body.into_inner();
    validate::required_text("name", &payload.name, 80)?;

    let store = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            stores::create_store(txn, &payload.name)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    tracing::info!(store_id = store.id, "stores.created");

    Ok(HttpResponse::Ok().json(json!({
        "msg": "Store created successfully",
        "store": store,
    })))
}

async fn delete_store(
    store_id: PathId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let store_id = store_id.get();
    let store = with_txn(&app_state, move |txn| {
        Box::pin(async move { stores::delete_store(txn, store_id).await.map_err(AppError::from) })
    })
    .await?;

    tracing::info!(store_id, "stores.deleted");

    Ok(HttpResponse::Ok().json(json!({
        "msg": "Store deleted",
        "store": store,
    })))
}

async fn create_product(
    store_id: PathId,
    app_state: web::Data<AppState>,
    body: ValidatedJson<CreateProductRequest>,
) -> Result<HttpResponse, AppError> {
    let store_id = store_id.get();
    let payload = body.into_inner();
    payload.validate()?;

    let product = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            stores::create_product(txn, store_id, &payload.name, payload.price)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    tracing::info!(store_id, product_id = product.id, "products.created");

    Ok(HttpResponse::Ok().json(json!({
        "msg": "Product created successfully",
        "product": product,
    })))
}

async fn list_products(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let rows = with_txn(&app_state, |txn| {
        Box::pin(async move { stores::list_products(txn).await.map_err(AppError::from) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(rows))
}

async fn get_product(
    product_id: PathId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let product_id = product_id.get();
    let product = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            stores::require_product(txn, product_id)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(product))
}

async fn delete_product(
    product_id: PathId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let product_id = product_id.get();
    let product = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            stores::delete_product(txn, product_id)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    tracing::info!(product_id, "products.deleted");

    Ok(HttpResponse::Ok().json(json!({
        "msg": "Product deleted",
        "product": product,
    })))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/stores")
            .route(web::get().to(list_stores))
            .route(web::post().to(create_store)),
    )
    .service(
        web::resource("/stores/{id}")
            .route(web::get().to(get_store))
            .route(web::delete().to(delete_store)),
    )
    .route("/stores/{id}/products", web::post().to(create_product))
    .route("/products", web::get().to(list_products))
    .service(
        web::resource("/products/{id}")
            .route(web::get().to(get_product))
            .route(web::delete().to(delete_product)),
    );
}
