use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;

use super::validate;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::{PathId, ValidatedJson};
use crate::logging::pii::Redacted;
use crate::repos::users;
use crate::state::app_state::AppState;

#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub password: String,
}

impl CreateUserRequest {
    fn validate(&self) -> Result<(), AppError> {
        validate::email(&self.email)?;
        validate::required_text("password", &self.password, 80)
    }
}

async fn list_users(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let users = with_txn(&app_state, |txn| {
        Box::pin(async move { users::list_users(txn).await.map_err(AppError::from) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(users))
}

async fn get_user(
    user_id: PathId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let user_id = user_id.get();
    let user = with_txn(&app_state, move |txn| {
        Box::pin(async move { users::require_user(txn, user_id).await.map_err(AppError::from) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(user))
}

async fn create_user(
    app_state: web::Data<AppState>,
    body: ValidatedJson<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let payload = body.into_inner();
    payload.validate()?;

    let user = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            users::create_user(txn, &payload.email, &payload.password)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    tracing::info!(user_id = user.id, email = %Redacted(&user.email), "users.created");

    Ok(HttpResponse::Ok().json(json!({
        "msg": "User created successfully",
        "user": user,
    })))
}

async fn delete_user(
    user_id: PathId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let user_id = user_id.get();
    let user = with_txn(&app_state, move |txn| {
        Box::pin(async move { users::delete_user(txn, user_id).await.map_err(AppError::from) })
    })
    .await?;

    tracing::info!(user_id, "users.deleted");

    Ok(HttpResponse::Ok().json(json!({
        "msg": "User deleted",
        "user": user,
    })))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/users")
            .route(web::get().to(list_users))
            .route(web::post().to(create_user)),
    )
    .service(
        web::resource("/users/{id}")
            .route(web::get().to(get_user))
            .route(web::delete().to(delete_user)),
    );
}
