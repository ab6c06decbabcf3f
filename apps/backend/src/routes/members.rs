use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;

use super::validate;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::{PathId, ValidatedJson};
use crate::repos::members;
use crate::state::app_state::AppState;

#[derive(Deserialize)]
pub struct CreateMemberRequest {
    pub username: String,
    pub password: String,
}

impl CreateMemberRequest {
    fn validate(&self) -> Result<(), AppError> {
        validate::required_text("username", &self.username, 80)?;
        validate::required_text("password", &self.password, 80)
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateProfileRequest {
    #[serde(default)]
    pub full_name: Option<String>,
}

async fn list_members(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let rows = with_txn(&app_state, |txn| {
        Box::pin(async move { members::list_members(txn).await.map_err(AppError::from) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(rows))
}

async fn get_member(
    member_id: PathId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let member_id = member_id.get();
    let member = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            members::require_member(txn, member_id)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(member))
}

async fn create_member(
    app_state: web::Data<AppState>,
    body: ValidatedJson<CreateMemberRequest>,
) -> Result<HttpResponse, AppError> {
    let payload = body.into_inner();
    payload.validate()?;

    let member = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            members::create_member(txn, &payload.username, &payload.password)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    tracing::info!(member_id = member.id, "members.created");

    Ok(HttpResponse::Ok().json(json!({
        "msg": "Member created successfully",
        "member": member,
    })))
}

async fn create_profile(
    member_id: PathId,
    app_state: web::Data<AppState>,
    body: ValidatedJson<CreateProfileRequest>,
) -> Result<HttpResponse, AppError> {
    let member_id = member_id.get();
    let payload = body.into_inner();
    validate::optional_text("full_name", payload.full_name.as_deref(), 120)?;

    let profile = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            members::create_profile(txn, member_id, payload.full_name.as_deref())
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    tracing::info!(member_id, profile_id = profile.id, "members.profile_created");

    Ok(HttpResponse::Ok().json(json!({
        "msg": "Profile created successfully",
        "profile": profile,
    })))
}

async fn delete_member(
    member_id: PathId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let member_id = member_id.get();
    let member = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            members::delete_member(txn, member_id)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    tracing::info!(member_id, "members.deleted");

    Ok(HttpResponse::Ok().json(json!({
        "msg": "Member deleted",
        "member": member,
    })))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/members")
            .route(web::get().to(list_members))
            .route(web::post().to(create_member)),
    )
    .service(
        web::resource("/members/{id}")
            .route(web::get().to(get_member))
            .route(web::delete().to(delete_member)),
    )
    .route("/members/{id}/profile", web::post().to(create_profile));
}
