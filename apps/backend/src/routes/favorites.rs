//! Favorites hang off a user: `/users/{id}/favorites`, `/users/{id}/people`
//! and `/users/{id}/planets`.

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::{PathId, ValidatedJson};
use crate::repos::{favorites, users};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct AddPeopleRequest {
    pub people_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct AddPlanetRequest {
    pub planet_id: i64,
}

fn positive_id(field: &str, id: i64) -> Result<i64, AppError> {
    if id <= 0 {
        return Err(AppError::invalid(
            ErrorCode::ValidationError,
            format!("{field} must be positive"),
        ));
    }
    Ok(id)
}

async fn list_favorites(
    user_id: PathId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let user_id = user_id.get();
    let (email, favorites) = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            users::require_user(txn, user_id)
                .await
                .map(|user| (user.email, user.favorites))
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(json!({
        "msg": format!("Here are the favorites of {email}"),
        "favorites": favorites,
    })))
}

async fn add_people(
    user_id: PathId,
    app_state: web::Data<AppState>,
    body: ValidatedJson<AddPeopleRequest>,
) -> Result<HttpResponse, AppError> {
    let user_id = user_id.get();
    let people_id = positive_id("people_id", body.people_id)?;

    let favorite = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            favorites::add_people(txn, user_id, people_id)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    tracing::info!(user_id, people_id, favorite_id = favorite.id, "favorites.added");

    Ok(HttpResponse::Ok().json(json!({
        "msg": "Favorite added successfully",
        "favorite": favorite,
    })))
}

async fn add_planet(
    user_id: PathId,
    app_state: web::Data<AppState>,
    body: ValidatedJson<AddPlanetRequest>,
) -> Result<HttpResponse, AppError> {
    let user_id = user_id.get();
    let planet_id = positive_id("planet_id", body.planet_id)?;

    let favorite = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            favorites::add_planet(txn, user_id, planet_id)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    tracing::info!(user_id, planet_id, favorite_id = favorite.id, "favorites.added");

    Ok(HttpResponse::Ok().json(json!({
        "msg": "Favorite added successfully",
        "favorite": favorite,
    })))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/users/{id}/favorites", web::get().to(list_favorites))
        .route("/users/{id}/people", web::post().to(add_people))
        .route("/users/{id}/planets", web::post().to(add_planet));
}
