use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;

use super::validate;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::{PathId, ValidatedJson};
use crate::repos::planets;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreatePlanetRequest {
    pub name: String,
    #[serde(default)]
    pub climate: Option<String>,
    #[serde(default)]
    pub terrain: Option<String>,
}

impl CreatePlanetRequest {
    fn validate(&self) -> Result<(), AppError> {
        validate::required_text("name", &self.name, 80)?;
        validate::optional_text("climate", self.climate.as_deref(), 80)?;
        validate::optional_text("terrain", self.terrain.as_deref(), 80)
    }
}

async fn list_planets(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let rows = with_txn(&app_state, |txn| {
        Box::pin(async move { planets::list_planets(txn).await.map_err(AppError::from) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(rows))
}

async fn get_planet(
    planet_id: PathId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let planet_id = planet_id.get();
    let planet = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            planets::require_planet(txn, planet_id)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(planet))
}

async fn create_planet(
    app_state: web::Data<AppState>,
    body: ValidatedJson<CreatePlanetRequest>,
) -> Result<HttpResponse, AppError> {
    let payload = body.into_inner();
    payload.validate()?;

    let planet = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            planets::create_planet(
                txn,
                &payload.name,
                payload.climate.as_deref(),
                payload.terrain.as_deref(),
            )
            .await
            .map_err(AppError::from)
        })
    })
    .await?;

    tracing::info!(planet_id = planet.id, "planets.created");

    // same planet under both keys
    Ok(HttpResponse::Ok().json(json!({
        "msg": "Planet created successfully",
        "people": planet,
        "planet": planet,
    })))
}

async fn delete_planet(
    planet_id: PathId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let planet_id = planet_id.get();
    let planet = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            planets::delete_planet(txn, planet_id)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    tracing::info!(planet_id, "planets.deleted");

    Ok(HttpResponse::Ok().json(json!({
        "msg": "planet deleted",
        "planet": planet,
    })))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/planets")
            .route(web::get().to(list_planets))
            .route(web::post().to(create_planet)),
    )
    .service(
        web::resource("/planets/{id}")
            .route(web::get().to(get_planet))
            .route(web::delete().to(delete_planet)),
    );
}
