use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;

use super::validate;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::{PathId, ValidatedJson};
use crate::repos::people;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreatePeopleRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl CreatePeopleRequest {
    fn validate(&self) -> Result<(), AppError> {
        validate::required_text("name", &self.name, 80)?;
        validate::optional_text("description", self.description.as_deref(), 280)
    }
}

async fn list_people(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let rows = with_txn(&app_state, |txn| {
        Box::pin(async move { people::list_people(txn).await.map_err(AppError::from) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(rows))
}

async fn get_people(
    people_id: PathId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let people_id = people_id.get();
    let person = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            people::require_people(txn, people_id)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(person))
}

async fn create_people(
    app_state: web::Data<AppState>,
    body: ValidatedJson<CreatePeopleRequest>,
) -> Result<HttpResponse, AppError> {
    let payload = body.into_inner();
    payload.validate()?;

    let person = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            people::create_people(txn, &payload.name, payload.description.as_deref())
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    tracing::info!(people_id = person.id, "people.created");

    Ok(HttpResponse::Ok().json(json!({
        "msg": "People created successfully",
        "people": person,
    })))
}

async fn delete_people(
    people_id: PathId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let people_id = people_id.get();
    let person = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            people::delete_people(txn, people_id)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    tracing::info!(people_id, "people.deleted");

    Ok(HttpResponse::Ok().json(json!({
        "msg": "people deleted",
        "people": person,
    })))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/people")
            .route(web::get().to(list_people))
            .route(web::post().to(create_people)),
    )
    .service(
        web::resource("/people/{id}")
            .route(web::get().to(get_people))
            .route(web::delete().to(delete_people)),
    );
}
