//! Students, courses and enrolment (`/students/**`, `/courses/**`).

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;

use super::validate;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::{PathId, ValidatedJson};
use crate::repos::students;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateNamedRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct EnrolRequest {
    pub course_id: i64,
}

async fn list_students(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let rows = with_txn(&app_state, |txn| {
        Box::pin(async move { students::list_students(txn).await.map_err(AppError::from) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(rows))
}

async fn get_student(
    student_id: PathId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let student_id = student_id.get();
    let student = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            students::require_student(txn, student_id)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(student))
}

async fn create_student(
    app_state: web::Data<AppState>,
    body: ValidatedJson<CreateNamedRequest>,
) -> Result<HttpResponse, AppError> {
    let payload = body.into_inner();
    validate::required_text("name", &payload.name, 80)?;

    let student = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            students::create_student(txn, &payload.name)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    tracing::info!(student_id = student.id, "students.created");

    Ok(HttpResponse::Ok().json(json!({
        "msg": "Student created successfully",
        "student": student,
    })))
}

async fn delete_student(
    student_id: PathId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let student_id = student_id.get();
    let student = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            students::delete_student(txn, student_id)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    tracing::info!(student_id, "students.deleted");

    Ok(HttpResponse::Ok().json(json!({
        "msg": "Student deleted",
        "student": student,
    })))
}

async fn enrol(
    student_id: PathId,
    app_state: web::Data<AppState>,
    body: ValidatedJson<EnrolRequest>,
) -> Result<HttpResponse, AppError> {
    let student_id = student_id.get();
    let course_id = body.course_id;
    if course_id <= 0 {
        return Err(AppError::invalid(
            ErrorCode::ValidationError,
            "course_id must be positive",
        ));
    }

    let student = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            students::enrol(txn, student_id, course_id)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(json!({
        "msg": "Student enrolled",
        "student": student,
    })))
}

async fn list_courses(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let rows = with_txn(&app_state, |txn| {
        Box::pin(async move { students::list_courses(txn).await.map_err(AppError::from) })
    })
    .await?;

    Ok(HttpResponse::Ok().json(rows))
}

async fn get_course(
    course_id: PathId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let course_id = course_id.get();
    let course = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            students::require_course(txn, course_id)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    Ok(HttpResponse::Ok().json(course))
}

async fn create_course(
    app_state: web::Data<AppState>,
    body: ValidatedJson<CreateNamedRequest>,
) -> Result<HttpResponse, AppError> {
    let payload = body.into_inner();
    validate::required_text("name", &payload.name, 80)?;

    let course = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            students::create_course(txn, &payload.name)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    tracing::info!(course_id = course.id, "courses.created");

    Ok(HttpResponse::Ok().json(json!({
        "msg": "Course created successfully",
        "course": course,
    })))
}

async fn delete_course(
    course_id: PathId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let course_id = course_id.get();
    let course = with_txn(&app_state, move |txn| {
        Box::pin(async move {
            students::delete_course(txn, course_id)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    tracing::info!(course_id, "courses.deleted");

    Ok(HttpResponse::Ok().json(json!({
        "msg": "Course deleted",
        "course": course,
    })))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/students")
            .route(web::get().to(list_students))
            .route(web::post().to(create_student)),
    )
    .service(
        web::resource("/students/{id}")
            .route(web::get().to(get_student))
            .route(web::delete().to(delete_student)),
    )
    .route("/students/{id}/courses", web::post().to(enrol))
    .service(
        web::resource("/courses")
            .route(web::get().to(list_courses))
            .route(web::post().to(create_course)),
    )
    .service(
        web::resource("/courses/{id}")
            .route(web::get().to(get_course))
            .route(web::delete().to(delete_course)),
    );
}
