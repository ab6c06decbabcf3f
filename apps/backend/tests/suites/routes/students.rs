use actix_web::http::StatusCode;
use serde_json::json;

use crate::common::names;
use crate::support::http::{delete, get, post};
use crate::support::{build_test_state, create_test_app, factory};

#[actix_web::test]
async fn enrolment_shows_on_both_sides() {
    let state = build_test_state().await.unwrap();
    let student = factory::student(&state, "Ezra").await;
    let course = factory::course(&state, "Lightsaber Forms").await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let (status, body) = post(
        &app,
        &format!("/students/{}/courses", student.id),
        json!({"course_id": course.id}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["msg"], "Student enrolled");
    assert_eq!(names(&body["student"]["courses"]), vec!["Lightsaber Forms"]);

    let (_, course_view) = get(&app, &format!("/courses/{}", course.id)).await;
    assert_eq!(names(&course_view["students"]), vec!["Ezra"]);

    let (_, all_students) = get(&app, "/students").await;
    assert_eq!(names(&all_students[0]["courses"]), vec!["Lightsaber Forms"]);
    let (_, all_courses) = get(&app, "/courses").await;
    assert_eq!(names(&all_courses[0]["students"]), vec!["Ezra"]);
}

#[actix_web::test]
async fn enrolling_twice_is_idempotent() {
    let state = build_test_state().await.unwrap();
    let student = factory::student(&state, "Sabine").await;
    let course = factory::course(&state, "Demolitions").await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let uri = format!("/students/{}/courses", student.id);
    let (first_status, first) = post(&app, &uri, json!({"course_id": course.id})).await;
    let (second_status, second) = post(&app, &uri, json!({"course_id": course.id})).await;
    assert_eq!(first_status, StatusCode::OK);
    assert_eq!(second_status, StatusCode::OK);
    assert_eq!(first["student"], second["student"]);
    assert_eq!(names(&second["student"]["courses"]), vec!["Demolitions"]);
}

#[actix_web::test]
async fn enrolment_requires_both_sides() {
    let state = build_test_state().await.unwrap();
    let student = factory::student(&state, "Kanan").await;
    let course = factory::course(&state, "Meditation").await;
    let app = create_test_app(state).with_prod_routes().build().await;

    let (status, body) = post(
        &app,
        &format!("/students/{}/courses", student.id),
        json!({"course_id": course.id + 100}),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "COURSE_NOT_FOUND");

    let (status, body) = post(
        &app,
        &format!("/students/{}/courses", student.id + 100),
        json!({"course_id": course.id}),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "STUDENT_NOT_FOUND");
}

#[actix_web::test]
async fn deleting_course_drops_enrolments() {
    let state = build_test_state().await.unwrap();
    let student = factory::student(&state, "Zeb").await;
    let course = factory::course(&state, "Bo-rifle Basics").await;
    let app = create_test_app(state).with_prod_routes().build().await;

    post(
        &app,
        &format!("/students/{}/courses", student.id),
        json!({"course_id": course.id}),
    )
    .await;

    let (status, body) = delete(&app, &format!("/courses/{}", course.id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["msg"], "Course deleted");
    assert_eq!(names(&body["course"]["students"]), vec!["Zeb"]);

    let (status, student_view) = get(&app, &format!("/students/{}", student.id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(student_view["courses"], json!([]));

    let (status, body) = delete(&app, &format!("/students/{}", student.id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["msg"], "Student deleted");
}
