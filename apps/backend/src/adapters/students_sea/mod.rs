//! SeaORM adapter for students, courses and the inscriptions join table.

use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, ModelTrait, NotSet,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};

use crate::entities::{courses, inscriptions, students};

pub mod dto;

pub use dto::{CourseCreate, Enrolment, StudentCreate};

pub async fn list_students_with_courses<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<(students::Model, Vec<courses::Model>)>, sea_orm::DbErr> {
    students::Entity::find()
        .find_with_related(courses::Entity)
        .order_by_asc(students::Column::Id)
        .order_by_asc(courses::Column::Id)
        .all(conn)
        .await
}

pub async fn find_student_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    student_id: i64,
) -> Result<Option<students::Model>, sea_orm::DbErr> {
    students::Entity::find_by_id(student_id).one(conn).await
}

pub async fn courses_of<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    student: &students::Model,
) -> Result<Vec<courses::Model>, sea_orm::DbErr> {
    student
        .find_related(courses::Entity)
        .order_by_asc(courses::Column::Id)
        .all(conn)
        .await
}

pub async fn create_student<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: StudentCreate,
) -> Result<students::Model, sea_orm::DbErr> {
    let student_active = students::ActiveModel {
        id: NotSet,
        name: Set(dto.name),
    };

    student_active.insert(conn).await
}

pub async fn delete_student<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    student_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let res = students::Entity::delete_by_id(student_id).exec(conn).await?;
    Ok(res.rows_affected)
}

pub async fn list_courses_with_students<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<(courses::Model, Vec<students::Model>)>, sea_orm::DbErr> {
    courses::Entity::find()
        .find_with_related(students::Entity)
        .order_by_asc(courses::Column::Id)
        .order_by_asc(students::Column::Id)
        .all(conn)
        .await
}

pub async fn find_course_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    course_id: i64,
) -> Result<Option<courses::Model>, sea_orm::DbErr> {
    courses::Entity::find_by_id(course_id).one(conn).await
}

pub async fn students_of<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    course: &courses::Model,
) -> Result<Vec<students::Model>, sea_orm::DbErr> {
    course
        .find_related(students::Entity)
        .order_by_asc(students::Column::Id)
        .all(conn)
        .await
}

pub async fn create_course<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: CourseCreate,
) -> Result<courses::Model, sea_orm::DbErr> {
    let course_active = courses::ActiveModel {
        id: NotSet,
        name: Set(dto.name),
    };

    course_active.insert(conn).await
}

pub async fn delete_course<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    course_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let res = courses::Entity::delete_by_id(course_id).exec(conn).await?;
    Ok(res.rows_affected)
}

/// Inserts the (student, course) pair unless it already exists.
/// Returns true when a new row was written.
pub async fn enrol<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: Enrolment,
) -> Result<bool, sea_orm::DbErr> {
    let inscription_active = inscriptions::ActiveModel {
        student_id: Set(dto.student_id),
        course_id: Set(dto.course_id),
    };

    let rows = inscriptions::Entity::insert(inscription_active)
        .on_conflict(
            OnConflict::columns([inscriptions::Column::StudentId, inscriptions::Column::CourseId])
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(conn)
        .await?;

    Ok(rows == 1)
}

pub async fn count_enrolments<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    student_id: i64,
    course_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    inscriptions::Entity::find()
        .filter(inscriptions::Column::StudentId.eq(student_id))
        .filter(inscriptions::Column::CourseId.eq(course_id))
        .count(conn)
        .await
}
