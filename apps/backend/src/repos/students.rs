//! Students, courses and enrolment.
//!
//! Both sides of the many-to-many relation render the other side as a list
//! of names.

use sea_orm::ConnectionTrait;
use serde::{Deserialize, Serialize};

use crate::adapters::students_sea as students_adapter;
use crate::entities::{courses as courses_entity, students as students_entity};
use crate::errors::domain::{DomainError, NotFoundKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub courses: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub name: String,
    pub students: Vec<String>,
}

pub async fn list_students<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Student>, DomainError> {
    let rows = students_adapter::list_students_with_courses(conn).await?;
    Ok(rows.into_iter().map(Student::from).collect())
}

pub async fn require_student<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    student_id: i64,
) -> Result<Student, DomainError> {
    let model = students_adapter::find_student_by_id(conn, student_id)
        .await?
        .ok_or_else(|| DomainError::missing(NotFoundKind::Student, student_id))?;
    let courses = students_adapter::courses_of(conn, &model).await?;
    Ok(Student::from((model, courses)))
}

pub async fn create_student<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<Student, DomainError> {
    let model = students_adapter::create_student(
        conn,
        students_adapter::StudentCreate {
            name: name.to_string(),
        },
    )
    .await?;
    Ok(Student::from((model, Vec::new())))
}

/// Deletes the student (inscriptions cascade) and returns the pre-delete view.
pub async fn delete_student<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    student_id: i64,
) -> Result<Student, DomainError> {
    let student = require_student(conn, student_id).await?;
    students_adapter::delete_student(conn, student_id).await?;
    Ok(student)
}

pub async fn list_courses<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Course>, DomainError> {
    let rows = students_adapter::list_courses_with_students(conn).await?;
    Ok(rows.into_iter().map(Course::from).collect())
}

pub async fn require_course<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    course_id: i64,
) -> Result<Course, DomainError> {
    let model = students_adapter::find_course_by_id(conn, course_id)
        .await?
        .ok_or_else(|| DomainError::missing(NotFoundKind::Course, course_id))?;
    let students = students_adapter::students_of(conn, &model).await?;
    Ok(Course::from((model, students)))
}

pub async fn create_course<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<Course, DomainError> {
    let model = students_adapter::create_course(
        conn,
        students_adapter::CourseCreate {
            name: name.to_string(),
        },
    )
    .await?;
    Ok(Course::from((model, Vec::new())))
}

pub async fn delete_course<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    course_id: i64,
) -> Result<Course, DomainError> {
    let course = require_course(conn, course_id).await?;
    students_adapter::delete_course(conn, course_id).await?;
    Ok(course)
}

/// Enrols a student in a course. Enrolling twice is a no-op; the returned
/// student view is the same either way.
pub async fn enrol<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    student_id: i64,
    course_id: i64,
) -> Result<Student, DomainError> {
    if students_adapter::find_student_by_id(conn, student_id)
        .await?
        .is_none()
    {
        return Err(DomainError::missing(NotFoundKind::Student, student_id));
    }
    if students_adapter::find_course_by_id(conn, course_id)
        .await?
        .is_none()
    {
        return Err(DomainError::missing(NotFoundKind::Course, course_id));
    }

    let inserted = students_adapter::enrol(
        conn,
        students_adapter::Enrolment {
            student_id,
            course_id,
        },
    )
    .await?;
    tracing::debug!(student_id, course_id, inserted, "students.enrol");

    require_student(conn, student_id).await
}

/// Number of join rows for the pair; 0 or 1.
pub async fn enrolment_count<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    student_id: i64,
    course_id: i64,
) -> Result<u64, DomainError> {
    Ok(students_adapter::count_enrolments(conn, student_id, course_id).await?)
}

impl From<(students_entity::Model, Vec<courses_entity::Model>)> for Student {
    fn from((student, courses): (students_entity::Model, Vec<courses_entity::Model>)) -> Self {
        Self {
            id: student.id,
            name: student.name,
            courses: courses.into_iter().map(|c| c.name).collect(),
        }
    }
}

impl From<(courses_entity::Model, Vec<students_entity::Model>)> for Course {
    fn from((course, students): (courses_entity::Model, Vec<students_entity::Model>)) -> Self {
        Self {
            id: course.id,
            name: course.name,
            students: students.into_iter().map(|s| s.name).collect(),
        }
    }
}
