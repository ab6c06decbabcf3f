//! DTOs for students_sea adapter.

#[derive(Debug, Clone)]
pub struct StudentCreate {
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct CourseCreate {
    pub name: String,
}

#[derive(Debug, Clone, Copy)]
pub struct Enrolment {
    pub student_id: i64,
    pub course_id: i64,
}
