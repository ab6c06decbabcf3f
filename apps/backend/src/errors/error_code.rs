//! Error codes for the holonet API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Path id is not a positive integer
    InvalidId,
    /// Semantic validation of a well-formed body failed
    ValidationError,
    /// Body could not be read or parsed
    BadRequest,

    // Resource Not Found
    UserNotFound,
    PeopleNotFound,
    PlanetNotFound,
    MemberNotFound,
    StoreNotFound,
    ProductNotFound,
    CustomerNotFound,
    OrderNotFound,
    StudentNotFound,
    CourseNotFound,
    /// Generic fallback for not-found without a specific entity
    NotFound,

    // Conflicts
    /// Email already registered
    UniqueEmail,
    /// Member already has a profile
    UniqueProfile,
    /// Row is still referenced (restricted delete) or references a missing row
    FkViolation,
    /// Generic conflict fallback
    Conflict,

    // System Errors
    DbError,
    DbUnavailable,
    DbTimeout,
    Internal,
    ConfigError,
}

impl ErrorCode {
    /// The exact string that appears in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidId => "INVALID_ID",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",

            Self::UserNotFound => "USER_NOT_FOUND",
            Self::PeopleNotFound => "PEOPLE_NOT_FOUND",
            Self::PlanetNotFound => "PLANET_NOT_FOUND",
            Self::MemberNotFound => "MEMBER_NOT_FOUND",
            Self::StoreNotFound => "STORE_NOT_FOUND",
            Self::ProductNotFound => "PRODUCT_NOT_FOUND",
            Self::CustomerNotFound => "CUSTOMER_NOT_FOUND",
            Self::OrderNotFound => "ORDER_NOT_FOUND",
            Self::StudentNotFound => "STUDENT_NOT_FOUND",
            Self::CourseNotFound => "COURSE_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::UniqueEmail => "UNIQUE_EMAIL",
            Self::UniqueProfile => "UNIQUE_PROFILE",
            Self::FkViolation => "FK_VIOLATION",
            Self::Conflict => "CONFLICT",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
