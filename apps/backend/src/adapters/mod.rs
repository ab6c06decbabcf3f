//! SeaORM adapters. Functions here return `DbErr`; the repos layer maps
//! them to `DomainError`.

pub mod customers_sea;
pub mod favorites_sea;
pub mod members_sea;
pub mod people_sea;
pub mod planets_sea;
pub mod stores_sea;
pub mod students_sea;
pub mod users_sea;

/// Upper bound on ids bound into one `IN (...)` filter. SQLite caps bind
/// parameters per statement (32766) and Postgres at 65535.
pub const IN_LIST_CHUNK: usize = 1000;
