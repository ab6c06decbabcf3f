pub mod customers;
pub mod members;
pub mod people;
pub mod planets;
pub mod stores;
pub mod students;
pub mod users;
