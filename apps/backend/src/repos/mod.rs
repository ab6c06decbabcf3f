//! Repository functions for the domain layer (generic over ConnectionTrait).
//!
//! Each repo owns the serialized view of its entity group; handlers return
//! these structs as JSON unchanged.

pub mod customers;
pub mod favorites;
pub mod members;
pub mod people;
pub mod planets;
pub mod stores;
pub mod students;
pub mod users;
