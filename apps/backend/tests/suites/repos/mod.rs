pub mod batching;
pub mod delete_policy;
pub mod views;
