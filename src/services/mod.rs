pub mod inference;
pub mod models;
