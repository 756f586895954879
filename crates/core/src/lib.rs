//! Domain logic for the todolist service.
//!
//! Nothing in this crate touches the database or HTTP. The API layer hands
//! raw JSON objects to [`fields::FieldSet`], which validates them against the
//! per-resource field tables in [`resource`] using the rules in
//! [`validation`].

pub mod error;
pub mod fields;
pub mod resource;
pub mod types;
pub mod validation;
