//! Row models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A create DTO built from a complete, validated field set
//! - An update DTO (one `Option` per updatable field) built from a partial one

pub mod activity_group;
pub mod todo_item;
