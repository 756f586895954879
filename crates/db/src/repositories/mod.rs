//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod activity_group_repo;
pub mod todo_item_repo;

pub use activity_group_repo::ActivityGroupRepo;
pub use todo_item_repo::TodoItemRepo;
