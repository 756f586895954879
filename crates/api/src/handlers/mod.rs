pub mod activity_group;
pub mod todo_item;
