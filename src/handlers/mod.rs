pub mod create;
pub mod delete;
pub mod get;
pub mod health;
pub mod list;
pub mod update;

pub use create::{create_handler, create_item};
pub use delete::{delete_handler, delete_item};
pub use get::{get_handler, get_item};
pub use health::health_handler;
pub use list::{list_handler, list_items};
pub use update::{update_handler, update_item};
