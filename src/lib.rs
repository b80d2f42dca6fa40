//! game-common: building blocks shared by the game and its tools.
//!
//! - `collections::LinkedList`: a doubly-linked list with detached cursors
//!   and O(1) splicing
//! - `json`: structured-document reading/writing and the
//!   `JsonSerializable` capability
//! - `resource::Folder`: directory-scoped file access
//! - `settings`: environment-driven runtime settings
pub mod collections;
pub mod json;
pub mod resource;
pub mod settings;

pub use collections::{ConstCursor, Cursor, LinkedList};
pub use json::{Json, JsonError, JsonSerializable};
pub use resource::Folder;
