//! Database abstraction layer.
//!
//! This module provides trait-based abstractions for todo storage,
//! allowing the storage backend to be swapped without changing the
//! tool layer.
//!
//! # Architecture
//!
//! - `error`: Storage-agnostic error types
//! - `models`: Domain entities (Todo)
//! - `repository`: Trait definitions for data access
//! - `validation`: Input normalization applied before any write
//! - `sqlite`: SQLx-backed implementation

mod error;
mod models;
mod repository;
pub mod sqlite;
mod validation;


pub use error::{DbError, DbResult};
pub use models::*;
pub use repository::*;
pub use sqlite::SqliteDatabase;
pub use validation::{MAX_TITLE_LEN, validate_title};
