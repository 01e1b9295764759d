//! Data/access layer: small functions wrapping direct SQL statements.
//!
//! No ORM; every query is a plain statement against the pool. Handlers own
//! validation and status codes, this layer owns the SQL.

pub mod analytics;
pub mod content;
pub mod pool;
pub mod rate_limit;
pub mod reviews;
pub mod settings;
pub mod users;

pub use pool::{create_lazy_pool, create_pool};
