//! Fluent SELECT query builder.
//!
//! The builder accumulates clause fragments through chained calls and
//! renders them into one SQL string, collecting the values bound to
//! placeholder conditions in a parallel list.
//!
//! # Usage
//!
//! ```
//! use qlite::{select_all, Direction, Value};
//!
//! let query = select_all()
//!     .from("users")
//!     .and_where("id = ?", "1")
//!     .order_by("name", Direction::Asc)
//!     .limit(10);
//!
//! assert_eq!(
//!     query.to_sql().unwrap(),
//!     "SELECT * FROM users WHERE id = ? ORDER BY name ASC LIMIT 10"
//! );
//! assert_eq!(query.values(), &[Value::Text("1".to_string())]);
//! ```

mod clause;
mod select;


pub use select::{BuiltQuery, Direction, SelectQuery, Statement};

/// Create an empty, unconfigured query draft.
///
/// Rendering fails with [`MissingStatement`](crate::QueryError::MissingStatement)
/// until [`select`](SelectQuery::select) is called on it.
pub fn query() -> SelectQuery {
    SelectQuery::new()
}

/// Create a SELECT builder for the given columns.
///
/// An empty slice selects `*`.
///
/// # Example
/// ```
/// let query = qlite::select(&["id", "name"]).from("users");
/// assert_eq!(query.to_sql().unwrap(), "SELECT id, name FROM users");
/// ```
pub fn select(columns: &[&str]) -> SelectQuery {
    SelectQuery::new().select(columns)
}

/// Create a `SELECT *` builder.
///
/// # Example
/// ```
/// let query = qlite::select_all().from("users");
/// assert_eq!(query.to_sql().unwrap(), "SELECT * FROM users");
/// ```
pub fn select_all() -> SelectQuery {
    SelectQuery::new().select(&[])
}
