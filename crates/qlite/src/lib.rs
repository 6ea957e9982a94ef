//! # qlite
//!
//! A lightweight fluent builder for SQL SELECT statements.
//!
//! ## Features
//!
//! - **Chainable**: every mutator consumes and returns the builder
//! - **Values tracked separately**: bound values travel as a parallel list
//!   next to the `?` placeholders in condition strings; nothing is ever
//!   interpolated into the SQL text
//! - **Total operations**: no mutator fails; degenerate calls (OR with no
//!   prior condition, repeated ORDER BY) are documented no-ops
//! - **Explicit render errors**: rendering before `select()` returns
//!   [`QueryError::MissingStatement`] instead of emitting malformed SQL
//!
//! The builder only produces a query string and a value list; it does not
//! validate SQL, escape identifiers, or talk to a database.
//!
//! ## Example
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

pub mod builder;
pub mod error;
pub mod value;

pub use builder::{BuiltQuery, Direction, SelectQuery, Statement, query, select, select_all};
pub use error::{QueryError, QueryResult};
pub use value::Value;
