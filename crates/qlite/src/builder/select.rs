//! SELECT statement builder and rendering.

use crate::builder::clause::ClauseGroup;
use crate::error::{QueryError, QueryResult};
use crate::value::Value;
use std::fmt;

/// Statement kind configured on a builder.
///
/// Only SELECT is modeled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Statement {
    Select,
}

/// Sort direction for `ORDER BY`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    fn as_str(self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fluent SELECT statement builder.
///
/// Every mutator consumes and returns the builder, so clauses chain in any
/// caller-chosen order. [`to_sql`](SelectQuery::to_sql) walks the draft in a
/// fixed section order (SELECT, FROM, WHERE, GROUP BY, HAVING, ORDER BY,
/// LIMIT); [`values`](SelectQuery::values) returns the bound values recorded
/// for accepted WHERE/HAVING conditions, in acceptance order.
///
/// # Example
/// ```
/// use qlite::{select, Value};
///
/// let query = select(&["id", "name"])
///     .from("users")
///     .and_where("status = ?", "active")
///     .limit(10);
///
/// assert_eq!(
///     query.to_sql().unwrap(),
///     "SELECT id, name FROM users WHERE status = ? LIMIT 10"
/// );
/// assert_eq!(query.values(), &[Value::Text("active".to_string())]);
/// ```
#[derive(Clone, Debug)]
#[must_use]
pub struct SelectQuery {
    statement: Option<Statement>,
    distinct: bool,
    columns: Vec<String>,
    table: Option<String>,
    where_group: ClauseGroup,
    having_group: ClauseGroup,
    group_by: Vec<String>,
    order_by: Option<(String, Direction)>,
    limit: Option<i64>,
    values: Vec<Value>,
}

impl SelectQuery {
    /// Create an empty, unconfigured query draft.
    pub fn new() -> Self {
        Self {
            statement: None,
            distinct: false,
            columns: vec!["*".to_string()],
            table: None,
            where_group: ClauseGroup::new("WHERE"),
            having_group: ClauseGroup::new("HAVING"),
            group_by: Vec::new(),
            order_by: None,
            limit: None,
            values: Vec::new(),
        }
    }

    // ==================== SELECT columns ====================

    /// Configure a SELECT statement with the given columns.
    ///
    /// An empty slice selects `*`. Calling this again fully replaces the
    /// column list; the distinct flag is independent and untouched.
    pub fn select(mut self, columns: &[&str]) -> Self {
        self.statement = Some(Statement::Select);
        if columns.is_empty() {
            self.columns = vec!["*".to_string()];
        } else {
            self.columns = columns.iter().map(|c| c.to_string()).collect();
        }
        self
    }

    /// Set the DISTINCT flag. Idempotent.
    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    /// Set the FROM table, stored verbatim. Overwrites on repeat.
    pub fn from(mut self, table: &str) -> Self {
        self.table = Some(table.to_string());
        self
    }

    // ==================== WHERE ====================

    /// Add a WHERE condition with its bound value.
    ///
    /// The first accepted condition opens the section with `WHERE`; later
    /// ones are joined with `AND`. The value is always recorded.
    pub fn and_where(mut self, condition: &str, value: impl Into<Value>) -> Self {
        self.where_group.and(condition);
        self.values.push(value.into());
        self
    }

    /// Add an OR condition to an already-open WHERE section.
    ///
    /// When no prior WHERE term exists this is a no-op: nothing is pushed
    /// and the value is not recorded.
    pub fn or_where(mut self, condition: &str, value: impl Into<Value>) -> Self {
        if self.where_group.or(condition) {
            self.values.push(value.into());
        }
        self
    }

    // ==================== GROUP BY / HAVING ====================

    /// Append GROUP BY columns, concatenating across calls.
    ///
    /// Fragments are stored verbatim; a comma-containing string stays one
    /// element and is not split.
    pub fn group_by(mut self, columns: &[&str]) -> Self {
        self.group_by.extend(columns.iter().map(|c| c.to_string()));
        self
    }

    /// Add a HAVING condition with its bound value.
    ///
    /// Same accept/AND policy as [`and_where`](SelectQuery::and_where),
    /// scoped to the HAVING section.
    pub fn having(mut self, condition: &str, value: impl Into<Value>) -> Self {
        self.having_group.and(condition);
        self.values.push(value.into());
        self
    }

    /// Add an OR condition to an already-open HAVING section.
    ///
    /// Same no-op policy as [`or_where`](SelectQuery::or_where).
    pub fn or_having(mut self, condition: &str, value: impl Into<Value>) -> Self {
        if self.having_group.or(condition) {
            self.values.push(value.into());
        }
        self
    }

    // ==================== Ordering & limiting ====================

    /// Set ORDER BY column and direction. First call wins; later calls are
    /// ignored without error.
    pub fn order_by(mut self, column: &str, direction: Direction) -> Self {
        if self.order_by.is_none() {
            self.order_by = Some((column.to_string(), direction));
        }
        self
    }

    /// Set LIMIT, overwriting any previous value.
    ///
    /// No range validation: negative values are stored and rendered as-is.
    pub fn limit(mut self, n: i64) -> Self {
        self.limit = Some(n);
        self
    }

    // ==================== Rendering ====================

    /// Render the final SQL string.
    ///
    /// Sections are emitted in fixed order and space-joined; multi-item
    /// lists are joined with `", "`. Placeholders inside condition strings
    /// pass through verbatim.
    ///
    /// Returns [`QueryError::MissingStatement`] when no statement was ever
    /// configured, rather than emitting SQL with a blank leading token.
    pub fn to_sql(&self) -> QueryResult<String> {
        let statement = self.statement.ok_or(QueryError::MissingStatement)?;

        let mut sql = String::new();
        match statement {
            Statement::Select => {
                sql.push_str("SELECT");
                if self.distinct {
                    sql.push_str(" DISTINCT");
                }
                sql.push(' ');
                sql.push_str(&self.columns.join(", "));
            }
        }

        if let Some(ref table) = self.table {
            sql.push_str(" FROM ");
            sql.push_str(table);
        }

        if !self.where_group.is_empty() {
            self.where_group.render_into(&mut sql);
        }

        if !self.group_by.is_empty() {
            sql.push_str(" GROUP BY ");
            sql.push_str(&self.group_by.join(", "));
        }

        if !self.having_group.is_empty() {
            self.having_group.render_into(&mut sql);
        }

        if let Some((ref column, direction)) = self.order_by {
            sql.push_str(" ORDER BY ");
            sql.push_str(column);
            sql.push(' ');
            sql.push_str(direction.as_str());
        }

        if let Some(limit) = self.limit {
            sql.push_str(&format!(" LIMIT {}", limit));
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(sql = %sql, values = self.values.len(), "rendered select query");

        Ok(sql)
    }

    /// Bound values for accepted WHERE/HAVING conditions, in append order.
    ///
    /// Rejected no-op OR calls contribute nothing.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Render and pair the SQL string with its bound values.
    pub fn build(self) -> QueryResult<BuiltQuery> {
        let sql = self.to_sql()?;
        Ok(BuiltQuery {
            sql,
            values: self.values,
        })
    }
}

impl Default for SelectQuery {
    fn default() -> Self {
        Self::new()
    }
}

/// Rendered query holding the SQL text and its bound values.
#[derive(Clone, Debug, PartialEq)]
pub struct BuiltQuery {
    sql: String,
    values: Vec<Value>,
}

impl BuiltQuery {
    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn into_parts(self) -> (String, Vec<Value>) {
        (self.sql, self.values)
    }
}
