//! Query specifications for widget requests.
//!
//! Builders accept either a bare query string or a structured formula spec.
//! That polymorphism is decided exactly once, at the boundary, by
//! [`QuerySpec`]: a two-variant sum type the builders consume without ever
//! re-inspecting the input's shape.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::defaults;
use crate::error::{DashboardError, Result};

/// Aggregation functions accepted by the wire schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Aggregator {
    /// Average of all points.
    Avg,
    /// Sum of all points.
    Sum,
    /// Minimum value.
    Min,
    /// Maximum value.
    Max,
    /// Last (most recent) value.
    Last,
}

impl Aggregator {
    /// Returns the wire-schema string for this aggregator.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Avg => "avg",
            Self::Sum => "sum",
            Self::Min => "min",
            Self::Max => "max",
            Self::Last => "last",
        }
    }
}

impl Default for Aggregator {
    fn default() -> Self {
        defaults::AGGREGATOR
    }
}

/// A named query inside a formula spec.
///
/// The name is the identifier formulas reference (e.g. `errors` in
/// `(errors / requests) * 100`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedQuery {
    /// Identifier the formulas reference.
    pub name: String,
    /// The metric query string.
    pub query: String,
}

impl NamedQuery {
    /// Creates a named query.
    #[must_use]
    pub fn new(name: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            query: query.into(),
        }
    }
}

/// A derived expression over named queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formula {
    /// The expression, referencing query names (e.g. `(a / b) * 100`).
    pub expression: String,
    /// Optional display alias.
    pub alias: Option<String>,
}

impl Formula {
    /// Creates a formula with no alias.
    #[must_use]
    pub fn new(expression: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            alias: None,
        }
    }

    /// Sets the display alias and returns self for chaining.
    #[must_use]
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }
}

/// A widget query input: a bare query string, or named queries plus
/// formulas referencing them.
///
/// The structured variant is only constructible through
/// [`QuerySpec::formula`], which validates the shape up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuerySpec {
    /// A single query string with default aggregation.
    Raw(String),
    /// Named queries combined by formulas.
    Formula {
        /// Ordered named queries.
        queries: Vec<NamedQuery>,
        /// Ordered formulas referencing the query names.
        formulas: Vec<Formula>,
    },
}

impl QuerySpec {
    /// Creates a raw query spec.
    #[must_use]
    pub fn raw(query: impl Into<String>) -> Self {
        Self::Raw(query.into())
    }

    /// Creates a formula query spec.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::InvalidQuery` if either sequence is empty,
    /// a query name or expression is blank, or two queries share a name.
    pub fn formula(queries: Vec<NamedQuery>, formulas: Vec<Formula>) -> Result<Self> {
        if queries.is_empty() {
            return Err(DashboardError::InvalidQuery {
                reason: "formula spec declares no queries".to_string(),
            });
        }
        if formulas.is_empty() {
            return Err(DashboardError::InvalidQuery {
                reason: "formula spec declares no formulas".to_string(),
            });
        }
        let mut seen = std::collections::BTreeSet::new();
        for q in &queries {
            if q.name.is_empty() {
                return Err(DashboardError::InvalidQuery {
                    reason: "query name cannot be empty".to_string(),
                });
            }
            if q.query.is_empty() {
                return Err(DashboardError::InvalidQuery {
                    reason: format!("query '{}' has an empty query string", q.name),
                });
            }
            if !seen.insert(q.name.clone()) {
                return Err(DashboardError::InvalidQuery {
                    reason: format!("duplicate query name '{}'", q.name),
                });
            }
        }
        for f in &formulas {
            if f.expression.is_empty() {
                return Err(DashboardError::InvalidQuery {
                    reason: "formula expression cannot be empty".to_string(),
                });
            }
        }
        Ok(Self::Formula { queries, formulas })
    }

    /// Emits the request object for this spec.
    ///
    /// Raw specs produce a `{"q": ...}` object the builder may extend;
    /// formula specs produce the `formulas`/`queries` pair with the given
    /// response format.
    pub(crate) fn to_request(&self, response_format: &str) -> Map<String, Value> {
        let mut request = Map::new();
        match self {
            Self::Raw(q) => {
                request.insert("q".to_string(), Value::String(q.clone()));
            }
            Self::Formula { queries, formulas } => {
                let formula_values: Vec<Value> = formulas
                    .iter()
                    .map(|f| {
                        let mut obj = Map::new();
                        obj.insert("formula".to_string(), Value::String(f.expression.clone()));
                        if let Some(alias) = &f.alias {
                            obj.insert("alias".to_string(), Value::String(alias.clone()));
                        }
                        Value::Object(obj)
                    })
                    .collect();
                let query_values: Vec<Value> = queries
                    .iter()
                    .map(|q| {
                        json!({
                            "name": q.name,
                            "query": q.query,
                            "data_source": "metrics",
                            "aggregator": defaults::AGGREGATOR.as_str(),
                        })
                    })
                    .collect();
                request.insert("formulas".to_string(), Value::Array(formula_values));
                request.insert("queries".to_string(), Value::Array(query_values));
                request.insert(
                    "response_format".to_string(),
                    Value::String(response_format.to_string()),
                );
            }
        }
        request
    }
}

impl From<&str> for QuerySpec {
    fn from(query: &str) -> Self {
        Self::Raw(query.to_string())
    }
}

impl From<String> for QuerySpec {
    fn from(query: String) -> Self {
        Self::Raw(query)
    }
}

/// One column of a table widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableColumn {
    /// The metric query for this column.
    pub query: String,
    /// Optional column header alias.
    pub alias: Option<String>,
    /// Per-column aggregator override.
    pub aggregator: Option<Aggregator>,
}

impl TableColumn {
    /// Creates a column with defaults.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            alias: None,
            aggregator: None,
        }
    }

    /// Sets the column alias and returns self for chaining.
    #[must_use]
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Sets the aggregator and returns self for chaining.
    #[must_use]
    pub const fn aggregator(mut self, aggregator: Aggregator) -> Self {
        self.aggregator = Some(aggregator);
        self
    }
}

/// Table widget input: one query string or an ordered column list.
///
/// Column order is significant: consumers display columns in this order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableQuery {
    /// A single-column table.
    Single(String),
    /// One column per entry, in display order.
    Columns(Vec<TableColumn>),
}

impl From<&str> for TableQuery {
    fn from(query: &str) -> Self {
        Self::Single(query.to_string())
    }
}

impl From<String> for TableQuery {
    fn from(query: String) -> Self {
        Self::Single(query)
    }
}

impl From<Vec<TableColumn>> for TableQuery {
    fn from(columns: Vec<TableColumn>) -> Self {
        Self::Columns(columns)
    }
}

impl From<Vec<&str>> for TableQuery {
    fn from(queries: Vec<&str>) -> Self {
        Self::Columns(queries.into_iter().map(TableColumn::new).collect())
    }
}

impl From<Vec<String>> for TableQuery {
    fn from(queries: Vec<String>) -> Self {
        Self::Columns(queries.into_iter().map(TableColumn::new).collect())
    }
}

/// Funnel widget input: one query string or an ordered step list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FunnelQuery {
    /// A single-step funnel.
    Single(String),
    /// One step per entry, in sequence order.
    Steps(Vec<String>),
}

impl FunnelQuery {
    /// Returns the steps in sequence order.
    #[must_use]
    pub fn steps(&self) -> Vec<String> {
        match self {
            Self::Single(q) => vec![q.clone()],
            Self::Steps(steps) => steps.clone(),
        }
    }
}

impl From<&str> for FunnelQuery {
    fn from(query: &str) -> Self {
        Self::Single(query.to_string())
    }
}

impl From<String> for FunnelQuery {
    fn from(query: String) -> Self {
        Self::Single(query)
    }
}

impl From<Vec<&str>> for FunnelQuery {
    fn from(steps: Vec<&str>) -> Self {
        Self::Steps(steps.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<String>> for FunnelQuery {
    fn from(steps: Vec<String>) -> Self {
        Self::Steps(steps)
    }
}
