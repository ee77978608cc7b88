//! WHERE-clause assembly with positional arguments.
//!
//! A [`Predicate`] carries its SQL fragments together with the values for
//! their `?` placeholders, so clause text and argument order are always
//! produced by the same step and cannot drift apart.

use crate::domain::ListRacesFilter;

/// A single positional query argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlArg {
    /// Integer value.
    Integer(i64),
    /// Boolean value (stored as `0`/`1` by SQLite).
    Boolean(bool),
}

impl From<i64> for SqlArg {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for SqlArg {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

/// Conjunction of SQL clause fragments and their ordered arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Predicate {
    fragments: Vec<String>,
    args: Vec<SqlArg>,
}

impl Predicate {
    /// A predicate that restricts nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// `column IN (?, ..., ?)` with one placeholder per value.
    ///
    /// An empty `values` slice yields an empty predicate rather than an
    /// always-false one. `column` must be a trusted identifier; it is
    /// spliced into the SQL text verbatim.
    #[must_use]
    pub fn membership<T>(column: &'static str, values: &[T]) -> Self
    where
        T: Copy + Into<SqlArg>,
    {
        if values.is_empty() {
            return Self::empty();
        }
        let placeholders = vec!["?"; values.len()].join(",");
        Self {
            fragments: vec![format!("{column} IN ({placeholders})")],
            args: values.iter().map(|v| (*v).into()).collect(),
        }
    }

    /// Combines two predicates with `AND`, keeping `self`'s arguments first.
    #[must_use]
    pub fn and(mut self, other: Self) -> Self {
        self.fragments.extend(other.fragments);
        self.args.extend(other.args);
        self
    }

    /// Returns `true` when the predicate restricts nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Positional arguments in placeholder order.
    #[must_use]
    pub fn args(&self) -> &[SqlArg] {
        &self.args
    }

    /// The clause body without the `WHERE` keyword, if any.
    #[must_use]
    pub fn clause(&self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self.fragments.join(" AND "))
        }
    }

    /// Appends the predicate to `base` and returns the final SQL with its
    /// arguments. An empty predicate returns `base` unchanged.
    #[must_use]
    pub fn into_query(self, base: &str) -> (String, Vec<SqlArg>) {
        match self.clause() {
            Some(clause) => (format!("{} WHERE {clause}", base.trim_end()), self.args),
            None => (base.to_string(), self.args),
        }
    }
}

/// Compiles a race listing filter into a predicate.
///
/// Meeting ids come first (in caller order), then visibility flags.
#[must_use]
pub fn compile_race_filter(filter: Option<&ListRacesFilter>) -> Predicate {
    let Some(filter) = filter else {
        return Predicate::empty();
    };
    Predicate::membership("meeting_id", &filter.meeting_ids)
        .and(Predicate::membership("visible", &filter.visible))
}
