//! Query builder and in-memory executor.
//!
//! [`Query`] is the composition surface: it accumulates predicate trees
//! (unconditionally or gated on a flag), an optional single-field ordering,
//! and executes against slices. Each operator call is pure — it returns a
//! new description and touches no source data until execution.

use std::fmt;

use crate::error::{Result, RiffleError};
use crate::field::TextField;
use crate::order::{Dir, OrderBy};
use crate::predicate::Predicate;
use crate::search;
use crate::traits::Queryable;

/// A query over records of type `T`: zero or more predicates combined with
/// AND, plus an optional ordering.
///
/// An empty query matches every record and preserves source order.
///
/// # Example
///
/// ```
/// use riffle::{Dir, Query, Queryable, TextField, Value};
///
/// struct Fruit {
///     name: String,
///     description: String,
/// }
///
/// impl Queryable for Fruit {
///     fn field_value(&self, field: &str) -> Value<'_> {
///         match field {
///             "name" => Value::Text(&self.name),
///             "description" => Value::Text(&self.description),
///             _ => Value::Null,
///         }
///     }
///
///     fn field_names() -> &'static [&'static str] {
///         &["name", "description"]
///     }
/// }
///
/// const NAME: TextField<Fruit> = TextField::direct("name", |f| Some(&f.name));
///
/// let fruits = vec![
///     Fruit { name: "Apple".into(), description: "Red fruit".into() },
///     Fruit { name: "Green Apple".into(), description: "Sour fruit".into() },
/// ];
///
/// let query = Query::new()
///     .search("green apple", &[NAME])?
///     .order_by("name", Dir::Asc)?;
///
/// let results = query.filter(&fruits);
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0].name, "Green Apple");
/// # Ok::<(), riffle::RiffleError>(())
/// ```
pub struct Query<T> {
    predicates: Vec<Predicate<T>>,
    ordering: Option<OrderBy>,
}

impl<T: Queryable> Query<T> {
    /// Creates a new empty query. An empty query matches every record.
    pub fn new() -> Self {
        Query::default()
    }

    // ========================================================================
    // Builders
    // ========================================================================

    /// Adds a predicate that every returned record must satisfy.
    pub fn predicate(mut self, predicate: Predicate<T>) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Adds `predicate` only when `condition` is true; otherwise the query
    /// is returned unchanged.
    pub fn predicate_if(self, predicate: Predicate<T>, condition: bool) -> Self {
        if condition {
            self.predicate(predicate)
        } else {
            self
        }
    }

    /// Adds the multi-field token search filter for `phrase` over `fields`.
    ///
    /// A blank phrase or empty field set leaves the query unchanged (the
    /// source passes through). A computed selector fails here, at
    /// composition time, with [`RiffleError::ComputedField`].
    pub fn search(self, phrase: &str, fields: &[TextField<T>]) -> Result<Self> {
        match search::predicate(phrase, fields)? {
            Some(predicate) => Ok(self.predicate(predicate)),
            None => Ok(self),
        }
    }

    /// Orders results by the named field.
    ///
    /// The name is validated against [`Queryable::field_names`] now; an
    /// unknown name fails immediately with [`RiffleError::UnknownField`],
    /// never at iteration time. A second call replaces the previous key —
    /// only a single flat field is supported.
    ///
    /// Stability is whatever the executing engine provides. The in-memory
    /// executor in [`filter`](Query::filter) uses Rust's stable sort, but
    /// the operator itself makes no stronger promise.
    pub fn order_by(mut self, field: &str, dir: Dir) -> Result<Self> {
        if !T::field_names().contains(&field) {
            return Err(RiffleError::UnknownField {
                field: field.to_string(),
            });
        }
        self.ordering = Some(OrderBy::new(field, dir));
        Ok(self)
    }

    /// Orders results ascending by the named field.
    pub fn order_asc(self, field: &str) -> Result<Self> {
        self.order_by(field, Dir::Asc)
    }

    /// Orders results descending by the named field.
    pub fn order_desc(self, field: &str) -> Result<Self> {
        self.order_by(field, Dir::Desc)
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// Returns the accumulated predicates.
    pub fn predicates(&self) -> &[Predicate<T>] {
        &self.predicates
    }

    /// Returns the ordering, if set.
    pub fn ordering(&self) -> Option<&OrderBy> {
        self.ordering.as_ref()
    }

    /// Returns `true` if this query has no predicates and no ordering.
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty() && self.ordering.is_none()
    }

    // ========================================================================
    // Execution
    // ========================================================================

    /// Tests whether a single record satisfies every predicate.
    pub fn matches(&self, record: &T) -> bool {
        self.predicates.iter().all(|p| p.matches(record))
    }

    /// Filters a slice, returning references to matching records in source
    /// order, sorted if an ordering is set.
    pub fn filter<'a>(&self, records: &'a [T]) -> Vec<&'a T> {
        let mut results: Vec<&'a T> = records
            .iter()
            .filter(|record| self.matches(record))
            .collect();

        if let Some(order) = &self.ordering {
            results.sort_by(|a, b| order.compare(*a, *b));
        }

        results
    }

    /// Filters and clones matching records.
    pub fn filter_cloned(&self, records: &[T]) -> Vec<T>
    where
        T: Clone,
    {
        self.filter(records).into_iter().cloned().collect()
    }

    /// Counts the matching records.
    pub fn count(&self, records: &[T]) -> usize {
        records.iter().filter(|record| self.matches(record)).count()
    }
}

impl<T> Default for Query<T> {
    fn default() -> Self {
        Query {
            predicates: Vec::new(),
            ordering: None,
        }
    }
}

impl<T> Clone for Query<T> {
    fn clone(&self) -> Self {
        Query {
            predicates: self.predicates.clone(),
            ordering: self.ordering.clone(),
        }
    }
}

impl<T> fmt::Debug for Query<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Query")
            .field("predicates", &self.predicates)
            .field("ordering", &self.ordering)
            .finish()
    }
}
