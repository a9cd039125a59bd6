//! The [`Queryable`] trait for by-name field access.
//!
//! Implemented by hand or via `#[derive(Queryable)]` from the
//! `riffle-macros` crate.

use crate::value::Value;

/// Trait for record types whose fields can be looked up by name.
///
/// Dynamic operators — ordering by a runtime field name in particular — go
/// through this trait. [`field_names`](Queryable::field_names) is the static
/// registry consulted when an operator needs to fail fast on an unknown
/// name, before any iteration happens.
///
/// # Derive Usage
///
/// ```ignore
/// use riffle_macros::Queryable;
///
/// #[derive(Queryable)]
/// struct Task {
///     #[query(text)]
///     name: String,
///     #[query(int)]
///     priority: u8,
///     #[query(bool)]
///     done: bool,
/// }
///
/// let query = riffle::Query::new().order_desc(Task::PRIORITY)?;
/// ```
///
/// # Manual Implementation
///
/// ```
/// use riffle::{Queryable, Value};
///
/// struct Task {
///     name: String,
///     priority: u8,
/// }
///
/// impl Queryable for Task {
///     fn field_value(&self, field: &str) -> Value<'_> {
///         match field {
///             "name" => Value::Text(&self.name),
///             "priority" => Value::Int(self.priority as i64),
///             _ => Value::Null,
///         }
///     }
///
///     fn field_names() -> &'static [&'static str] {
///         &["name", "priority"]
///     }
/// }
/// ```
pub trait Queryable {
    /// Returns the value of a field for comparison.
    ///
    /// Returns [`Value::Null`] if the field does not exist or is not
    /// queryable.
    fn field_value(&self, field: &str) -> Value<'_>;

    /// Returns the names of every queryable field.
    ///
    /// Operators that resolve a runtime name check it against this registry
    /// and fail at call time when it is absent.
    fn field_names() -> &'static [&'static str]
    where
        Self: Sized;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestItem {
        name: String,
        count: i32,
    }

    impl Queryable for TestItem {
        fn field_value(&self, field: &str) -> Value<'_> {
            match field {
                "name" => Value::Text(&self.name),
                "count" => Value::Int(self.count as i64),
                _ => Value::Null,
            }
        }

        fn field_names() -> &'static [&'static str] {
            &["name", "count"]
        }
    }

    #[test]
    fn manual_impl() {
        let item = TestItem {
            name: "test".to_string(),
            count: 42,
        };

        assert_eq!(item.field_value("name"), Value::Text("test"));
        assert_eq!(item.field_value("count"), Value::Int(42));
        assert_eq!(item.field_value("unknown"), Value::Null);
        assert_eq!(TestItem::field_names(), &["name", "count"]);
    }
}
