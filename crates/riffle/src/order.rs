//! Ordering types for dynamic, by-name sorting.
//!
//! Provides [`Dir`] for sort direction and [`OrderBy`] for a single-field
//! ordering resolved by name at call time. Composite keys and nested paths
//! are not supported.

use std::cmp::Ordering;

use crate::traits::Queryable;
use crate::value::compare_values;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dir {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl Dir {
    /// Returns `true` if this is ascending order.
    pub fn is_asc(self) -> bool {
        matches!(self, Dir::Asc)
    }

    /// Returns `true` if this is descending order.
    pub fn is_desc(self) -> bool {
        matches!(self, Dir::Desc)
    }

    /// Applies this direction to an ordering: `Asc` leaves it unchanged,
    /// `Desc` reverses it.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    /// Returns the display name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl std::fmt::Display for Dir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single-field ordering: a field name and a direction.
///
/// The name is resolved through [`Queryable::field_value`] per record;
/// validation against the field registry happens in
/// [`Query::order_by`](crate::Query::order_by) before an `OrderBy` is ever
/// constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    /// The field to sort by.
    pub field: String,
    /// The sort direction.
    pub dir: Dir,
}

impl OrderBy {
    /// Creates a new ordering with the given direction.
    pub fn new(field: impl Into<String>, dir: Dir) -> Self {
        OrderBy {
            field: field.into(),
            dir,
        }
    }

    /// Creates an ascending ordering for the given field.
    pub fn asc(field: impl Into<String>) -> Self {
        OrderBy::new(field, Dir::Asc)
    }

    /// Creates a descending ordering for the given field.
    pub fn desc(field: impl Into<String>) -> Self {
        OrderBy::new(field, Dir::Desc)
    }

    /// Compares two records by this ordering's field.
    ///
    /// Records whose values cannot be compared (variant mismatch) are
    /// treated as equal, which keeps their source order under a stable sort.
    pub fn compare<T: Queryable>(&self, a: &T, b: &T) -> Ordering {
        let value_a = a.field_value(&self.field);
        let value_b = b.field_value(&self.field);

        match compare_values(&value_a, &value_b) {
            Some(ordering) => self.dir.apply(ordering),
            None => Ordering::Equal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    struct Item {
        name: String,
        rank: i64,
    }

    impl Queryable for Item {
        fn field_value(&self, field: &str) -> Value<'_> {
            match field {
                "name" => Value::Text(&self.name),
                "rank" => Value::Int(self.rank),
                _ => Value::Null,
            }
        }

        fn field_names() -> &'static [&'static str] {
            &["name", "rank"]
        }
    }

    fn item(name: &str, rank: i64) -> Item {
        Item {
            name: name.to_string(),
            rank,
        }
    }

    #[test]
    fn dir_apply() {
        assert_eq!(Dir::Asc.apply(Ordering::Less), Ordering::Less);
        assert_eq!(Dir::Desc.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(Dir::Desc.apply(Ordering::Equal), Ordering::Equal);
    }

    #[test]
    fn dir_display() {
        assert_eq!(Dir::Asc.to_string(), "asc");
        assert_eq!(Dir::Desc.to_string(), "desc");
        assert_eq!(Dir::default(), Dir::Asc);
    }

    #[test]
    fn constructors() {
        let asc = OrderBy::asc("name");
        assert_eq!(asc.field, "name");
        assert_eq!(asc.dir, Dir::Asc);

        let desc = OrderBy::desc("rank");
        assert_eq!(desc.field, "rank");
        assert_eq!(desc.dir, Dir::Desc);
    }

    #[test]
    fn compare_text_field() {
        let order = OrderBy::asc("name");

        assert_eq!(
            order.compare(&item("apple", 1), &item("banana", 2)),
            Ordering::Less
        );
        assert_eq!(
            OrderBy::desc("name").compare(&item("apple", 1), &item("banana", 2)),
            Ordering::Greater
        );
    }

    #[test]
    fn compare_int_field() {
        let order = OrderBy::asc("rank");

        assert_eq!(order.compare(&item("a", 1), &item("b", 2)), Ordering::Less);
        assert_eq!(order.compare(&item("a", 2), &item("b", 2)), Ordering::Equal);
    }

    #[test]
    fn unknown_field_compares_equal() {
        // Both values resolve to Null; stable sorts keep source order.
        let order = OrderBy::asc("missing");
        assert_eq!(order.compare(&item("a", 1), &item("b", 2)), Ordering::Equal);
    }
}
