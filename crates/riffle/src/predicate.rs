//! Boolean predicate trees over records.
//!
//! A [`Predicate`] is a tagged expression tree built by the search module
//! (or by hand) and evaluated either in process via
//! [`matches`](Predicate::matches) or by an external engine translating the
//! tree into its own representation. The variants are public for exactly
//! that reason: a translation layer can walk the tree without evaluating it.

use std::fmt;

use crate::field::TextField;

/// A boolean expression tree over records of type `T`.
///
/// Nothing is evaluated at construction time; the tree is a description.
///
/// # Example
///
/// ```
/// use riffle::{Predicate, TextField};
///
/// struct Note {
///     body: String,
/// }
///
/// const BODY: TextField<Note> = TextField::direct("body", |n| Some(&n.body));
///
/// let pred = Predicate::all(vec![
///     Predicate::contains(BODY, "milk"),
///     Predicate::contains(BODY, "bread"),
/// ]);
///
/// let note = Note { body: "Buy Bread and milk".to_string() };
/// assert!(pred.matches(&note));
/// ```
pub enum Predicate<T> {
    /// The field's value contains the token, case-insensitively. The token
    /// is stored lower-cased; a null field never matches.
    Contains {
        /// The field to test.
        field: TextField<T>,
        /// The lower-cased token to look for.
        token: String,
    },
    /// Every sub-predicate holds. An empty conjunction holds trivially.
    All(Vec<Predicate<T>>),
    /// At least one sub-predicate holds. An empty disjunction never holds.
    Any(Vec<Predicate<T>>),
    /// The sub-predicate does not hold.
    Not(Box<Predicate<T>>),
}

impl<T> Predicate<T> {
    /// Creates a case-insensitive contains test; the token is lower-cased
    /// here so evaluation only has to fold the field value.
    pub fn contains(field: TextField<T>, token: impl Into<String>) -> Self {
        Predicate::Contains {
            field,
            token: token.into().to_lowercase(),
        }
    }

    /// Creates a conjunction of predicates.
    pub fn all(predicates: Vec<Predicate<T>>) -> Self {
        Predicate::All(predicates)
    }

    /// Creates a disjunction of predicates.
    pub fn any(predicates: Vec<Predicate<T>>) -> Self {
        Predicate::Any(predicates)
    }

    /// Wraps this predicate in a negation.
    pub fn negate(self) -> Self {
        Predicate::Not(Box::new(self))
    }

    /// Evaluates the tree against a single record.
    pub fn matches(&self, record: &T) -> bool {
        match self {
            Predicate::Contains { field, token } => match field.get(record) {
                Some(text) => text.to_lowercase().contains(token.as_str()),
                None => false,
            },
            Predicate::All(predicates) => predicates.iter().all(|p| p.matches(record)),
            Predicate::Any(predicates) => predicates.iter().any(|p| p.matches(record)),
            Predicate::Not(inner) => !inner.matches(record),
        }
    }
}

// Manual impls to avoid the derives' implicit `T: Clone`/`T: Debug` bounds;
// the tree never owns a `T`.
impl<T> Clone for Predicate<T> {
    fn clone(&self) -> Self {
        match self {
            Predicate::Contains { field, token } => Predicate::Contains {
                field: *field,
                token: token.clone(),
            },
            Predicate::All(predicates) => Predicate::All(predicates.clone()),
            Predicate::Any(predicates) => Predicate::Any(predicates.clone()),
            Predicate::Not(inner) => Predicate::Not(inner.clone()),
        }
    }
}

impl<T> fmt::Debug for Predicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::Contains { field, token } => f
                .debug_struct("Contains")
                .field("field", field)
                .field("token", token)
                .finish(),
            Predicate::All(predicates) => f.debug_tuple("All").field(predicates).finish(),
            Predicate::Any(predicates) => f.debug_tuple("Any").field(predicates).finish(),
            Predicate::Not(inner) => f.debug_tuple("Not").field(inner).finish(),
        }
    }
}
