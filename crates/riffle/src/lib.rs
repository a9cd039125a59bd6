//! Riffle - composable search, ordering, and chunking operators for record
//! collections.
//!
//! Riffle provides a small set of lazy, pure operators for slicing and
//! sifting collections of records:
//!
//! - Multi-field, multi-token **search**: keep records where at least one
//!   chosen text field contains every whitespace-separated token of a
//!   phrase, case-insensitively
//! - **Conditional predicates**: apply a filter only when a flag is set
//! - **Dynamic ordering**: sort by a field chosen by name at runtime,
//!   ascending or descending, validated before any iteration
//! - **Chunking**: split a sequence into fixed-size consecutive chunks,
//!   either lazily from any iterator or eagerly per chunk from a countable,
//!   range-addressable source
//!
//! # Quick Start
//!
//! ```rust
//! use riffle::{Dir, IntoChunks, Query, Queryable, TextField, Value};
//!
//! // Define your data
//! struct Fruit {
//!     name: String,
//!     description: Option<String>,
//! }
//!
//! // By-name field access for dynamic ordering
//! impl Queryable for Fruit {
//!     fn field_value(&self, field: &str) -> Value<'_> {
//!         match field {
//!             "name" => Value::Text(&self.name),
//!             "description" => match self.description.as_deref() {
//!                 Some(d) => Value::Text(d),
//!                 None => Value::Null,
//!             },
//!             _ => Value::Null,
//!         }
//!     }
//!
//!     fn field_names() -> &'static [&'static str] {
//!         &["name", "description"]
//!     }
//! }
//!
//! // Text selectors for the search operator
//! const NAME: TextField<Fruit> = TextField::direct("name", |f| Some(&f.name));
//! const DESCRIPTION: TextField<Fruit> =
//!     TextField::direct("description", |f| f.description.as_deref());
//!
//! # fn main() -> riffle::Result<()> {
//! let fruits = vec![
//!     Fruit { name: "Apple".into(), description: Some("Red fruit".into()) },
//!     Fruit { name: "Banana".into(), description: Some("Yellow fruit".into()) },
//!     Fruit { name: "Green Apple".into(), description: Some("Sour fruit".into()) },
//! ];
//!
//! // Build and execute a query
//! let query = Query::new()
//!     .search("green apple", &[NAME, DESCRIPTION])?
//!     .order_by("name", Dir::Asc)?;
//!
//! let results = query.filter(&fruits);
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].name, "Green Apple");
//!
//! // Page any iterator into fixed-size chunks
//! let pages: Vec<Vec<&Fruit>> = fruits.iter().into_chunks(2)?.collect();
//! assert_eq!(pages.len(), 2);
//! assert_eq!(pages[1].len(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! # Search Semantics
//!
//! The search operator splits the phrase on whitespace into lower-cased
//! tokens and matches per field with fixed logic:
//!
//! ```text
//! match = any selected field contains ALL tokens (case-insensitive)
//! ```
//!
//! A blank phrase or an empty field set applies no filter at all - the
//! source passes through unchanged. Selectors must be direct field reads;
//! a computed selector fails at composition time, never at iteration time.
//!
//! # Chunking
//!
//! Two variants with different cost models, identical chunk boundaries:
//!
//! | Variant | Source | Cost |
//! |---------|--------|------|
//! | [`IntoChunks::into_chunks`] | any `Iterator` | one pass, no count |
//! | [`fetch_chunks`] | [`RangeSource`] (count + offset/limit) | one count, one fetch per chunk |
//!
//! # Errors
//!
//! Everything fails fast: zero chunk sizes, computed search selectors, and
//! unknown `order_by` names are all reported before any record is touched.
//! See [`RiffleError`].

mod chunk;
mod error;
mod field;
mod order;
mod predicate;
mod query;
pub mod search;
mod traits;
mod value;

// Re-export public API
pub use chunk::{fetch_chunks, Chunks, FetchChunks, IntoChunks, RangeSource};
pub use error::{Result, RiffleError};
pub use field::TextField;
pub use order::{Dir, OrderBy};
pub use predicate::Predicate;
pub use query::Query;
pub use traits::Queryable;
pub use value::{compare_values, Value};
