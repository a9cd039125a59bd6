//! Proc macros for Riffle.
//!
//! This crate provides the [`Queryable`] derive macro, the compile-time
//! registration step behind riffle's by-name field access: it builds the
//! static field-name registry once, at compile time, so dynamic operators
//! can fail fast on unknown names without runtime introspection.

mod queryable;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derives the `Queryable` trait for record structs.
///
/// Only fields annotated with a `#[query(...)]` kind participate; everything
/// else is invisible to queries.
///
/// # Field Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `text` | Text field; `Option`-typed fields read as null when `None` |
/// | `int` | Integer field (stored as `i64`) |
/// | `bool` | Boolean field |
/// | `skip` | Exclude this field from queries |
/// | `rename = "..."` | Use a custom name for queries |
///
/// # Generated Code
///
/// The macro generates:
///
/// 1. Field name constants (e.g., `Task::NAME`, `Task::PRIORITY`) for
///    typo-proof `order_by` calls
/// 2. An implementation of `Queryable::field_value()`
/// 3. The static registry `Queryable::field_names()` consulted by operators
///    that resolve field names at call time
///
/// # Example
///
/// ```ignore
/// use riffle::{Dir, Query, Queryable};
/// use riffle_macros::Queryable;
///
/// #[derive(Queryable)]
/// struct Task {
///     #[query(text)]
///     name: String,
///
///     #[query(text)]
///     notes: Option<String>,
///
///     #[query(int)]
///     priority: u8,
///
///     #[query(bool)]
///     done: bool,
///
///     #[query(skip)]
///     internal_id: u64,
/// }
///
/// let query = Query::new().order_by(Task::PRIORITY, Dir::Desc)?;
/// ```
#[proc_macro_derive(Queryable, attributes(query))]
pub fn queryable_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    queryable::queryable_derive_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
