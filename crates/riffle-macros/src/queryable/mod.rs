//! The `Queryable` derive macro.

mod attrs;
mod derive;

pub use derive::queryable_derive_impl;
