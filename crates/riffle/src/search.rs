//! The multi-field, multi-token search predicate builder.
//!
//! Given a free-form phrase and a set of direct text-field selectors,
//! [`predicate`] produces a tree that matches a record when **any** selected
//! field contains **all** whitespace-separated tokens of the phrase,
//! case-insensitively. A blank phrase or an empty field set short-circuits
//! to "no filter" rather than an error.

use crate::error::{Result, RiffleError};
use crate::field::TextField;
use crate::predicate::Predicate;

/// Splits a phrase into lower-cased, whitespace-delimited tokens.
///
/// Tokens are opaque substrings: no normalization happens beyond case
/// folding and whitespace splitting.
pub fn tokenize(phrase: &str) -> Vec<String> {
    let lowered = phrase.trim().to_lowercase();
    lowered.split_whitespace().map(str::to_owned).collect()
}

/// Builds the search predicate for `phrase` over `fields`.
///
/// Returns `Ok(None)` when the phrase is blank, the field set is empty, or
/// tokenization yields nothing — the caller applies no filter and the source
/// passes through unchanged. This is a deliberate short-circuit, not an
/// error.
///
/// Returns [`RiffleError::ComputedField`] when any selector is not a direct
/// field read. The whole build aborts here, at composition time; a bad
/// selector is never deferred to evaluation or silently skipped.
///
/// The resulting tree is `Any` over the fields of `All` over the tokens: a
/// record matches when at least one field contains every token. Token order
/// is irrelevant. A null field value never matches.
///
/// # Example
///
/// ```
/// use riffle::{search, TextField};
///
/// struct Fruit {
///     name: String,
/// }
///
/// const NAME: TextField<Fruit> = TextField::direct("name", |f| Some(&f.name));
///
/// let pred = search::predicate("green apple", &[NAME])?.unwrap();
///
/// assert!(pred.matches(&Fruit { name: "Green Apple".to_string() }));
/// assert!(!pred.matches(&Fruit { name: "Apple".to_string() }));
/// # Ok::<(), riffle::RiffleError>(())
/// ```
pub fn predicate<T>(phrase: &str, fields: &[TextField<T>]) -> Result<Option<Predicate<T>>> {
    if phrase.trim().is_empty() || fields.is_empty() {
        return Ok(None);
    }

    let tokens = tokenize(phrase);
    if tokens.is_empty() {
        return Ok(None);
    }

    if let Some(field) = fields.iter().find(|f| !f.is_direct()) {
        return Err(RiffleError::ComputedField {
            field: field.name(),
        });
    }

    let per_field = fields
        .iter()
        .map(|&field| {
            Predicate::All(
                tokens
                    .iter()
                    .map(|token| Predicate::Contains {
                        field,
                        token: token.clone(),
                    })
                    .collect(),
            )
        })
        .collect();

    Ok(Some(Predicate::Any(per_field)))
}
