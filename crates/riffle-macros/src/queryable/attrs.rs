//! Attribute parsing for the `Queryable` derive macro.
//!
//! Parsers for the `#[query(...)]` field attributes: a field kind (`text`,
//! `int`, `bool`), `skip`, and `rename = "..."`.

use proc_macro2::Span;
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
    Attribute, Error, Ident, Lit, Meta, Result, Token,
};

/// The kind of a queryable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    /// Text field: `#[query(text)]`. `Option`-typed fields read as null
    /// when `None`.
    Text,
    /// Integer field: `#[query(int)]`.
    Int,
    /// Boolean field: `#[query(bool)]`.
    Bool,
}

impl QueryKind {
    /// Parses a field kind from an attribute identifier.
    pub fn from_ident(ident: &Ident) -> Result<Self> {
        match ident.to_string().as_str() {
            "text" | "Text" => Ok(QueryKind::Text),
            "int" | "Int" => Ok(QueryKind::Int),
            "bool" | "Bool" => Ok(QueryKind::Bool),
            other => Err(Error::new(
                ident.span(),
                format!(
                    "unknown query kind: '{}'. Expected one of: text, int, bool",
                    other
                ),
            )),
        }
    }
}

/// Field-level attributes from `#[query(...)]`.
#[derive(Debug, Clone)]
pub struct QueryAttr {
    /// The kind of this queryable field.
    pub kind: Option<QueryKind>,
    /// Skip this field entirely.
    pub skip: bool,
    /// Custom field name for queries (default: the Rust field name).
    pub rename: Option<String>,
    /// Span for error reporting.
    pub span: Span,
}

impl Default for QueryAttr {
    fn default() -> Self {
        QueryAttr {
            kind: None,
            skip: false,
            rename: None,
            span: Span::call_site(),
        }
    }
}

impl Parse for QueryAttr {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut attr = QueryAttr::default();

        let content: Punctuated<Meta, Token![,]> = Punctuated::parse_terminated(input)?;

        for meta in content {
            match &meta {
                // Kind identifier: query(text), query(int), query(bool)
                Meta::Path(path) => {
                    if path.is_ident("skip") {
                        attr.skip = true;
                    } else if let Some(ident) = path.get_ident() {
                        attr.kind = Some(QueryKind::from_ident(ident)?);
                        attr.span = ident.span();
                    } else {
                        return Err(Error::new(
                            path.span(),
                            "expected query kind: text, int, bool, or skip",
                        ));
                    }
                }

                // rename = "custom_name"
                Meta::NameValue(nv) => {
                    if nv.path.is_ident("rename") {
                        if let syn::Expr::Lit(syn::ExprLit {
                            lit: Lit::Str(s), ..
                        }) = &nv.value
                        {
                            attr.rename = Some(s.value());
                        } else {
                            return Err(Error::new(
                                nv.value.span(),
                                "rename must be a string literal",
                            ));
                        }
                    } else {
                        return Err(Error::new(nv.path.span(), "unknown attribute. Expected: rename"));
                    }
                }

                _ => {
                    return Err(Error::new(
                        meta.span(),
                        "unknown query attribute. Expected: text, int, bool, skip, or rename = \"...\"",
                    ));
                }
            }
        }

        Ok(attr)
    }
}

/// Extracts the `#[query(...)]` attribute from a field's attributes.
pub fn parse_query_attrs(attrs: &[Attribute]) -> Result<QueryAttr> {
    for attr in attrs {
        if attr.path().is_ident("query") {
            return attr.parse_args::<QueryAttr>();
        }
    }
    Ok(QueryAttr::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_query(tokens: &str) -> Result<QueryAttr> {
        syn::parse_str::<QueryAttr>(tokens)
    }

    #[test]
    fn parse_text() {
        let attr = parse_query("text").unwrap();
        assert_eq!(attr.kind, Some(QueryKind::Text));
        assert!(!attr.skip);
    }

    #[test]
    fn parse_int() {
        let attr = parse_query("int").unwrap();
        assert_eq!(attr.kind, Some(QueryKind::Int));
    }

    #[test]
    fn parse_bool() {
        let attr = parse_query("bool").unwrap();
        assert_eq!(attr.kind, Some(QueryKind::Bool));
    }

    #[test]
    fn parse_capitalized_aliases() {
        assert_eq!(parse_query("Text").unwrap().kind, Some(QueryKind::Text));
        assert_eq!(parse_query("Int").unwrap().kind, Some(QueryKind::Int));
        assert_eq!(parse_query("Bool").unwrap().kind, Some(QueryKind::Bool));
    }

    #[test]
    fn parse_skip() {
        let attr = parse_query("skip").unwrap();
        assert!(attr.skip);
        assert_eq!(attr.kind, None);
    }

    #[test]
    fn parse_rename() {
        let attr = parse_query(r#"text, rename = "display_name""#).unwrap();
        assert_eq!(attr.kind, Some(QueryKind::Text));
        assert_eq!(attr.rename, Some("display_name".to_string()));
    }

    #[test]
    fn parse_invalid_kind() {
        let result = parse_query("timestamp");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("unknown query kind"));
    }

    #[test]
    fn parse_rename_requires_string() {
        let result = parse_query("text, rename = 42");
        assert!(result.is_err());
    }
}
