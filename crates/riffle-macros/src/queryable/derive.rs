//! Implementation of the `#[derive(Queryable)]` macro.
//!
//! Generates an implementation of the `Queryable` trait, the static
//! field-name registry, and field name constants for typo-proof `order_by`
//! calls.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{spanned::Spanned, Data, DeriveInput, Error, Fields, Result, Type};

use super::attrs::{parse_query_attrs, QueryKind};

/// Main implementation of the Queryable derive macro.
pub fn queryable_derive_impl(input: DeriveInput) -> Result<TokenStream> {
    let struct_name = &input.ident;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(Error::new(
                    input.span(),
                    "Queryable can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(Error::new(
                input.span(),
                "Queryable can only be derived for structs",
            ))
        }
    };

    let mut field_matches: Vec<TokenStream> = Vec::new();
    let mut field_constants: Vec<TokenStream> = Vec::new();
    let mut field_names: Vec<String> = Vec::new();

    for field in fields.iter() {
        let field_name = field
            .ident
            .as_ref()
            .ok_or_else(|| Error::new(field.span(), "expected named field"))?;

        let query_attrs = parse_query_attrs(&field.attrs)?;

        if query_attrs.skip {
            continue;
        }

        // Unannotated fields are not queryable.
        let kind = match query_attrs.kind {
            Some(kind) => kind,
            None => continue,
        };

        let query_name = query_attrs.rename.unwrap_or_else(|| field_name.to_string());
        let is_option = is_option_type(&field.ty);

        let const_name = format_ident!("{}", screaming_snake_case(&query_name));
        field_constants.push(quote! {
            /// Field name constant for by-name queries.
            pub const #const_name: &'static str = #query_name;
        });
        field_names.push(query_name.clone());

        let value_expr = match kind {
            QueryKind::Text => {
                if is_option {
                    quote! {
                        match self.#field_name.as_deref() {
                            ::core::option::Option::Some(v) => ::riffle::Value::Text(v),
                            ::core::option::Option::None => ::riffle::Value::Null,
                        }
                    }
                } else {
                    quote! { ::riffle::Value::Text(&self.#field_name) }
                }
            }
            QueryKind::Int => {
                if is_option {
                    quote! {
                        match self.#field_name {
                            ::core::option::Option::Some(v) => ::riffle::Value::Int(v as i64),
                            ::core::option::Option::None => ::riffle::Value::Null,
                        }
                    }
                } else {
                    quote! { ::riffle::Value::Int(self.#field_name as i64) }
                }
            }
            QueryKind::Bool => {
                if is_option {
                    quote! {
                        match self.#field_name {
                            ::core::option::Option::Some(v) => ::riffle::Value::Bool(v),
                            ::core::option::Option::None => ::riffle::Value::Null,
                        }
                    }
                } else {
                    quote! { ::riffle::Value::Bool(self.#field_name) }
                }
            }
        };

        field_matches.push(quote! {
            #query_name => #value_expr,
        });
    }

    let expanded = quote! {
        impl #struct_name {
            #(#field_constants)*
        }

        impl ::riffle::Queryable for #struct_name {
            fn field_value(&self, field: &str) -> ::riffle::Value<'_> {
                match field {
                    #(#field_matches)*
                    _ => ::riffle::Value::Null,
                }
            }

            fn field_names() -> &'static [&'static str] {
                &[#(#field_names),*]
            }
        }
    };

    Ok(expanded)
}

/// Returns `true` when the field type is spelled `Option<...>`.
///
/// Purely syntactic: a renamed or fully-qualified `Option` alias is not
/// detected, matching how other field-attribute derives behave.
fn is_option_type(ty: &Type) -> bool {
    match ty {
        Type::Path(type_path) => type_path
            .path
            .segments
            .last()
            .is_some_and(|segment| segment.ident == "Option"),
        _ => false,
    }
}

/// Converts a field name to SCREAMING_SNAKE_CASE for the generated constant.
fn screaming_snake_case(name: &str) -> String {
    let mut result = String::with_capacity(name.len() + 4);
    let mut prev: Option<char> = None;

    for c in name.chars() {
        match c {
            '-' | '_' => result.push('_'),
            c if c.is_uppercase() => {
                if prev.is_some_and(char::is_lowercase) {
                    result.push('_');
                }
                result.push(c);
            }
            c => result.push(c.to_ascii_uppercase()),
        }
        prev = Some(c);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screaming_case_conversions() {
        assert_eq!(screaming_snake_case("name"), "NAME");
        assert_eq!(screaming_snake_case("created_at"), "CREATED_AT");
        assert_eq!(screaming_snake_case("createdAt"), "CREATED_AT");
        assert_eq!(screaming_snake_case("my-field"), "MY_FIELD");
    }

    #[test]
    fn option_detection() {
        let ty: Type = syn::parse_str("Option<String>").unwrap();
        assert!(is_option_type(&ty));

        let ty: Type = syn::parse_str("std::option::Option<String>").unwrap();
        assert!(is_option_type(&ty));

        let ty: Type = syn::parse_str("String").unwrap();
        assert!(!is_option_type(&ty));

        let ty: Type = syn::parse_str("Vec<Option<String>>").unwrap();
        assert!(!is_option_type(&ty));
    }

    #[test]
    fn derive_rejects_enums() {
        let input: DeriveInput = syn::parse_str("enum Status { Open, Closed }").unwrap();
        let err = queryable_derive_impl(input).unwrap_err();
        assert!(err.to_string().contains("only be derived for structs"));
    }

    #[test]
    fn derive_rejects_tuple_structs() {
        let input: DeriveInput = syn::parse_str("struct Point(i64, i64);").unwrap();
        let err = queryable_derive_impl(input).unwrap_err();
        assert!(err.to_string().contains("named fields"));
    }

    #[test]
    fn derive_generates_registry_and_constants() {
        let input: DeriveInput = syn::parse_str(
            r#"
            struct Task {
                #[query(text)]
                name: String,
                #[query(int, rename = "prio")]
                priority: u8,
                #[query(skip)]
                internal: u64,
                plain: u64,
            }
            "#,
        )
        .unwrap();

        let output = queryable_derive_impl(input).unwrap().to_string();

        assert!(output.contains("NAME"));
        assert!(output.contains("PRIO"));
        assert!(!output.contains("INTERNAL"));
        assert!(!output.contains("PLAIN"));
        assert!(output.contains("field_names"));
    }
}
