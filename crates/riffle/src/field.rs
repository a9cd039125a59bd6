//! Text field selectors for the search operator.
//!
//! A [`TextField`] names a single string-valued field of a record and knows
//! how to read it. Selectors come in two kinds: *direct* (a plain field
//! read, possibly absent) and *computed* (a value synthesized from the
//! record). The search builder accepts only direct selectors and rejects
//! computed ones at composition time.

use std::borrow::Cow;
use std::fmt;

/// A named selector for a string-valued field of a record.
///
/// # Example
///
/// ```
/// use riffle::TextField;
///
/// struct Product {
///     name: String,
///     description: Option<String>,
/// }
///
/// const NAME: TextField<Product> = TextField::direct("name", |p| Some(&p.name));
/// const DESCRIPTION: TextField<Product> =
///     TextField::direct("description", |p| p.description.as_deref());
///
/// let product = Product {
///     name: "Apple".to_string(),
///     description: None,
/// };
/// assert_eq!(NAME.get(&product).as_deref(), Some("Apple"));
/// assert_eq!(DESCRIPTION.get(&product), None);
/// ```
pub struct TextField<T> {
    name: &'static str,
    access: TextAccess<T>,
}

/// How a [`TextField`] reads its value.
enum TextAccess<T> {
    /// A direct field read, borrowed from the record. `None` models a null
    /// field.
    Direct(fn(&T) -> Option<&str>),
    /// A value synthesized from the record.
    Computed(fn(&T) -> String),
}

impl<T> TextField<T> {
    /// Creates a selector for a direct field read.
    ///
    /// The accessor must read exactly one field of the record, with no
    /// intervening transformation; `None` stands for a null field.
    pub const fn direct(name: &'static str, get: fn(&T) -> Option<&str>) -> Self {
        TextField {
            name,
            access: TextAccess::Direct(get),
        }
    }

    /// Creates a selector for a computed value.
    ///
    /// Computed selectors can be ordered and displayed, but the search
    /// builder rejects them with
    /// [`RiffleError::ComputedField`](crate::RiffleError::ComputedField).
    pub const fn computed(name: &'static str, get: fn(&T) -> String) -> Self {
        TextField {
            name,
            access: TextAccess::Computed(get),
        }
    }

    /// Returns the selector's field name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns `true` if this selector is a direct field read.
    pub fn is_direct(&self) -> bool {
        matches!(self.access, TextAccess::Direct(_))
    }

    /// Reads the field's value from a record.
    ///
    /// Direct selectors borrow; computed selectors allocate. `None` means
    /// the field is null.
    pub fn get<'a>(&self, record: &'a T) -> Option<Cow<'a, str>> {
        match self.access {
            TextAccess::Direct(get) => get(record).map(Cow::Borrowed),
            TextAccess::Computed(get) => Some(Cow::Owned(get(record))),
        }
    }
}

// Manual impls: fn pointers are Copy regardless of `T`, so the derives'
// implicit `T: Clone`/`T: Copy` bounds would be too strict.
impl<T> Clone for TextField<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TextField<T> {}

impl<T> Clone for TextAccess<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TextAccess<T> {}

impl<T> fmt::Debug for TextField<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.access {
            TextAccess::Direct(_) => "direct",
            TextAccess::Computed(_) => "computed",
        };
        f.debug_struct("TextField")
            .field("name", &self.name)
            .field("kind", &kind)
            .finish()
    }
}
