//! Property keys: string names and opaque symbol tokens.
//!
//! Records accept two kinds of keys. [`PropKey::Name`] is an ordinary
//! string key compared by content; [`PropKey::Symbol`] wraps a [`Symbol`],
//! a token that is unique per creation and can only collide with its own
//! clones. Storage treats both uniformly; only enumeration order tells
//! them apart.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_SYMBOL_ID: AtomicU64 = AtomicU64::new(0);

fn next_symbol_id() -> u64 {
    NEXT_SYMBOL_ID.fetch_add(1, Ordering::Relaxed)
}

/// An opaque token key.
///
/// Every call to [`Symbol::new`] or [`Symbol::anonymous`] produces a key
/// distinct from all others; two symbols compare equal only when one is a
/// clone of the other. The description is diagnostic text and never
/// participates in identity, so `Symbol::new("a") != Symbol::new("a")`.
#[derive(Clone, Debug)]
pub struct Symbol {
    id: u64,
    description: Option<Arc<str>>,
}

impl Symbol {
    /// Create a fresh symbol carrying a diagnostic description.
    #[must_use]
    pub fn new(description: &str) -> Self {
        Self {
            id: next_symbol_id(),
            description: Some(Arc::from(description)),
        }
    }

    /// Create a fresh symbol with no description.
    #[must_use]
    pub fn anonymous() -> Self {
        Self {
            id: next_symbol_id(),
            description: None,
        }
    }

    /// The diagnostic description, if one was supplied.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.description() {
            Some(description) => write!(f, "Symbol({description})"),
            None => f.write_str("Symbol()"),
        }
    }
}

/// A property key: either a named string key or an opaque [`Symbol`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PropKey {
    /// Ordinary string-named key, compared by content.
    Name(String),
    /// Opaque token key, compared by identity.
    Symbol(Symbol),
}

impl PropKey {
    /// Whether this is a named string key.
    #[must_use]
    pub const fn is_name(&self) -> bool {
        matches!(self, Self::Name(_))
    }

    /// Whether this is a symbol key.
    #[must_use]
    pub const fn is_symbol(&self) -> bool {
        matches!(self, Self::Symbol(_))
    }
}

impl From<&str> for PropKey {
    fn from(name: &str) -> Self {
        Self::Name(name.to_owned())
    }
}

impl From<String> for PropKey {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<Symbol> for PropKey {
    fn from(symbol: Symbol) -> Self {
        Self::Symbol(symbol)
    }
}

impl fmt::Display for PropKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::Symbol(symbol) => symbol.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{PropKey, Symbol};

    #[test]
    fn fresh_symbols_are_distinct_even_with_equal_descriptions() {
        let left = Symbol::new("token");
        let right = Symbol::new("token");
        assert_ne!(left, right);
        assert_eq!(left, left.clone());
    }

    #[test]
    fn symbol_display_includes_description() {
        assert_eq!(Symbol::new("session").to_string(), "Symbol(session)");
        assert_eq!(Symbol::anonymous().to_string(), "Symbol()");
    }

    #[test]
    fn keys_partition_by_kind() {
        let name = PropKey::from("port");
        let token = PropKey::from(Symbol::new("port"));
        assert!(name.is_name() && !name.is_symbol());
        assert!(token.is_symbol() && !token.is_name());
        assert_ne!(name, token);
    }

    #[test]
    fn name_keys_compare_by_content() {
        assert_eq!(PropKey::from("host"), PropKey::from(String::from("host")));
    }
}
