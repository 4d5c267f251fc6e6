//! Node identifiers.
//!
//! A node is labelled by either a string or an integer. The label is what searches match
//! against and what renderers and log lines show; it is unrelated to the arena handle
//! [`NodeId`](crate::graph::NodeId).
//!
//! Uniqueness is not enforced. Two nodes may carry the same identifier, in which case an id
//! search returns whichever is reached first.

use std::fmt;

/// A caller-chosen node label, either textual or numeric.
///
/// Textual and numeric identifiers never compare equal, so `"1"` and `1` are distinct labels.
///
/// # Examples
///
/// ```rust
/// use visitgraph::Identifier;
///
/// let by_name: Identifier = "root".into();
/// let by_number: Identifier = 42.into();
///
/// assert_eq!(by_name, "root");
/// assert_eq!(by_number, 42);
/// assert_ne!(Identifier::from("42"), Identifier::from(42));
/// assert_eq!(by_number.to_string(), "42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Identifier {
    /// Numeric label
    Int(i64),
    /// Textual label
    Str(String),
}

impl Identifier {
    /// Returns the textual label, if this is a string identifier.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Identifier::Str(s) => Some(s),
            Identifier::Int(_) => None,
        }
    }

    /// Returns the numeric label, if this is an integer identifier.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Identifier::Int(value) => Some(*value),
            Identifier::Str(_) => None,
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Int(value) => write!(f, "{value}"),
            Identifier::Str(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Identifier::Str(value.to_string())
    }
}

impl From<String> for Identifier {
    fn from(value: String) -> Self {
        Identifier::Str(value)
    }
}

impl From<i64> for Identifier {
    fn from(value: i64) -> Self {
        Identifier::Int(value)
    }
}

impl From<i32> for Identifier {
    fn from(value: i32) -> Self {
        Identifier::Int(i64::from(value))
    }
}

impl From<u32> for Identifier {
    fn from(value: u32) -> Self {
        Identifier::Int(i64::from(value))
    }
}

impl PartialEq<str> for Identifier {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl PartialEq<&str> for Identifier {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

impl PartialEq<i64> for Identifier {
    fn eq(&self, other: &i64) -> bool {
        self.as_int() == Some(*other)
    }
}

impl PartialEq<i32> for Identifier {
    fn eq(&self, other: &i32) -> bool {
        self.as_int() == Some(i64::from(*other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_identifier_conversions() {
        assert_eq!(Identifier::from("a"), Identifier::Str("a".to_string()));
        assert_eq!(Identifier::from(String::from("b")), "b");
        assert_eq!(Identifier::from(3i64), Identifier::Int(3));
        assert_eq!(Identifier::from(4u32), 4);
    }

    #[test]
    fn test_identifier_kinds_are_distinct() {
        let text = Identifier::from("7");
        let number = Identifier::from(7);

        assert_ne!(text, number);
        assert_eq!(text.as_int(), None);
        assert_eq!(number.as_str(), None);

        let mut set = HashSet::new();
        set.insert(text);
        set.insert(number);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_identifier_display() {
        assert_eq!(Identifier::from("child3").to_string(), "child3");
        assert_eq!(Identifier::from(-12).to_string(), "-12");
    }
}
