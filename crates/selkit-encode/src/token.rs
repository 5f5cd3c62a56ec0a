//! Encoded selector tokens.
//!
//! Inside the toolchain an encoded selector is a sequence of
//! [`SelectorToken`]s. At the boundary it serializes to the untyped array
//! the runtime matcher reads: literals become JSON strings, flags become
//! their integer value.

use std::fmt;
use std::slice;

use serde::{Serialize, Serializer};

use crate::flags::SelectorFlags;

/// One element of an encoded selector.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SelectorToken {
    /// An element name, attribute name, attribute value, or class name.
    Literal(String),
    /// A mode transition, optionally starting a negated clause.
    Flag(SelectorFlags),
}

impl SelectorToken {
    /// Shorthand for [`SelectorToken::Literal`].
    #[must_use]
    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literal(value.into())
    }

    /// The literal text, if this is a literal.
    #[must_use]
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Self::Literal(value) => Some(value),
            Self::Flag(_) => None,
        }
    }

    /// The flags, if this is a flag.
    #[must_use]
    pub const fn as_flag(&self) -> Option<SelectorFlags> {
        match self {
            Self::Flag(flags) => Some(*flags),
            Self::Literal(_) => None,
        }
    }
}

impl From<SelectorFlags> for SelectorToken {
    fn from(flags: SelectorFlags) -> Self {
        Self::Flag(flags)
    }
}

impl From<&str> for SelectorToken {
    fn from(value: &str) -> Self {
        Self::Literal(value.to_string())
    }
}

impl From<String> for SelectorToken {
    fn from(value: String) -> Self {
        Self::Literal(value)
    }
}

impl Serialize for SelectorToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Literal(value) => serializer.serialize_str(value),
            Self::Flag(flags) => serializer.serialize_u8(flags.bits()),
        }
    }
}

/// Literals are quoted, flags are shown by name.
impl fmt::Display for SelectorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => write!(f, "{value:?}"),
            Self::Flag(flags) => write!(f, "{flags}"),
        }
    }
}

/// A flat encoded selector.
///
/// Never nested: negated clauses are spliced into the same sequence behind
/// their leading `NOT` flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EncodedSelector(Vec<SelectorToken>);

impl EncodedSelector {
    /// An empty sequence.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// The tokens in order.
    #[must_use]
    pub fn tokens(&self) -> &[SelectorToken] {
        &self.0
    }

    /// Consume into the token vector.
    #[must_use]
    pub fn into_tokens(self) -> Vec<SelectorToken> {
        self.0
    }

    /// Number of tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if there are no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the tokens.
    pub fn iter(&self) -> slice::Iter<'_, SelectorToken> {
        self.0.iter()
    }

    /// Append one token.
    pub fn push(&mut self, token: impl Into<SelectorToken>) {
        self.0.push(token.into());
    }

    /// Append every token of `other`, keeping order.
    pub fn append(&mut self, other: Self) {
        self.0.extend(other.0);
    }
}

impl From<Vec<SelectorToken>> for EncodedSelector {
    fn from(tokens: Vec<SelectorToken>) -> Self {
        Self(tokens)
    }
}

impl FromIterator<SelectorToken> for EncodedSelector {
    fn from_iter<I: IntoIterator<Item = SelectorToken>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<SelectorToken> for EncodedSelector {
    fn extend<I: IntoIterator<Item = SelectorToken>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for EncodedSelector {
    type Item = SelectorToken;
    type IntoIter = std::vec::IntoIter<SelectorToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a EncodedSelector {
    type Item = &'a SelectorToken;
    type IntoIter = slice::Iter<'a, SelectorToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl PartialEq<[SelectorToken]> for EncodedSelector {
    fn eq(&self, other: &[SelectorToken]) -> bool {
        self.0 == other
    }
}

impl<const N: usize> PartialEq<[SelectorToken; N]> for EncodedSelector {
    fn eq(&self, other: &[SelectorToken; N]) -> bool {
        self.0 == other
    }
}

/// `["div", "title", "x", CLASS, "a"]`
impl fmt::Display for EncodedSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, token) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{token}")?;
        }
        f.write_str("]")
    }
}

/// One encoded selector per comma-separated alternative, in source order.
pub type EncodedSelectorGroup = Vec<EncodedSelector>;
