//! Flags marking mode transitions and negation in an encoded selector.
//!
//! The values are shared with the runtime matcher and must not change.
//! Flags compose with `|`: a negated clause starts with `NOT` combined with
//! exactly one mode flag, e.g. `NOT | ELEMENT` (5). A plain `CLASS` (8)
//! introduces the class list of the clause it appears in.

use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// Mode and negation flags of the encoded selector format.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SelectorFlags: u8 {
        /// Indicates this is the beginning of a new negative selector
        const NOT = 0b0001;
        /// Mode for matching attributes
        const ATTRIBUTE = 0b0010;
        /// Mode for matching tag names
        const ELEMENT = 0b0100;
        /// Mode for matching class names
        const CLASS = 0b1000;
    }
}

impl SelectorFlags {
    /// True if this flag starts a negated clause.
    #[must_use]
    pub const fn is_negation(self) -> bool {
        self.contains(Self::NOT)
    }
}

/// Renders the set by name, `NOT|ELEMENT`.
impl fmt::Display for SelectorFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("NONE");
        }
        for (i, (name, _)) in self.iter_names().enumerate() {
            if i > 0 {
                f.write_str("|")?;
            }
            f.write_str(name)?;
        }
        Ok(())
    }
}
