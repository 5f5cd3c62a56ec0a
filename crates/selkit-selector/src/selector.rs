//! The structured form of one simple selector.
//!
//! A [`CssSelector`] has no combinators and no commas: it is a set of
//! simultaneous conditions on a single element, optionally followed by
//! negated clauses.

use std::fmt;

/// The universal selector. Equivalent to "no element constraint".
pub const UNIVERSAL_SELECTOR: &str = "*";

/// One parsed simple selector.
///
/// Example: `button.primary[type=submit]:not(.disabled)` is
/// ```text
/// element:    Some("button")
/// attributes: [("type", "submit")]
/// class_names: ["primary"]
/// negations:  [{ class_names: ["disabled"] }]
/// ```
///
/// Negated clauses are one level deep: a selector stored in `negations` is
/// expected to have no negations of its own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CssSelector {
    /// The element (tag) name, if any. May be `*`.
    pub element: Option<String>,
    /// Attribute `(name, value)` pairs in source order. A bare `[name]`
    /// carries an empty value.
    pub attributes: Vec<(String, String)>,
    /// Class names in source order.
    pub class_names: Vec<String>,
    /// `:not(...)` clauses in source order.
    pub negations: Vec<CssSelector>,
}

impl CssSelector {
    /// Create an empty selector.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            element: None,
            attributes: Vec::new(),
            class_names: Vec::new(),
            negations: Vec::new(),
        }
    }

    /// The element name constraint, with `*` and the empty name folded to
    /// `None`.
    #[must_use]
    pub fn element_name(&self) -> Option<&str> {
        self.element
            .as_deref()
            .filter(|name| !name.is_empty() && *name != UNIVERSAL_SELECTOR)
    }

    /// True when the selector constrains nothing: no element (or `*`), no
    /// attributes, no classes and no negations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.element_name().is_none()
            && self.attributes.is_empty()
            && self.class_names.is_empty()
            && self.negations.is_empty()
    }

    /// Set the element name, replacing any previous one.
    pub fn set_element(&mut self, element: impl Into<String>) {
        self.element = Some(element.into());
    }

    /// Append an attribute pair.
    pub fn add_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.push((name.into(), value.into()));
    }

    /// Append a class name.
    pub fn add_class_name(&mut self, class_name: impl Into<String>) {
        self.class_names.push(class_name.into());
    }

    /// Append a negated clause.
    pub fn add_negation(&mut self, negation: Self) {
        debug_assert!(
            negation.negations.is_empty(),
            "negated selectors cannot carry negations of their own"
        );
        self.negations.push(negation);
    }

    /// Builder form of [`Self::set_element`].
    #[must_use]
    pub fn with_element(mut self, element: impl Into<String>) -> Self {
        self.set_element(element);
        self
    }

    /// Builder form of [`Self::add_attribute`].
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.add_attribute(name, value);
        self
    }

    /// Builder form of [`Self::add_class_name`].
    #[must_use]
    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.add_class_name(class_name);
        self
    }

    /// Builder form of [`Self::add_negation`].
    #[must_use]
    pub fn with_negation(mut self, negation: Self) -> Self {
        self.add_negation(negation);
        self
    }
}

/// Attribute values that are not plain identifiers get quoted. The quote
/// character is whichever one the value does not contain; the parser has no
/// escapes, so a value holding both `"` and `'` does not parse back.
fn needs_quotes(value: &str) -> bool {
    !value
        .chars()
        .all(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

impl fmt::Display for CssSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(element) = &self.element {
            f.write_str(element)?;
        }
        for class_name in &self.class_names {
            write!(f, ".{class_name}")?;
        }
        for (name, value) in &self.attributes {
            if value.is_empty() {
                write!(f, "[{name}]")?;
            } else if !needs_quotes(value) {
                write!(f, "[{name}={value}]")?;
            } else if value.contains('"') {
                write!(f, "[{name}='{value}']")?;
            } else {
                write!(f, "[{name}=\"{value}\"]")?;
            }
        }
        for negation in &self.negations {
            write!(f, ":not({negation})")?;
        }
        Ok(())
    }
}
