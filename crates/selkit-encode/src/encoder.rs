//! Structured selector → encoded selector.
//!
//! An encoded selector is the positive segment followed by one negative
//! segment per `:not(...)` clause:
//!
//! ```text
//! button.primary[type=submit]:not(.ghost):not([disabled])
//!
//! ["button", "type", "submit", CLASS, "primary",   positive
//!  NOT|CLASS, "ghost",                              :not(.ghost)
//!  NOT|ATTRIBUTE, "disabled", ""]                   :not([disabled])
//! ```
//!
//! Attributes always come before classes inside a segment, whatever order
//! they were written in.

use selkit_selector::{CssSelector, SelectorParseError, parse_selector_group};
use strum_macros::{Display, EnumIter};

use crate::flags::SelectorFlags;
use crate::token::{EncodedSelector, EncodedSelectorGroup, SelectorToken};

/// The leading mode of a negated clause.
///
/// The runtime matcher reads the flag at the start of a negated clause to
/// decide how to consume the literals that follow, so each clause gets
/// exactly one mode. Element beats attribute, attribute beats class. Classes
/// trailing an element or attribute clause get their own `CLASS` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum NegationMode {
    /// `NOT|ELEMENT`: element name, then attributes, then classes.
    Element,
    /// `NOT|ATTRIBUTE`: attributes, then classes.
    Attribute,
    /// `NOT|CLASS`: classes only.
    Class,
}

impl NegationMode {
    /// The flag token that opens a clause in this mode.
    #[must_use]
    pub const fn flags(self) -> SelectorFlags {
        let mode = match self {
            Self::Element => SelectorFlags::ELEMENT,
            Self::Attribute => SelectorFlags::ATTRIBUTE,
            Self::Class => SelectorFlags::CLASS,
        };
        SelectorFlags::NOT.union(mode)
    }
}

/// Choose the mode of a negated clause, or `None` if it constrains nothing.
#[must_use]
pub fn negation_mode(negated: &CssSelector) -> Option<NegationMode> {
    match (
        negated.element_name(),
        negated.attributes.is_empty(),
        negated.class_names.is_empty(),
    ) {
        (Some(_), _, _) => Some(NegationMode::Element),
        (None, false, _) => Some(NegationMode::Attribute),
        (None, true, false) => Some(NegationMode::Class),
        (None, true, true) => None,
    }
}

fn push_attributes(out: &mut EncodedSelector, selector: &CssSelector) {
    for (name, value) in &selector.attributes {
        out.push(name.as_str());
        out.push(value.as_str());
    }
}

fn push_class_names(out: &mut EncodedSelector, selector: &CssSelector) {
    out.extend(
        selector
            .class_names
            .iter()
            .map(|class_name| SelectorToken::literal(class_name.as_str())),
    );
}

/// `CLASS` followed by the class names, or nothing when there are none.
fn push_class_segment(out: &mut EncodedSelector, selector: &CssSelector) {
    if !selector.class_names.is_empty() {
        out.push(SelectorFlags::CLASS);
        push_class_names(out, selector);
    }
}

/// Encode the non-negated part of a selector.
///
/// The element name (`""` when absent or `*`), then each attribute as a
/// name/value pair, then `CLASS` and the class names if there are any.
/// Only a selector that constrains nothing at all, negations included,
/// yields an empty segment. A selector with only negations still opens with
/// the `""` element slot.
#[must_use]
pub fn encode_positive_segment(selector: &CssSelector) -> EncodedSelector {
    let mut out = EncodedSelector::new();
    if selector.is_empty() {
        return out;
    }

    out.push(selector.element_name().unwrap_or_default());
    push_attributes(&mut out, selector);
    push_class_segment(&mut out, selector);
    out
}

/// Encode one `:not(...)` clause.
///
/// The clause opens with `NOT` and its [`NegationMode`] flag. A clause
/// with no element, attributes or classes contributes nothing. Negations
/// nested inside `negated` are not representable and are ignored.
#[must_use]
pub fn encode_negative_segment(negated: &CssSelector) -> EncodedSelector {
    debug_assert!(
        negated.negations.is_empty(),
        "negated selector `{negated}` carries negations of its own"
    );

    let mut out = EncodedSelector::new();
    let Some(mode) = negation_mode(negated) else {
        return out;
    };

    out.push(mode.flags());
    match mode {
        NegationMode::Element => {
            out.extend(negated.element_name().map(SelectorToken::literal));
            push_attributes(&mut out, negated);
            push_class_segment(&mut out, negated);
        }
        NegationMode::Attribute => {
            push_attributes(&mut out, negated);
            push_class_segment(&mut out, negated);
        }
        NegationMode::Class => push_class_names(&mut out, negated),
    }
    out
}

/// Encode a full selector: the positive segment followed by every negative
/// segment in order, flattened into one sequence.
#[must_use]
pub fn encode_selector(selector: &CssSelector) -> EncodedSelector {
    let mut out = encode_positive_segment(selector);
    for negated in &selector.negations {
        out.append(encode_negative_segment(negated));
    }
    out
}

/// Encode already-parsed alternatives, keeping their order.
#[must_use]
pub fn encode_selectors(selectors: &[CssSelector]) -> EncodedSelectorGroup {
    selectors.iter().map(encode_selector).collect()
}

/// Parse a raw selector string and encode each comma-separated alternative.
///
/// # Errors
///
/// Returns the parser's [`SelectorParseError`] for malformed or unsupported
/// selector text. Encoding itself cannot fail.
pub fn encode_selector_group(raw: &str) -> Result<EncodedSelectorGroup, SelectorParseError> {
    let selectors = parse_selector_group(raw)?;
    Ok(encode_selectors(&selectors))
}
