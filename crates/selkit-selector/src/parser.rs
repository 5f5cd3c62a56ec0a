//! Selector text parsing.
//!
//! Turns a raw selector string such as `button.primary, a[href]:not(.ext)`
//! into one [`CssSelector`] per comma-separated alternative.

use std::iter::Peekable;
use std::str::CharIndices;

use selkit_common::warning::warn_once;

use crate::selector::{CssSelector, UNIVERSAL_SELECTOR};

/// Errors raised for malformed or unsupported selector text.
///
/// Every variant carries the byte offset into the input where the problem
/// was detected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectorParseError {
    /// An alternative with nothing in it (`a,,b`, a trailing comma, or
    /// blank input).
    #[error("empty selector at offset {offset}")]
    EmptySelector {
        /// Byte offset.
        offset: usize,
    },

    /// `:not(...)` inside another `:not(...)`.
    #[error("nesting :not is not allowed in a selector (offset {offset})")]
    NestedNot {
        /// Byte offset.
        offset: usize,
    },

    /// A comma inside `:not(...)`.
    #[error("multiple selectors in :not are not supported (offset {offset})")]
    MultipleSelectorsInNot {
        /// Byte offset.
        offset: usize,
    },

    /// `:not(` without its closing parenthesis.
    #[error(":not( opened at offset {offset} is never closed")]
    UnclosedNot {
        /// Byte offset of the `:`.
        offset: usize,
    },

    /// A `)` with no open `:not(`.
    #[error("unbalanced ')' at offset {offset}")]
    UnbalancedParenthesis {
        /// Byte offset.
        offset: usize,
    },

    /// A pseudo-class argument list that is never closed.
    #[error("'(' at offset {offset} is never closed")]
    UnclosedParenthesis {
        /// Byte offset of the `(`.
        offset: usize,
    },

    /// `[` without its closing bracket.
    #[error("attribute selector opened at offset {offset} is never closed")]
    UnclosedAttribute {
        /// Byte offset of the `[`.
        offset: usize,
    },

    /// A quoted attribute value without its closing quote.
    #[error("unterminated string starting at offset {offset}")]
    UnterminatedString {
        /// Byte offset of the opening quote.
        offset: usize,
    },

    /// `~=`, `|=`, `^=`, `$=` or `*=`.
    #[error("attribute operator '{operator}=' at offset {offset} is not supported")]
    UnsupportedAttributeOperator {
        /// The character before `=`.
        operator: char,
        /// Byte offset.
        offset: usize,
    },

    /// `.`, `[` or `:` not followed by a name.
    #[error("expected an identifier at offset {offset}")]
    ExpectedIdentifier {
        /// Byte offset.
        offset: usize,
    },

    /// `:not` not followed by `(`.
    #[error("expected '(' after :not at offset {offset}")]
    ExpectedOpenParen {
        /// Byte offset.
        offset: usize,
    },

    /// A second element name in the same simple selector (`*div`).
    #[error("element name at offset {offset} follows another element name")]
    DuplicateElement {
        /// Byte offset.
        offset: usize,
    },

    /// Whitespace, `>`, `+` or `~` between two simple selectors.
    #[error("combinators are not supported in selectors (offset {offset})")]
    UnsupportedCombinator {
        /// Byte offset.
        offset: usize,
    },

    /// Any other character, such as the `#` of an ID selector.
    #[error("unexpected character '{ch}' at offset {offset}")]
    UnexpectedChar {
        /// The offending character.
        ch: char,
        /// Byte offset.
        offset: usize,
    },
}

impl SelectorParseError {
    /// Byte offset into the input where the error was detected.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match *self {
            Self::EmptySelector { offset }
            | Self::NestedNot { offset }
            | Self::MultipleSelectorsInNot { offset }
            | Self::UnclosedNot { offset }
            | Self::UnbalancedParenthesis { offset }
            | Self::UnclosedParenthesis { offset }
            | Self::UnclosedAttribute { offset }
            | Self::UnterminatedString { offset }
            | Self::UnsupportedAttributeOperator { offset, .. }
            | Self::ExpectedIdentifier { offset }
            | Self::ExpectedOpenParen { offset }
            | Self::DuplicateElement { offset }
            | Self::UnsupportedCombinator { offset }
            | Self::UnexpectedChar { offset, .. } => offset,
        }
    }
}

type Result<T> = std::result::Result<T, SelectorParseError>;

/// Characters allowed in element, class and pseudo-class names.
const fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_' || !c.is_ascii()
}

/// Attribute names additionally allow `.`, `*`, `:` and `@`, which template
/// syntaxes use in binding-style attribute names.
const fn is_attribute_name_char(c: char) -> bool {
    is_name_char(c) || matches!(c, '.' | '*' | ':' | '@')
}

/// Parse a raw selector string into its comma-separated alternatives.
///
/// Supports:
/// - Type selectors: `div`, `my-widget`
/// - Universal selector: `*`
/// - Class selectors: `.class`
/// - Attribute selectors: `[name]`, `[name=value]`, `[name="value"]`, `[name='value']`
/// - Negation: `:not(.class)`, `:not([attr])`, `:not(span.x)`
/// - Alternatives: `a, b.c`
///
/// A selector holding only negations (`:not(.a)`) gets the universal element.
/// Pseudo-classes other than `:not` are dropped with a warning.
///
/// # Errors
///
/// Returns a [`SelectorParseError`] for combinators, unbalanced brackets or
/// parentheses, nested or comma-separated `:not`, empty alternatives and
/// unexpected characters.
pub fn parse_selector_group(raw: &str) -> Result<Vec<CssSelector>> {
    SelectorParser::new(raw).parse_group()
}

/// Pick the selector that simple-selector parts are currently added to: the
/// open negation if there is one, else the alternative being built.
fn target<'s>(
    selector: &'s mut CssSelector,
    negation: &'s mut Option<(usize, CssSelector)>,
) -> &'s mut CssSelector {
    match negation {
        Some((_, negated)) => negated,
        None => selector,
    }
}

/// Finish one alternative.
fn finish(mut selector: CssSelector) -> CssSelector {
    if !selector.negations.is_empty()
        && selector.element.is_none()
        && selector.attributes.is_empty()
        && selector.class_names.is_empty()
    {
        selector.set_element(UNIVERSAL_SELECTOR);
    }
    selector
}

/// Set the element of `selector`, rejecting a second element name.
fn set_element(selector: &mut CssSelector, name: impl Into<String>, offset: usize) -> Result<()> {
    if selector.element.is_some() {
        return Err(SelectorParseError::DuplicateElement { offset });
    }
    selector.set_element(name);
    Ok(())
}

struct SelectorParser<'a> {
    input: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> SelectorParser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
        }
    }

    /// Byte offset of the next character (input length at end).
    fn offset(&mut self) -> usize {
        self.chars.peek().map_or(self.input.len(), |&(i, _)| i)
    }

    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, c)| c)
    }

    fn skip_whitespace(&mut self) {
        while self.peek_char().is_some_and(char::is_whitespace) {
            let _ = self.chars.next();
        }
    }

    fn consume_while(&mut self, accept: impl Fn(char) -> bool) -> String {
        let mut out = String::new();
        while let Some(c) = self.peek_char().filter(|&c| accept(c)) {
            out.push(c);
            let _ = self.chars.next();
        }
        out
    }

    fn expect_name(&mut self, accept: impl Fn(char) -> bool) -> Result<String> {
        let offset = self.offset();
        let name = self.consume_while(accept);
        if name.is_empty() {
            return Err(SelectorParseError::ExpectedIdentifier { offset });
        }
        Ok(name)
    }

    fn parse_group(mut self) -> Result<Vec<CssSelector>> {
        let mut results = Vec::new();
        let mut selector = CssSelector::new();
        // Open `:not(` clause and the offset of its `:`.
        let mut negation: Option<(usize, CssSelector)> = None;

        self.skip_whitespace();

        while let Some((pos, c)) = self.chars.next() {
            match c {
                '.' => {
                    let class_name = self.expect_name(is_name_char)?;
                    target(&mut selector, &mut negation).add_class_name(class_name);
                }

                '[' => {
                    let (name, value) = self.parse_attribute(pos)?;
                    target(&mut selector, &mut negation).add_attribute(name, value);
                }

                ':' => {
                    if self.peek_char() == Some(':') {
                        let _ = self.chars.next();
                    }
                    let name = self.expect_name(is_name_char)?;

                    if name.eq_ignore_ascii_case("not") {
                        if self.peek_char() != Some('(') {
                            return Err(SelectorParseError::ExpectedOpenParen {
                                offset: self.offset(),
                            });
                        }
                        if negation.is_some() {
                            return Err(SelectorParseError::NestedNot { offset: pos });
                        }
                        let _ = self.chars.next();
                        negation = Some((pos, CssSelector::new()));
                        self.skip_whitespace();
                    } else {
                        self.skip_pseudo_arguments()?;
                        warn_once(
                            "Selector",
                            &format!("pseudo-class ':{name}' is not supported and was ignored"),
                        );
                    }
                }

                ')' => match negation.take() {
                    Some((_, negated)) => selector.add_negation(negated),
                    None => return Err(SelectorParseError::UnbalancedParenthesis { offset: pos }),
                },

                ',' => {
                    if negation.is_some() {
                        return Err(SelectorParseError::MultipleSelectorsInNot { offset: pos });
                    }
                    if selector.is_empty() && selector.element.is_none() {
                        return Err(SelectorParseError::EmptySelector { offset: pos });
                    }
                    results.push(finish(std::mem::take(&mut selector)));
                    self.skip_whitespace();
                }

                c if c.is_whitespace() => {
                    self.skip_whitespace();
                    // Only whitespace before a comma, a closing parenthesis
                    // or the end of input is insignificant.
                    if !matches!(self.peek_char(), None | Some(',' | ')')) {
                        return Err(SelectorParseError::UnsupportedCombinator { offset: pos });
                    }
                }

                '>' | '+' | '~' => {
                    return Err(SelectorParseError::UnsupportedCombinator { offset: pos });
                }

                '*' => {
                    set_element(target(&mut selector, &mut negation), UNIVERSAL_SELECTOR, pos)?;
                }

                c if is_name_char(c) => {
                    let mut name = String::from(c);
                    name.push_str(&self.consume_while(is_name_char));
                    set_element(target(&mut selector, &mut negation), name, pos)?;
                }

                ch => return Err(SelectorParseError::UnexpectedChar { ch, offset: pos }),
            }
        }

        if let Some((offset, _)) = negation {
            return Err(SelectorParseError::UnclosedNot { offset });
        }
        if selector.is_empty() && selector.element.is_none() {
            return Err(SelectorParseError::EmptySelector {
                offset: self.input.len(),
            });
        }
        results.push(finish(selector));

        Ok(results)
    }

    /// Parse the inside of `[...]`; `open` is the offset of the `[`.
    fn parse_attribute(&mut self, open: usize) -> Result<(String, String)> {
        self.skip_whitespace();
        let name = self.expect_name(is_attribute_name_char)?;
        self.skip_whitespace();

        let value = match self.chars.next() {
            Some((_, ']')) => return Ok((name, String::new())),
            Some((_, '=')) => self.parse_attribute_value()?,
            Some((offset, operator @ ('~' | '|' | '^' | '$' | '*'))) => {
                return Err(SelectorParseError::UnsupportedAttributeOperator { operator, offset });
            }
            Some((offset, ch)) => return Err(SelectorParseError::UnexpectedChar { ch, offset }),
            None => return Err(SelectorParseError::UnclosedAttribute { offset: open }),
        };

        self.skip_whitespace();
        match self.chars.next() {
            Some((_, ']')) => Ok((name, value)),
            Some((offset, ch)) => Err(SelectorParseError::UnexpectedChar { ch, offset }),
            None => Err(SelectorParseError::UnclosedAttribute { offset: open }),
        }
    }

    /// Parse an attribute value after `=`: quoted (`"v"`, `'v'`) or bare.
    fn parse_attribute_value(&mut self) -> Result<String> {
        self.skip_whitespace();
        match self.peek_char() {
            Some(quote @ ('"' | '\'')) => {
                let offset = self.offset();
                let _ = self.chars.next();
                let value = self.consume_while(|c| c != quote);
                if self.chars.next().is_none() {
                    return Err(SelectorParseError::UnterminatedString { offset });
                }
                Ok(value)
            }
            _ => {
                let value = self.consume_while(|c| !matches!(c, ']' | '"' | '\''));
                Ok(value.trim_end().to_string())
            }
        }
    }

    /// Skip a balanced `(...)` argument list after an ignored pseudo-class.
    fn skip_pseudo_arguments(&mut self) -> Result<()> {
        if self.peek_char() != Some('(') {
            return Ok(());
        }
        let open = self.offset();
        let _ = self.chars.next();

        let mut depth = 1u32;
        for (_, c) in self.chars.by_ref() {
            match c {
                '(' => depth += 1,
                ')' => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(());
                    }
                }
                _ => {}
            }
        }
        Err(SelectorParseError::UnclosedParenthesis { offset: open })
    }
}
