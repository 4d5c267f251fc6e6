//! Visit line templates.
//!
//! A template is plain text with `{name}` substitutions. `{{` and `}}` produce literal braces.
//! Brace balance is checked when the template is parsed; whether each name refers to an
//! observable field is only checked when a visit is rendered, so a logger with a bad field
//! name fails on its first recorded visit.

use std::{fmt, fmt::Write as _, str::FromStr};

use strum::{Display, EnumString};

use crate::{Error, Result};

/// The template used when none is configured: just the node identifier.
pub const DEFAULT_TEMPLATE: &str = "{id}";

/// The node fields a template may substitute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Field {
    /// The node identifier
    Id,
    /// The node payload, rendered with `Display`
    Content,
    /// The visited flag, rendered as `true` or `false`
    Visited,
}

/// The observable values of one node at the moment it is recorded.
pub(crate) struct FieldValues<'a> {
    pub(crate) id: &'a dyn fmt::Display,
    pub(crate) content: &'a dyn fmt::Display,
    pub(crate) visited: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Field(String),
}

/// A parsed visit line template.
///
/// # Examples
///
/// ```rust
/// use visitgraph::logger::Template;
///
/// let template = Template::parse("{id}: {content} ({visited})")?;
/// assert_eq!(template.source(), "{id}: {content} ({visited})");
///
/// assert!(Template::parse("{id").is_err());
/// # Ok::<(), visitgraph::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

impl Default for Template {
    fn default() -> Self {
        Template {
            source: DEFAULT_TEMPLATE.to_string(),
            segments: vec![Segment::Field("id".to_string())],
        }
    }
}

impl Template {
    /// Parses `source` into a template.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TemplateSyntax`] for an unclosed `{`, a stray `}`, an empty `{}` or a
    /// `{` inside a substitution.
    pub fn parse(source: &str) -> Result<Self> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = source.char_indices().peekable();

        while let Some((offset, c)) = chars.next() {
            match c {
                '{' if chars.peek().is_some_and(|&(_, next)| next == '{') => {
                    chars.next();
                    literal.push('{');
                }
                '}' if chars.peek().is_some_and(|&(_, next)| next == '}') => {
                    chars.next();
                    literal.push('}');
                }
                '{' => {
                    let mut name = String::new();
                    let mut closed = false;
                    for (_, inner) in chars.by_ref() {
                        match inner {
                            '}' => {
                                closed = true;
                                break;
                            }
                            '{' => {
                                return Err(Error::TemplateSyntax(format!(
                                    "nested '{{' in substitution starting at offset {offset}"
                                )))
                            }
                            _ => name.push(inner),
                        }
                    }
                    if !closed {
                        return Err(Error::TemplateSyntax(format!(
                            "unclosed '{{' at offset {offset}"
                        )));
                    }
                    let name = name.trim();
                    if name.is_empty() {
                        return Err(Error::TemplateSyntax(format!(
                            "empty substitution at offset {offset}"
                        )));
                    }
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Field(name.to_string()));
                }
                '}' => {
                    return Err(Error::TemplateSyntax(format!(
                        "unmatched '}}' at offset {offset}"
                    )))
                }
                _ => literal.push(c),
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Template {
            source: source.to_string(),
            segments,
        })
    }

    /// Returns the template text this was parsed from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    pub(crate) fn render(&self, values: &FieldValues<'_>) -> Result<String> {
        let mut line = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => line.push_str(text),
                Segment::Field(name) => {
                    let field = Field::from_str(name).map_err(|_| Error::FormatError {
                        field: name.clone(),
                    })?;
                    // Writing into a String cannot fail unless a Display impl reports an error.
                    let written = match field {
                        Field::Id => write!(line, "{}", values.id),
                        Field::Content => write!(line, "{}", values.content),
                        Field::Visited => write!(line, "{}", values.visited),
                    };
                    written.map_err(|_| Error::FormatError {
                        field: field.to_string(),
                    })?;
                }
            }
        }
        Ok(line)
    }
}

impl FromStr for Template {
    type Err = Error;

    fn from_str(source: &str) -> Result<Self> {
        Template::parse(source)
    }
}
