// Parsing errors
//
//  Copyright (C) 2014-2022 Ryan Specialty Group, LLC.
//
//  This file is part of ELEMPARSE.
//
//  This program is free software: you can redistribute it and/or modify
//  it under the terms of the GNU General Public License as published by
//  the Free Software Foundation, either version 3 of the License, or
//  (at your option) any later version.
//
//  This program is distributed in the hope that it will be useful,
//  but WITHOUT ANY WARRANTY; without even the implied warranty of
//  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//  GNU General Public License for more details.
//
//  You should have received a copy of the GNU General Public License
//  along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! Errors explaining why a rule did not match.
//!
//! A [`ParseError`] is not a fatal condition;
//!   it is caught and recorded by children matching
//!     (against the child that failed)
//!   and by ordered choice
//!     (against the alternative that failed).
//! Errors nest,
//!   so the error that finally escapes to the caller is a tree that
//!   explains every path that was attempted,
//!     not just the last.
//!
//! Rendering
//! =========
//! [`ParseError::formatted_lines`] renders an error as indented lines;
//!   [`Display`] joins them with newlines.
//! For example,
//!   a `shape` element whose only child matched neither of two
//!   alternatives:
//!
//! ```text
//! Remaining items (1 children)
//! shape
//!   Remaining child 0:
//!   triangle
//!     Error 0
//!       No matching variant (2 tried)
//!       triangle
//!         Variant 0:
//!           Element name is not square
//!         Variant 1:
//!           Element name is not circle
//! ```

use super::ChildSlot;
use crate::tree::{format_attrs, format_text, Attr, Element};
use arrayvec::ArrayVec;
use std::fmt::Display;

/// Result of a parsing rule.
pub type ParseResult<'a, T> = Result<T, ParseError<'a>>;

/// A child element together with the error explaining why it did not
///   match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildError<'a>(pub &'a Element, pub ParseError<'a>);

/// Reason that a rule did not match.
///
/// Errors reference the elements they describe rather than copying
///   them,
///     and so cannot outlive the tree being parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError<'a> {
    /// Items of `ele` were left unparsed by a rule that was otherwise
    ///   successful.
    ///
    /// Each remaining child carries every error that was encountered
    ///   while trying to parse it.
    RemainingItems {
        ele: &'a Element,
        attrs: Vec<&'a Attr>,
        children: Vec<ChildSlot<'a>>,
        text: Option<&'a str>,
    },

    /// No child of `ele` matched a required child rule.
    ///
    /// Each child that was tried is paired with the error of that
    ///   attempt.
    NoMatchingChild {
        ele: &'a Element,
        errors: Vec<ChildError<'a>>,
    },

    /// No alternative of an ordered choice matched `ele`.
    ///
    /// Errors are in the order that the alternatives were declared.
    NoMatchingVariant {
        ele: &'a Element,
        errors: Vec<ParseError<'a>>,
    },

    /// Any other reason,
    ///   such as a mismatched name or a missing attribute.
    Other(String),
}

impl<'a> ParseError<'a> {
    /// Construct an [`ParseError::Other`] error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Self::Other(msg.into())
    }

    /// Render the error as a series of lines,
    ///   indenting nested errors.
    pub fn formatted_lines(&self) -> Vec<String> {
        match self {
            Self::Other(msg) => vec![msg.clone()],

            Self::RemainingItems {
                ele,
                attrs,
                children,
                text,
            } => {
                let mut stats = ArrayVec::<String, 3>::new();
                if !attrs.is_empty() {
                    stats.push(format!("{} attrs", attrs.len()));
                }
                if !children.is_empty() {
                    stats.push(format!("{} children", children.len()));
                }
                if text.is_some() {
                    stats.push("text".into());
                }

                let mut lines = vec![
                    format!("Remaining items ({})", stats.join(", ")),
                    ele.formatted_intro(),
                ];

                if !attrs.is_empty() {
                    lines.push("  Remaining attributes:".into());
                    lines.push(format!(
                        "  {}",
                        format_attrs(attrs.iter().copied())
                    ));
                }

                for (i, slot) in children.iter().enumerate() {
                    lines.push(format!("  Remaining child {i}:"));
                    lines.push(format!("  {}", slot.ele().formatted_intro()));

                    for (j, e) in slot.errors().iter().enumerate() {
                        lines.push(format!("    Error {j}"));
                        lines.extend(indent(e, 6));
                    }
                }

                if let Some(text) = text {
                    lines.push("  Remaining text:".into());
                    lines.push(format!("  {}", format_text(text)));
                }

                lines
            }

            Self::NoMatchingChild { ele, errors } => {
                let mut lines = vec![
                    format!("No matching child ({} tried)", errors.len()),
                    ele.formatted_intro(),
                ];

                for (i, ChildError(child, e)) in errors.iter().enumerate() {
                    lines.push(format!("  Child {i}:"));
                    lines.push(format!("  {}", child.formatted_intro()));
                    lines.extend(indent(e, 4));
                }

                lines
            }

            Self::NoMatchingVariant { ele, errors } => {
                let mut lines = vec![
                    format!("No matching variant ({} tried)", errors.len()),
                    ele.formatted_intro(),
                ];

                for (i, e) in errors.iter().enumerate() {
                    lines.push(format!("  Variant {i}:"));
                    lines.extend(indent(e, 4));
                }

                lines
            }
        }
    }
}

/// Lines of `e` indented by `width` spaces.
fn indent(e: &ParseError, width: usize) -> impl Iterator<Item = String> {
    e.formatted_lines()
        .into_iter()
        .map(move |line| format!("{:width$}{line}", ""))
}

impl<'a> Display for ParseError<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.formatted_lines().join("\n"))
    }
}

impl<'a> std::error::Error for ParseError<'a> {}
