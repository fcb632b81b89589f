// Element tree representation
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

//! Generic, immutable element tree.
//!
//! An [`Element`] is the input to the [combinator engine](crate::parse).
//! It is a deliberately simple model of an XML element:
//!
//!   - a non-empty local name;
//!   - an ordered list of attributes ([`AttrList`]);
//!   - an ordered list of child elements; and
//!   - optional text.
//!
//! Mixed content is not supported:
//!   an element may have child elements _or_ text,
//!     but never both.
//! This invariant is enforced by [`Element::new`],
//!   which is the only way to construct an element.
//!
//! Trees are usually produced from XML by the [`reader`] module
//!   (see [`read_str`] and [`read_file`]),
//!     which is responsible for stripping namespace prefixes,
//!     skipping comments,
//!     and rejecting duplicate attributes;
//!       none of that is re-validated here.
//!
//! Diagnostic Rendering
//! ====================
//! Parse errors embed elements by reference and render them using
//!   [`Element::formatted_intro`] (a single line naming the element and
//!   its attributes) and [`Element::formatted_lines`] (a recursive dump).
//! These renderings are part of the diagnostic output and must remain
//!   stable:
//!
//! ```text
//! - schema @ targetNamespace=urn:example
//!   - element @ name=foo,type=xs:string
//!   - annotation
//!     - documentation
//!       # Some documentation text\n  spanning lines
//! ```

mod attr;
mod error;
pub mod reader;

pub use attr::{Attr, AttrList};
pub use error::Error;
pub use reader::{read_file, read_str, ElementReader};

use std::fmt::Display;

/// Maximum number of characters of text shown by [`format_text`].
pub const FORMATTED_TEXT_MAX_CHARS: usize = 70;

/// Result of a tree construction or ingestion operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Element node.
///
/// Elements are immutable once constructed.
/// Accessors return borrowed data so that the
///   [combinator engine](crate::parse) and its errors can refer to the
///   tree without copying it.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Element {
    name: String,
    /// Zero or more attributes, in document order.
    attrs: AttrList,
    /// Zero or more child elements, in document order.
    children: Vec<Element>,
    /// Text content,
    ///   present only if the element has no children.
    text: Option<String>,
}

assert_impl_all!(Element: Send, Sync);

impl Element {
    /// Construct a new element,
    ///   verifying that its name is non-empty and that it does not have
    ///   both children and text.
    ///
    /// An element without children may still carry blank text;
    ///   whether that is significant is up to the grammar.
    pub fn new<S: Into<String>>(
        name: S,
        attrs: AttrList,
        children: Vec<Element>,
        text: Option<String>,
    ) -> Result<Self> {
        let name = name.into();

        if name.is_empty() {
            return Err(Error::EmptyName);
        }

        if !children.is_empty() && text.is_some() {
            return Err(Error::MixedContent(name));
        }

        Ok(Self {
            name,
            attrs,
            children,
            text,
        })
    }

    /// Element local name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attributes of this element.
    #[inline]
    pub fn attrs(&self) -> &AttrList {
        &self.attrs
    }

    /// Child elements of this element.
    #[inline]
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Text of this element,
    ///   if any.
    #[inline]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// One-line description of the element:
    ///   its name,
    ///   followed by `@` and its attributes if it has any.
    pub fn formatted_intro(&self) -> String {
        let attrs = format_attrs(&self.attrs);

        if attrs.is_empty() {
            self.name.clone()
        } else {
            format!("{} @ {}", self.name, attrs)
        }
    }

    /// Recursive dump of the element,
    ///   one line per element,
    ///   with text (if any) on a line of its own.
    pub fn formatted_lines(&self) -> Vec<String> {
        let intro = format!("- {}", self.formatted_intro());

        match &self.text {
            Some(text) => vec![intro, format!("  # {}", format_text(text))],
            None => std::iter::once(intro)
                .chain(
                    self.children
                        .iter()
                        .flat_map(Element::formatted_lines)
                        .map(|line| format!("  {line}")),
                )
                .collect(),
        }
    }

    /// [`Element::formatted_lines`] joined by newlines.
    pub fn formatted(&self) -> String {
        self.formatted_lines().join("\n")
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.formatted())
    }
}

/// Render attributes as `k=v` pairs separated by commas.
///
/// An empty attribute list renders as the empty string.
pub fn format_attrs<'x, I>(attrs: I) -> String
where
    I: IntoIterator<Item = &'x Attr>,
{
    attrs
        .into_iter()
        .map(|attr| format!("{}={}", attr.name(), attr.value()))
        .collect::<Vec<_>>()
        .join(",")
}

/// Render text for diagnostics on a single line.
///
/// The text is trimmed and truncated to [`FORMATTED_TEXT_MAX_CHARS`]
///   characters,
///     and newlines are replaced by a literal `\n`.
pub fn format_text(text: &str) -> String {
    text.trim()
        .chars()
        .take(FORMATTED_TEXT_MAX_CHARS)
        .collect::<String>()
        .replace('\n', "\\n")
}

#[cfg(test)]
mod test;
