// Element tree errors
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

//! Errors constructing an element tree or reading one from XML.

use std::{fmt::Display, io, str::Utf8Error};

/// Error attempting to produce an [`Element`](super::Element).
#[derive(Debug)]
pub enum Error {
    /// Element name is empty.
    EmptyName,

    /// Element has both child elements and non-blank text.
    MixedContent(String),

    /// The same attribute name appears twice on one element.
    DuplicateAttr {
        ele: String,
        attr: String,
        first: String,
        second: String,
    },

    /// Node kind other than element, text, or comment inside an element.
    UnsupportedNode { ele: String, kind: &'static str },

    /// Non-blank text appears before or after the root element.
    TextOutsideRoot(String),

    /// A second root element was found.
    MultipleRoots { first: String, second: String },

    /// Input contained no element at all.
    NoRoot,

    /// Input ended while the named element was still open.
    UnclosedElement(String),

    /// Closing tag without a corresponding opening tag.
    UnexpectedClose(String),

    /// Failure reading the input.
    Io(io::Error),

    /// A UTF-8 error together with the byte slice that caused it.
    ///
    /// By storing the raw bytes instead of a string,
    ///   we allow the displayer to determine how to handle invalid UTF-8
    ///   encodings.
    InvalidUtf8(Utf8Error, Vec<u8>),

    /// Error from the underlying XML parser along with the byte position
    ///   at which it was encountered.
    QuickXmlError(quick_xml::Error, usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "element name must be non-empty"),
            Self::MixedContent(name) => {
                write!(f, "mixed content is not supported (element `{name}`)")
            }
            Self::DuplicateAttr {
                ele,
                attr,
                first,
                second,
            } => write!(
                f,
                "element `{ele}` contains duplicate attribute `{attr}` \
                   (values `{first}` and `{second}`)"
            ),
            Self::UnsupportedNode { ele, kind } => {
                write!(f, "element `{ele}` contains unsupported {kind}")
            }
            Self::TextOutsideRoot(text) => {
                write!(f, "text outside of root element: `{text}`")
            }
            Self::MultipleRoots { first, second } => write!(
                f,
                "found second root element `{second}` \
                   after root element `{first}`"
            ),
            Self::NoRoot => write!(f, "document contains no root element"),
            Self::UnclosedElement(name) => {
                write!(f, "unexpected end of input: `{name}` is not closed")
            }
            Self::UnexpectedClose(name) => {
                write!(f, "closing tag `{name}` has no opening tag")
            }
            Self::Io(e) => Display::fmt(e, f),
            Self::InvalidUtf8(inner, bytes) => {
                write!(
                    f,
                    "{} for string `{}`",
                    inner,
                    String::from_utf8_lossy(bytes)
                )
            }
            Self::QuickXmlError(inner, pos) => {
                write!(f, "XML error at byte {pos}: {inner}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::InvalidUtf8(err, ..) => Some(err),
            Self::QuickXmlError(err, ..) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<(Utf8Error, &[u8])> for Error {
    fn from((err, bytes): (Utf8Error, &[u8])) -> Self {
        Self::InvalidUtf8(err, bytes.to_owned())
    }
}
