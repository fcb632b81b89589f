// Ordered choice
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

//! Ordered choice between alternative rules.
//!
//! ```
//! use elemparse::{parse::{self, ParseResult, Scope}, tree};
//!
//! #[derive(Debug, PartialEq)]
//! enum Shape {
//!     Square(u32),
//!     Circle(u32),
//! }
//!
//! fn shape<'a>(s: &mut Scope<'a>) -> ParseResult<'a, Shape> {
//!     s.one_of(|v| {
//!         v.variant(|s| {
//!             s.match_name("square")?;
//!             Ok(Shape::Square(s.attr_parsed("side")?))
//!         })
//!         .variant(|s| {
//!             s.match_name("circle")?;
//!             Ok(Shape::Circle(s.attr_parsed("r")?))
//!         });
//!     })
//! }
//!
//! let root = tree::read_str(r#"<shape><circle r="3"/></shape>"#).unwrap();
//! let result = parse::run(&root, |s| s.child(shape));
//!
//! assert_eq!(result, Ok(Shape::Circle(3)));
//! ```
//!
//! Each alternative runs against its own copy of the context,
//!   so a failed alternative leaves no trace other than its error.
//! The first alternative to succeed wins and its context replaces the
//!   original;
//!     later alternatives are not run at all.
//! If every alternative fails,
//!   the original context is untouched and the errors of all
//!   alternatives are reported together,
//!     in declaration order,
//!     as [`ParseError::NoMatchingVariant`].

use super::{
    trace::{DefaultTrace, ParserTrace},
    ParseContext, ParseError, ParseResult, Scope,
};

/// Alternatives of an ordered choice.
///
/// See [`Scope::one_of`].
#[derive(Debug)]
pub struct Variants<'c, 'a, T> {
    /// Context being matched,
    ///   modified only by a successful alternative.
    orig: &'c mut ParseContext<'a>,

    /// Result of the first successful alternative.
    result: Option<T>,

    /// Error of each alternative that has failed so far.
    ///
    /// This is used only if all alternatives fail.
    errors: Vec<ParseError<'a>>,
}

impl<'c, 'a, T> Variants<'c, 'a, T> {
    fn new(orig: &'c mut ParseContext<'a>) -> Self {
        Self {
            orig,
            result: None,
            errors: vec![],
        }
    }

    /// Try `rule` unless an earlier alternative already succeeded.
    pub fn variant<F>(&mut self, rule: F) -> &mut Self
    where
        F: FnOnce(&mut Scope<'a>) -> ParseResult<'a, T>,
    {
        if self.result.is_some() {
            return self;
        }

        // `rule` may modify the context even if it fails.
        let mut scope = Scope::from_ctx(self.orig.clone());

        let attempt = rule(&mut scope);
        DefaultTrace::trace_variant(self.orig.ele(), self.errors.len(), &attempt);

        match attempt {
            Ok(value) => {
                self.result = Some(value);
                *self.orig = scope.into_ctx();
            }
            Err(e) => self.errors.push(e),
        }

        self
    }

    /// Whether an alternative has succeeded.
    pub fn is_resolved(&self) -> bool {
        self.result.is_some()
    }

    fn into_result(self) -> ParseResult<'a, T> {
        match self.result {
            Some(value) => Ok(value),
            None => Err(ParseError::NoMatchingVariant {
                ele: self.orig.ele(),
                errors: self.errors,
            }),
        }
    }
}

impl<'a> Scope<'a> {
    /// Commit to the first alternative declared in `variants` that
    ///   succeeds.
    ///
    /// Alternatives are declared by calling [`Variants::variant`].
    /// If none succeeds,
    ///   this fails with [`ParseError::NoMatchingVariant`] and the scope
    ///   is left exactly as it was.
    pub fn one_of<T, F>(&mut self, variants: F) -> ParseResult<'a, T>
    where
        F: FnOnce(&mut Variants<'_, 'a, T>),
    {
        let mut vs = Variants::new(self.ctx_mut());
        variants(&mut vs);
        vs.into_result()
    }
}
