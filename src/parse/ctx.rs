// Parsing context
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

//! Items of an element that remain to be parsed.
//!
//! A [`ParseContext`] begins as a view of everything in an [`Element`]
//!   and shrinks as combinators consume attributes,
//!   children,
//!   and text.
//! A context with nothing left is _drained_.
//!
//! Children carry the errors of every failed attempt to parse them
//!   ([`ChildSlot`]),
//!     so that a child that nothing was able to parse can explain itself
//!     when it is reported as a remaining item.

use super::{ParseError, ParseResult};
use crate::tree::{Attr, Element};

/// A child element that has not yet been parsed,
///   along with the errors of each failed attempt to parse it,
///   oldest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildSlot<'a> {
    ele: &'a Element,
    errors: Vec<ParseError<'a>>,
}

impl<'a> ChildSlot<'a> {
    /// A child that has not yet been attempted.
    pub fn new(ele: &'a Element) -> Self {
        Self {
            ele,
            errors: vec![],
        }
    }

    #[inline]
    pub fn ele(&self) -> &'a Element {
        self.ele
    }

    /// Errors from each failed attempt,
    ///   in the order that they were attempted.
    #[inline]
    pub fn errors(&self) -> &[ParseError<'a>] {
        &self.errors
    }

    /// Error from the most recent failed attempt.
    ///
    /// This is the most specific explanation of why the child did not
    ///   match the rule that was just tried.
    #[inline]
    pub fn last_error(&self) -> Option<&ParseError<'a>> {
        self.errors.last()
    }

    /// Record another failed attempt.
    pub fn with_error(mut self, e: ParseError<'a>) -> Self {
        self.errors.push(e);
        self
    }
}

/// Attributes,
///   children,
///   and text of an element that remain to be parsed.
///
/// A combinator that succeeds must remove exactly what it consumed.
/// A combinator that fails may leave the context partially modified;
///   restoring it is the responsibility of ordered choice
///     (see [`Scope::one_of`](super::Scope::one_of)).
///
/// Cloning produces an independent context;
///   the element itself is shared since it is immutable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseContext<'a> {
    /// Element from which this context was derived.
    ele: &'a Element,
    attrs: Vec<&'a Attr>,
    children: Vec<ChildSlot<'a>>,
    text: Option<&'a str>,
}

impl<'a> ParseContext<'a> {
    /// Context containing every item of `ele`.
    pub fn for_element(ele: &'a Element) -> Self {
        Self {
            ele,
            attrs: ele.attrs().iter().collect(),
            children: ele.children().iter().map(ChildSlot::new).collect(),
            text: ele.text(),
        }
    }

    /// Element from which this context was derived,
    ///   unaffected by parsing.
    #[inline]
    pub fn ele(&self) -> &'a Element {
        self.ele
    }

    #[inline]
    pub fn name(&self) -> &'a str {
        self.ele.name()
    }

    /// Attributes that remain to be parsed.
    #[inline]
    pub fn attrs(&self) -> &[&'a Attr] {
        &self.attrs
    }

    /// Children that remain to be parsed.
    #[inline]
    pub fn children(&self) -> &[ChildSlot<'a>] {
        &self.children
    }

    /// Text,
    ///   if it remains to be parsed.
    #[inline]
    pub fn text(&self) -> Option<&'a str> {
        self.text
    }

    /// Whether nothing remains to be parsed.
    pub fn is_drained(&self) -> bool {
        self.attrs.is_empty() && self.children.is_empty() && self.text.is_none()
    }

    /// Fail with [`ParseError::RemainingItems`] unless the context is
    ///   drained.
    pub fn ensure_drained(&self) -> ParseResult<'a, ()> {
        if self.is_drained() {
            Ok(())
        } else {
            Err(self.clone().into_remaining_items())
        }
    }

    /// Like [`ParseContext::ensure_drained`],
    ///   but consumes the context rather than copying its residue.
    pub fn into_drained(self) -> ParseResult<'a, ()> {
        if self.is_drained() {
            Ok(())
        } else {
            Err(self.into_remaining_items())
        }
    }

    fn into_remaining_items(self) -> ParseError<'a> {
        ParseError::RemainingItems {
            ele: self.ele,
            attrs: self.attrs,
            children: self.children,
            text: self.text,
        }
    }

    /// Remove and return the attribute named `key`,
    ///   if present.
    pub(super) fn take_attr(&mut self, key: &str) -> Option<&'a Attr> {
        self.attrs
            .iter()
            .position(|attr| attr.name() == key)
            .map(|pos| self.attrs.remove(pos))
    }

    /// Keep only the attributes satisfying `keep`.
    pub(super) fn retain_attrs<F: FnMut(&Attr) -> bool>(&mut self, mut keep: F) {
        self.attrs.retain(|attr| keep(attr))
    }

    /// Remove all remaining children,
    ///   leaving the context with none.
    pub(super) fn take_children(&mut self) -> Vec<ChildSlot<'a>> {
        std::mem::take(&mut self.children)
    }

    /// Replace the remaining children.
    pub(super) fn set_children(&mut self, children: Vec<ChildSlot<'a>>) {
        self.children = children;
    }

    /// Keep only the children satisfying `keep`.
    pub(super) fn retain_children<F>(&mut self, mut keep: F)
    where
        F: FnMut(&ChildSlot<'a>) -> bool,
    {
        self.children.retain(|slot| keep(slot))
    }

    /// Remove and return the remaining text.
    pub(super) fn take_text(&mut self) -> Option<&'a str> {
        self.text.take()
    }
}
