// Parsing scope and primitive combinators
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

//! Scope of a parsing rule and its primitive combinators.
//!
//! Primitives operate on attributes and text;
//!   children are handled by the
//!   [children-matching combinators](super::children),
//!     and alternatives by [ordered choice](super::variant).

use super::{ParseContext, ParseError, ParseResult};
use crate::tree::{Attr, Element};
use std::{fmt::Display, str::FromStr};

/// Handle through which a rule consumes the items of one element.
///
/// Each [`Scope`] owns the [`ParseContext`] of a single parse attempt.
/// A rule receives a `&mut Scope` and returns a [`ParseResult`];
///   if it succeeds,
///     it must have removed from the context precisely the items it
///     consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scope<'a> {
    ctx: ParseContext<'a>,
}

impl<'a> Scope<'a> {
    /// Scope for a fresh parse of `ele`.
    pub fn new(ele: &'a Element) -> Self {
        Self::from_ctx(ParseContext::for_element(ele))
    }

    pub(super) fn from_ctx(ctx: ParseContext<'a>) -> Self {
        Self { ctx }
    }

    pub(super) fn into_ctx(self) -> ParseContext<'a> {
        self.ctx
    }

    pub(super) fn ctx_mut(&mut self) -> &mut ParseContext<'a> {
        &mut self.ctx
    }

    /// Items that remain to be parsed.
    #[inline]
    pub fn ctx(&self) -> &ParseContext<'a> {
        &self.ctx
    }

    /// Element being parsed.
    #[inline]
    pub fn ele(&self) -> &'a Element {
        self.ctx.ele()
    }

    /// Name of the element being parsed.
    #[inline]
    pub fn name(&self) -> &'a str {
        self.ctx.name()
    }

    /// Fail unless the element is named `expected`.
    ///
    /// This consumes nothing.
    pub fn match_name(&self, expected: &str) -> ParseResult<'a, ()> {
        if self.name() == expected {
            Ok(())
        } else {
            Err(ParseError::other(format!("Element name is not {expected}")))
        }
    }

    /// Take the value of the attribute `key`,
    ///   if present.
    pub fn attr_opt(&mut self, key: &str) -> Option<&'a str> {
        self.ctx.take_attr(key).map(Attr::value)
    }

    /// Take the value of the attribute `key`,
    ///   failing if it is not present.
    pub fn attr(&mut self, key: &str) -> ParseResult<'a, &'a str> {
        self.attr_opt(key)
            .ok_or_else(|| ParseError::other(format!("Attribute {key} not found")))
    }

    /// Take the attribute `key`,
    ///   failing unless it is present with the value `expected`.
    pub fn attr_eq(&mut self, key: &str, expected: &str) -> ParseResult<'a, ()> {
        match self.attr(key)? {
            value if value == expected => Ok(()),
            value => Err(ParseError::other(format!(
                "Attribute {key} has value {value}, not {expected}"
            ))),
        }
    }

    /// Take the attribute `key` and parse its value as `F`.
    pub fn attr_parsed<F>(&mut self, key: &str) -> ParseResult<'a, F>
    where
        F: FromStr,
        F::Err: Display,
    {
        let value = self.attr(key)?;
        parse_value(key, value)
    }

    /// Take the attribute `key`,
    ///   if present,
    ///   and parse its value as `F`.
    pub fn attr_opt_parsed<F>(&mut self, key: &str) -> ParseResult<'a, Option<F>>
    where
        F: FromStr,
        F::Err: Display,
    {
        self.attr_opt(key)
            .map(|value| parse_value(key, value))
            .transpose()
    }

    /// Remove the attribute `key` without inspecting it.
    ///
    /// This is how a rule acknowledges an attribute that it does not
    ///   care about;
    ///     otherwise it would be reported as a remaining item.
    pub fn discard_attr(&mut self, key: &str) {
        self.ctx.take_attr(key);
    }

    /// Remove every remaining attribute whose name begins with `prefix`.
    pub fn discard_attrs_with_prefix(&mut self, prefix: &str) {
        self.ctx.retain_attrs(|attr| !attr.name().starts_with(prefix));
    }

    /// Take the text of the element,
    ///   or the empty string if there is none.
    pub fn text(&mut self) -> &'a str {
        self.ctx.take_text().unwrap_or("")
    }

    /// Take the text of the element,
    ///   failing if it contains anything other than whitespace.
    pub fn blank_text(&mut self) -> ParseResult<'a, ()> {
        if self.text().trim().is_empty() {
            Ok(())
        } else {
            Err(ParseError::other("Text is not blank"))
        }
    }

    /// Fail with [`ParseError::RemainingItems`] unless nothing remains to
    ///   be parsed.
    pub fn ensure_drained(&self) -> ParseResult<'a, ()> {
        self.ctx.ensure_drained()
    }
}

fn parse_value<'a, F>(key: &str, value: &str) -> ParseResult<'a, F>
where
    F: FromStr,
    F::Err: Display,
{
    value.parse().map_err(|e| {
        ParseError::other(format!(
            "Attribute {key} has invalid value {value}: {e}"
        ))
    })
}
