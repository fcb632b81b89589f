// Children-matching combinators
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

//! Parse child elements.
//!
//! Every combinator here is built on [`Scope::children_at_most`],
//!   which scans the remaining children exactly once,
//!   left to right,
//!   trying a rule against each until a quota of successes is reached.
//!
//! Matching a child is all-or-nothing:
//!   the rule must succeed _and_ leave nothing of the child unparsed.
//! A child that the rule only partially explained is not a match,
//!   and the [`ParseError::RemainingItems`] explaining what was left over
//!   is recorded against it like any other failure.
//!
//! Children that did not match stay in the context along with the error
//!   of each failed attempt,
//!     so that whatever is still left once the parent has been parsed
//!     can explain why nothing was able to parse it.

use super::{
    trace::{DefaultTrace, ParserTrace},
    ChildError, ParseError, ParseResult, Scope,
};
use crate::tree::Element;
use std::num::NonZeroUsize;

impl<'a> Scope<'a> {
    /// Parse at most `at_most` of the remaining children using `rule`,
    ///   returning the results in the order that the children appear.
    ///
    /// This never fails.
    /// If nothing matched,
    ///   every remaining child was tried and carries one more error than
    ///   it did before.
    /// Once the quota is reached,
    ///   the rest of the children are left untouched.
    pub fn children_at_most<T, F>(
        &mut self,
        at_most: NonZeroUsize,
        mut rule: F,
    ) -> Vec<T>
    where
        F: FnMut(&mut Scope<'a>) -> ParseResult<'a, T>,
    {
        let parent = self.ele();
        let candidates = self.ctx_mut().take_children();

        let mut remaining = Vec::with_capacity(candidates.len());
        let mut result = Vec::new();

        for slot in candidates {
            if result.len() == at_most.get() {
                remaining.push(slot);
                continue;
            }

            let attempt = parse_isolated(slot.ele(), &mut rule);
            DefaultTrace::trace_child(parent, slot.ele(), &attempt);

            match attempt {
                Ok(value) => result.push(value),
                Err(e) => remaining.push(slot.with_error(e)),
            }
        }

        self.ctx_mut().set_children(remaining);
        result
    }

    /// Parse the first remaining child that matches `rule`,
    ///   if any.
    pub fn child_opt<T, F>(&mut self, rule: F) -> Option<T>
    where
        F: FnMut(&mut Scope<'a>) -> ParseResult<'a, T>,
    {
        self.children_at_most(NonZeroUsize::MIN, rule).pop()
    }

    /// Parse the first remaining child that matches `rule`,
    ///   failing with [`ParseError::NoMatchingChild`] if none does.
    pub fn child<T, F>(&mut self, rule: F) -> ParseResult<'a, T>
    where
        F: FnMut(&mut Scope<'a>) -> ParseResult<'a, T>,
    {
        self.child_opt(rule).ok_or_else(|| self.no_matching_child())
    }

    /// Parse every remaining child that matches `rule`.
    pub fn children_opt<T, F>(&mut self, rule: F) -> Vec<T>
    where
        F: FnMut(&mut Scope<'a>) -> ParseResult<'a, T>,
    {
        self.children_at_most(NonZeroUsize::MAX, rule)
    }

    /// Parse every remaining child that matches `rule`,
    ///   failing with [`ParseError::NoMatchingChild`] if none does.
    pub fn children<T, F>(&mut self, rule: F) -> ParseResult<'a, Vec<T>>
    where
        F: FnMut(&mut Scope<'a>) -> ParseResult<'a, T>,
    {
        match self.children_opt(rule) {
            result if result.is_empty() => Err(self.no_matching_child()),
            result => Ok(result),
        }
    }

    /// Remove every remaining child named `name` without parsing it.
    pub fn discard_children_named(&mut self, name: &str) {
        self.ctx_mut()
            .retain_children(|slot| slot.ele().name() != name);
    }

    /// Explain why no remaining child matched the rule just attempted,
    ///   using only the most recent error of each.
    fn no_matching_child(&self) -> ParseError<'a> {
        ParseError::NoMatchingChild {
            ele: self.ele(),
            errors: self
                .ctx()
                .children()
                .iter()
                .filter_map(|slot| {
                    slot.last_error()
                        .map(|e| ChildError(slot.ele(), e.clone()))
                })
                .collect(),
        }
    }
}

/// Parse `ele` in a fresh scope,
///   requiring that `rule` consume all of it.
fn parse_isolated<'a, T, F>(ele: &'a Element, rule: &mut F) -> ParseResult<'a, T>
where
    F: FnMut(&mut Scope<'a>) -> ParseResult<'a, T>,
{
    let mut scope = Scope::new(ele);
    let value = rule(&mut scope)?;

    scope.into_ctx().into_drained()?;
    Ok(value)
}

#[cfg(test)]
mod test;
