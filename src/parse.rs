// Element tree parsing framework
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

//! Declarative combinators for parsing an [`Element`] tree into typed
//!   values.
//!
//! A _rule_ is any function taking a `&mut` [`Scope`] and returning a
//!   [`ParseResult`].
//! Rules are composed from the primitives on [`Scope`]:
//!
//!   - attributes and text
//!       ([`Scope::attr`], [`Scope::text`], and friends);
//!   - children
//!       ([`Scope::child`], [`Scope::children`], and friends),
//!       which run a rule against each remaining child in isolation;
//!       and
//!   - ordered choice ([`Scope::one_of`]).
//!
//! Parsing is _consumptive_:
//!   each scope tracks what remains of its element
//!     (a [`ParseContext`]),
//!   and every primitive removes what it parses.
//! A rule has parsed an element only once nothing remains;
//!   anything left over is an error.
//! This means that a grammar must account for every attribute,
//!   child,
//!   and text of the input,
//!     even if only to explicitly discard it
//!       (see [`Scope::discard_attr`] and
//!        [`Scope::discard_children_named`]).
//!
//! ```
//! use elemparse::{parse, tree};
//!
//! let point = tree::read_str(r#"<point x="1" y="2"/>"#).unwrap();
//!
//! let xy = parse::run(&point, |s| {
//!     s.match_name("point")?;
//!     Ok((s.attr_parsed::<i32>("x")?, s.attr_parsed::<i32>("y")?))
//!   });
//!
//! assert_eq!(xy, Ok((1, 2)));
//! ```
//!
//! Failure
//! =======
//! A failing rule returns a [`ParseError`].
//! Errors are recoverable:
//!   children matching records them against the child that failed,
//!     and ordered choice records them against the alternative that
//!     failed and restores the context.
//! An error escapes to the caller only from a rule that is not run by
//!   either of those,
//!     which is ultimately [`run`].
//! The error that escapes explains every path that was attempted;
//!   see [`ParseError`] for how it is rendered.

mod children;
mod ctx;
mod error;
mod scope;
mod trace;
mod variant;

pub use ctx::{ChildSlot, ParseContext};
pub use error::{ChildError, ParseError, ParseResult};
pub use scope::Scope;
pub use variant::Variants;

use crate::tree::Element;

/// Prelude for grammars.
///
/// This contains the types necessary for virtually every rule.
pub mod prelude {
    pub use super::{ParseError, ParseResult, Scope};
}

/// Parse `ele` using `rule`,
///   requiring that it be fully consumed.
///
/// If `rule` succeeds but leaves items of `ele` unparsed,
///   this fails with [`ParseError::RemainingItems`].
pub fn run<'a, T, F>(ele: &'a Element, rule: F) -> ParseResult<'a, T>
where
    F: FnOnce(&mut Scope<'a>) -> ParseResult<'a, T>,
{
    let mut scope = Scope::new(ele);
    let value = rule(&mut scope)?;

    scope.ensure_drained()?;
    Ok(value)
}

#[cfg(test)]
mod test;
