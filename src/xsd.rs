// XML Schema grammar
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

//! Grammar for a subset of XML Schema (XSD).
//!
//! This grammar is written entirely in terms of the public
//!   [combinators](crate::parse) and so doubles as a non-trivial example
//!   of their use.
//! Each rule is a function of the form
//!   `fn(&mut Scope<'a>) -> ParseResult<'a, T>`
//!   producing an owned value that does not borrow from the tree.
//!
//! Supported Subset
//! ================
//! The supported subset is what is needed to describe the shape of data:
//!
//!   - top-level [`element`]s,
//!       [`complex_type`]s,
//!       [`simple_type`]s,
//!       and [`attribute_group`]s
//!       (see [`schema`]);
//!   - [`sequence`] and [`choice`] content models of complex types;
//!   - [`attribute`]s;
//!   - simple types restricted by length or enumeration,
//!       lists,
//!       unions,
//!       and aliases;
//!       and
//!   - `annotation/documentation` on most of the above
//!       (see [`documentation`]).
//!
//! Anything outside of this subset is reported as an unparsed item by
//!   [`parse::run`](crate::parse::run),
//!     with the exception of a few items that are explicitly discarded
//!     because they do not affect the shape of data
//!       (e.g. `xs:any`, `xs:anyAttribute`, `xs:import`).
//! Namespace prefixes on element names have already been stripped by the
//!   [reader](crate::tree::reader),
//!     so rules match on local names only.

mod attribute;
mod common;
mod complex_type;
mod element;
mod schema;
mod sequence;
mod simple_type;

pub use attribute::{attribute, attribute_group, Attribute, AttributeGroup, AttributeType};
pub use common::{documentation, max_occurs, min_occurs};
pub use complex_type::{complex_type, ComplexType, Content};
pub use element::{element, Element, ElementType};
pub use schema::{schema, Schema, SchemaItem};
pub use sequence::{choice, sequence, Choice, Sequence};
pub use simple_type::{simple_type, SimpleType, SimpleTypeKind};
