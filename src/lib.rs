// Declarative element tree parsing (ELEMPARSE)
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

//! Declarative parser combinators over a generic element tree.
//!
//! This crate is composed of three layers:
//!
//!   - [`tree`] is an immutable model of XML-like elements,
//!       along with a reader that produces it from XML;
//!   - [`parse`] is the combinator engine that turns an element tree
//!       into typed values,
//!       producing diagnostics that explain every path attempted when
//!       parsing fails;
//!       and
//!   - [`xsd`] is a grammar written using that engine that parses a
//!       subset of XML Schema.
//!
//! The `elemparse` binary ties these together on the command line.

// We build docs for private items.
#![allow(rustdoc::private_intra_doc_links)]

#[macro_use]
extern crate static_assertions;

pub mod parse;
pub mod tree;
pub mod xsd;
