// XML Schema elements
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

use super::{complex_type, documentation, max_occurs, min_occurs, ComplexType};
use crate::parse::prelude::*;

/// `xs:element` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Name of the element,
    ///   absent for references.
    pub name: Option<String>,
    pub doc: String,
    pub ty: ElementType,
    pub min_occurs: u32,
    /// Maximum number of occurrences,
    ///   or [`None`] if unbounded.
    pub max_occurs: Option<u32>,
}

/// Type of an [`Element`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementType {
    /// Named type (`@type`).
    Ref(String),
    /// Anonymous `xs:complexType` child.
    Def(ComplexType),
}

pub fn element<'a>(s: &mut Scope<'a>) -> ParseResult<'a, Element> {
    s.match_name("element")?;

    s.discard_attr("final");
    s.discard_attr("fixed");

    match s.attr_opt("nillable") {
        None | Some("false") => (),
        Some(_) => Err(ParseError::other("Nillable elements not supported"))?,
    }

    let ty = s.one_of(|v| {
        v.variant(|s| Ok(ElementType::Ref(s.attr("type")?.into())))
            .variant(|s| Ok(ElementType::Def(s.child(complex_type)?)));
    })?;

    Ok(Element {
        name: s.attr_opt("name").map(String::from),
        doc: documentation(s),
        ty,
        min_occurs: min_occurs(s)?,
        max_occurs: max_occurs(s)?,
    })
}
