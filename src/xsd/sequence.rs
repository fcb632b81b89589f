// XML Schema content models
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

use super::{documentation, element, max_occurs, min_occurs, Element};
use crate::parse::prelude::*;

/// `xs:sequence` of elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    pub doc: String,
    pub min_occurs: u32,
    pub max_occurs: Option<u32>,
    pub elements: Vec<Element>,
}

/// `xs:sequence`;
///   wildcards (`xs:any`) are discarded.
pub fn sequence<'a>(s: &mut Scope<'a>) -> ParseResult<'a, Sequence> {
    s.match_name("sequence")?;
    s.discard_children_named("any");

    Ok(Sequence {
        doc: documentation(s),
        min_occurs: min_occurs(s)?,
        max_occurs: max_occurs(s)?,
        elements: s.children(element)?,
    })
}

/// `xs:choice` between elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub elements: Vec<Element>,
}

pub fn choice<'a>(s: &mut Scope<'a>) -> ParseResult<'a, Choice> {
    s.match_name("choice")?;

    Ok(Choice {
        elements: s.children(element)?,
    })
}
