// XML Schema attributes
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

use super::{documentation, simple_type, SimpleType};
use crate::parse::prelude::*;

/// `xs:attribute` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub doc: String,
    pub ty: AttributeType,
    /// `@use`,
    ///   e.g. `required`.
    pub use_: Option<String>,
    pub default: Option<String>,
}

/// Type of an [`Attribute`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeType {
    /// Named type (`@type`).
    Ref(String),
    /// Anonymous `xs:simpleType` child.
    Def(SimpleType),
}

pub fn attribute<'a>(s: &mut Scope<'a>) -> ParseResult<'a, Attribute> {
    s.match_name("attribute")?;

    // Some schemas contain whitespace within attribute declarations.
    s.blank_text()?;

    let ty = s.one_of(|v| {
        v.variant(|s| Ok(AttributeType::Ref(s.attr("type")?.into())))
            .variant(|s| Ok(AttributeType::Def(s.child(simple_type)?)));
    })?;

    Ok(Attribute {
        name: s.attr("name")?.into(),
        doc: documentation(s),
        ty,
        use_: s.attr_opt("use").map(String::from),
        default: s.attr_opt("default").map(String::from),
    })
}

/// `xs:attributeGroup` definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeGroup {
    pub name: String,
    pub attributes: Vec<Attribute>,
}

pub fn attribute_group<'a>(s: &mut Scope<'a>) -> ParseResult<'a, AttributeGroup> {
    s.match_name("attributeGroup")?;

    Ok(AttributeGroup {
        name: s.attr("name")?.into(),
        attributes: s.children(attribute)?,
    })
}
