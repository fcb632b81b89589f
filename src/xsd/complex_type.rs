// XML Schema complex types
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

//! `xs:complexType`.
//!
//! Two forms are recognized:
//!
//!   1. Extension of a base type through
//!        `complexContent/extension[@base]`,
//!        with attributes and content nested within the extension;
//!        and
//!   2. A plain definition with attributes and content as direct
//!        children.
//!
//! Each is tried in that order.

use super::{attribute, choice, documentation, sequence, Attribute, Choice, Sequence};
use crate::parse::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplexType {
    /// Name of the type,
    ///   absent for anonymous types.
    pub name: Option<String>,
    pub doc: String,
    /// Type being extended,
    ///   if any.
    pub base: Option<String>,
    /// Names of referenced `xs:attributeGroup`s.
    pub attribute_groups: Vec<String>,
    pub attributes: Vec<Attribute>,
    pub content: Content,
}

/// Content model of a [`ComplexType`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Sequence(Sequence),
    Choice(Choice),
    /// Attributes only.
    None,
}

pub fn complex_type<'a>(s: &mut Scope<'a>) -> ParseResult<'a, ComplexType> {
    s.match_name("complexType")?;
    s.discard_attr("abstract");

    let name = s.attr_opt("name").map(String::from);
    let doc = documentation(s);

    s.one_of(|v| {
        v.variant(|s| {
            s.child(|s| {
                s.match_name("complexContent")?;
                s.child(|s| {
                    s.match_name("extension")?;
                    let base = s.attr("base")?.to_string();

                    Ok(ComplexType {
                        name: name.clone(),
                        doc: doc.clone(),
                        base: Some(base),
                        attribute_groups: attribute_group_refs(s),
                        attributes: s.children_opt(attribute),
                        content: content(s)?,
                    })
                })
            })
        })
        .variant(|s| {
            let attribute_groups = attribute_group_refs(s);
            let attributes = s.children_opt(attribute);
            s.discard_children_named("anyAttribute");

            Ok(ComplexType {
                name: name.clone(),
                doc: doc.clone(),
                base: None,
                attribute_groups,
                attributes,
                content: content(s)?,
            })
        });
    })
}

/// `@ref` of each `xs:attributeGroup` child.
fn attribute_group_refs(s: &mut Scope) -> Vec<String> {
    s.children_opt(|s| {
        s.match_name("attributeGroup")?;
        Ok(s.attr("ref")?.to_string())
    })
}

/// Content model,
///   which must account for everything that remains.
fn content<'a>(s: &mut Scope<'a>) -> ParseResult<'a, Content> {
    s.one_of(|v| {
        v.variant(|s| Ok(Content::Sequence(s.child(sequence)?)))
            .variant(|s| Ok(Content::Choice(s.child(choice)?)))
            // Leftovers are reported alongside the other variants.
            .variant(|s| {
                s.ensure_drained()?;
                Ok(Content::None)
            });
    })
}
