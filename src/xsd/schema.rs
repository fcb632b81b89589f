// XML Schema root
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

use super::{
    attribute_group, complex_type, documentation, element, simple_type,
    AttributeGroup, ComplexType, Element, SimpleType,
};
use crate::parse::prelude::*;

/// `xs:schema` document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    pub target_namespace: Option<String>,
    pub doc: String,
    /// Top-level definitions in document order.
    pub items: Vec<SchemaItem>,
}

/// Top-level definition of a [`Schema`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaItem {
    Element(Element),
    ComplexType(ComplexType),
    SimpleType(SimpleType),
    AttributeGroup(AttributeGroup),
}

/// `xs:schema`.
///
/// Namespace declarations,
///   form defaults,
///   and `import`s and `include`s are discarded;
///     only definitions within this document are parsed.
/// Only the first `annotation` is kept as documentation.
pub fn schema<'a>(s: &mut Scope<'a>) -> ParseResult<'a, Schema> {
    s.match_name("schema")?;

    s.discard_attrs_with_prefix("xmlns");
    s.discard_attr("elementFormDefault");
    s.discard_attr("attributeFormDefault");
    s.discard_attr("version");

    let target_namespace = s.attr_opt("targetNamespace").map(String::from);

    s.discard_children_named("import");
    s.discard_children_named("include");

    let doc = documentation(s);
    s.discard_children_named("annotation");

    Ok(Schema {
        target_namespace,
        doc,
        items: s.children_opt(schema_item),
    })
}

fn schema_item<'a>(s: &mut Scope<'a>) -> ParseResult<'a, SchemaItem> {
    s.one_of(|v| {
        v.variant(|s| Ok(SchemaItem::Element(element(s)?)))
            .variant(|s| Ok(SchemaItem::ComplexType(complex_type(s)?)))
            .variant(|s| Ok(SchemaItem::SimpleType(simple_type(s)?)))
            .variant(|s| Ok(SchemaItem::AttributeGroup(attribute_group(s)?)));
    })
}
