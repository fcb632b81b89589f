// XML Schema simple types
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

//! `xs:simpleType`.
//!
//! Only a handful of facets are understood.
//! A restriction is first tried as a length restriction,
//!   then as an enumeration,
//!   and finally as a plain alias of its base type;
//!     the last matches only a restriction with no facets at all,
//!     since any facets would remain unparsed.

use super::documentation;
use crate::parse::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleType {
    /// Name of the type,
    ///   absent for anonymous types.
    pub name: Option<String>,
    pub doc: String,
    pub kind: SimpleTypeKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleTypeKind {
    /// `restriction` with `minLength` and/or `maxLength`.
    Length {
        base: String,
        min_length: Option<u32>,
        max_length: Option<u32>,
    },
    /// `restriction` with one or more `enumeration`s.
    Enum { base: String, values: Vec<String> },
    /// `list[@itemType]`.
    List { item_type: String },
    /// `union[@memberTypes]`.
    Union { member_types: Vec<String> },
    /// `restriction` without facets.
    Alias { base: String },
}

pub fn simple_type<'a>(s: &mut Scope<'a>) -> ParseResult<'a, SimpleType> {
    s.match_name("simpleType")?;

    let name = s.attr_opt("name").map(String::from);
    let doc = documentation(s);

    let kind = s.one_of(|v| {
        v.variant(|s| s.child(restriction))
            .variant(|s| {
                s.child(|s| {
                    s.match_name("list")?;

                    Ok(SimpleTypeKind::List {
                        item_type: s.attr("itemType")?.into(),
                    })
                })
            })
            .variant(|s| {
                s.child(|s| {
                    s.match_name("union")?;

                    Ok(SimpleTypeKind::Union {
                        member_types: s
                            .attr("memberTypes")?
                            .split_whitespace()
                            .map(String::from)
                            .collect(),
                    })
                })
            })
            .variant(|s| {
                s.child(|s| {
                    s.match_name("restriction")?;

                    Ok(SimpleTypeKind::Alias {
                        base: s.attr("base")?.into(),
                    })
                })
            });
    })?;

    Ok(SimpleType { name, doc, kind })
}

/// `restriction` with facets.
fn restriction<'a>(s: &mut Scope<'a>) -> ParseResult<'a, SimpleTypeKind> {
    s.match_name("restriction")?;
    let base = s.attr("base")?;

    s.one_of(|v| {
        v.variant(|s| {
            let min_length = s.child_opt(|s| facet_value(s, "minLength"));
            let max_length = s.child_opt(|s| facet_value(s, "maxLength"));

            if min_length.is_none() && max_length.is_none() {
                return Err(ParseError::other("No length restriction given"));
            }

            Ok(SimpleTypeKind::Length {
                base: base.into(),
                min_length,
                max_length,
            })
        })
        .variant(|s| {
            let values = s.children(|s| {
                s.match_name("enumeration")?;
                Ok(s.attr("value")?.to_string())
            })?;

            Ok(SimpleTypeKind::Enum {
                base: base.into(),
                values,
            })
        });
    })
}

/// Numeric `@value` of the facet `name`.
fn facet_value<'a>(s: &mut Scope<'a>, name: &str) -> ParseResult<'a, u32> {
    s.match_name(name)?;
    s.attr_parsed("value")
}
