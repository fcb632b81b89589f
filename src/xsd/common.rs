// Rules shared by XML Schema constructs
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

use crate::parse::prelude::*;

/// Text of the `annotation/documentation` child,
///   trimmed,
///   or the empty string if there is no annotation.
///
/// An `annotation` that does not contain exactly a `documentation`
///   child is not consumed and will be reported as a remaining item.
pub fn documentation(s: &mut Scope) -> String {
    s.child_opt(|s| {
        s.match_name("annotation")?;
        s.child(|s| {
            s.match_name("documentation")?;
            Ok(s.text().trim().to_string())
        })
    })
    .unwrap_or_default()
}

/// Value of `@minOccurs`,
///   defaulting to `1`.
pub fn min_occurs<'a>(s: &mut Scope<'a>) -> ParseResult<'a, u32> {
    Ok(s.attr_opt_parsed("minOccurs")?.unwrap_or(1))
}

/// Value of `@maxOccurs`,
///   defaulting to `1`.
///
/// [`None`] represents `unbounded`.
pub fn max_occurs<'a>(s: &mut Scope<'a>) -> ParseResult<'a, Option<u32>> {
    match s.attr_opt("maxOccurs") {
        None => Ok(Some(1)),
        Some("unbounded") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(|e| {
            ParseError::other(format!(
                "Attribute maxOccurs has invalid value {value}: {e}"
            ))
        }),
    }
}
