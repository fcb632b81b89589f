// Element attributes
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

//! Element attributes.
//!
//! See [parent module](super) for additional documentation.

use std::fmt::Display;

/// Element attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attr {
    name: String,
    value: String,
}

impl Attr {
    /// Construct a new attribute from a name and value.
    #[inline]
    pub fn new<N: Into<String>, V: Into<String>>(name: N, value: V) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Attribute name,
    ///   including any namespace prefix.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attribute value,
    ///   with entities already unescaped.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl Display for Attr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

impl<N: Into<String>, V: Into<String>> From<(N, V)> for Attr {
    fn from((name, value): (N, V)) -> Self {
        Self::new(name, value)
    }
}

/// List of attributes in document order.
///
/// Attribute names are expected to be unique,
///   but this is _not_ enforced here;
///     that is the responsibility of whatever produces the tree
///     (see [`super::reader`]).
/// Lookup is a linear search,
///   which is faster than hashing for the handful of attributes that
///   elements typically have.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AttrList {
    attrs: Vec<Attr>,
}

impl AttrList {
    /// Construct a new, empty attribute list.
    pub fn new() -> Self {
        Self { attrs: vec![] }
    }

    /// Add an attribute to the end of the attribute list.
    pub fn push(mut self, attr: Attr) -> Self {
        self.attrs.push(attr);
        self
    }

    /// Search for an attribute of the given `name`.
    pub fn find(&self, name: &str) -> Option<&Attr> {
        self.attrs.iter().find(|attr| attr.name() == name)
    }

    /// Returns [`true`] if the list contains no attributes.
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    /// Number of attributes in the list.
    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    /// Iterate over attributes in document order.
    pub fn iter(&self) -> std::slice::Iter<'_, Attr> {
        self.attrs.iter()
    }
}

impl From<Vec<Attr>> for AttrList {
    fn from(attrs: Vec<Attr>) -> Self {
        AttrList { attrs }
    }
}

impl<const N: usize> From<[Attr; N]> for AttrList {
    fn from(attrs: [Attr; N]) -> Self {
        AttrList {
            attrs: attrs.into(),
        }
    }
}

impl FromIterator<Attr> for AttrList {
    fn from_iter<T: IntoIterator<Item = Attr>>(iter: T) -> Self {
        iter.into_iter().collect::<Vec<Attr>>().into()
    }
}

impl<'a> IntoIterator for &'a AttrList {
    type Item = &'a Attr;
    type IntoIter = std::slice::Iter<'a, Attr>;

    fn into_iter(self) -> Self::IntoIter {
        self.attrs.iter()
    }
}
