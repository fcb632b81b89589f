// Element tree reader
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

//! Read XML documents into an [`Element`] tree.
//!
//! This uses [`quick_xml`] as the parser.
//!
//! The reader is the boundary between concrete XML and the generic tree
//!   consumed by the [combinator engine](crate::parse),
//!     and it is where XML-specific concerns are settled:
//!
//!   - Element names are reduced to their local name;
//!       the namespace prefix
//!         (everything up to and including the last `:`)
//!       is discarded.
//!     Attribute names are kept as-is,
//!       so `xmlns:xs` remains an ordinary attribute.
//!   - Duplicate attribute names are an error.
//!   - Comments are skipped,
//!       as are the XML declaration,
//!       doctype,
//!       and processing instructions outside of the root element.
//!   - Multiple text runs within an element are concatenated.
//!   - Whitespace-only text is dropped from elements that have child
//!       elements;
//!         elements without children keep their text even if it is
//!         blank.
//!   - CDATA sections and processing instructions within an element are
//!       not supported.
//!
//! Non-blank text alongside child elements is mixed content,
//!   which [`Element::new`] rejects.

use super::{Attr, AttrList, Element, Error, Result};
use memchr::memrchr;
use quick_xml::events::{BytesStart, Event as QuickXmlEvent};
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

/// Read an [`Element`] tree from an XML string.
pub fn read_str(xml: &str) -> Result<Element> {
    ElementReader::new(xml.as_bytes()).read()
}

/// Read an [`Element`] tree from the XML file at `path`.
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Element> {
    let file = File::open(path)?;
    ElementReader::new(BufReader::new(file)).read()
}

/// Build an [`Element`] tree from XML events.
///
/// The entire document is read into memory;
///   the tree is yielded only once the root element has been closed
///     and the input has been exhausted.
pub struct ElementReader<B: BufRead> {
    /// Inner parser.
    reader: quick_xml::Reader<B>,

    /// Buffer for [`quick_xml::Reader`].
    readbuf: Vec<u8>,
}

impl<B: BufRead> ElementReader<B> {
    pub fn new(reader: B) -> Self {
        Self {
            reader: quick_xml::Reader::from_reader(reader),
            readbuf: Vec::new(),
        }
    }

    /// Read the entire input and yield its root element.
    pub fn read(mut self) -> Result<Element> {
        // Elements that have been opened but not yet closed,
        //   innermost last.
        let mut stack: Vec<BuddingElement> = Vec::with_capacity(16);
        let mut root: Option<Element> = None;

        loop {
            self.readbuf.clear();

            let pos = self.reader.buffer_position();
            let ev = self
                .reader
                .read_event_into(&mut self.readbuf)
                .map_err(|e| Error::QuickXmlError(e, pos))?;

            match ev {
                // This is the only time we'll consider the input to be
                //   done.
                QuickXmlEvent::Eof => break,

                QuickXmlEvent::Start(ele) => {
                    stack.push(BuddingElement::open(&ele, pos)?);
                }

                QuickXmlEvent::Empty(ele) => {
                    let closed = BuddingElement::open(&ele, pos)?.close()?;
                    Self::complete(&mut stack, &mut root, closed)?;
                }

                QuickXmlEvent::End(ele) => match stack.pop() {
                    Some(budding) => {
                        Self::complete(&mut stack, &mut root, budding.close()?)?
                    }
                    None => Err(Error::UnexpectedClose(
                        String::from_utf8_lossy(ele.name().as_ref())
                            .into_owned(),
                    ))?,
                },

                QuickXmlEvent::Text(bytes) => {
                    let text = bytes
                        .unescape()
                        .map_err(|e| Error::QuickXmlError(e, pos))?;

                    match stack.last_mut() {
                        Some(budding) => budding.push_text(&text),
                        None if text.trim().is_empty() => (),
                        None => Err(Error::TextOutsideRoot(
                            text.trim().to_string(),
                        ))?,
                    }
                }

                QuickXmlEvent::CData(bytes) => match stack.last() {
                    Some(budding) => Err(Error::UnsupportedNode {
                        ele: budding.name.clone(),
                        kind: "CDATA section",
                    })?,
                    None => Err(Error::TextOutsideRoot(
                        String::from_utf8_lossy(&bytes).into_owned(),
                    ))?,
                },

                QuickXmlEvent::PI(_) => {
                    if let Some(budding) = stack.last() {
                        Err(Error::UnsupportedNode {
                            ele: budding.name.clone(),
                            kind: "processing instruction",
                        })?
                    }
                }

                QuickXmlEvent::Comment(_)
                | QuickXmlEvent::Decl(_)
                | QuickXmlEvent::DocType(_) => (),
            }
        }

        match stack.pop() {
            Some(budding) => Err(Error::UnclosedElement(budding.name)),
            None => root.ok_or(Error::NoRoot),
        }
    }

    /// Attach a closed element to its parent,
    ///   or make it the root if there is no parent.
    fn complete(
        stack: &mut Vec<BuddingElement>,
        root: &mut Option<Element>,
        ele: Element,
    ) -> Result<()> {
        if let Some(parent) = stack.last_mut() {
            parent.children.push(ele);
            return Ok(());
        }

        match root {
            Some(first) => Err(Error::MultipleRoots {
                first: first.name().to_string(),
                second: ele.name().to_string(),
            }),

            None => {
                *root = Some(ele);
                Ok(())
            }
        }
    }
}

/// An element that is still under construction.
///
/// (This is a tree,
///    so here's a plant pun.)
#[derive(Debug)]
struct BuddingElement {
    name: String,
    attrs: AttrList,
    children: Vec<Element>,
    text: Option<String>,
}

impl BuddingElement {
    /// Begin an element from its opening tag,
    ///   reading all of its attributes.
    fn open(ele: &BytesStart, pos: usize) -> Result<Self> {
        let name = local_name(ele.name().as_ref())?.to_string();
        let mut attrs = AttrList::new();

        // Duplicate checking is done below so that we are able to report
        //   both values.
        let mut raw_attrs = ele.attributes();

        for result in raw_attrs.with_checks(false) {
            let attr =
                result.map_err(|e| Error::QuickXmlError(e.into(), pos))?;

            let key = attr.key.as_ref();
            let attr_name = std::str::from_utf8(key).map_err(|e| (e, key))?;
            let value = attr
                .unescape_value()
                .map_err(|e| Error::QuickXmlError(e, pos))?;

            if let Some(first) = attrs.find(attr_name) {
                return Err(Error::DuplicateAttr {
                    ele: name,
                    attr: attr_name.to_string(),
                    first: first.value().to_string(),
                    second: value.into_owned(),
                });
            }

            attrs = attrs.push(Attr::new(attr_name, value));
        }

        Ok(Self {
            name,
            attrs,
            children: vec![],
            text: None,
        })
    }

    fn push_text(&mut self, text: &str) {
        self.text.get_or_insert_with(String::new).push_str(text);
    }

    /// Complete the element.
    ///
    /// Blank text between child elements is formatting,
    ///   not content.
    fn close(self) -> Result<Element> {
        let text = match self.text {
            Some(text) if !self.children.is_empty() && text.trim().is_empty() => {
                None
            }
            text => text,
        };

        Element::new(self.name, self.attrs, self.children, text)
    }
}

/// Strip the namespace prefix from a tag name.
fn local_name(name: &[u8]) -> Result<&str> {
    let local = match memrchr(b':', name) {
        Some(pos) => &name[(pos + 1)..],
        None => name,
    };

    std::str::from_utf8(local).map_err(|e| (e, local).into())
}
