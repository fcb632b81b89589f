// Parser tracing
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

//! Tracing for parsing operations.
//!
//! This provides human-readable traces on standard error any time a rule
//!   is attempted against a child element or as an alternative of an
//!   ordered choice.
//! These traces are provided automatically when `cfg(test)`,
//!   which means that they are automatically included in the output of any
//!   test failure.
//!
//! Outside of tests,
//!   this can be enabled at build-time using the `parser-trace-stderr`
//!   feature flag
//!     (`cargo build --features parser-trace-stderr`).
//!
//! _These traces are not meant to be machine-readable!_
//! Do not try to use the human-readable traces in that way since the format
//!   is subject to change without notice.

use super::ParseResult;
use crate::tree::Element;

pub(super) trait ParserTrace {
    /// Output the result of parsing `child` of `parent` in isolation.
    ///
    /// There is no means to return an error and a failure to output the
    ///   trace should not interrupt processing.
    fn trace_child<T>(parent: &Element, child: &Element, attempt: &ParseResult<T>);

    /// Output the result of alternative `index` of an ordered choice
    ///   against `ele`.
    ///
    /// There is no means to return an error and a failure to output the
    ///   trace should not interrupt processing.
    fn trace_variant<T>(ele: &Element, index: usize, attempt: &ParseResult<T>);
}

/// Perform no tracing.
///
/// This should be used by default for non-test builds,
///   since tracing can incur a significant performance cost.
#[allow(dead_code)]
#[derive(Debug, PartialEq, Default)]
pub(super) struct VoidTrace;

impl ParserTrace for VoidTrace {
    fn trace_child<T>(_: &Element, _: &Element, _: &ParseResult<T>) {
        // Do nothing at all.
    }

    fn trace_variant<T>(_: &Element, _: usize, _: &ParseResult<T>) {
        // Do nothing at all.
    }
}

/// Human-readable [`ParserTrace`].
///
/// See [module-level](super) documentation for more information.
#[allow(dead_code)]
#[derive(Debug, PartialEq, Default)]
pub(super) struct HumanReadableTrace;

impl HumanReadableTrace {
    fn trace_outcome<T>(attempt: &ParseResult<T>) {
        match attempt {
            Ok(_) => eprint!("| ==> matched.\n"),
            Err(e) => {
                eprint!("| ==> !!! did not match:\n");
                for line in e.formatted_lines() {
                    eprint!("|  |  {line}\n");
                }
            }
        }

        #[allow(unused_variables)]
        let cfg = ""; // so that this compiles without matching cfg
        #[cfg(feature = "parser-trace-stderr")]
        #[allow(unused_variables)]
        let cfg = "feature = \"parser-trace-stderr\"";
        #[cfg(test)] // takes precedence if both are set
        let cfg = "test";
        eprint!(
            "= note: this trace was output as a debugging aid \
                because `cfg({cfg})`.\n\n",
        );
    }
}

impl ParserTrace for HumanReadableTrace {
    fn trace_child<T>(parent: &Element, child: &Element, attempt: &ParseResult<T>) {
        eprint!(
            "\
[Scope::children_at_most] parent: {parent}
| ==> child: {child}
|\n",
            parent = parent.formatted_intro(),
            child = child.formatted_intro(),
        );

        Self::trace_outcome(attempt);
    }

    fn trace_variant<T>(ele: &Element, index: usize, attempt: &ParseResult<T>) {
        eprint!(
            "\
[Scope::one_of] element: {ele}
| ==> variant: {index}
|\n",
            ele = ele.formatted_intro(),
        );

        Self::trace_outcome(attempt);
    }
}

/// Tracer used by the combinators.
#[cfg(any(test, feature = "parser-trace-stderr"))]
pub(super) type DefaultTrace = HumanReadableTrace;

/// Tracer used by the combinators.
#[cfg(not(any(test, feature = "parser-trace-stderr")))]
pub(super) type DefaultTrace = VoidTrace;
