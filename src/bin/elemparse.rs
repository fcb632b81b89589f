// Element tree parser
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

//! Read an XML document and parse it using the XML Schema grammar.
//!
//! `elemparse` is a thin frontend to the library:
//!   it reads `INPUT` into an element tree
//!     (see [`elemparse::tree::reader`])
//!   and either dumps that tree or parses it with
//!   [`elemparse::xsd::schema`].

extern crate elemparse;

use elemparse::{parse, tree, xsd};
use getopts::{Fail, Options};
use std::{
    env,
    error::Error,
    fmt::{self, Display},
};

/// Types of commands
enum Command {
    Parse(String, Emit),
    Usage,
}

/// Output to produce for the input file.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum Emit {
    /// Dump of the element tree as read.
    Tree,
    /// Parsed XML Schema.
    Xsd,
}

/// Read `input` and write the requested output to stdout.
fn process(input: &str, emit: Emit) -> Result<(), ElemparseError> {
    let root = tree::read_file(input)?;

    match emit {
        Emit::Tree => println!("{root}"),

        Emit::Xsd => {
            // The error borrows from `root`,
            //   so it must be rendered before `root` is dropped.
            let schema = parse::run(&root, xsd::schema)
                .map_err(|e| ElemparseError::Parse(e.to_string()))?;

            println!("{schema:#?}");
        }
    }

    Ok(())
}

/// Entrypoint
pub fn main() -> Result<(), ElemparseError> {
    let args: Vec<String> = env::args().collect();
    let program = &args[0];
    let opts = get_opts();
    let usage = opts.usage(&format!("Usage: {} [OPTIONS] INPUT", program));

    match parse_options(opts, args) {
        Ok(Command::Parse(input, emit)) => {
            process(&input, emit).or_else(|e| match e {
                ElemparseError::Parse(report) => {
                    // Rendered as a single string so that we don't
                    //   interleave output between processes.
                    println!("{report}\nfatal: failed to parse `{input}`");
                    std::process::exit(1);
                }
                e => Err(e),
            })
        }
        Ok(Command::Usage) => {
            println!("{}", usage);
            std::process::exit(exitcode::OK);
        }
        Err(e) => {
            eprintln!("{}", e);
            println!("{}", usage);
            std::process::exit(exitcode::USAGE);
        }
    }
}

/// Get 'Options'
fn get_opts() -> Options {
    let mut opts = Options::new();
    opts.optopt("", "emit", "set output type (default xsd)", "tree|xsd");
    opts.optflag("h", "help", "print this help menu");

    opts
}

/// Option parser
fn parse_options(opts: Options, args: Vec<String>) -> Result<Command, Fail> {
    let matches = opts.parse(&args[1..])?;

    if matches.opt_present("h") {
        return Ok(Command::Usage);
    }

    let input = match matches.free.len() {
        0 => return Err(Fail::OptionMissing(String::from("INPUT"))),
        1 => matches.free[0].clone(),
        _ => return Err(Fail::UnrecognizedOption(matches.free[1].clone())),
    };

    let emit = match matches.opt_str("emit").as_deref() {
        None | Some("xsd") => Emit::Xsd,
        Some("tree") => Emit::Tree,
        Some(_) => {
            return Err(Fail::ArgumentMissing(String::from("--emit tree|xsd")))
        }
    };

    Ok(Command::Parse(input, emit))
}

/// `elemparse` error.
///
/// This represents the aggregation of all possible errors that can occur
///   while processing an input file.
#[derive(Debug)]
pub enum ElemparseError {
    /// The input could not be read into an element tree.
    Tree(tree::Error),

    /// The element tree could not be parsed.
    ///
    /// This holds the rendered report,
    ///   since the error itself borrows from the tree.
    Parse(String),
}

impl From<tree::Error> for ElemparseError {
    fn from(e: tree::Error) -> Self {
        Self::Tree(e)
    }
}

impl Display for ElemparseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tree(e) => Display::fmt(e, f),
            Self::Parse(report) => f.write_str(report),
        }
    }
}

impl Error for ElemparseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Tree(e) => Some(e),
            Self::Parse(_) => None,
        }
    }
}
