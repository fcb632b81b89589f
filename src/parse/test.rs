// Tests for the parsing driver
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

use super::*;
use crate::tree::read_str;

#[derive(Debug, PartialEq, Eq)]
struct Point {
    x: i32,
    y: i32,
}

fn point<'a>(s: &mut Scope<'a>) -> ParseResult<'a, Point> {
    s.match_name("point")?;

    Ok(Point {
        x: s.attr_parsed("x")?,
        y: s.attr_parsed("y")?,
    })
}

#[test]
fn run_returns_value_of_rule_that_consumes_everything() {
    let ele = read_str(r#"<point x="1" y="2"/>"#).unwrap();

    assert_eq!(Ok(Point { x: 1, y: 2 }), run(&ele, point));
}

#[test]
fn run_propagates_rule_failure() {
    let ele = read_str(r#"<point x="1"/>"#).unwrap();

    assert_eq!(
        Err(ParseError::Other("Attribute y not found".into())),
        run(&ele, point),
    );
}

#[test]
fn run_fails_on_leftover_attribute() {
    let ele = read_str(r#"<point x="1" y="2"/>"#).unwrap();

    let result = run(&ele, |s| {
        s.match_name("point")?;
        s.attr("x")
    });

    assert_eq!(
        Err(ParseError::RemainingItems {
            ele: &ele,
            attrs: vec![ele.attrs().find("y").unwrap()],
            children: vec![],
            text: None,
        }),
        result,
    );

    assert_eq!(
        "Remaining items (1 attrs)\n\
         point @ x=1,y=2\n  \
           Remaining attributes:\n  \
           y=2",
        result.unwrap_err().to_string(),
    );
}

#[test]
fn run_fails_on_leftover_text() {
    let ele = read_str("<doc>hello</doc>").unwrap();

    let result = run(&ele, |s| s.match_name("doc"));

    assert_eq!(
        Err(ParseError::RemainingItems {
            ele: &ele,
            attrs: vec![],
            children: vec![],
            text: Some("hello"),
        }),
        result,
    );
}

// The driver itself requires nothing of the rule but that it consume
//   everything.
#[test]
fn run_with_nothing_to_consume_succeeds_trivially() {
    let ele = read_str("<empty/>").unwrap();

    assert_eq!(Ok(42), run(&ele, |_| Ok(42)));
}

#[test]
fn run_with_children_consumed() {
    let ele = read_str(
        r#"<points><point x="1" y="2"/><point x="3" y="4"/></points>"#,
    )
    .unwrap();

    let result = run(&ele, |s| {
        s.match_name("points")?;
        s.children(point)
    });

    assert_eq!(
        Ok(vec![Point { x: 1, y: 2 }, Point { x: 3, y: 4 }]),
        result
    );
}

// Children that do not match remain,
//   carrying the reason that they did not.
#[test]
fn run_reports_unmatched_child_with_its_errors() {
    let ele = read_str(
        r#"<points><point x="1" y="2"/><line/></points>"#,
    )
    .unwrap();

    let result = run(&ele, |s| {
        s.match_name("points")?;
        s.children(point)
    });

    assert_eq!(
        "Remaining items (1 children)\n\
         points\n  \
           Remaining child 0:\n  \
           line\n    \
             Error 0\n      \
               Element name is not point",
        result.unwrap_err().to_string(),
    );
}
