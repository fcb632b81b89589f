// Tests for children-matching combinators
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

/// Rule matching `<item v="..."/>`,
///   yielding its value.
fn item<'a>(s: &mut Scope<'a>) -> ParseResult<'a, &'a str> {
    s.match_name("item")?;
    s.attr("v")
}

fn remaining_names<'a>(s: &Scope<'a>) -> Vec<&'a str> {
    s.ctx().children().iter().map(|slot| slot.ele().name()).collect()
}

fn error_counts(s: &Scope) -> Vec<usize> {
    s.ctx()
        .children()
        .iter()
        .map(|slot| slot.errors().len())
        .collect()
}

fn two() -> NonZeroUsize {
    NonZeroUsize::new(2).unwrap()
}

const MIXED: &str = r#"
    <list>
      <item v="a"/>
      <other/>
      <item v="b"/>
      <item v="c"/>
    </list>"#;

#[test]
fn children_at_most_respects_quota_and_order() {
    let ele = read_str(MIXED).unwrap();
    let mut s = Scope::new(&ele);

    assert_eq!(vec!["a", "b"], s.children_at_most(two(), item));

    // `other` was tried and failed;
    //   the last `item` was never tried since the quota had been reached.
    assert_eq!(vec!["other", "item"], remaining_names(&s));
    assert_eq!(vec![1, 0], error_counts(&s));
}

#[test]
fn matched_and_remaining_partition_original_children() {
    let ele = read_str(MIXED).unwrap();
    let mut s = Scope::new(&ele);

    let matched = s.children_opt(item);

    assert_eq!(vec!["a", "b", "c"], matched);
    assert_eq!(vec!["other"], remaining_names(&s));
    assert_eq!(
        ele.children().len(),
        matched.len() + s.ctx().children().len()
    );
}

#[test]
fn failures_accumulate_across_attempts() {
    let ele = read_str(MIXED).unwrap();
    let mut s = Scope::new(&ele);

    s.children_opt(|s| s.match_name("nothing"));
    s.children_opt(|s| s.match_name("nada"));

    assert_eq!(vec![2, 2, 2, 2], error_counts(&s));

    let other = &s.ctx().children()[1];
    assert_eq!(
        &[
            ParseError::other("Element name is not nothing"),
            ParseError::other("Element name is not nada"),
        ],
        other.errors(),
    );
    assert_eq!(
        Some(&ParseError::other("Element name is not nada")),
        other.last_error(),
    );
}

// A rule that succeeds without consuming all of a child has not matched
//   that child.
#[test]
fn partially_consumed_child_does_not_match() {
    let ele = read_str(r#"<list><item v="a" extra="1"/></list>"#).unwrap();
    let mut s = Scope::new(&ele);

    assert_eq!(None, s.child_opt(item));

    let slot = &s.ctx().children()[0];
    assert!(matches!(
        slot.last_error(),
        Some(ParseError::RemainingItems { attrs, .. }) if attrs.len() == 1
    ));
}

#[test]
fn child_opt_takes_first_match_only() {
    let ele = read_str(MIXED).unwrap();
    let mut s = Scope::new(&ele);

    assert_eq!(Some("a"), s.child_opt(item));
    assert_eq!(vec!["other", "item", "item"], remaining_names(&s));

    // Only children up to and including the match were tried.
    assert_eq!(vec![0, 0, 0], error_counts(&s));
}

#[test]
fn child_opt_none_tries_everything() {
    let ele = read_str(MIXED).unwrap();
    let mut s = Scope::new(&ele);

    assert_eq!(None, s.child_opt(|s| s.match_name("missing")));
    assert_eq!(vec![1, 1, 1, 1], error_counts(&s));
}

#[test]
fn child_required_reports_last_error_of_each_child() {
    let ele = read_str("<p><a/><b/></p>").unwrap();
    let mut s = Scope::new(&ele);

    // Build up history so that we can see that only the most recent error
    //   is reported.
    s.child_opt(|s| s.match_name("first"));

    let result = s.child(|s| s.match_name("second"));

    assert_eq!(
        Err(ParseError::NoMatchingChild {
            ele: &ele,
            errors: vec![
                ChildError(
                    &ele.children()[0],
                    ParseError::other("Element name is not second")
                ),
                ChildError(
                    &ele.children()[1],
                    ParseError::other("Element name is not second")
                ),
            ],
        }),
        result,
    );

    // History is retained in the context.
    assert_eq!(vec![2, 2], error_counts(&s));
}

#[test]
fn child_required_with_no_children() {
    let ele = read_str("<p/>").unwrap();
    let mut s = Scope::new(&ele);

    assert_eq!(
        Err(ParseError::NoMatchingChild {
            ele: &ele,
            errors: vec![],
        }),
        s.child(item),
    );
}

#[test]
fn children_required_succeeds_with_any_match() {
    let ele = read_str(MIXED).unwrap();
    let mut s = Scope::new(&ele);

    assert_eq!(Ok(vec!["a", "b", "c"]), s.children(item));
}

#[test]
fn children_required_fails_with_no_match() {
    let ele = read_str("<p><a/></p>").unwrap();
    let mut s = Scope::new(&ele);

    assert!(matches!(
        s.children(item),
        Err(ParseError::NoMatchingChild { errors, .. }) if errors.len() == 1
    ));
}

#[test]
fn discard_children_named_removes_all_of_that_name() {
    let ele = read_str(MIXED).unwrap();
    let mut s = Scope::new(&ele);

    s.discard_children_named("item");
    assert_eq!(vec!["other"], remaining_names(&s));

    s.discard_children_named("missing");
    assert_eq!(vec!["other"], remaining_names(&s));
}

// Each child is parsed in isolation,
//   so a nested rule sees only that child.
#[test]
fn nested_children() {
    let ele = read_str(
        r#"<outer><inner><item v="x"/></inner><inner><item v="y"/></inner></outer>"#,
    )
    .unwrap();
    let mut s = Scope::new(&ele);

    let result = s.children(|s| {
        s.match_name("inner")?;
        s.child(item)
    });

    assert_eq!(Ok(vec!["x", "y"]), result);
    assert!(s.ctx().is_drained());
}
