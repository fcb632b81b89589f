// Test element tree representation
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

fn leaf(name: &str, attrs: AttrList, text: Option<&str>) -> Element {
    Element::new(name, attrs, vec![], text.map(String::from))
        .expect("invalid test element")
}

mod construct {
    use super::*;

    #[test]
    fn empty_name_is_rejected() {
        let result = Element::new("", AttrList::new(), vec![], None);

        assert!(matches!(result, Err(Error::EmptyName)));
    }

    #[test]
    fn children_with_text_is_mixed_content() {
        let child = leaf("child", AttrList::new(), None);
        let result = Element::new(
            "parent",
            AttrList::new(),
            vec![child],
            Some("text".into()),
        );

        assert!(matches!(result, Err(Error::MixedContent(name)) if name == "parent"));
    }

    // Blank text is not mixed content by itself;
    //   it is only a problem alongside children.
    #[test]
    fn childless_element_may_have_blank_text() {
        let ele = leaf("blank", AttrList::new(), Some("  \n "));

        assert_eq!(Some("  \n "), ele.text());
        assert!(ele.children().is_empty());
    }

    #[test]
    fn accessors_return_constructed_data() {
        let attrs = AttrList::from([Attr::new("a", "1"), Attr::new("b", "2")]);
        let child = leaf("child", AttrList::new(), Some("t"));

        let ele =
            Element::new("parent", attrs.clone(), vec![child.clone()], None)
                .unwrap();

        assert_eq!("parent", ele.name());
        assert_eq!(&attrs, ele.attrs());
        assert_eq!(&[child], ele.children());
        assert_eq!(None, ele.text());
    }
}

mod attrs {
    use super::*;

    #[test]
    fn linear_search_for_attr_name_in_list() {
        let attra = Attr::new("a", "a value");
        let attrb = Attr::new("b", "b value");

        let attrs = AttrList::from([attra.clone(), attrb.clone()]);

        assert_eq!(attrs.find("a"), Some(&attra));
        assert_eq!(attrs.find("b"), Some(&attrb));
        assert_eq!(attrs.find("unknown"), None);
        assert_eq!(2, attrs.len());
    }

    #[test]
    fn format_attrs_in_document_order() {
        let attrs = AttrList::from([Attr::new("z", "1"), Attr::new("a", "2")]);

        assert_eq!("z=1,a=2", format_attrs(&attrs));
        assert_eq!("", format_attrs(&AttrList::new()));
    }
}

mod format {
    use super::*;

    #[test]
    fn intro_without_attrs_is_name() {
        let ele = leaf("point", AttrList::new(), None);

        assert_eq!("point", ele.formatted_intro());
    }

    #[test]
    fn intro_with_attrs() {
        let ele = leaf(
            "point",
            AttrList::from([Attr::new("x", "1"), Attr::new("y", "2")]),
            None,
        );

        assert_eq!("point @ x=1,y=2", ele.formatted_intro());
    }

    #[test]
    fn text_is_trimmed_and_newlines_escaped() {
        assert_eq!("foo\\n  bar", format_text("\n  foo\n  bar  \n"));
    }

    #[test]
    fn text_is_truncated() {
        let long = "x".repeat(100);

        assert_eq!(FORMATTED_TEXT_MAX_CHARS, format_text(&long).len());
    }

    // Truncation is by character,
    //   not by byte.
    #[test]
    fn text_truncation_respects_multibyte_chars() {
        let long = "é".repeat(100);

        assert_eq!(
            FORMATTED_TEXT_MAX_CHARS,
            format_text(&long).chars().count()
        );
    }

    #[test]
    fn nested_dump() {
        let doc = leaf("documentation", AttrList::new(), Some(" Docs\nhere "));
        let annotation =
            Element::new("annotation", AttrList::new(), vec![doc], None)
                .unwrap();
        let element = leaf(
            "element",
            AttrList::from([Attr::new("name", "foo")]),
            None,
        );
        let root = Element::new(
            "schema",
            AttrList::new(),
            vec![element, annotation],
            None,
        )
        .unwrap();

        assert_eq!(
            root.formatted(),
            "- schema\n\
             \x20 - element @ name=foo\n\
             \x20 - annotation\n\
             \x20   - documentation\n\
             \x20     # Docs\\nhere",
        );

        // Display is the same dump.
        assert_eq!(root.formatted(), root.to_string());
    }

    #[test]
    fn dump_is_stable() {
        let ele = leaf("a", AttrList::from([Attr::new("k", "v")]), Some("t"));

        assert_eq!(ele.formatted_lines(), ele.formatted_lines());
        assert_eq!(vec!["- a @ k=v", "  # t"], ele.formatted_lines());
    }
}
