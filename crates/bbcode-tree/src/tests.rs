use super::*;

#[test]
fn test_parse_simple() {
    let doc = parse("This_is_a_[b]bold[/b]_text").unwrap();
    assert_eq!(doc.nodes.len(), 3);
    assert_eq!(doc.nodes[0].as_text(), Some("This_is_a_"));
    let b = doc.nodes[1].as_element().expect("second node should be an element");
    assert_eq!(b.name, "b");
    assert_eq!(b.params, None);
    assert_eq!(b.text(), "bold");
    assert_eq!(doc.nodes[2].as_text(), Some("_text"));
}

#[test]
fn test_parse_empty() {
    let doc = parse("").unwrap();
    assert!(doc.is_empty());
}

#[test]
fn test_tree_snapshot() {
    let doc = parse("a[b]c[/b]").unwrap();
    insta::assert_debug_snapshot!(doc, @r#"
    Document {
        nodes: [
            Text(
                Text {
                    text: "a",
                    span: Some(
                        Span {
                            start: 0,
                            end: 1,
                        },
                    ),
                },
            ),
            Element(
                Element {
                    name: "b",
                    params: None,
                    children: [
                        Text(
                            Text {
                                text: "c",
                                span: Some(
                                    Span {
                                        start: 4,
                                        end: 5,
                                    },
                                ),
                            },
                        ),
                    ],
                    span: Some(
                        Span {
                            start: 1,
                            end: 9,
                        },
                    ),
                    self_closing: false,
                },
            ),
        ],
    }
    "#);
}

#[test]
fn test_nested_structure() {
    let doc = parse("This_[i][s]is_[b]a[/b]_bold[/s]_text[/i]").unwrap();
    let i = doc.nodes[1].as_element().unwrap();
    assert_eq!(i.name, "i");
    assert_eq!(i.children.len(), 2);

    let s = i.children[0].as_element().unwrap();
    assert_eq!(s.name, "s");
    assert_eq!(i.children[1].as_text(), Some("_text"));

    let kinds: Vec<_> = s
        .children
        .iter()
        .map(|n| match n {
            Node::Text(t) => format!("text:{}", t.text),
            Node::Element(e) => format!("el:{}", e.name),
        })
        .collect();
    assert_eq!(kinds, vec!["text:is_", "el:b", "text:_bold"]);
    assert_eq!(i.text(), "is_a_bold_text");
}

#[test]
fn test_self_closing_elements() {
    let doc = parse("This_[hr/]is_a_[hr=5/]bold_text").unwrap();
    let rules: Vec<_> = doc.elements().collect();
    assert_eq!(rules.len(), 2);
    assert!(rules.iter().all(|el| el.self_closing && el.children.is_empty()));
    assert_eq!(rules[0].shorthand(), None);
    assert_eq!(rules[1].shorthand(), Some("5"));
    assert_eq!(doc.plain_text(), "This_is_a_bold_text");
}

#[test]
fn test_self_closing_inside_element() {
    let doc = parse("[center]a[hr/]b[/center]").unwrap();
    let center = doc.find("center").unwrap();
    assert_eq!(
        center.children,
        vec![
            Node::Text(Text {
                text: "a".to_string(),
                span: Some(Span::new(8, 9)),
            }),
            Node::Element(Element {
                name: "hr".to_string(),
                params: None,
                children: vec![],
                span: Some(Span::new(9, 14)),
                self_closing: true,
            }),
            Node::Text(Text {
                text: "b".to_string(),
                span: Some(Span::new(14, 15)),
            }),
        ]
    );
}

#[test]
fn test_unknown_tags_are_text() {
    let doc = parse("[b]This_is_a_[foo]bold[/bar]_text[/b]").unwrap();
    let b = doc.find("b").unwrap();
    assert_eq!(
        b.children,
        vec![Node::Text(Text {
            text: "This_is_a_[foo]bold[/bar]_text".to_string(),
            span: Some(Span::new(3, 33)),
        })]
    );
}

#[test]
fn test_params() {
    let doc = parse("[url=https://example.com class='big link']site[/url]").unwrap();
    let url = doc.find("url").unwrap();
    assert_eq!(url.shorthand(), Some("https://example.com"));
    assert_eq!(url.param("class"), Some("big link"));
    assert_eq!(url.param("missing"), None);
}

#[test]
fn test_parse_with_options() {
    let doc = Document::parse_with("[note]x[/note]", ParseOptions::new().any_tag()).unwrap();
    assert_eq!(doc.find("note").map(Element::text), Some("x".to_string()));

    let doc = parse("[note]x[/note]").unwrap();
    assert_eq!(doc.find("note"), None);
    assert_eq!(doc.plain_text(), "[note]x[/note]");
}

#[test]
fn test_parse_error() {
    let err = parse("This_is_[b]a_bold_[/i]text").unwrap_err();
    assert!(matches!(err.kind, ParseErrorKind::MismatchedClosingTag { .. }));
}

#[test]
fn test_builder_programmatic() {
    let el = Element::new("url")
        .with_param("url", "https://example.com")
        .with_child(Node::text("site"));
    assert_eq!(el.shorthand(), Some("https://example.com"));
    assert_eq!(el.text(), "site");

    let hr: Node = Element::new("hr").self_closing().into();
    assert!(hr.as_element().is_some_and(|el| el.self_closing));
    assert_eq!(hr.span(), None);
}
