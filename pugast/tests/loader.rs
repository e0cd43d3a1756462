use pugast::loader::LoadErrorKind;
use pugast::{AttrValue, Attribute, Block, Element, Loader, Node};

fn load(source: &str) -> Block {
    Loader::new(source.to_string(), 0)
        .load()
        .expect("load failed")
}

fn load_errors(source: &str) -> Vec<pugast::LoadError> {
    match Loader::new(source.to_string(), 0).load() {
        Ok(block) => panic!("expected load errors, got {:?}", block),
        Err(errors) => errors,
    }
}

#[test]
fn empty_document() {
    assert_eq!(load(r#"{"type": "Block", "nodes": []}"#), Block::empty());
}

#[test]
fn tag_with_text_child() {
    let src = r#"{
      "type": "Block",
      "nodes": [
        {
          "type": "Tag",
          "name": "tag",
          "selfClosing": false,
          "attrs": [],
          "attributeBlocks": [],
          "isInline": false,
          "line": 2,
          "block": {
            "type": "Block",
            "nodes": [{ "type": "Text", "val": "{{ var }}", "line": 3 }]
          }
        }
      ],
      "line": 0
    }"#;
    let expected = Block::from(vec![Node::from(Element::new("tag").with_text("{{ var }}"))]);
    assert_eq!(load(src), expected);
}

#[test]
fn string_and_boolean_attributes() {
    let src = r#"{
      "type": "Block",
      "nodes": [{
        "type": "Tag",
        "name": "tag",
        "attrs": [
          { "name": "class", "val": "'class1'", "mustEscape": false },
          { "name": "attr", "val": true, "mustEscape": false },
          { "name": "hidden", "val": false, "mustEscape": false }
        ],
        "block": { "type": "Block", "nodes": [] }
      }]
    }"#;
    let block = load(src);
    let element = block.nodes[0].as_element().expect("element");
    assert_eq!(
        element.attrs,
        vec![
            Attribute::text("class", "'class1'"),
            Attribute::flag("attr", true),
            Attribute::flag("hidden", false),
        ]
    );
    assert_eq!(element.attrs[1].value, AttrValue::Flag(true));
}

#[test]
fn tag_without_block_has_no_children() {
    let block = load(r#"{"type": "Block", "nodes": [{"type": "Tag", "name": "br"}]}"#);
    assert_eq!(block, Block::from(vec![Node::from(Element::new("br"))]));
}

#[test]
fn unknown_node_type_is_malformed() {
    let src = r#"{
      "type": "Block",
      "nodes": [
        { "type": "Tag", "name": "a", "block": { "type": "Block", "nodes": [
          { "type": "Text", "val": "ok" },
          { "type": "Code", "val": "foo()", "line": 4 }
        ] } },
        { "type": "Comment", "val": "note" }
      ]
    }"#;
    let errors = load_errors(src);
    assert_eq!(errors.len(), 2);
    assert!(errors.iter().all(|e| e.kind == LoadErrorKind::MalformedTree));
    assert!(errors[0].message.contains("`Code`"));
    assert!(errors[0].message.contains("nodes[0].block.nodes[1]"));
    assert!(errors[0].notes.iter().any(|n| n == "template line 4"));
    assert!(errors[1].message.contains("nodes[1]"));
}

#[test]
fn root_must_be_a_block() {
    let errors = load_errors(r#"{"type": "Tag", "name": "a"}"#);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, LoadErrorKind::MalformedTree);
    assert!(errors[0].to_string().starts_with("malformed tree:"));
}

#[test]
fn text_without_string_value_is_malformed() {
    let errors = load_errors(r#"{"type": "Block", "nodes": [{"type": "Text", "val": 3}]}"#);
    assert_eq!(errors[0].kind, LoadErrorKind::MalformedTree);
}

#[test]
fn invalid_json_reports_a_span() {
    let src = "{\"type\": \"Block\",\n  \"nodes\": [,]}";
    let errors = load_errors(src);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, LoadErrorKind::Syntax);
    let span = errors[0].span.clone().expect("syntax errors carry a span");
    assert!(span.start > src.find('\n').unwrap());
    assert!(span.end <= src.len());
}
