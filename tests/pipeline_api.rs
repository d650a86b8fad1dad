//! End-to-end pipeline tests
//!
//! Compiles a realistic document (two containers, an image, a link, a long
//! multi-line text body) and checks the element tree, the background-color
//! side channel, option typing, and idempotence.

use sf::sf::ast::{Element, Value};
use sf::sf::building::build_elements;
use sf::sf::pipeline::{compile, compile_with, parse_commands};
use sf::sf::styling::StyleBinder;

const SAMPLE: &str = "bg \"white\";\n\
cstart \"title\";\n\
 img \"./react.png\" alt=\"icon\", float=\"left\", height=\"150px\", mright=\"10px\";\n\
 big \"SF\" color=\"white\", blend=\"difference\";\n\
 middle \"simple format\" color=\"white\", blend=\"difference\";\n\
 a \"by smiilliin\" href=\"https://github.com/smiilliin\", underline=false, newtab=true, color=\"gray\", blend=\"difference\";\n\
 divider \"1px solid gray\" blend=\"difference\";\n\
cend \"title\";\n\
cstart \"body\";\n\
 \"First line.\nSecond line.\" color=\"white\", mtop=\"10px\", blend=\"difference\";\n\
cend \"body\";";

#[test]
fn sample_document_compiles_to_two_containers() {
    let mut colors = Vec::new();
    let elements = compile_with(SAMPLE, |c| colors.push(c.to_string())).unwrap();

    assert_eq!(colors, vec!["white"]);
    assert_eq!(elements.len(), 4);

    assert!(matches!(&elements[0], Element::ContainerStart { name, .. } if name == "title"));
    match &elements[1] {
        Element::Container { name, children } => {
            assert_eq!(name, "title");
            let tags: Vec<&str> = children.iter().map(|c| c.tag.as_str()).collect();
            assert_eq!(tags, vec!["img", "big", "middle", "a", "divider"]);
        }
        other => panic!("expected title container, got {:?}", other),
    }

    assert!(matches!(&elements[2], Element::ContainerStart { name, .. } if name == "body"));
    match &elements[3] {
        Element::Container { name, children } => {
            assert_eq!(name, "body");
            assert_eq!(children.len(), 1);
            assert_eq!(children[0].tag, "format");
            assert_eq!(children[0].data, "First line.\nSecond line.");
        }
        other => panic!("expected body container, got {:?}", other),
    }
}

#[test]
fn link_options_type_and_bind() {
    let commands = parse_commands(SAMPLE, |_| {});
    let link = commands.iter().find(|c| c.tag == "a").unwrap();

    assert_eq!(link.options.get("underline"), Some(&Value::Bool(false)));
    assert_eq!(link.options.get("newtab"), Some(&Value::Bool(true)));

    let style = StyleBinder::for_tag(&link.tag).bind(&link.options);
    assert_eq!(
        style.get("href"),
        Some(&Value::Str("https://github.com/smiilliin".to_string()))
    );
    assert_eq!(
        style.get("text-decoration"),
        Some(&Value::Str("none".to_string()))
    );
    assert_eq!(style.get("target"), Some(&Value::Str("_blank".to_string())));
    assert_eq!(style.get("color"), Some(&Value::Str("gray".to_string())));
}

#[test]
fn reparsing_yields_structurally_identical_trees() {
    assert_eq!(compile(SAMPLE).unwrap(), compile(SAMPLE).unwrap());
}

#[test]
fn preparsed_commands_build_the_same_tree() {
    let commands = parse_commands(SAMPLE, |_| {});
    let direct = compile(SAMPLE).unwrap();
    let rebuilt = build_elements(commands).unwrap();
    assert_eq!(direct, rebuilt);
}

#[test]
fn document_over_command_ceiling_fails() {
    let big = "p \"x\"; ".repeat(101);
    assert!(compile(&big).is_err());
    let ok = "p \"x\"; ".repeat(100);
    assert!(compile(&ok).is_ok());
}

#[test]
fn background_reports_forward_from_any_position() {
    let mut colors = Vec::new();
    let source = "cstart \"box\"; bg \"black\"; p \"a\"; cend \"box\";";
    let elements = compile_with(source, |c| colors.push(c.to_string())).unwrap();

    assert_eq!(colors, vec!["black"]);
    // the bg statement leaves no trace in the container
    match &elements[1] {
        Element::Container { children, .. } => assert_eq!(children.len(), 1),
        other => panic!("expected container, got {:?}", other),
    }
}
