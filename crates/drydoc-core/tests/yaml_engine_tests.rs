//! Document tests with the `yaml` engine pair (YAML variables + Tera).

#![cfg(feature = "yaml")]

use drydoc_core::{Document, DrydocError, EngineRegistry};

fn yaml_doc(text: &str) -> Document {
    let registry = EngineRegistry::with_builtins();
    Document::new(text, registry.resolve("yaml").unwrap())
}

#[test]
fn renders_correct_example() {
    let doc = yaml_doc("a: 汉语漢\nb: 1\n...\n\na={{ a }}\nb={{ b }}\n");
    assert_eq!(doc.render(None).unwrap(), "a=汉语漢\nb=1\n");
}

#[test]
fn restores_trailing_newline_trimmed_by_the_engine() {
    // `-}}` makes Tera swallow the trailing newline; the document model
    // puts it back because the source text ended with one.
    let doc = yaml_doc("a: 1\n...\nvalue {{ a -}}\n");
    assert_eq!(doc.render(None).unwrap(), "value 1\n");
}

#[test]
fn structured_variables_flow_into_the_template() {
    let doc = yaml_doc(concat!(
        "authors:\n",
        "  - ada\n",
        "  - grace\n",
        "...\n",
        "{% for author in authors %}{{ author }};{% endfor %}\n",
    ));
    assert_eq!(doc.render(None).unwrap(), "ada;grace;\n");
}

#[test]
fn malformed_yaml_fails_with_variable_syntax() {
    let doc = yaml_doc("a: [unclosed\n...\nbody\n");
    assert!(matches!(
        doc.render(None),
        Err(DrydocError::VariableSyntax(_))
    ));
}

#[test]
fn non_mapping_variables_fail_with_variable_syntax() {
    let doc = yaml_doc("- a\n- b\n...\nbody\n");
    match doc.render(None) {
        Err(DrydocError::VariableSyntax(message)) => {
            assert!(message.contains("must be a mapping"));
        }
        other => panic!("expected VariableSyntax, got {other:?}"),
    }
}

#[test]
fn broken_template_fails_with_template_syntax() {
    let doc = yaml_doc("a: 1\n...\n{% if a %}unclosed\n");
    assert!(matches!(
        doc.render(None),
        Err(DrydocError::TemplateSyntax(_))
    ));
}

#[test]
fn undefined_variable_fails_with_template_syntax() {
    let doc = yaml_doc("a: 1\n...\n{{ missing }}\n");
    assert!(matches!(
        doc.render(None),
        Err(DrydocError::TemplateSyntax(_))
    ));
}
