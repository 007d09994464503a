use crate::common::*;
use messageml_forms::{render_markdown, FormatRegistry};

#[test]
fn single_button_summary() {
    let message = parse(&in_form("f", r#"<button name="done">Complete</button>"#));
    let lines: Vec<_> = message.markdown().lines().map(str::to_string).collect();
    assert_eq!(
        lines,
        vec![
            "Form (log into desktop client to answer):",
            "---",
            "(Button:Complete)",
            "---",
        ]
    );
}

#[test]
fn mixed_fields_keep_document_order() {
    let message = parse(&in_form(
        "f",
        r#"<checkbox name="terms">I agree</checkbox><person-selector/><div><button type="reset">Clear</button></div><button name="send">Send</button>"#,
    ));
    assert_eq!(
        message.markdown(),
        markdown("(Checkbox:terms)\n(Person Selector)\n\n(Button:Clear)\n\n\n(Button:Send)\n")
    );
}

#[test]
fn free_function_matches_the_context() {
    let message = parse(&in_form("f", "<person-selector/>"));
    assert_eq!(render_markdown(message.document()), message.markdown());
}

#[test]
fn registry_serializes_markdown() {
    let registry = FormatRegistry::default();
    let doc = registry
        .parse(&in_form("f", r#"<checkbox name="n"/>"#), "messageml")
        .unwrap();
    assert_eq!(
        registry.serialize(&doc, "markdown").unwrap(),
        markdown("(Checkbox:n)\n")
    );
}
