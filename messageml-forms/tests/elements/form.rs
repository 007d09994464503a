use crate::common::*;
use messageml_forms::{ElementKind, ErrorKind, FormatError, MessageMlContext};

#[test]
fn empty_form_renders_self_closing() {
    let message = parse(r#"<messageML><form id="empty"/></messageML>"#);
    assert_eq!(
        message.presentation_ml(),
        format!(r#"{ENVELOPE_OPEN}<form id="empty"/></div>"#)
    );
    assert_eq!(message.markdown(), markdown(""));
}

#[test]
fn form_id_is_kept_verbatim() {
    let message = parse(r#"<messageML><form id="Survey-42"/></messageML>"#);
    assert_eq!(get(message.document(), &[0]).attribute("id"), Some("Survey-42"));
}

#[test]
fn form_requires_an_id() {
    assert_eq!(
        parse_err("<messageML><form><person-selector/></form></messageML>"),
        "The attribute \"id\" is required"
    );
}

#[test]
fn forms_cannot_nest() {
    assert_eq!(
        parse_err(r#"<messageML><form id="outer"><form id="inner"/></form></messageML>"#),
        "Element \"form\" cannot be nested inside another \"form\""
    );
}

#[test]
fn wrapper_div_keeps_its_class() {
    let message = parse(&in_form(
        "f",
        r#"<div class="row"><checkbox name="a">A</checkbox></div>"#,
    ));
    assert_eq!(
        message.presentation_ml(),
        presentation(
            "f",
            r#"<div class="row"><div class="checkbox-group"><input type="checkbox" name="a" value="on"/><label>A</label></div></div>"#
        )
    );
}

#[test]
fn root_must_be_messageml_or_envelope() {
    assert_eq!(
        parse_err(r#"<form id="f"/>"#),
        "Invalid root element \"form\": expected \"messageML\" or a PresentationML envelope"
    );
    assert_eq!(
        parse_err(r#"<div data-format="HTML"><form id="f"/></div>"#),
        "Attribute \"data-format\" of element \"div\" can only be one of the following values: [PresentationML]."
    );
}

#[test]
fn unknown_element() {
    assert_eq!(
        parse_err(&in_form("f", "<select/>")),
        "Invalid MessageML content at element \"select\""
    );
}

#[test]
fn first_failure_in_document_order_wins() {
    assert_eq!(
        parse_err(&in_form(
            "f",
            r#"<button type="potato">A</button><checkbox>B</checkbox>"#
        )),
        "Attribute \"type\" must be \"action\" or \"reset\""
    );
}

#[test]
fn malformed_markup_is_a_parse_error() {
    let err = MessageMlContext::default()
        .parse("<messageML><form id=\"f\"></messageML>")
        .unwrap_err();
    assert!(matches!(err, FormatError::ParseError(_)));
}

#[test]
fn containment_errors_are_classified() {
    let err = MessageMlContext::default()
        .parse("<messageML><person-selector/></messageML>")
        .unwrap_err();
    let FormatError::Validation(err) = err else {
        panic!("expected a validation error");
    };
    assert_eq!(err.kind(), ErrorKind::IllegalContainment);
}

#[test]
fn document_queries() {
    let message = parse(&in_form(
        "f",
        r#"<div><button name="b">Go</button></div><person-selector/>"#,
    ));
    let doc = message.document();
    let button = element_at(doc, &[0, 0, 0]);

    let lineage: Vec<_> = doc.ancestors(button).map(|(_, e)| e.kind).collect();
    assert_eq!(
        lineage,
        vec![ElementKind::Div, ElementKind::Form, ElementKind::MessageMl]
    );
    assert_eq!(doc.parent(button), Some(element_at(doc, &[0, 0])));
    assert_eq!(doc.children(element_at(doc, &[0])).count(), 2);
    assert_eq!(
        doc.child(element_at(doc, &[0]), 1).map(|e| e.kind),
        Some(ElementKind::PersonSelector)
    );
}
