use crate::common::*;
use messageml_forms::ElementKind;

const FORM_ID: &str = "id";

fn assert_valid(source: &str) {
    let message = parse(source);
    let doc = message.document();
    assert_eq!(get(doc, &[0]).kind, ElementKind::Form);
    assert_eq!(get(doc, &[0, 0]).kind, ElementKind::PersonSelector);
    assert_eq!(
        message.presentation_ml(),
        presentation(FORM_ID, r#"<div class="person-selector"/>"#)
    );
    assert_eq!(message.markdown(), markdown("(Person Selector)\n\n"));
}

#[test]
fn presentation_syntax() {
    assert_valid(&in_form(FORM_ID, r#"<div class="person-selector"/>"#));
}

#[test]
fn author_syntax() {
    assert_valid(&in_form(FORM_ID, "<person-selector/>"));
    assert_valid(&in_form(FORM_ID, "<person-selector></person-selector>"));
}

#[test]
fn both_syntaxes_build_equal_trees() {
    let author = parse(&in_form(FORM_ID, "<person-selector/>"));
    let rendered = parse(&presentation(FORM_ID, r#"<div class="person-selector"/>"#));
    assert_eq!(author.document(), rendered.document());
}

#[test]
fn presentation_attribute_is_named() {
    assert_eq!(
        parse_err(&in_form(
            FORM_ID,
            r#"<div id="idOne" class="person-selector"/>"#
        )),
        "Attribute \"id\" is not allowed in \"person-selector\""
    );
}

#[test]
fn author_attribute_is_rejected_wholesale() {
    assert_eq!(
        parse_err(&in_form(FORM_ID, r#"<person-selector class="some-class"/>"#)),
        "Element \"person-selector\" may not have attributes"
    );
}

#[test]
fn content_is_rejected_in_both_syntaxes() {
    let expected = "Element \"person-selector\" may not have child elements or text content";
    assert_eq!(
        parse_err(&in_form(
            FORM_ID,
            r#"<div class="person-selector"><div>hey</div></div>"#
        )),
        expected
    );
    assert_eq!(
        parse_err(&in_form(FORM_ID, "<person-selector>a</person-selector>")),
        expected
    );
    assert_eq!(
        parse_err(&in_form(FORM_ID, "<person-selector><div/></person-selector>")),
        expected
    );
}

#[test]
fn must_sit_directly_in_the_form() {
    assert_eq!(
        parse_err(&in_form(FORM_ID, "<div><person-selector/></div>")),
        "Element \"person-selector\" can only be a child of the following elements: [form]"
    );
}
