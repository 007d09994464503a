use crate::common::*;
use messageml_forms::ElementKind;

const FORM_ID: &str = "checkbox-form";
const NAME: &str = "checkbox-name";
const VALUE: &str = "checkbox-value";
const TEXT: &str = "Checkbox Text";

/// Author markup; `None` leaves the attribute (or label) out.
fn author(name: Option<&str>, value: Option<&str>, text: Option<&str>, checked: Option<&str>) -> String {
    let mut attributes = String::new();
    for (attribute, given) in [("name", name), ("value", value), ("checked", checked)] {
        if let Some(given) = given {
            attributes.push_str(&format!(r#" {attribute}="{given}""#));
        }
    }
    in_form(
        FORM_ID,
        &format!("<checkbox{attributes}>{}</checkbox>", text.unwrap_or_default()),
    )
}

fn expected_group(value: Option<&str>, text: &str, checked: Option<&str>) -> String {
    let checked = checked
        .map(|checked| format!(r#" checked="{checked}""#))
        .unwrap_or_default();
    presentation(
        FORM_ID,
        &format!(
            r#"<div class="checkbox-group"><input type="checkbox" name="{NAME}"{checked} value="{}"/><label>{text}</label></div>"#,
            value.unwrap_or("on")
        ),
    )
}

fn assert_checkbox_markdown(message: &messageml_forms::Message) {
    assert_eq!(message.markdown(), markdown(&format!("(Checkbox:{NAME})\n")));
}

#[test]
fn presentation_group() {
    let message = parse(&presentation(
        FORM_ID,
        &format!(
            r#"<div class="checkbox-group"><input type="checkbox" name="{NAME}" value="{VALUE}"/><label>{TEXT}</label></div>"#
        ),
    ));
    assert_eq!(get(message.document(), &[0, 0]).kind, ElementKind::Checkbox);
    assert_eq!(message.presentation_ml(), expected_group(Some(VALUE), TEXT, None));
    assert_checkbox_markdown(&message);
}

#[test]
fn presentation_group_in_author_root() {
    let message = parse(&in_form(
        FORM_ID,
        &format!(
            r#"<div class="checkbox-group"><label>{TEXT}</label><input type="checkbox" name="{NAME}"/></div>"#
        ),
    ));
    assert_eq!(message.presentation_ml(), expected_group(None, TEXT, None));
}

#[test]
fn presentation_bare_input() {
    let message = parse(&presentation(
        FORM_ID,
        r#"<input type="checkbox" name="checkbox-name"/>"#,
    ));
    assert_eq!(get(message.document(), &[0, 0]).kind, ElementKind::Checkbox);
    insta::assert_snapshot!(message.presentation_ml(), @r#"<div data-format="PresentationML" data-version="2.0"><form id="checkbox-form"><input type="checkbox" name="checkbox-name" value="on"/></form></div>"#);
    assert_checkbox_markdown(&message);
}

#[test]
fn presentation_group_with_extra_label() {
    let source = presentation(
        FORM_ID,
        &format!(
            r#"<div class="checkbox-group"><input type="checkbox" name="{NAME}" value="{VALUE}"/><label>{TEXT}</label><label>other</label></div>"#
        ),
    );
    assert_eq!(
        parse_err(&source),
        "Invalid PresentationML for the \"checkbox\" element"
    );
}

#[test]
fn presentation_input_attribute_goes_through_the_schema() {
    let source = presentation(
        FORM_ID,
        r#"<div class="checkbox-group"><input id="id1" type="checkbox" name="name2" value="value1"/><label>Text 1</label></div>"#,
    );
    assert_eq!(
        parse_err(&source),
        "Attribute \"id\" is not allowed in \"checkbox\""
    );
}

#[test]
fn two_inputs_and_two_labels_fail_identically() {
    let two_inputs = presentation(
        FORM_ID,
        r#"<div class="checkbox-group"><input type="checkbox" name="name2" value="value1"/><input type="checkbox" name="name2" value="value2"/></div>"#,
    );
    let two_labels = presentation(
        FORM_ID,
        r#"<div class="checkbox-group"><label>Text 1</label><label>Text 2</label></div>"#,
    );
    assert_eq!(parse_err(&two_inputs), parse_err(&two_labels));
    assert_eq!(
        parse_err(&two_inputs),
        "Invalid PresentationML for the \"checkbox\" element"
    );
}

#[test]
fn complete_checked_checkbox() {
    let message = parse(&author(Some(NAME), Some(VALUE), Some(TEXT), Some("true")));
    assert_eq!(
        message.presentation_ml(),
        expected_group(Some(VALUE), TEXT, Some("true"))
    );
    assert_checkbox_markdown(&message);
}

#[test]
fn explicit_false_is_rendered() {
    let message = parse(&author(Some(NAME), Some(VALUE), Some(TEXT), Some("false")));
    assert_eq!(
        message.presentation_ml(),
        expected_group(Some(VALUE), TEXT, Some("false"))
    );
}

#[test]
fn checked_is_case_insensitive() {
    let message = parse(&author(Some(NAME), None, Some(TEXT), Some("TRUE")));
    assert_eq!(
        get(message.document(), &[0, 0]).attribute("checked"),
        Some("true")
    );
}

#[test]
fn missing_checked_is_not_rendered() {
    let message = parse(&author(Some(NAME), Some(VALUE), Some(TEXT), None));
    let checkbox = get(message.document(), &[0, 0]);
    assert_eq!(checkbox.attribute("checked"), None);
    assert_eq!(checkbox.effective_attribute("checked"), Some("false"));
    assert_eq!(message.presentation_ml(), expected_group(Some(VALUE), TEXT, None));
}

#[test]
fn missing_value_defaults_to_on() {
    let message = parse(&author(Some(NAME), None, Some(TEXT), Some("false")));
    assert_eq!(
        message.presentation_ml(),
        expected_group(None, TEXT, Some("false"))
    );

    let message = parse(&author(Some(NAME), None, Some(TEXT), None));
    assert_eq!(message.presentation_ml(), expected_group(None, TEXT, None));
    assert_checkbox_markdown(&message);
}

#[test]
fn name_is_required() {
    let expected = "The attribute \"name\" is required";
    assert_eq!(
        parse_err(&author(None, Some(VALUE), Some(TEXT), Some("false"))),
        expected
    );
    assert_eq!(parse_err(&author(None, None, None, None)), expected);
}

#[test]
fn without_label_renders_a_bare_input() {
    let message = parse(&author(Some(NAME), Some(VALUE), None, Some("false")));
    assert_eq!(
        message.presentation_ml(),
        presentation(
            FORM_ID,
            r#"<input type="checkbox" name="checkbox-name" checked="false" value="checkbox-value"/>"#
        )
    );
    assert_checkbox_markdown(&message);
}

#[test]
fn invalid_checked_value() {
    assert_eq!(
        parse_err(&author(Some(NAME), Some(VALUE), Some(TEXT), Some("somethingElse"))),
        "Attribute \"checked\" of element \"checkbox\" can only be one of the following values: [true, false]."
    );
}

#[test]
fn non_text_content() {
    assert_eq!(
        parse_err(&in_form(
            FORM_ID,
            r#"<checkbox name="name" value="value"><div>Value</div></checkbox>"#
        )),
        "Element \"div\" is not allowed in \"checkbox\""
    );
}

#[test]
fn outside_form() {
    assert_eq!(
        parse_err(r#"<messageML><checkbox value="value">Value</checkbox></messageML>"#),
        "Element \"checkbox\" can only be a inner child of the following elements: [form]"
    );
}

#[test]
fn unknown_attribute() {
    assert_eq!(
        parse_err(&in_form(
            FORM_ID,
            r#"<checkbox invalid="true" value="value">Value</checkbox>"#
        )),
        "Attribute \"invalid\" is not allowed in \"checkbox\""
    );
}

#[test]
fn name_and_value_are_kept_verbatim() {
    let message = parse(&author(Some("Opt-In"), Some("Yes Please"), Some(TEXT), None));
    let checkbox = get(message.document(), &[0, 0]);
    assert_eq!(checkbox.attribute("name"), Some("Opt-In"));
    assert_eq!(checkbox.attribute("value"), Some("Yes Please"));
}
