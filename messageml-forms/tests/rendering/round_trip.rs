//! Rendered PresentationML parses back into the document it came from.

use crate::common::*;
use messageml_forms::{build, parse_xml, render_presentation, Document};
use proptest::prelude::*;

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('"', "&quot;")
}

fn attribute(name: &str, value: &Option<String>) -> String {
    value
        .as_ref()
        .map(|value| format!(r#" {name}="{}""#, escape(value)))
        .unwrap_or_default()
}

fn label_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z&<\"][A-Za-z &<]{0,12}"
}

fn button_strategy() -> impl Strategy<Value = String> {
    (
        prop::option::of("[a-zA-Z][a-zA-Z0-9-]{0,8}"),
        prop::option::of(prop::sample::select(vec!["action", "Reset", "RESET"])),
        prop::option::of(prop::sample::select(vec![
            "primary",
            "Secondary",
            "primary-destructive",
            "secondary-destructive",
        ])),
        label_strategy(),
    )
        .prop_map(|(name, kind, class, label)| {
            // action buttons need a name
            let name = match kind {
                Some(kind) if kind.eq_ignore_ascii_case("reset") => name,
                _ => Some(name.unwrap_or_else(|| "fallback".to_string())),
            };
            format!(
                "<button{}{}{}>{}</button>",
                attribute("name", &name),
                attribute("type", &kind.map(str::to_string)),
                attribute("class", &class.map(str::to_string)),
                escape(&label)
            )
        })
}

fn checkbox_strategy() -> impl Strategy<Value = String> {
    (
        "[a-zA-Z][a-zA-Z0-9_-]{0,8}",
        prop::option::of("[a-zA-Z0-9 ]{1,8}"),
        prop::option::of(prop::sample::select(vec!["true", "false", "TRUE"])),
        prop::option::of(label_strategy()),
    )
        .prop_map(|(name, value, checked, label)| {
            format!(
                "<checkbox{}{}{}>{}</checkbox>",
                attribute("name", &Some(name)),
                attribute("value", &value),
                attribute("checked", &checked.map(str::to_string)),
                label.as_deref().map(escape).unwrap_or_default()
            )
        })
}

fn field_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        button_strategy(),
        checkbox_strategy(),
        Just("<person-selector/>".to_string()),
    ]
}

/// Fields, some wrapped in a div. Person selectors must stay direct children.
fn body_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec((field_strategy(), any::<bool>()), 0..6).prop_map(|fields| {
        fields
            .into_iter()
            .map(|(field, wrap)| {
                if wrap && !field.starts_with("<person-selector") {
                    format!("<div>{field}</div>")
                } else {
                    field
                }
            })
            .collect()
    })
}

fn build_str(source: &str) -> Document {
    build(&parse_xml(source).unwrap()).unwrap_or_else(|err| panic!("{source}: {err}"))
}

proptest! {
    #[test]
    fn presentation_round_trip(body in body_strategy()) {
        let original = build_str(&in_form("generated", &body));
        let rendered = render_presentation(&original);
        let reparsed = build_str(&rendered);

        prop_assert_eq!(&original, &reparsed);
        prop_assert_eq!(render_presentation(&reparsed), rendered);
    }
}

#[test]
fn labelled_and_unlabelled_checkboxes_survive() {
    let original = build_str(&in_form(
        "f",
        r#"<checkbox name="a">A</checkbox><checkbox name="b" checked="true"/>"#,
    ));
    let rendered = render_presentation(&original);
    assert_eq!(
        rendered,
        presentation(
            "f",
            r#"<div class="checkbox-group"><input type="checkbox" name="a" value="on"/><label>A</label></div><input type="checkbox" name="b" checked="true" value="on"/>"#
        )
    );
    assert_eq!(build_str(&rendered), original);
}

#[test]
fn empty_label_group_round_trips() {
    let source = presentation(
        "f",
        r#"<div class="checkbox-group"><input type="checkbox" name="a"/><label></label></div>"#,
    );
    let doc = build_str(&source);
    let rendered = render_presentation(&doc);
    assert_eq!(
        rendered,
        presentation(
            "f",
            r#"<div class="checkbox-group"><input type="checkbox" name="a" value="on"/><label></label></div>"#
        )
    );
    assert_eq!(build_str(&rendered), doc);
}

#[test]
fn labels_split_by_comments_survive() {
    let original = build_str(&in_form(
        "f",
        r#"<button name="a">Go<!-- c -->Now</button><checkbox name="b">x<?pi ?>y</checkbox>"#,
    ));
    let rendered = render_presentation(&original);
    assert_eq!(
        rendered,
        presentation(
            "f",
            r#"<button type="action" name="a">GoNow</button><div class="checkbox-group"><input type="checkbox" name="b" value="on"/><label>xy</label></div>"#
        )
    );
    assert_eq!(build_str(&rendered), original);
}
