//! Integration tests for rusty-forms
//!
//! Exercises a mounted form end to end: derived state, show_if gates,
//! touched-gated errors, submit, descriptor updates and HTML output.

use pretty_assertions::assert_eq;
use rstest::rstest;
use rusty_forms::*;
use std::sync::{Arc, Mutex};

fn promo_fields() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::email("email")
            .label("Email")
            .validator(Validator::new().required()),
        FieldDescriptor::text("plan").value("free"),
        FieldDescriptor::text("promoCode").show_if("plan", "paid"),
    ]
}

fn mount(fields: Vec<FieldDescriptor>) -> Form {
    Form::builder()
        .id_source(SequentialIds::new("f"))
        .fields(fields)
        .mount()
        .unwrap()
}

fn text(value: &str) -> FieldValue {
    FieldValue::from(value)
}

#[test]
fn test_promo_code_initial_values() {
    let form = mount(promo_fields());

    let expected: Values = [
        ("email".to_string(), text("")),
        ("plan".to_string(), text("free")),
        ("promoCode".to_string(), text("")),
    ]
    .into_iter()
    .collect();
    assert_eq!(form.values(), &expected);
}

#[test]
fn test_promo_code_gate_follows_plan() {
    let mut form = mount(promo_fields());
    assert!(form.render().field("promoCode").is_none());

    form.handle_change("plan", "paid").unwrap();
    let rendered = form.render();
    let promo = rendered.field("promoCode").unwrap();
    assert!(!promo.error);
    assert_eq!(promo.helper_text, None);

    form.handle_change("plan", "free").unwrap();
    assert!(form.render().field("promoCode").is_none());
}

#[test]
fn test_value_count_matches_named_descriptors() {
    let fields = vec![
        FieldDescriptor::text("a"),
        FieldDescriptor::new(FieldKind::Text).label("Display only"),
        FieldDescriptor::checkbox("b"),
        FieldDescriptor::text("").label("Empty name"),
    ];

    let named = fields.iter().filter(|d| d.field_name().is_some()).count();
    let form = mount(fields);

    assert_eq!(named, 2);
    assert_eq!(form.values().len(), named);
    assert_eq!(form.render().cells.len(), 4);
}

#[test]
fn test_schema_skips_hidden_and_unvalidated_fields() {
    let fields = vec![
        FieldDescriptor::text("kept").validator(Validator::new().required()),
        FieldDescriptor::text("opted_out")
            .validator(Validator::new().required())
            .visible(false),
        FieldDescriptor::text("no_rules"),
    ];

    let schema = validation_schema(&fields);

    assert_eq!(schema.names().collect::<Vec<_>>(), vec!["kept"]);
}

#[rstest]
#[case(text("x"), true)]
#[case(text("X"), false)]
#[case(text(" x"), false)]
#[case(text(""), false)]
#[case(FieldValue::from(true), false)]
fn test_show_if_requires_strict_equality(#[case] current: FieldValue, #[case] visible: bool) {
    let mut form = mount(vec![
        FieldDescriptor::text("field_a"),
        FieldDescriptor::text("field_b").show_if("field_a", "x"),
    ]);

    form.handle_change("field_a", current).unwrap();

    assert_eq!(form.render().field("field_b").is_some(), visible);
}

#[test]
fn test_error_waits_for_touch() {
    let mut form = mount(promo_fields());

    assert!(!form.validate());
    assert_eq!(form.state().error("email"), Some("This field is required"));
    assert!(!form.render().field("email").unwrap().error);

    form.handle_blur("email").unwrap();
    let rendered = form.render();
    let email = rendered.field("email").unwrap();
    assert!(email.error);
    assert_eq!(email.helper_text.as_deref(), Some("This field is required"));
}

#[test]
fn test_change_does_not_validate() {
    let mut form = mount(vec![FieldDescriptor::email("email").validator(Validator::new().email())]);

    form.handle_change("email", "not-an-email").unwrap();

    assert!(form.state().errors.is_empty());
}

#[test]
fn test_successful_submit_calls_handler_once() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&calls);

    let mut form = Form::builder()
        .id_source(SequentialIds::new("f"))
        .fields(promo_fields())
        .on_submit(move |values| sink.lock().unwrap().push(values.clone()))
        .mount()
        .unwrap();

    form.handle_change("email", "ada@example.com").unwrap();
    let outcome = form.submit();

    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].len(), 3);
    assert_eq!(calls[0].get("email"), Some(&text("ada@example.com")));
    assert_eq!(calls[0].get("promoCode"), Some(&text("")));
    assert_eq!(outcome, SubmitOutcome::Submitted(calls[0].clone()));
}

#[test]
fn test_failed_submit_touches_everything() {
    let calls = Arc::new(Mutex::new(0));
    let counter = Arc::clone(&calls);

    let mut form = Form::builder()
        .id_source(SequentialIds::new("f"))
        .fields(promo_fields())
        .on_submit(move |_| *counter.lock().unwrap() += 1)
        .mount()
        .unwrap();

    let outcome = form.submit();

    assert!(!outcome.is_submitted());
    assert_eq!(*calls.lock().unwrap(), 0);
    assert_eq!(form.state().submit_count, 1);
    assert!(form.state().is_touched("plan"));
    assert!(form.state().is_touched("promoCode"));
    assert!(form.render().field("email").unwrap().error);
}

#[test]
fn test_hidden_gated_field_still_validates() {
    let mut form = mount(vec![
        FieldDescriptor::text("plan").value("free"),
        FieldDescriptor::text("promoCode")
            .show_if("plan", "paid")
            .validator(Validator::new().required()),
    ]);

    let outcome = form.submit();

    assert!(form.render().field("promoCode").is_none());
    match outcome {
        SubmitOutcome::Rejected(errors) => {
            assert_eq!(errors.get("promoCode").map(String::as_str), Some("This field is required"))
        }
        SubmitOutcome::Submitted(_) => panic!("expected rejection"),
    }
}

#[test]
fn test_reset_restores_initial_state() {
    let mut form = mount(promo_fields());
    form.handle_change("plan", "paid").unwrap();
    form.submit();

    form.reset();

    assert_eq!(form.values().get("plan"), Some(&text("free")));
    assert!(form.state().errors.is_empty());
    assert!(form.state().touched.is_empty());
    assert_eq!(form.state().submit_count, 0);
}

#[test]
fn test_unknown_field_change_is_an_error() {
    let mut form = mount(promo_fields());
    assert_eq!(
        form.handle_change("nope", "x"),
        Err(FormError::UnknownField("nope".to_string()))
    );
}

#[test]
fn test_generated_ids_are_stable() {
    let mut form = mount(promo_fields());
    form.handle_change("plan", "paid").unwrap();

    let first: Vec<String> = form.render().field_ids().into_iter().map(String::from).collect();
    let second: Vec<String> = form.render().field_ids().into_iter().map(String::from).collect();
    assert_eq!(first, vec!["f-1", "f-2", "f-3"]);
    assert_eq!(first, second);

    let mut fields = promo_fields();
    fields.insert(0, FieldDescriptor::text("nickname"));
    form.update(fields).unwrap();

    let rendered = form.render();
    assert_eq!(rendered.field("email").unwrap().id, "f-1");
    assert_eq!(rendered.field("promoCode").unwrap().id, "f-3");
    assert_eq!(rendered.field("nickname").unwrap().id, "f-4");
}

#[test]
fn test_update_keeps_values_and_seeds_new_fields() {
    let mut form = mount(promo_fields());
    form.handle_change("plan", "paid").unwrap();

    form.update(vec![
        FieldDescriptor::text("plan").value("free"),
        FieldDescriptor::text("company").value("Acme"),
    ])
    .unwrap();

    assert_eq!(form.values().get("plan"), Some(&text("paid")));
    assert_eq!(form.values().get("company"), Some(&text("Acme")));
    assert!(!form.values().contains_key("email"));
    assert!(form.engine().schema().is_empty());
}

#[rstest]
#[case(
    vec![FieldDescriptor::text("a"), FieldDescriptor::text("a")],
    FormError::DuplicateName("a".to_string())
)]
#[case(
    vec![FieldDescriptor::text("a").id("x"), FieldDescriptor::text("b").id("x")],
    FormError::DuplicateId("x".to_string())
)]
#[case(
    vec![FieldDescriptor::text("a").cols(Cols::full().md(13))],
    FormError::InvalidColumnSpan { breakpoint: Breakpoint::Md, span: 13 }
)]
#[case(
    vec![FieldDescriptor::text("a").show_if("a", "x")],
    FormError::SelfReferencingShowIf("a".to_string())
)]
#[case(
    vec![FieldDescriptor::text("a").attr(r#"x><script>alert(1)</script><b y"#, "1")],
    FormError::InvalidAttributeName {
        field: "a".to_string(),
        name: r#"x><script>alert(1)</script><b y"#.to_string(),
    }
)]
fn test_bad_descriptors_are_rejected(#[case] fields: Vec<FieldDescriptor>, #[case] expected: FormError) {
    let result = Form::builder().fields(fields).mount();
    assert_eq!(result.err(), Some(expected));
}

#[test]
fn test_dangling_show_if_mounts_with_field_hidden() {
    let mut form = mount(vec![
        FieldDescriptor::text("name"),
        FieldDescriptor::text("promo").show_if("plan", "paid"),
    ]);

    let rendered = form.render();
    assert!(rendered.field("name").is_some());
    assert!(rendered.field("promo").is_none());

    form.update(vec![FieldDescriptor::text("promo").show_if("ghost", "x")]).unwrap();
    assert!(form.render().cells.is_empty());
}

#[test]
fn test_strict_show_if_rejects_dangling_gate() {
    let mut config = FormConfig::default();
    config.behavior.strict_show_if = true;

    let result = Form::builder()
        .config(config)
        .field(FieldDescriptor::text("promo").show_if("plan", "paid"))
        .mount();

    assert_eq!(
        result.err(),
        Some(FormError::UnknownShowIfField {
            field: "promo".to_string(),
            target: "plan".to_string()
        })
    );
}

#[test]
fn test_generated_ids_never_collide_with_explicit_ids() {
    let form = mount(vec![FieldDescriptor::text("a"), FieldDescriptor::text("b").id("f-1")]);
    assert_eq!(form.render().field_ids(), vec!["f-2", "f-1"]);
}

#[test]
fn test_update_gives_explicit_id_priority_over_reused_id() {
    let mut form = mount(vec![FieldDescriptor::text("a")]);
    assert_eq!(form.render().field_ids(), vec!["f-1"]);

    form.update(vec![FieldDescriptor::text("b").id("f-1"), FieldDescriptor::text("a")])
        .unwrap();

    let rendered = form.render();
    assert_eq!(rendered.field("b").unwrap().id, "f-1");
    assert_eq!(rendered.field("a").unwrap().id, "f-2");
}

#[test]
fn test_attrs_override_computed_attributes() {
    let form = mount(vec![FieldDescriptor::text("code")
        .attr("type", "search")
        .attr("data-kind", "promo")]);

    let html = form.to_html();

    assert!(html.contains(r#"<input id="f-1" name="code" type="search" value="" data-kind="promo">"#));
    assert!(!html.contains(r#"type="text""#));
}

#[test]
fn test_html_escapes_values() {
    let mut form = mount(vec![FieldDescriptor::text("q").label("<Query>")]);
    form.handle_change("q", r#""><script>"#).unwrap();

    let html = form.to_html();

    assert!(html.contains(r#"value="&quot;&gt;&lt;script&gt;""#));
    assert!(html.contains("&lt;Query&gt;"));
    assert!(!html.contains("<script>"));
}

#[test]
fn test_submit_control_closes_form() {
    let form = Form::builder()
        .name("signup")
        .submit_button_text("Create account")
        .id_source(SequentialIds::new("f"))
        .fields(promo_fields())
        .mount()
        .unwrap();

    let html = form.to_html();

    assert!(html.starts_with(r#"<form aria-label="signup" method="post" novalidate>"#));
    assert!(html.ends_with(concat!(
        r#"<div class="grid grid-item grid-xs-12 grid-sm-12 grid-md-12 grid-lg-12">"#,
        r#"<button type="submit" class="button button-contained button-large full-width">"#,
        "Create account</button></div></div></form>",
    )));
}

#[test]
fn test_column_spans_render_as_classes() {
    let form = mount(vec![
        FieldDescriptor::text("first").cols(Cols::uniform(12).md(6)),
        FieldDescriptor::text("last").cols(Cols::uniform(12).md(6)),
    ]);

    let html = form.to_html();

    assert!(html.contains(
        r#"<div class="grid grid-item grid-xs-12 grid-sm-12 grid-md-6 grid-lg-12" data-field="first">"#
    ));
}

#[test]
fn test_definition_round_trip_through_form() {
    let definition = FormDefinition::from_toml(
        r#"
        name = "newsletter"

        [[fields]]
        name = "email"
        type = "email"
        validator = [{ rule = "required", message = "We need your email" }, { rule = "email" }]

        [[fields]]
        name = "terms"
        type = "checkbox"
        validator = [{ rule = "checked" }]
        "#,
    )
    .unwrap();

    let mut form = definition
        .into_builder(FormConfig::default())
        .id_source(SequentialIds::new("f"))
        .mount()
        .unwrap();

    match form.submit() {
        SubmitOutcome::Rejected(errors) => {
            assert_eq!(errors.get("email").map(String::as_str), Some("We need your email"));
            assert_eq!(errors.get("terms").map(String::as_str), Some("Must be checked"));
        }
        SubmitOutcome::Submitted(_) => panic!("expected rejection"),
    }

    form.handle_change("email", "ada@example.com").unwrap();
    form.handle_change("terms", true).unwrap();
    assert!(form.submit().is_submitted());
}

#[test]
fn test_checkbox_starts_unchecked_from_code_and_toml() {
    let definition = FormDefinition::from_toml(
        r#"
        [[fields]]
        name = "terms"
        type = "checkbox"
        validator = [{ rule = "required" }]
        "#,
    )
    .unwrap();
    let from_toml = definition.into_builder(FormConfig::default()).mount().unwrap();

    let in_code = Form::builder()
        .field(FieldDescriptor::checkbox("terms").validator(Validator::new().required()))
        .mount()
        .unwrap();

    assert_eq!(from_toml.values().get("terms"), Some(&FieldValue::Bool(false)));
    assert_eq!(from_toml.values(), in_code.values());
    assert_eq!(
        from_toml.engine().schema().validate(from_toml.values()),
        in_code.engine().schema().validate(in_code.values())
    );
}

#[rstest]
#[case("show_iff = [\"plan\", \"paid\"]", "show_iff")]
#[case("validtor = [{ rule = \"required\" }]", "validtor")]
fn test_definition_rejects_misspelled_keys(#[case] line: &str, #[case] key: &str) {
    let content = format!("[[fields]]\nname = \"promo\"\n{}\n", line);

    let err = FormDefinition::from_toml(&content).unwrap_err();

    assert!(format!("{:#}", err).contains(key));
}
