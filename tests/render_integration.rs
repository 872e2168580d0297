//! End-to-end tests: parse components into a definition set and execute them

use gsx::{parse, parse_into, DefinitionSet, GsxError};
use minijinja::context;
use pretty_assertions::assert_eq;

const TAG_COMPONENT: &str = include_str!("fixtures/tag.gsx");
const LANDING_PAGE: &str = include_str!("fixtures/landing-page.gsx");
const LANDING_PAGE_RESULT: &str = include_str!("fixtures/landing-page.html");

#[test]
fn test_landing_page_with_components() {
    let (mut definitions, warnings) = parse("Tag", TAG_COMPONENT).expect("Should parse tag");
    assert!(warnings.is_empty());
    let warnings =
        parse_into("LandingPage", LANDING_PAGE, &mut definitions).expect("Should parse page");
    assert!(warnings.is_empty());

    let tag = definitions
        .execute("Tag", context! { name => "tag name" })
        .expect("Should render tag");
    assert_eq!(tag, r#"<div class="tag"><span>tag name</span></div>"#);

    let page = definitions
        .execute("LandingPage", context! {})
        .expect("Should render page");
    assert_eq!(page, LANDING_PAGE_RESULT);
}

#[test]
fn test_generated_source_is_registered() {
    let mut definitions = DefinitionSet::new();
    parse_into("Tag", TAG_COMPONENT, &mut definitions).expect("Should parse tag");
    parse_into("Row", "<tr><Tag name={ label } /></tr>", &mut definitions)
        .expect("Should parse row");

    insta::assert_snapshot!(
        definitions.source("Row").unwrap(),
        @r#"<tr>{{ template("Tag", props("name", label)) }}</tr>"#
    );
    assert_eq!(definitions.names().collect::<Vec<_>>(), vec!["Row", "Tag"]);
}

#[test]
fn test_field_reference_reads_caller_data() {
    let mut definitions = DefinitionSet::new();
    parse_into("Tag", TAG_COMPONENT, &mut definitions).expect("Should parse tag");
    parse_into("Row", "<tr><Tag name={ label } /></tr>", &mut definitions)
        .expect("Should parse row");

    let out = definitions
        .execute("Row", context! { label => "from data" })
        .expect("Should render");
    assert_eq!(out, r#"<tr><div class="tag"><span>from data</span></div></tr>"#);
}

#[test]
fn test_numeric_and_bareword_props() {
    let mut definitions = DefinitionSet::new();
    parse_into("Count", "{{ label }}: {{ n + 1 }}", &mut definitions).expect("Should parse");
    let warnings = parse_into("Page", "<Count label=Total n={ 41 } />", &mut definitions)
        .expect("Should parse page");
    assert_eq!(warnings.len(), 1);

    let out = definitions.execute("Page", context! {}).expect("Should render");
    assert_eq!(out, "Total: 42");
}

#[test]
fn test_component_without_attributes_gets_empty_context() {
    let mut definitions = DefinitionSet::new();
    parse_into("Hr", "<hr{{ cls }}>", &mut definitions).expect("Should parse");
    parse_into("Page", "a<Hr />b", &mut definitions).expect("Should parse page");

    let out = definitions
        .execute("Page", context! { cls => " ignored" })
        .expect("Should render");
    assert_eq!(out, "a<hr>b");
}

#[test]
fn test_components_nest() {
    let mut definitions = DefinitionSet::new();
    parse_into("Leaf", "[{{ v }}]", &mut definitions).expect("Should parse");
    parse_into("Branch", "(<Leaf v={ v } /><Leaf v=\"x\" />)", &mut definitions)
        .expect("Should parse");
    parse_into("Root", "<Branch v={ 1 } />", &mut definitions).expect("Should parse");

    let out = definitions.execute("Root", context! {}).expect("Should render");
    assert_eq!(out, "([1][x])");
}

#[test]
fn test_missing_component_fails_at_execution() {
    let (definitions, _) = parse("Page", "<Missing />").expect("Should parse");
    let result = definitions.execute("Page", context! {});
    assert!(matches!(result, Err(GsxError::Render { .. })));
}

#[test]
fn test_self_invocation_is_bounded() {
    let (definitions, _) = parse("Loop", "<Loop />").expect("Should parse");
    let result = definitions.execute("Loop", context! {});
    assert!(matches!(result, Err(GsxError::Render { .. })));
}

#[test]
fn test_compile_error_is_wrapped() {
    let mut definitions = DefinitionSet::new();
    let err = parse_into("Bad", "<Tag value={ ) } />", &mut definitions).unwrap_err();
    assert!(matches!(err, GsxError::Compile { ref name, .. } if name == "Bad"));
    assert!(definitions.is_empty());
}

#[test]
fn test_render_str_uses_registered_components() {
    let (definitions, _) = parse("Tag", TAG_COMPONENT).expect("Should parse");
    let out = definitions
        .render_str(r#"{{ template("Tag", props("name", n)) }}"#, context! { n => 1 })
        .expect("Should render");
    assert_eq!(out, r#"<div class="tag"><span>1</span></div>"#);
}

#[test]
fn test_props_are_escaped_once_through_components() {
    let mut definitions = DefinitionSet::new();
    parse_into("Tag", TAG_COMPONENT, &mut definitions).expect("Should parse tag");
    parse_into("Row", "<tr><Tag name={ label } /></tr>", &mut definitions)
        .expect("Should parse row");

    let out = definitions
        .execute("Row", context! { label => "<script>alert(1)</script>" })
        .expect("Should render");
    assert!(!out.contains("<script>"));
    assert!(out.starts_with(r#"<tr><div class="tag"><span>&lt;script&gt;alert(1)&lt;"#));
    assert!(out.ends_with("</span></div></tr>"));
}
