//! End-to-end template rendering through the minijinja adapter.

use quire_template::{Renderer, render_str};
use serde_json::json;

fn render(source: &str) -> String {
    render_str(source, json!({})).expect("template should render")
}

#[test]
fn test_custom_filters_in_one_template() {
    let out = render("{{ 'hello world' | kebab }} {{ 'user_name' | camel }} {{ 'test' | plural }}");
    insta::assert_snapshot!(out, @"hello-world userName tests");
}

#[test]
fn test_each_case_filter() {
    assert_eq!(render("{{ 'Foo Bar' | kebab }}"), "foo-bar");
    assert_eq!(render("{{ 'Foo Bar' | snake }}"), "foo_bar");
    assert_eq!(render("{{ 'Foo Bar' | scream }}"), "FOO_BAR");
    assert_eq!(render("{{ 'foo bar' | camel }}"), "fooBar");
    assert_eq!(render("{{ 'foo bar' | pascal }}"), "FooBar");
    assert_eq!(render("{{ 'hello' | capitalize }}"), "Hello");
    assert_eq!(render("{{ 'HeLLo' | lower }}"), "hello");
    assert_eq!(render("{{ 'HeLLo' | upper }}"), "HELLO");
    assert_eq!(render("{{ 'Foo Bar!!' | slug }}"), "foo-bar");
}

#[test]
fn test_inflection_filters() {
    assert_eq!(render("{{ 'city' | plural }}"), "cities");
    assert_eq!(render("{{ 'cities' | singular }}"), "city");
    assert_eq!(render("{{ 'bus' | plural }}"), "buses");
}

#[test]
fn test_default_filter() {
    let out = render_str(
        "{{ none | default(value='fallback') }}",
        json!({ "none": null }),
    )
    .unwrap();
    assert_eq!(out, "fallback");

    let out = render_str(
        "{{ none | default('fallback') }}|{{ missing | default('fallback') }}",
        json!({ "none": null }),
    )
    .unwrap();
    assert_eq!(out, "fallback|fallback");
}

#[test]
fn test_join_filter() {
    let out = render_str(
        "{{ vals | join(sep='_') }}|{{ vals | join }}",
        json!({ "vals": ["a", "b", "c"] }),
    )
    .unwrap();
    assert_eq!(out, "a_b_c|a,b,c");

    let out = render_str("{{ vals | join('_') }}", json!({ "vals": ["a", "b", "c"] })).unwrap();
    assert_eq!(out, "a_b_c");
}

#[test]
fn test_optional_fields_render_empty() {
    let out = render_str(
        "struct {{ entity | pascal }}{{ suffix | pascal }};",
        json!({ "entity": "order_item", "suffix": null }),
    )
    .unwrap();
    assert_eq!(out, "struct OrderItem;");
    assert_eq!(render("[{{ missing | pascal }}]"), "[]");
}

#[test]
fn test_date_filter_and_functions() {
    let out = render_str(
        "{{ created | date }} {{ created | date(pattern='MMM d, yyyy') }}",
        json!({ "created": "2024-01-15T10:30:00" }),
    )
    .unwrap();
    assert_eq!(out, "2024-01-15 Jan 15, 2024");

    let id = render("{{ uuid() }}");
    assert_eq!(id.len(), 36);
    assert_eq!(render("{{ now(pattern='yyyy') | length }}"), "4");
}

#[test]
fn test_generated_module() {
    let renderer = Renderer::new();
    let source = "\
// {{ entity | pascal }} repository
pub struct {{ entity | pascal }}Repository;

impl {{ entity | pascal }}Repository {
    pub const TABLE: &str = \"{{ entity | snake | plural }}\";
    pub const MAX_{{ entity | scream }}_ROWS: usize = 100;

    pub fn find_{{ entity | snake }}() {}
}
";
    let out = renderer
        .render_named_str("repository.rs.j2", source, json!({ "entity": "orderCategory" }))
        .unwrap();
    insta::assert_snapshot!(out, @r#"
    // OrderCategory repository
    pub struct OrderCategoryRepository;

    impl OrderCategoryRepository {
        pub const TABLE: &str = "order_categories";
        pub const MAX_ORDER_CATEGORY_ROWS: usize = 100;

        pub fn find_order_category() {}
    }
    "#);
}

#[test]
fn test_unknown_operation_is_a_render_error() {
    let err = render_str("{{ 'x' | shout }}", json!({})).unwrap_err();
    assert!(err.to_string().contains("render"));
}
