//! Tests for value formatting and error rendering.

mod test_helpers;

use bucket_core::{CellValue, ColumnType, PageConfig, Scalar};
use bucket_page::{ResultFormatter, StaticMessages};
use std::sync::Arc;

fn formatter() -> ResultFormatter {
    test_helpers::init_tracing();
    ResultFormatter::default()
}

// ============================================================================
// Page Values
// ============================================================================

#[test]
fn test_page_value_renders_link() {
    let out = formatter().format_value(&"Main Page".into(), &ColumnType::Page, false);
    assert_eq!(out, "[[:Main Page]]");
}

#[test]
fn test_page_value_is_escaped() {
    let out = formatter().format_value(&"A=B]]".into(), &ColumnType::Page, false);
    assert_eq!(out, "[[:A&#61;B&#93;&#93;]]");
}

#[test]
fn test_empty_page_value_renders_nothing() {
    let out = formatter().format_value(&"".into(), &ColumnType::Page, false);
    assert_eq!(out, "");
}

// ============================================================================
// Text, Boolean and Other Values
// ============================================================================

#[test]
fn test_text_value_is_escaped() {
    let out = formatter().format_value(&"{{delete}}".into(), &ColumnType::Text, false);
    assert_eq!(out, "&#123;&#123;delete&#125;&#125;");
}

#[test]
fn test_boolean_values() {
    let f = formatter();
    assert_eq!(f.format_value(&true.into(), &ColumnType::Boolean, false), "True");
    assert_eq!(f.format_value(&false.into(), &ColumnType::Boolean, false), "False");
    assert_eq!(f.format_value(&"1".into(), &ColumnType::Boolean, false), "True");
    assert_eq!(f.format_value(&"0".into(), &ColumnType::Boolean, false), "False");
    assert_eq!(f.format_value(&0i64.into(), &ColumnType::Boolean, false), "False");
}

#[test]
fn test_other_types_render_raw() {
    let f = formatter();
    let integer = ColumnType::Other("INTEGER".to_string());
    assert_eq!(f.format_value(&42i64.into(), &integer, false), "42");
    assert_eq!(
        f.format_value(&"<b>raw</b>".into(), &integer, false),
        "<b>raw</b>"
    );
    let double = ColumnType::Other("DOUBLE".to_string());
    assert_eq!(f.format_value(&2.5f64.into(), &double, false), "2.5");
}

#[test]
fn test_null_value_renders_nothing() {
    assert_eq!(
        formatter().format_value(&CellValue::Null, &ColumnType::Text, false),
        ""
    );
}

// ============================================================================
// Repeated Values
// ============================================================================

#[test]
fn test_repeated_drops_empty_entries() {
    let value = CellValue::from(vec!["a", "", "b"]);
    let out = formatter().format_value(&value, &ColumnType::Text, true);
    assert_eq!(out, "<li class=\"bucket-list\">a<li class=\"bucket-list\">b");
    assert_eq!(out.matches("<li").count(), 2);
}

#[test]
fn test_repeated_pages_render_links() {
    let value = CellValue::from(vec!["Foo", "Bar baz"]);
    let out = formatter().format_value(&value, &ColumnType::Page, true);
    assert_eq!(
        out,
        "<li class=\"bucket-list\">[[:Foo]]<li class=\"bucket-list\">[[:Bar baz]]"
    );
}

#[test]
fn test_repeated_decodes_serialized_list() {
    let value = CellValue::from(r#"["x", "y"]"#);
    let out = formatter().format_value(&value, &ColumnType::Text, true);
    assert_eq!(out, "<li class=\"bucket-list\">x<li class=\"bucket-list\">y");
}

#[test]
fn test_repeated_undecodable_text_renders_nothing() {
    let f = formatter();
    assert_eq!(f.format_value(&"not json".into(), &ColumnType::Text, true), "");
    assert_eq!(f.format_value(&"\"scalar\"".into(), &ColumnType::Text, true), "");
}

#[test]
fn test_repeated_booleans() {
    let value = CellValue::Sequence(vec![Some(Scalar::Bool(true)), Some(Scalar::Bool(false))]);
    let out = formatter().format_value(&value, &ColumnType::Boolean, true);
    assert_eq!(
        out,
        "<li class=\"bucket-list\">True<li class=\"bucket-list\">False"
    );
}

#[test]
fn test_repeated_null_elements() {
    let value = CellValue::Sequence(vec![Some(Scalar::Bool(true)), None]);
    let f = formatter();
    assert_eq!(
        f.format_value(&value, &ColumnType::Boolean, true),
        "<li class=\"bucket-list\">True<li class=\"bucket-list\">False"
    );

    let value = CellValue::Sequence(vec![None, Some(Scalar::from("a"))]);
    assert_eq!(
        f.format_value(&value, &ColumnType::Text, true),
        "<li class=\"bucket-list\">a"
    );
    assert_eq!(
        f.format_value(&value, &ColumnType::Page, true),
        "<li class=\"bucket-list\">[[:a]]"
    );
}

#[test]
fn test_repeated_bare_scalar_renders_nothing() {
    let f = formatter();
    let kind = ColumnType::Other("INTEGER".to_string());
    assert_eq!(f.format_value(&CellValue::from(5i64), &kind, true), "");
    assert_eq!(f.format_value(&CellValue::from(true), &ColumnType::Boolean, true), "");
}

#[test]
fn test_list_in_single_valued_column_renders_as_list() {
    let value = CellValue::from(vec!["a"]);
    let out = formatter().format_value(&value, &ColumnType::Text, false);
    assert_eq!(out, "<li class=\"bucket-list\">a");
}

// ============================================================================
// Error Rendering
// ============================================================================

#[test]
fn test_print_error_escapes_markup() {
    let out = formatter().print_error("<script>");
    assert_eq!(
        out,
        "<strong class=\"error bucket-error\">&#60;script&#62;</strong>"
    );
    assert!(!out.contains("<script>"));
}

#[test]
fn test_print_error_plain_message() {
    assert_eq!(
        formatter().print_error("Bucket does not exist."),
        "<strong class=\"error bucket-error\">Bucket does not exist.</strong>"
    );
}

// ============================================================================
// Injected Capabilities
// ============================================================================

#[test]
fn test_custom_escaper_is_used() {
    let f = ResultFormatter::default().with_escaper(Arc::new(|s: &str| s.to_uppercase()));
    assert_eq!(f.format_value(&"abc".into(), &ColumnType::Text, false), "ABC");
    assert_eq!(f.print_error("oops"), "<strong class=\"error bucket-error\">OOPS</strong>");
}

#[test]
fn test_configured_classes() {
    let config = PageConfig::builder()
        .list_class("items")
        .error_class("warning")
        .build()
        .unwrap();
    let f = ResultFormatter::new(config).with_messages(Arc::new(StaticMessages::english()));
    assert_eq!(
        f.format_value(&CellValue::from(vec!["a"]), &ColumnType::Text, true),
        "<li class=\"items\">a"
    );
    assert_eq!(f.print_error("x"), "<strong class=\"warning\">x</strong>");
}
