//! Path evaluation tests
//!
//! Selectors, indexes, wildcards and recursive descent over decoded documents
//! and host structures, with typed destinations.

use serde_json::{Value, json};

use jsonq_engine::config::PathOptions;
use jsonq_engine::jsonpath::{ErrorKind, Path};
use jsonq_engine::value::{AsDynamic, DynamicValue, StructuredValue};

struct Address {
    city: Value,
    zip: Value,
}

impl StructuredValue for Address {
    fn type_name(&self) -> &'static str {
        "Address"
    }

    fn field_names(&self) -> &'static [&'static str] {
        &["City", "ZIP"]
    }

    fn field_value(&self, index: usize) -> Option<DynamicValue<'_>> {
        match index {
            0 => Some(self.city.as_dynamic()),
            1 => Some(self.zip.as_dynamic()),
            _ => None,
        }
    }
}

impl AsDynamic for Address {
    fn as_dynamic(&self) -> DynamicValue<'_> {
        DynamicValue::Structured(self)
    }
}

struct Person {
    name: Value,
    home: Option<Box<Address>>,
    tags: Value,
}

impl StructuredValue for Person {
    fn type_name(&self) -> &'static str {
        "Person"
    }

    fn field_names(&self) -> &'static [&'static str] {
        &["Name", "Home", "Tags"]
    }

    fn field_value(&self, index: usize) -> Option<DynamicValue<'_>> {
        match index {
            0 => Some(self.name.as_dynamic()),
            1 => Some(self.home.as_dynamic()),
            2 => Some(self.tags.as_dynamic()),
            _ => None,
        }
    }
}

impl AsDynamic for Person {
    fn as_dynamic(&self) -> DynamicValue<'_> {
        DynamicValue::Structured(self)
    }
}

fn person() -> Person {
    Person {
        name: json!("Ada"),
        home: Some(Box::new(Address {
            city: json!("London"),
            zip: json!(12345),
        })),
        tags: json!([{"zip": 1}, {"other": {"zip": 2}}]),
    }
}

fn compile(expr: &str) -> Path {
    Path::new(expr).expect("test expression compiles")
}

#[test]
fn test_structured_fields_match_wire_names_case_insensitively() {
    let person = person();

    let mut name = String::new();
    compile("name").get(&person, &mut name).expect("field exists");
    assert_eq!(name, "Ada");

    let mut city = String::new();
    compile("HOME.city").get(&person, &mut city).expect("through indirection");
    assert_eq!(city, "London");
}

#[test]
fn test_recursive_descent_crosses_structures_and_documents() {
    let person = person();
    let mut zips: Vec<u32> = Vec::new();
    compile("..zip").get(&person, &mut zips).expect("recursive match");
    zips.sort_unstable();
    assert_eq!(zips, vec![1, 2, 12345]);
}

#[test]
fn test_empty_indirection_reads_as_null() {
    let person = Person {
        name: json!("Bob"),
        home: None,
        tags: json!([]),
    };
    let mut city = String::from("unset");
    let err = compile("home.city")
        .get(&person, &mut city)
        .expect_err("selector on null");
    assert_eq!(err.kind(), ErrorKind::Match);
    assert_eq!(city, "unset");
}

#[test]
fn test_first_matching_key_wins() {
    let doc: Value =
        serde_json::from_str(r#"{"Key": 1, "key": 2}"#).expect("valid document");
    let mut n = 0i64;
    compile("KEY").get(&doc, &mut n).expect("match");
    assert_eq!(n, 1);
}

#[test]
fn test_single_result_errors_surface() {
    let doc = json!({"a": [1, 2], "s": "text", "flag": true});

    let mut n = 0i64;
    let err = compile("a[5]").get(&doc, &mut n).expect_err("out of range");
    assert!(err.is_match());

    let err = compile("s[0]").get(&doc, &mut n).expect_err("index on string");
    assert!(err.is_match());

    let err = compile("flag.x").get(&doc, &mut n).expect_err("selector on bool");
    assert!(err.to_string().contains("bool"), "{err}");

    let err = compile("s[*]").get(&doc, &mut n).expect_err("wildcard on string");
    assert!(err.is_match());

    let err = compile("s").get(&doc, &mut n).expect_err("string into integer");
    assert!(err.is_type());
}

#[test]
fn test_wildcard_contains_per_element_failures() {
    let doc = json!({"a": [{"b": 1}, {"b": "text"}, 7, {"b": 3}]});
    let mut values: Vec<i64> = Vec::new();
    compile("a[*].b").get(&doc, &mut values).expect("partial matches succeed");
    assert_eq!(values, vec![1, 3]);
}

#[test]
fn test_recursive_descent_stops_at_matches() {
    let doc = json!({"b": {"b": 1}, "c": [{"b": 2}, [{"b": 3}]]});
    let mut all: Vec<Value> = Vec::new();
    compile("..b").get(&doc, &mut all).expect("recursive match");
    assert_eq!(all, vec![json!({"b": 1}), json!(2), json!(3)]);
}

#[test]
fn test_recursive_descent_with_child_segments() {
    let doc = json!({"x": {"item": {"id": 1}}, "y": [{"item": {"id": 2}}, {"item": 5}]});
    let mut ids: Vec<i64> = Vec::new();
    compile("..item.id").get(&doc, &mut ids).expect("recursive match");
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn test_recursive_descent_on_scalar_is_an_error() {
    let mut n = 0i64;
    let err = compile("..b").get(&json!(3), &mut n).expect_err("nothing to descend");
    assert!(err.is_match());
}

#[test]
fn test_depth_limit_aborts_fan_out() {
    let mut doc = json!({"leaf": 1});
    for _ in 0..10 {
        doc = json!({"next": doc});
    }
    let mut values: Vec<i64> = Vec::new();

    let shallow = PathOptions::new().max_depth(4);
    let err = compile("..leaf")
        .get_with(&doc, &mut values, &shallow)
        .expect_err("document deeper than the limit");
    assert_eq!(err.kind(), ErrorKind::DepthLimit);

    values.clear();
    compile("..leaf").get(&doc, &mut values).expect("within default limit");
    assert_eq!(values, vec![1]);
}

#[test]
fn test_strict_missing_reports_absent_fields() {
    let doc = json!({"a": {"b": 1}});
    let strict = PathOptions::new().strict_missing(true);
    let mut n = 0i64;

    compile("a.b").get_with(&doc, &mut n, &strict).expect("present field");
    assert_eq!(n, 1);

    let err = compile("a.c")
        .get_with(&doc, &mut n, &strict)
        .expect_err("absent field");
    assert!(err.is_match());
}

#[test]
fn test_unsupported_destinations_are_type_errors() {
    let doc = json!({"a": {"b": 1}, "list": [1, 2]});

    let mut fixed = [0i64; 2];
    let err = compile("list").get(&doc, &mut fixed).expect_err("fixed array");
    assert!(err.is_type());

    let mut optional: Option<i64> = None;
    let err = compile("a.b").get(&doc, &mut optional).expect_err("option slot");
    assert!(err.is_type());

    let mut nested: Vec<i64> = Vec::new();
    let err = compile("list").get(&doc, &mut nested).expect_err("sequence into vec");
    assert!(err.is_type());
    assert!(nested.is_empty());
}
