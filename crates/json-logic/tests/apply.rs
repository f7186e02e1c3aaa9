//! Integration tests for `apply`.

use json_logic::{apply, Error, Kind, ValidationError, Value};
use serde_json::json;

fn check(rule: serde_json::Value, expected: serde_json::Value, data: serde_json::Value) {
    let result = apply(&Value::from(rule.clone()), &Value::from(data))
        .unwrap_or_else(|e| panic!("apply({}) failed: {}", rule, e));
    assert_eq!(serde_json::Value::from(result), expected, "rule: {}", rule);
}

fn check_err(rule: serde_json::Value, data: serde_json::Value) -> Error {
    apply(&Value::from(rule.clone()), &Value::from(data))
        .err()
        .unwrap_or_else(|| panic!("expected error for {}", rule))
}

// ----------------------------------------------------------------- Literals

#[test]
fn test_literals() {
    check(json!(1), json!(1), json!(null));
    check(json!("text"), json!("text"), json!(null));
    check(json!(null), json!(null), json!(null));
    check(json!([1, {"+": [1, 1]}]), json!([1, {"+": [1, 1]}]), json!(null));
    check(json!({}), json!({}), json!(null));
    check(json!({"a": 1, "b": 2}), json!({"a": 1, "b": 2}), json!(null));
}

#[test]
fn test_unknown_operator() {
    assert_eq!(
        check_err(json!({"nope": [1]}), json!(null)),
        Error::Validation(ValidationError::UnknownOperator("nope".to_string()))
    );
}

#[test]
fn test_arity_is_checked_at_dispatch() {
    let err = check_err(json!({"%": [1]}), json!(null));
    assert!(
        matches!(err, Error::Validation(ValidationError::Arity { found: 1, .. })),
        "got: {err}"
    );
    assert_eq!(err.to_string(), "\"%\" operator expects 2 operands, got 1.");
}

// ----------------------------------------------------------------- Data access

#[test]
fn test_var() {
    let data = json!({"a": {"b": 1}, "list": ["x", "y"], "empty": null});
    check(json!({"var": "a.b"}), json!(1), data.clone());
    check(json!({"var": ["a.b"]}), json!(1), data.clone());
    check(json!({"var": ".a.b"}), json!(1), data.clone());
    check(json!({"var": "a"}), json!({"b": 1}), data.clone());
    check(json!({"var": "a.b.c"}), json!(null), data.clone());
    check(json!({"var": ["empty", "fallback"]}), json!("fallback"), data.clone());
    check(json!({"var": ["missing.path", 42]}), json!(42), json!({}));
    check(json!({"var": ""}), json!(5), json!(5));
    check(json!({"var": []}), json!(5), json!(5));
    check(json!({"var": 1}), json!("banana"), json!(["apple", "banana"]));
    check(json!({"var": {"cat": ["a", ".b"]}}), json!(1), data);
}

#[test]
fn test_var_bad_path() {
    assert!(matches!(
        check_err(json!({"var": true}), json!({})),
        Error::TypeMismatch { operator: "var", found: Kind::Bool, .. }
    ));
}

#[test]
fn test_missing() {
    let data = json!({"a": 1, "c": ""});
    check(json!({"missing": ["a", "b", "c"]}), json!(["b", "c"]), data.clone());
    check(json!({"missing": [["a", "b"]]}), json!(["b"]), data.clone());
    check(json!({"missing": "a"}), json!([]), data.clone());
    check(json!({"missing": {"merge": ["a", "z"]}}), json!(["z"]), data);
}

#[test]
fn test_missing_some() {
    let data = json!({"a": "apple", "c": "carrot"});
    check(json!({"missing_some": [1, ["a", "b", "c"]]}), json!([]), data.clone());
    check(json!({"missing_some": [2, ["a", "b", "c"]]}), json!([]), data.clone());
    check(json!({"missing_some": [3, ["a", "b", "c"]]}), json!(["b"]), data.clone());
    assert!(matches!(
        check_err(json!({"missing_some": ["1", ["a"]]}), data),
        Error::TypeMismatch { operator: "missing_some", .. }
    ));
}

#[test]
fn test_log_passes_value_through() {
    check(json!({"log": "apple"}), json!("apple"), json!(null));
    check(json!({"log": [{"+": [1, 2]}]}), json!(3), json!(null));
}

// ----------------------------------------------------------------- Logic

#[test]
fn test_not() {
    check(json!({"!": [true]}), json!(false), json!(null));
    check(json!({"!": 0}), json!(true), json!(null));
    check(json!({"!!": [3]}), json!(true), json!(null));
    check(json!({"!!": ["text"]}), json!(false), json!(null));
}

#[test]
fn test_and() {
    check(json!({"and": [true, true]}), json!(true), json!(null));
    check(json!({"and": [true, false]}), json!(false), json!(null));
    check(json!({"and": [true, 3, 2]}), json!(3), json!(null));
    check(json!({"and": [1, 0]}), json!(false), json!(null));
    assert!(matches!(
        check_err(json!({"and": [true, "yes"]}), json!(null)),
        Error::TypeMismatch { operator: "and", found: Kind::String, .. }
    ));
}

#[test]
fn test_or() {
    check(json!({"or": [false, 0, 5, true]}), json!(5), json!(null));
    check(json!({"or": [false, true, 5]}), json!(true), json!(null));
    check(json!({"or": [false, 0, "x"]}), json!(false), json!(null));
}

#[test]
fn test_if() {
    check(json!({"if": [true, "yes", "no"]}), json!("yes"), json!(null));
    check(json!({"if": [false, "yes", "no"]}), json!("no"), json!(null));
    check(json!({"if": [false, 1, false, 2, 3]}), json!(3), json!(null));
    check(json!({"if": [false, 1, true, 2, 3]}), json!(2), json!(null));
    check(json!({"if": [false, 1]}), json!(null), json!(null));
    check(json!({"if": []}), json!(null), json!(null));
    // Branches not taken are never evaluated.
    check(json!({"if": [true, 1, {"nope": []}]}), json!(1), json!(null));
    check(
        json!({"if": [{"<": [{"var": "temp"}, 0]}, "freezing", "fine"]}),
        json!("freezing"),
        json!({"temp": -4}),
    );
}

#[test]
fn test_ternary() {
    check(json!({"?:": [true, 1, 2]}), json!(1), json!(null));
    check(json!({"?:": [false, 1, 2]}), json!(2), json!(null));
    assert!(matches!(
        check_err(json!({"?:": [1, 1, 2]}), json!(null)),
        Error::TypeMismatch { operator: "?:", found: Kind::Number, .. }
    ));
}

// ----------------------------------------------------------------- Comparison

#[test]
fn test_equality() {
    check(json!({"==": [2, "2"]}), json!(true), json!(null));
    check(json!({"===": [2, "2"]}), json!(false), json!(null));
    check(json!({"!=": [1, 2]}), json!(true), json!(null));
    check(json!({"!==": [1, 1]}), json!(false), json!(null));
    check(json!({"==": [null, null]}), json!(true), json!(null));
    check(json!({"==": ["a", "a"]}), json!(true), json!(null));
    check(json!({"==": [[1], [1]]}), json!(false), json!(null));
    assert!(matches!(
        check_err(json!({"==": ["2", 2]}), json!(null)),
        Error::TypeMismatch { operator: "==", found: Kind::Number, .. }
    ));
}

#[test]
fn test_ordering() {
    check(json!({"<": [1, 2]}), json!(true), json!(null));
    check(json!({"<": [1, "2"]}), json!(true), json!(null));
    check(json!({"<": ["a", "b"]}), json!(true), json!(null));
    check(json!({">": [3, 2]}), json!(true), json!(null));
    check(json!({">=": [2, 2]}), json!(true), json!(null));
    check(json!({"<=": [3, 2]}), json!(false), json!(null));
}

#[test]
fn test_between() {
    check(json!({"<": [1, 2, 3]}), json!(true), json!(null));
    check(json!({"<": [1, 3, 2]}), json!(false), json!(null));
    check(json!({"<": [1, 1, 2]}), json!(false), json!(null));
    check(json!({"<=": [1, 1, 2]}), json!(true), json!(null));
}

#[test]
fn test_single_operand_comparison_is_truthiness() {
    check(json!({"==": [1]}), json!(true), json!(null));
    check(json!({"<": [0]}), json!(false), json!(null));
}

// ----------------------------------------------------------------- Arithmetic

#[test]
fn test_arithmetic() {
    check(json!({"+": [1, 2, 3, 4]}), json!(10), json!(null));
    check(json!({"+": ["1", "10.5"]}), json!(11.5), json!(null));
    check(json!({"+": []}), json!(0), json!(null));
    check(json!({"-": [1, 2]}), json!(-1), json!(null));
    check(json!({"-": 2}), json!(-2), json!(null));
    check(json!({"*": [1, 2, 3, 4]}), json!(24), json!(null));
    check(json!({"/": [1, 4]}), json!(0.25), json!(null));
    check(json!({"%": [7, 3]}), json!(1), json!(null));
    check(json!({"max": [1, 3, 2]}), json!(3), json!(null));
    check(json!({"min": [1, 3, -2]}), json!(-2), json!(null));
    check(json!({"min": []}), json!(null), json!(null));
}

#[test]
fn test_div_with_only_one_value() {
    check(json!({"/": [4]}), json!(4), json!(null));
}

#[test]
fn test_division_by_zero() {
    assert_eq!(
        check_err(json!({"/": [1, 0]}), json!(null)),
        Error::DivisionByZero { operator: "/" }
    );
    assert_eq!(
        check_err(json!({"%": [1, 0]}), json!(null)),
        Error::DivisionByZero { operator: "%" }
    );
}

#[test]
fn test_absolute_value() {
    check(json!({"abs": {"var": "test.number"}}), json!(2), json!({"test": {"number": -2}}));
    check(json!({"abs": [-1.5]}), json!(1.5), json!(null));
}

#[test]
fn test_arithmetic_rejects_compound_operands() {
    assert!(matches!(
        check_err(json!({"+": [1, [2]]}), json!(null)),
        Error::TypeMismatch { operator: "+", found: Kind::Array, .. }
    ));
}

#[test]
fn test_list_result_spreads_into_operands() {
    check(json!({"+": {"map": [[1, 2, 3], {"var": ""}]}}), json!(6), json!(null));
    check(json!({"max": {"var": "scores"}}), json!(9), json!({"scores": [4, 9, 2]}));
}

// ----------------------------------------------------------------- Strings

#[test]
fn test_cat() {
    check(json!({"cat": ["I love", " pie"]}), json!("I love pie"), json!(null));
    check(json!({"cat": ["n=", 1.5, null, true]}), json!("n=1.5true"), json!(null));
    check(json!({"cat": ["v", [1, 2]]}), json!("v1,2"), json!(null));
    check(json!({"cat": []}), json!(""), json!(null));
}

#[test]
fn test_substr() {
    check(json!({"substr": ["jsonlogic", 4]}), json!("logic"), json!(null));
    check(json!({"substr": ["jsonlogic", -5]}), json!("logic"), json!(null));
    check(json!({"substr": ["jsonlogic", 1, 3]}), json!("son"), json!(null));
    check(json!({"substr": ["jsonlogic", 4, -2]}), json!("log"), json!(null));
}

// ----------------------------------------------------------------- Arrays

#[test]
fn test_in() {
    check(json!({"in": ["c", "abcd"]}), json!(true), json!(null));
    check(json!({"in": ["x", "abcd"]}), json!(false), json!(null));
    check(json!({"in": [2, [1, 2, 3]]}), json!(true), json!(null));
    check(json!({"in": ["2", [1, 2, 3]]}), json!(false), json!(null));
    assert!(matches!(
        check_err(json!({"in": [1, "abc"]}), json!(null)),
        Error::TypeMismatch { operator: "in", .. }
    ));
    assert!(matches!(
        check_err(json!({"in": [1, 5]}), json!(null)),
        Error::TypeMismatch { operator: "in", .. }
    ));
}

#[test]
fn test_nested_operand_arrays_are_data() {
    // The inner rule sits two levels deep, so it is never evaluated.
    check(json!({"in": [1, [{"var": "x"}]]}), json!(false), json!({"x": 1}));
}

#[test]
fn test_list_of_ranges() {
    check(
        json!({"filter": [
            {"var": "people"},
            {"in": [{"var": ".age"}, [[12, 18], [22, 28], [32, 38]]]}
        ]}),
        json!([
            {"age": 18, "name": "John"},
            {"age": 18, "name": "Mark"}
        ]),
        json!({"people": [
            {"age": 18, "name": "John"},
            {"age": 20, "name": "Luke"},
            {"age": 18, "name": "Mark"}
        ]}),
    );
}

#[test]
fn test_in_sorted() {
    check(
        json!({"filter": [
            {"var": "people"},
            {"in_sorted": [
                {"var": ".age"},
                [11.00, [12, 14], [13, 18], 2, "20", [32, 38], "a", ["b", "d"]]
            ]}
        ]}),
        json!([
            {"age": "18", "name": "John"},
            {"age": 20, "name": "Luke"},
            {"age": 18, "name": "Mark"},
            {"age": 11, "name": "Mickey"},
            {"age": 2, "name": "Mario"},
            {"age": "a", "name": "Mario"},
            {"age": "c", "name": "Princess"}
        ]),
        json!({"people": [
            {"age": "18", "name": "John"},
            {"age": 20, "name": "Luke"},
            {"age": 18, "name": "Mark"},
            {"age": 40, "name": "Donald"},
            {"age": 11, "name": "Mickey"},
            {"age": "1", "name": "Minnie"},
            {"age": 2, "name": "Mario"},
            {"age": "a", "name": "Mario"},
            {"age": "c", "name": "Princess"}
        ]}),
    );
}

#[test]
fn test_in_sorted_requires_array() {
    assert!(matches!(
        check_err(json!({"in_sorted": [1, "abc"]}), json!(null)),
        Error::TypeMismatch { operator: "in_sorted", found: Kind::String, .. }
    ));
}

#[test]
fn test_merge() {
    check(json!({"merge": [[1, 2], [3], 4]}), json!([1, 2, 3, 4]), json!(null));
    check(json!({"merge": []}), json!([]), json!(null));
    check(
        json!({"merge": [[["a", "b"]], [["c", "d"]]]}),
        json!([["a", "b"], ["c", "d"]]),
        json!(null),
    );
    check(
        json!({"merge": [[["18800000", "18800969"]], [["19840000", "19840969"]]]}),
        json!([["18800000", "18800969"], ["19840000", "19840969"]]),
        json!({}),
    );
}

// ----------------------------------------------------------------- Collections

#[test]
fn test_map_filter_reduce() {
    let data = json!({"n": [1, 2, 3, 4]});
    check(
        json!({"map": [{"var": "n"}, {"*": [{"var": ""}, 2]}]}),
        json!([2, 4, 6, 8]),
        data.clone(),
    );
    check(json!({"filter": [{"var": "n"}, {">": [{"var": ""}, 2]}]}), json!([3, 4]), data.clone());
    check(
        json!({"reduce": [
            {"var": "n"},
            {"+": [{"var": ".current"}, {"var": ".accumulator"}]},
            0
        ]}),
        json!(10),
        data.clone(),
    );
    check(
        json!({"reduce": [{"var": "n"}, {"var": ".current"}]}),
        json!(4),
        data,
    );
    check(json!({"reduce": [[], {"var": ".current"}, 7]}), json!(7), json!(null));
}

#[test]
fn test_plain_paths_read_the_element() {
    check(
        json!({"reduce": [
            {"var": "integers"},
            {"+": [{"var": "current"}, {"var": "accumulator"}]},
            0
        ]}),
        json!(10),
        json!({"integers": [1, 2, 3, 4]}),
    );
    check(
        json!({"all": [{"var": "items"}, {">=": [{"var": "qty"}, 1]}]}),
        json!(true),
        json!({"items": [{"qty": 1, "sku": "apple"}, {"qty": 2, "sku": "banana"}]}),
    );
    check(
        json!({"some": [{"var": "items"}, {"==": [{"var": "sku"}, "pear"]}]}),
        json!(false),
        json!({"items": [{"qty": 1, "sku": "apple"}]}),
    );
}

#[test]
fn test_plain_paths_fall_back_to_the_root() {
    check(
        json!({"map": [{"var": "items"}, {"*": [{"var": "qty"}, {"var": "factor"}]}]}),
        json!([3, 6]),
        json!({"factor": 3, "items": [{"qty": 1}, {"qty": 2}]}),
    );
}

#[test]
fn test_non_array_collection_is_empty() {
    check(json!({"map": [{"var": "nope"}, 1]}), json!([]), json!({}));
    check(json!({"filter": [5, true]}), json!([]), json!(null));
}

#[test]
fn test_all_some_none() {
    check(json!({"all": [[1, 2, 3], {">": [{"var": ""}, 0]}]}), json!(true), json!(null));
    check(json!({"all": [[1, -2], {">": [{"var": ""}, 0]}]}), json!(false), json!(null));
    check(json!({"all": [[], true]}), json!(false), json!(null));
    check(json!({"some": [[-1, 2], {">": [{"var": ""}, 0]}]}), json!(true), json!(null));
    check(json!({"some": [[], true]}), json!(false), json!(null));
    check(json!({"none": [[-1, -2], {">": [{"var": ""}, 0]}]}), json!(true), json!(null));
    check(json!({"none": [[], true]}), json!(true), json!(null));
}

#[test]
fn test_some_all_none_with_lists() {
    let list = json!([511, 521, 811]);
    check(
        json!({"some": [list.clone(), {"in": [{"var": ""}, [1, 2, 3, 511]]}]}),
        json!(true),
        json!({}),
    );
    check(
        json!({"all": [list.clone(), {"in": [{"var": ""}, [511, 521, 811, 3]]}]}),
        json!(true),
        json!({}),
    );
    check(json!({"none": [list, {"in": [{"var": ""}, [1, 2]]}]}), json!(true), json!({}));
}

#[test]
fn test_in_operator_works_with_maps() {
    check(
        json!({"some": [
            [511, 521, 811],
            {"in": [{"var": ""}, {"map": [{"var": "my_list"}, {"var": ".service_id"}]}]}
        ]}),
        json!(true),
        json!({"my_list": [
            {"service_id": 511},
            {"service_id": 771},
            {"service_id": 521},
            {"service_id": 181}
        ]}),
    );
}

#[test]
fn test_local_context() {
    let rule = json!({"filter": [
        {"var": "people"},
        {"==": [
            {"var": ".age"},
            {"min": {"map": [{"var": "people"}, {"var": ".age"}]}}
        ]}
    ]});
    check(
        rule.clone(),
        json!([
            {"age": 18, "name": "John"},
            {"age": 18, "name": "Mark"}
        ]),
        json!({"people": [
            {"age": 18, "name": "John"},
            {"age": 20, "name": "Luke"},
            {"age": 18, "name": "Mark"}
        ]}),
    );
    check(
        rule,
        json!([{"age": 0, "name": "John"}]),
        json!({"people": [{"age": 0, "name": "John"}]}),
    );
}

#[test]
fn test_scopes_do_not_chain() {
    // Inside the inner predicate the scope is a number; the outer element is
    // out of reach, whether the path is relative or plain.
    check(
        json!({"map": [
            {"var": "rows"},
            {"map": [{"var": "ns"}, {"var": ".k"}]}
        ]}),
        json!([[null, null]]),
        json!({"rows": [{"k": 1}], "ns": [1, 2]}),
    );
    check(
        json!({"map": [
            {"var": "rows"},
            {"map": [{"var": "ns"}, {"var": "k"}]}
        ]}),
        json!([[null, null]]),
        json!({"rows": [{"k": 1}], "ns": [1, 2]}),
    );
}

// ----------------------------------------------------------------- Objects

#[test]
fn test_set_a_value() {
    let rule = Value::from(json!({
        "map": [
            {"var": "objects"},
            {"set": [{"var": ""}, "age", {"+": [{"var": ".age"}, 2]}]}
        ]
    }));
    let data = Value::from(json!({
        "objects": [
            {"age": 100, "location": "north"},
            {"age": 500, "location": "south"}
        ]
    }));
    let before = data.clone();

    let result = apply(&rule, &data).unwrap();
    assert_eq!(
        serde_json::Value::from(result),
        json!([
            {"age": 102, "location": "north"},
            {"age": 502, "location": "south"}
        ])
    );
    assert_eq!(data, before);
}

#[test]
fn test_set() {
    check(json!({"set": [null, "a.b", 1]}), json!({"a": {"b": 1}}), json!(null));
    check(
        json!({"set": [{"var": "t"}, ".a.c", 2]}),
        json!({"a": {"b": 1, "c": 2}}),
        json!({"t": {"a": {"b": 1}}}),
    );
    assert!(matches!(
        check_err(json!({"set": [{"var": "t"}, "a.b", 1]}), json!({"t": {"a": 5}})),
        Error::TypeMismatch { operator: "set", found: Kind::Number, .. }
    ));
    assert!(matches!(
        check_err(json!({"set": [null, 1, 1]}), json!(null)),
        Error::TypeMismatch { operator: "set", found: Kind::Number, .. }
    ));
}
