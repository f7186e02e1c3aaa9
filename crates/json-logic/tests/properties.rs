//! Property tests for coercion and the value model.

use json_logic::util::{equals, hard_equals, less};
use json_logic::{apply, Value};
use proptest::prelude::*;
use serde_json::json;

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-1.0e6..1.0e6f64).prop_map(Value::Number),
        "[a-z0-9]{0,6}".prop_map(Value::String),
    ]
}

proptest! {
    #[test]
    fn less_on_numbers_is_greater_than(a in -1.0e9..1.0e9f64, b in -1.0e9..1.0e9f64) {
        prop_assert_eq!(less("<", &Value::Number(a), &Value::Number(b)).unwrap(), b > a);
    }

    #[test]
    fn hard_equality_implies_equality(a in scalar(), b in scalar()) {
        if let Ok(true) = hard_equals("===", &a, &b) {
            prop_assert!(equals("==", &a, &b).unwrap());
        }
    }

    #[test]
    fn integers_equal_their_decimal_text(n in -100_000i64..100_000) {
        let rule = Value::from(json!({"==": [n, n.to_string()]}));
        prop_assert_eq!(apply(&rule, &Value::Null).unwrap(), Value::Bool(true));
        let strict = Value::from(json!({"===": [n, n.to_string()]}));
        prop_assert_eq!(apply(&strict, &Value::Null).unwrap(), Value::Bool(false));
    }

    #[test]
    fn and_returns_the_largest_positive(xs in prop::collection::vec(1u32..1000, 1..8)) {
        let rule = Value::from(json!({"and": xs}));
        let max = xs.iter().copied().max().unwrap_or(0);
        prop_assert_eq!(apply(&rule, &Value::Null).unwrap(), Value::Number(f64::from(max)));
    }

    #[test]
    fn or_returns_first_truthy(prefix in 0usize..5, x in 1u32..1000) {
        let mut operands = vec![json!(false); prefix];
        operands.push(json!(x));
        operands.push(json!(true));
        let rule = Value::from(json!({"or": operands}));
        prop_assert_eq!(apply(&rule, &Value::Null).unwrap(), Value::Number(f64::from(x)));
    }

    #[test]
    fn set_leaves_the_input_untouched(key in "[a-z]{1,5}", n in 0i64..1000) {
        let data = Value::from(json!({"obj": {"keep": [1, 2, 3]}}));
        let before = data.clone();
        let rule = Value::from(json!({"set": [{"var": "obj"}, key.clone(), n]}));
        let result = apply(&rule, &data).unwrap();
        prop_assert_eq!(&data, &before);
        let expected = Value::Number(n as f64);
        prop_assert_eq!(result.as_object().and_then(|o| o.get(&key)), Some(&expected));
    }
}
