//! Serialize is the inverse of parse

use illogical_parser::Parser;
use proptest::prelude::*;
use serde_json::{Value as JsonValue, json};

fn operand() -> impl Strategy<Value = JsonValue> {
    prop_oneof![
        any::<i64>().prop_map(JsonValue::from),
        (-1.0e6f64..1.0e6).prop_map(JsonValue::from),
        any::<bool>().prop_map(JsonValue::from),
        "[a-z]{1,6}".prop_map(JsonValue::from),
        "[a-z]{1,4}(\\.[a-z]{1,4})?".prop_map(|path| JsonValue::from(format!("${path}"))),
        (
            prop_oneof![
                Just("==".to_string()),
                Just("AND".to_string()),
                Just("NOT IN".to_string()),
                "[a-z]{1,3}"
            ],
            prop::collection::vec(any::<i64>(), 1..3)
        )
            .prop_map(|(head, rest)| {
                let mut items = vec![JsonValue::from(head)];
                items.extend(rest.into_iter().map(JsonValue::from));
                JsonValue::Array(items)
            }),
    ]
}

fn expression() -> impl Strategy<Value = JsonValue> {
    let comparison = prop_oneof![
        (
            prop_oneof![
                Just("=="),
                Just("!="),
                Just(">"),
                Just("<="),
                Just("IN"),
                Just("PREFIX")
            ],
            operand(),
            operand()
        )
            .prop_map(|(op, a, b)| json!([op, a, b])),
        (prop_oneof![Just("NIL"), Just("PRESENT")], operand()).prop_map(|(op, a)| json!([op, a])),
    ];

    comparison.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            (
                prop_oneof![Just("AND"), Just("OR"), Just("NOR"), Just("XOR")],
                prop::collection::vec(inner.clone(), 2..4)
            )
                .prop_map(|(op, operands)| {
                    let mut items = vec![JsonValue::from(op)];
                    items.extend(operands);
                    JsonValue::Array(items)
                }),
            inner.prop_map(|operand| json!(["NOT", operand])),
        ]
    })
}

proptest! {
    #[test]
    fn parse_of_serialize_reads_the_same(raw in expression()) {
        let parser = Parser::default();
        let node = parser.parse(&raw).unwrap();
        let reparsed = parser.parse(&node.serialize()).unwrap();
        prop_assert_eq!(reparsed.to_string(), node.to_string());
    }
}
