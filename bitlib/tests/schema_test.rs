#[cfg(feature = "schemars")]
mod schema_tests {
    use bitlib::Bitset;

    #[test]
    fn bitset_schema_admits_what_parsing_accepts() {
        let schema = schemars::schema_for!(Bitset);
        let pattern = schema
            .get("pattern")
            .and_then(serde_json::Value::as_str)
            .expect("Bitset schema has a pattern");
        assert!(pattern.contains("\\["));
        assert!(pattern.contains("\\]"));

        let examples = schema
            .get("examples")
            .and_then(serde_json::Value::as_array)
            .expect("Bitset schema has examples");
        assert!(examples.iter().any(|example| example.as_str() == Some("[0110]")));
        for example in examples {
            let text = example.as_str().expect("examples are strings");
            assert!(text.parse::<Bitset>().is_ok(), "schema example {text:?} does not parse");
        }
    }

    #[test]
    fn bit_schema_lists_both_digits() {
        let schema = schemars::schema_for!(bitlib::Bit);
        let digits = schema.get("enum").and_then(serde_json::Value::as_array).expect("Bit schema is an enum");
        assert_eq!(digits.len(), 2);
        for digit in digits {
            let text = digit.as_str().expect("digits are strings");
            assert!(text.parse::<bitlib::Bit>().is_ok());
        }
    }
}
