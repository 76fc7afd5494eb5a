#[cfg(feature = "serde")]
mod serde_tests {
    use bitlib::{Bit, Bitset, bitset};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn bitset_serialization_round_trip(bools in prop::collection::vec(any::<bool>(), 0..300)) {
            let bits = Bitset::from(bools);
            let serialized = serde_json::to_string(&bits).expect("Failed to serialize Bitset");
            let deserialized: Bitset = serde_json::from_str(&serialized).expect("Failed to deserialize Bitset");
            prop_assert_eq!(deserialized, bits);
        }
    }

    #[test]
    fn serialized_form_is_the_binary_string() {
        let serialized = serde_json::to_string(&bitset![0, 1, 1, 0]).expect("Failed to serialize Bitset");
        assert_eq!(serialized, "\"0110\"");
        let serialized = serde_json::to_string(&Bit::ONE).expect("Failed to serialize Bit");
        assert_eq!(serialized, "\"1\"");
    }

    #[test]
    fn deserialization_reports_bad_digits() {
        let error = serde_json::from_str::<Bitset>("\"01a\"").expect_err("digit 'a' should be rejected");
        assert!(error.to_string().contains("invalid binary digit 'a' at position 2"));
        assert!(serde_json::from_str::<Bit>("\"11\"").is_err());
        assert_eq!(serde_json::from_str::<Bit>("\"0\"").expect("Failed to deserialize Bit"), Bit::ZERO);
    }
}
