use bitlib::{Bit, BitLength, Bitset, Bitwise, BitwiseMut, BitwisePair, BitwisePairMut};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Walks `bits` through clear, set and pairwise updates around `index`, which must leave room
/// for `index + 1`.
pub fn test_one_bit_index<T: BitwisePairMut + Clone>(mut bits: T, index: usize) {
    bits.clear_bits();
    assert!(bits.is_zero());
    bits.assign_index(index, true);
    assert!(bits.index(index));
    assert!(bits.is_unit(index));
    assert_eq!(bits.support().collect::<Vec<_>>(), vec![index]);
    assert_eq!(bits.min_support(), Some(index));
    assert_eq!(bits.max_support(), Some(index));
    assert_eq!(bits.weight(), 1);
    assert!(bits.parity());
    bits.negate_index(index);
    assert!(!bits.index(index));
    assert_eq!(bits.support().count(), 0);
    assert_eq!(bits.weight(), 0);
    assert!(!bits.parity());

    let mut other_bits = bits.clone();
    bits.negate_index(index);
    other_bits.bitxor_assign(&bits);
    assert_eq!(other_bits.weight(), 1);
    assert!(other_bits.dot(&bits));
    assert_eq!(other_bits.xor_weight(&bits), 0);

    other_bits.negate_index(index + 1);
    assert_eq!(other_bits.or_weight(&bits), 2);
    assert_eq!(other_bits.and_weight(&bits), 1);
    other_bits.bitand_assign(&bits);
    assert_eq!(other_bits.weight(), 1);

    bits.clear_bits();
    other_bits.bitor_assign(&bits);
    assert_eq!(other_bits.weight(), 1);
    other_bits.assign(&bits);
    assert!(other_bits.is_zero());
}

#[test]
fn bit_containers() {
    let size = 10;
    let index = 7;
    test_one_bit_index(Bitset::zeros(size), index);
    test_one_bit_index(vec![false; size], index);
    test_one_bit_index(vec![Bit::ZERO; size], index);
}

#[test]
fn random_assignment_is_reproducible() {
    let mut first = StdRng::seed_from_u64(2024);
    let mut second = StdRng::seed_from_u64(2024);
    let left = Bitset::random(500, &mut first);
    let right = Bitset::random(500, &mut second);
    assert_eq!(left, right);
    assert_eq!(left.bit_len(), 500);
    // Seeded sample, neither all zeros nor all ones.
    assert!(!left.is_zero());
    assert!(left.weight() < 500);
}

proptest! {
    #[test]
    fn weight(bools in prop::collection::vec(any::<bool>(), 0..500)) {
        let bits = Bitset::from(bools.clone());
        prop_assert_eq!(bits.weight(), bools.iter().filter(|bit| **bit).count());
        prop_assert_eq!(bools.weight(), bits.weight());
    }

    #[test]
    fn support(bools in prop::collection::vec(any::<bool>(), 0..500)) {
        let bits = Bitset::from(bools.clone());
        let support: Vec<usize> = bits.support().collect();
        prop_assert_eq!(support.len(), bits.weight());
        prop_assert_eq!(&support, &bools.support().collect::<Vec<usize>>());
        for index in support {
            prop_assert!(bits.index(index));
        }
    }

    #[test]
    fn pair_metrics((left, right) in equal_length_bools(500)) {
        let left_bits = Bitset::from(left.clone());
        let right_bits = Bitset::from(right.clone());
        let and = (0..left.len()).filter(|&i| left[i] && right[i]).count();
        let or = (0..left.len()).filter(|&i| left[i] || right[i]).count();
        let xor = (0..left.len()).filter(|&i| left[i] ^ right[i]).count();
        prop_assert_eq!(left_bits.and_weight(&right_bits), and);
        prop_assert_eq!(left_bits.or_weight(&right_bits), or);
        prop_assert_eq!(left_bits.xor_weight(&right_bits), xor);
        prop_assert_eq!(left_bits.dot(&right_bits), and % 2 == 1);
        prop_assert_eq!(left.xor_weight(&right), xor);
    }
}

fn equal_length_bools(max_length: usize) -> impl Strategy<Value = (Vec<bool>, Vec<bool>)> {
    (0..max_length).prop_flat_map(|length| {
        (
            prop::collection::vec(any::<bool>(), length),
            prop::collection::vec(any::<bool>(), length),
        )
    })
}
