use crate::{BitLength, BitwiseMut, IntoBitIterator};

/// Pairwise metrics computed by zipping the two bit iterators.
pub trait BitwisePairViaIter<Other: ?Sized>
where
    Self: BitLength,
    Other: BitLength,
    for<'life> &'life Self: IntoBitIterator,
    for<'life> &'life Other: IntoBitIterator,
{
    #[inline]
    fn dot(&self, other: &Other) -> bool {
        self.iter_bits()
            .zip(other.iter_bits())
            .fold(false, |parity, (left, right)| parity ^ (left & right))
    }
    #[inline]
    fn and_weight(&self, other: &Other) -> usize {
        count_pairs(self.iter_bits().zip(other.iter_bits()), |left, right| left & right)
    }
    #[inline]
    fn or_weight(&self, other: &Other) -> usize {
        count_pairs(self.iter_bits().zip(other.iter_bits()), |left, right| left | right)
    }
    #[inline]
    fn xor_weight(&self, other: &Other) -> usize {
        count_pairs(self.iter_bits().zip(other.iter_bits()), |left, right| left ^ right)
    }
}

impl<T: ?Sized, Other: ?Sized> BitwisePairViaIter<Other> for T
where
    Self: BitLength,
    Other: BitLength,
    for<'life> &'life Self: IntoBitIterator<BitIterator: 'life>,
    for<'life> &'life Other: IntoBitIterator<BitIterator: 'life>,
{
}

#[inline]
fn count_pairs(pairs: impl Iterator<Item = (bool, bool)>, predicate: impl Fn(bool, bool) -> bool) -> usize {
    pairs.filter(|&(left, right)| predicate(left, right)).count()
}

fn assert_length_at_least<T1: BitLength + ?Sized, T2: BitLength + ?Sized>(left: &T1, right: &T2) {
    assert!(
        left.bit_len() >= right.bit_len(),
        "Left-hand side ({} bits) to be at least as long as the right-hand side ({} bits)",
        left.bit_len(),
        right.bit_len()
    );
}

/// In-place pairwise updates driven by the right-hand side's bit iterator.
///
/// # Panics
///
/// Every method panics if `other` is longer than `self`.
pub trait BitwisePairMutViaIter<Other: ?Sized>
where
    Self: BitwiseMut + BitLength,
    Other: BitLength,
    for<'life> &'life Other: IntoBitIterator,
{
    #[inline]
    fn assign(&mut self, other: &Other) {
        assert_length_at_least(self, other);
        for (index, bit) in other.iter_bits().enumerate() {
            self.assign_index(index, bit);
        }
    }
    #[inline]
    fn bitxor_assign(&mut self, other: &Other) {
        assert_length_at_least(self, other);
        for (index, bit) in other.iter_bits().enumerate() {
            if bit {
                self.negate_index(index);
            }
        }
    }
    #[inline]
    fn bitand_assign(&mut self, other: &Other) {
        assert_length_at_least(self, other);
        for (index, bit) in other.iter_bits().enumerate() {
            if !bit {
                self.assign_index(index, false);
            }
        }
    }
    #[inline]
    fn bitor_assign(&mut self, other: &Other) {
        assert_length_at_least(self, other);
        for (index, bit) in other.iter_bits().enumerate() {
            if bit {
                self.assign_index(index, true);
            }
        }
    }
}

impl<Bits: ?Sized, Other: ?Sized> BitwisePairMutViaIter<Other> for Bits
where
    Bits: BitwiseMut + BitLength,
    Other: BitLength,
    for<'life> &'life Other: IntoBitIterator,
{
}
