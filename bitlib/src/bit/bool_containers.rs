use crate::Bit;
use crate::bit::bitwise::bitwise_via_slice;
use crate::bit::bitwise_via_iter::{BitwisePairMutViaIter, BitwisePairViaIter};
use crate::bit::standard_types::support_iterator;
use crate::{BitLength, Bitwise, BitwiseMut, BitwisePair, BitwisePairMut, IntoBitIterator};
use std::iter::Map;
use std::slice::Iter;

// Bit traits for [bool], Vec<bool>, [Bit] and Vec<Bit>: one element per bit, no packing.

macro_rules! bitwise_for_slice {
    ($element:ty) => {
        impl<'life> IntoBitIterator for &'life [$element] {
            type BitIterator = Map<Iter<'life, $element>, fn(&$element) -> bool>;
            fn iter_bits(self) -> Self::BitIterator {
                let to_bool: fn(&$element) -> bool = |bit| bool::from(*bit);
                self.iter().map(to_bool)
            }
        }

        impl<'life> IntoBitIterator for &'life Vec<$element> {
            type BitIterator = <&'life [$element] as IntoBitIterator>::BitIterator;
            fn iter_bits(self) -> Self::BitIterator {
                self.as_slice().iter_bits()
            }
        }

        impl BitLength for [$element] {
            #[inline]
            fn bit_len(&self) -> usize {
                self.len()
            }
        }

        impl Bitwise for [$element] {
            #[inline]
            fn index(&self, index: usize) -> bool {
                bool::from(self[index])
            }

            #[inline]
            fn weight(&self) -> usize {
                self.iter().filter(|bit| bool::from(**bit)).count()
            }

            #[inline]
            fn support(&self) -> impl sorted_iter::SortedIterator<Item = usize> {
                support_iterator(self.iter_bits())
            }
        }

        impl BitwiseMut for [$element] {
            #[inline]
            fn assign_index(&mut self, index: usize, to: bool) {
                self[index] = <$element>::from(to);
            }

            #[inline]
            fn negate_index(&mut self, index: usize) {
                self[index] = <$element>::from(!bool::from(self[index]));
            }

            #[inline]
            fn clear_bits(&mut self) {
                self.fill(<$element>::from(false));
            }
        }

        impl BitwisePair for [$element] {
            #[inline]
            fn dot(&self, other: &Self) -> bool {
                <Self as BitwisePairViaIter<Self>>::dot(self, other)
            }
            #[inline]
            fn and_weight(&self, other: &Self) -> usize {
                <Self as BitwisePairViaIter<Self>>::and_weight(self, other)
            }
            #[inline]
            fn or_weight(&self, other: &Self) -> usize {
                <Self as BitwisePairViaIter<Self>>::or_weight(self, other)
            }
            #[inline]
            fn xor_weight(&self, other: &Self) -> usize {
                <Self as BitwisePairViaIter<Self>>::xor_weight(self, other)
            }
        }

        impl BitwisePairMut for [$element] {
            #[inline]
            fn assign(&mut self, other: &Self) {
                <Self as BitwisePairMutViaIter<Self>>::assign(self, other);
            }
            #[inline]
            fn bitand_assign(&mut self, other: &Self) {
                <Self as BitwisePairMutViaIter<Self>>::bitand_assign(self, other);
            }
            #[inline]
            fn bitor_assign(&mut self, other: &Self) {
                <Self as BitwisePairMutViaIter<Self>>::bitor_assign(self, other);
            }
            #[inline]
            fn bitxor_assign(&mut self, other: &Self) {
                <Self as BitwisePairMutViaIter<Self>>::bitxor_assign(self, other);
            }
        }

        bitwise_via_slice!(Vec<$element>, $element);
    };
}

bitwise_for_slice!(bool);
bitwise_for_slice!(Bit);
