use sorted_iter::SortedIterator;

/// Read access to anything made of bits: a single [`Bit`](crate::Bit), a slice of booleans, a
/// [`Bitset`](crate::Bitset).
///
/// See also [`BitwiseMut`], [`BitwisePair`], and [`BitwisePairMut`].
pub trait Bitwise {
    fn index(&self, index: usize) -> bool;

    /// Indices of the set bits, in increasing order.
    fn support(&self) -> impl SortedIterator<Item = usize>;

    #[inline]
    fn min_support(&self) -> Option<usize> {
        self.support().next()
    }
    #[inline]
    fn max_support(&self) -> Option<usize> {
        self.support().last()
    }

    /// Number of set bits.
    #[inline]
    fn weight(&self) -> usize {
        self.support().count()
    }
    #[inline]
    fn parity(&self) -> bool {
        (self.weight() % 2) == 1
    }
    #[inline]
    fn is_zero(&self) -> bool {
        self.weight() == 0
    }
    #[inline]
    fn is_unit(&self, index: usize) -> bool {
        self.weight() == 1 && self.index(index)
    }
}

/// See also [`Bitwise`], [`BitwisePair`], and [`BitwisePairMut`].
pub trait BitwiseMut: Bitwise {
    fn assign_index(&mut self, index: usize, to: bool);
    fn negate_index(&mut self, index: usize);
    fn clear_bits(&mut self);

    /// Overwrites the first `bit_count` bits with uniformly random values.
    fn assign_random(&mut self, bit_count: usize, random_number_generator: &mut impl rand::Rng) {
        for index in 0..bit_count {
            self.assign_index(index, random_number_generator.r#gen());
        }
    }
}

/// Pairwise metrics over two bit containers of the same length.
///
/// Implementations walk both operands in lockstep and stop at the shorter one; callers that
/// need a length check do it before calling in.
///
/// See also [`Bitwise`], [`BitwiseMut`], and [`BitwisePairMut`].
pub trait BitwisePair<Other: ?Sized = Self> {
    /// Inner product over GF(2): the parity of the pairwise AND.
    fn dot(&self, other: &Other) -> bool;
    fn and_weight(&self, other: &Other) -> usize;
    fn or_weight(&self, other: &Other) -> usize;
    /// Number of positions where the operands differ.
    fn xor_weight(&self, other: &Other) -> usize;
}

/// See also [`Bitwise`], [`BitwiseMut`], and [`BitwisePair`].
pub trait BitwisePairMut<Other: ?Sized + Bitwise = Self>: BitwiseMut + BitwisePair<Other> {
    fn assign(&mut self, other: &Other);
    fn bitand_assign(&mut self, other: &Other);
    fn bitor_assign(&mut self, other: &Other);
    fn bitxor_assign(&mut self, other: &Other);
}

pub trait IntoBitIterator {
    type BitIterator: Iterator<Item = bool>;
    fn iter_bits(self) -> Self::BitIterator;
}

pub trait BitLength {
    fn bit_len(&self) -> usize;
}

/// Implements the bit traits for an owning container by borrowing it as a slice of `$element`.
macro_rules! bitwise_via_slice {
    ($container:ty, $element:ty) => {
        impl $crate::BitLength for $container {
            #[inline]
            fn bit_len(&self) -> usize {
                std::borrow::Borrow::<[$element]>::borrow(self).len()
            }
        }

        impl $crate::Bitwise for $container {
            #[inline]
            fn index(&self, index: usize) -> bool {
                <[$element] as $crate::Bitwise>::index(std::borrow::Borrow::<[$element]>::borrow(self), index)
            }

            #[inline]
            fn support(&self) -> impl sorted_iter::SortedIterator<Item = usize> {
                <[$element] as $crate::Bitwise>::support(std::borrow::Borrow::<[$element]>::borrow(self))
            }

            #[inline]
            fn weight(&self) -> usize {
                <[$element] as $crate::Bitwise>::weight(std::borrow::Borrow::<[$element]>::borrow(self))
            }
        }

        impl $crate::BitwiseMut for $container {
            #[inline]
            fn assign_index(&mut self, index: usize, to: bool) {
                <[$element] as $crate::BitwiseMut>::assign_index(
                    std::borrow::BorrowMut::<[$element]>::borrow_mut(self),
                    index,
                    to,
                );
            }

            #[inline]
            fn negate_index(&mut self, index: usize) {
                <[$element] as $crate::BitwiseMut>::negate_index(
                    std::borrow::BorrowMut::<[$element]>::borrow_mut(self),
                    index,
                );
            }

            #[inline]
            fn clear_bits(&mut self) {
                <[$element] as $crate::BitwiseMut>::clear_bits(std::borrow::BorrowMut::<[$element]>::borrow_mut(self));
            }
        }

        impl $crate::BitwisePair for $container {
            #[inline]
            fn dot(&self, other: &Self) -> bool {
                <[$element] as $crate::BitwisePair>::dot(
                    std::borrow::Borrow::<[$element]>::borrow(self),
                    std::borrow::Borrow::<[$element]>::borrow(other),
                )
            }

            #[inline]
            fn and_weight(&self, other: &Self) -> usize {
                <[$element] as $crate::BitwisePair>::and_weight(
                    std::borrow::Borrow::<[$element]>::borrow(self),
                    std::borrow::Borrow::<[$element]>::borrow(other),
                )
            }

            #[inline]
            fn or_weight(&self, other: &Self) -> usize {
                <[$element] as $crate::BitwisePair>::or_weight(
                    std::borrow::Borrow::<[$element]>::borrow(self),
                    std::borrow::Borrow::<[$element]>::borrow(other),
                )
            }

            #[inline]
            fn xor_weight(&self, other: &Self) -> usize {
                <[$element] as $crate::BitwisePair>::xor_weight(
                    std::borrow::Borrow::<[$element]>::borrow(self),
                    std::borrow::Borrow::<[$element]>::borrow(other),
                )
            }
        }

        impl $crate::BitwisePairMut for $container {
            #[inline]
            fn assign(&mut self, other: &Self) {
                <[$element] as $crate::BitwisePairMut>::assign(
                    std::borrow::BorrowMut::<[$element]>::borrow_mut(self),
                    std::borrow::Borrow::<[$element]>::borrow(other),
                );
            }

            #[inline]
            fn bitand_assign(&mut self, other: &Self) {
                <[$element] as $crate::BitwisePairMut>::bitand_assign(
                    std::borrow::BorrowMut::<[$element]>::borrow_mut(self),
                    std::borrow::Borrow::<[$element]>::borrow(other),
                );
            }

            #[inline]
            fn bitor_assign(&mut self, other: &Self) {
                <[$element] as $crate::BitwisePairMut>::bitor_assign(
                    std::borrow::BorrowMut::<[$element]>::borrow_mut(self),
                    std::borrow::Borrow::<[$element]>::borrow(other),
                );
            }

            #[inline]
            fn bitxor_assign(&mut self, other: &Self) {
                <[$element] as $crate::BitwisePairMut>::bitxor_assign(
                    std::borrow::BorrowMut::<[$element]>::borrow_mut(self),
                    std::borrow::Borrow::<[$element]>::borrow(other),
                );
            }
        }
    };
}
pub(crate) use bitwise_via_slice;
