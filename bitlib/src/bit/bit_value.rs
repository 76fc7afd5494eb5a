use crate::bit::standard_types::support_iterator;
use crate::{BitLength, BitsetError, Bitwise, BitwiseMut, BitwisePair, BitwisePairMut, IntoBitIterator};
use derive_more::{From, Into};
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};
use std::str::FromStr;

/// A single binary digit, the element type of [`Bitset`](crate::Bitset).
///
/// `Bit` is a thin value wrapper over `bool` with the two-valued boolean algebra spelled out as
/// methods ([`xor`](Bit::xor), [`and`](Bit::and), [`or`](Bit::or), [`complement`](Bit::complement),
/// and the free functions [`nand`] and [`nor`]) and as the usual `std::ops` operators.
///
/// Bits are ordered with `0 < 1`.
///
/// ```
/// use bitlib::{Bit, nand};
///
/// let one = Bit::from(1);
/// let zero = Bit::default();
/// assert_eq!(one ^ zero, Bit::ONE);
/// assert_eq!(nand(one, one), Bit::ZERO);
/// assert!(zero < one);
/// assert_eq!(one.to_string(), "1");
/// ```
#[must_use]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, From, Into)]
pub struct Bit {
    value: bool,
}

impl Bit {
    pub const ZERO: Bit = Bit { value: false };
    pub const ONE: Bit = Bit { value: true };

    pub const fn new(value: bool) -> Bit {
        Bit { value }
    }

    /// Maps strictly positive integers to one; zero and negative integers map to zero.
    pub const fn from_int(value: i64) -> Bit {
        Bit { value: value > 0 }
    }

    #[must_use]
    pub const fn to_bool(self) -> bool {
        self.value
    }

    #[must_use]
    pub const fn to_int(self) -> i32 {
        self.value as i32
    }

    pub fn set(&mut self) {
        self.value = true;
    }

    pub fn reset(&mut self) {
        self.value = false;
    }

    pub fn invert(&mut self) {
        self.value = !self.value;
    }

    /// Adds one modulo two.
    ///
    /// Over GF(2) incrementing and decrementing are the same operation, so there is no
    /// separate decrement.
    pub fn toggle(&mut self) -> &mut Self {
        self.invert();
        self
    }

    pub const fn complement(self) -> Bit {
        Bit { value: !self.value }
    }

    pub const fn xor(self, other: Bit) -> Bit {
        Bit {
            value: self.value ^ other.value,
        }
    }

    pub const fn and(self, other: Bit) -> Bit {
        Bit {
            value: self.value & other.value,
        }
    }

    pub const fn or(self, other: Bit) -> Bit {
        Bit {
            value: self.value | other.value,
        }
    }

    pub fn xor_assign(&mut self, other: Bit) {
        *self = self.xor(other);
    }

    pub fn and_assign(&mut self, other: Bit) {
        *self = self.and(other);
    }

    pub fn or_assign(&mut self, other: Bit) {
        *self = self.or(other);
    }

    #[must_use]
    pub fn to_binary_string(&self) -> String {
        self.to_string()
    }
}

pub const fn nand(left: Bit, right: Bit) -> Bit {
    match (left.value, right.value) {
        (true, true) => Bit::ZERO,
        _ => Bit::ONE,
    }
}

pub const fn nor(left: Bit, right: Bit) -> Bit {
    match (left.value, right.value) {
        (false, false) => Bit::ONE,
        _ => Bit::ZERO,
    }
}

macro_rules! bit_from_integer {
    ($($integer:ty),+) => {
        $(
            impl From<$integer> for Bit {
                fn from(value: $integer) -> Self {
                    Bit::new(value > 0)
                }
            }
        )+
    };
}

bit_from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<Bit> for i32 {
    fn from(bit: Bit) -> Self {
        bit.to_int()
    }
}

impl From<Bit> for usize {
    fn from(bit: Bit) -> Self {
        usize::from(bit.value)
    }
}

impl Not for Bit {
    type Output = Bit;

    fn not(self) -> Bit {
        self.complement()
    }
}

impl BitXor for Bit {
    type Output = Bit;

    fn bitxor(self, other: Bit) -> Bit {
        self.xor(other)
    }
}

impl BitAnd for Bit {
    type Output = Bit;

    fn bitand(self, other: Bit) -> Bit {
        self.and(other)
    }
}

impl BitOr for Bit {
    type Output = Bit;

    fn bitor(self, other: Bit) -> Bit {
        self.or(other)
    }
}

impl BitXorAssign for Bit {
    fn bitxor_assign(&mut self, other: Bit) {
        self.xor_assign(other);
    }
}

impl BitAndAssign for Bit {
    fn bitand_assign(&mut self, other: Bit) {
        self.and_assign(other);
    }
}

impl BitOrAssign for Bit {
    fn bitor_assign(&mut self, other: Bit) {
        self.or_assign(other);
    }
}

impl std::fmt::Display for Bit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_int())
    }
}

impl FromStr for Bit {
    type Err = BitsetError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "0" => Ok(Bit::ZERO),
            "1" => Ok(Bit::ONE),
            _ => Err(BitsetError::InvalidBit { input: input.to_owned() }),
        }
    }
}

// A bit is also a container of length one, so generic code over the bit traits accepts it.

impl Bitwise for Bit {
    #[inline]
    fn index(&self, index: usize) -> bool {
        assert_eq!(index, 0);
        self.value
    }

    #[inline]
    fn weight(&self) -> usize {
        usize::from(self.value)
    }

    #[inline]
    fn support(&self) -> impl sorted_iter::SortedIterator<Item = usize> {
        support_iterator(std::iter::once(self.value))
    }
}

impl BitwiseMut for Bit {
    #[inline]
    fn assign_index(&mut self, index: usize, to: bool) {
        assert_eq!(index, 0);
        self.value = to;
    }

    #[inline]
    fn negate_index(&mut self, index: usize) {
        assert_eq!(index, 0);
        self.invert();
    }

    #[inline]
    fn clear_bits(&mut self) {
        self.reset();
    }
}

impl BitwisePair for Bit {
    #[inline]
    fn dot(&self, other: &Bit) -> bool {
        self.value && other.value
    }

    #[inline]
    fn and_weight(&self, other: &Bit) -> usize {
        usize::from(self.value && other.value)
    }

    #[inline]
    fn or_weight(&self, other: &Bit) -> usize {
        usize::from(self.value || other.value)
    }

    #[inline]
    fn xor_weight(&self, other: &Bit) -> usize {
        usize::from(self.value ^ other.value)
    }
}

impl BitwisePairMut for Bit {
    #[inline]
    fn assign(&mut self, other: &Bit) {
        *self = *other;
    }

    #[inline]
    fn bitand_assign(&mut self, other: &Bit) {
        self.and_assign(*other);
    }

    #[inline]
    fn bitor_assign(&mut self, other: &Bit) {
        self.or_assign(*other);
    }

    #[inline]
    fn bitxor_assign(&mut self, other: &Bit) {
        self.xor_assign(*other);
    }
}

impl IntoBitIterator for &Bit {
    type BitIterator = std::iter::Once<bool>;
    fn iter_bits(self) -> Self::BitIterator {
        std::iter::once(self.value)
    }
}

impl BitLength for Bit {
    #[inline]
    fn bit_len(&self) -> usize {
        1
    }
}
