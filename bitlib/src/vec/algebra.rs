use crate::error::ensure_same_length;
use crate::vec::Bitset;
use crate::{Bit, BitLength, Bitwise, BitwisePair, BitwisePairMut, Result};
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

impl Bitset {
    fn zip_with(&self, other: &Bitset, operation: impl Fn(Bit, Bit) -> Bit) -> Result<Bitset> {
        ensure_same_length(self.len(), other.len())?;
        Ok(self
            .iter()
            .zip(other.iter())
            .map(|(&left, &right)| operation(left, right))
            .collect())
    }

    /// # Errors
    ///
    /// [`BitsetError::LengthMismatch`](crate::BitsetError::LengthMismatch) if the lengths differ.
    pub fn xor(&self, other: &Bitset) -> Result<Bitset> {
        self.zip_with(other, Bit::xor)
    }

    /// # Errors
    ///
    /// [`BitsetError::LengthMismatch`](crate::BitsetError::LengthMismatch) if the lengths differ.
    pub fn and(&self, other: &Bitset) -> Result<Bitset> {
        self.zip_with(other, Bit::and)
    }

    /// # Errors
    ///
    /// [`BitsetError::LengthMismatch`](crate::BitsetError::LengthMismatch) if the lengths differ.
    pub fn or(&self, other: &Bitset) -> Result<Bitset> {
        self.zip_with(other, Bit::or)
    }

    /// Elementwise negated AND.
    ///
    /// # Errors
    ///
    /// [`BitsetError::LengthMismatch`](crate::BitsetError::LengthMismatch) if the lengths differ.
    pub fn nand(left: &Bitset, right: &Bitset) -> Result<Bitset> {
        left.zip_with(right, crate::nand)
    }

    /// Elementwise negated OR.
    ///
    /// # Errors
    ///
    /// [`BitsetError::LengthMismatch`](crate::BitsetError::LengthMismatch) if the lengths differ.
    pub fn nor(left: &Bitset, right: &Bitset) -> Result<Bitset> {
        left.zip_with(right, crate::nor)
    }

    /// # Errors
    ///
    /// [`BitsetError::LengthMismatch`](crate::BitsetError::LengthMismatch) if the lengths differ;
    /// `self` is left unchanged.
    pub fn xor_assign(&mut self, other: &Bitset) -> Result<&mut Self> {
        ensure_same_length(self.len(), other.len())?;
        <[Bit] as BitwisePairMut>::bitxor_assign(self.as_mut_slice(), other.as_slice());
        Ok(self)
    }

    /// # Errors
    ///
    /// [`BitsetError::LengthMismatch`](crate::BitsetError::LengthMismatch) if the lengths differ;
    /// `self` is left unchanged.
    pub fn and_assign(&mut self, other: &Bitset) -> Result<&mut Self> {
        ensure_same_length(self.len(), other.len())?;
        <[Bit] as BitwisePairMut>::bitand_assign(self.as_mut_slice(), other.as_slice());
        Ok(self)
    }

    /// # Errors
    ///
    /// [`BitsetError::LengthMismatch`](crate::BitsetError::LengthMismatch) if the lengths differ;
    /// `self` is left unchanged.
    pub fn or_assign(&mut self, other: &Bitset) -> Result<&mut Self> {
        ensure_same_length(self.len(), other.len())?;
        <[Bit] as BitwisePairMut>::bitor_assign(self.as_mut_slice(), other.as_slice());
        Ok(self)
    }

    /// Returns a copy with every bit inverted.
    pub fn complement(&self) -> Bitset {
        let mut complement = self.clone();
        complement.invert();
        complement
    }

    /// Inner product over GF(2): the XOR-reduction of the elementwise AND.
    ///
    /// # Errors
    ///
    /// [`BitsetError::LengthMismatch`](crate::BitsetError::LengthMismatch) if the lengths differ.
    pub fn scalar_product(&self, other: &Bitset) -> Result<Bit> {
        ensure_same_length(self.len(), other.len())?;
        Ok(Bit::new(self.dot(other)))
    }

    /// Number of positions at which `self` and `other` differ.
    ///
    /// # Errors
    ///
    /// [`BitsetError::LengthMismatch`](crate::BitsetError::LengthMismatch) if the lengths differ.
    pub fn hamming_distance(&self, other: &Bitset) -> Result<usize> {
        ensure_same_length(self.len(), other.len())?;
        Ok(self.xor_weight(other))
    }

    /// Equality that treats operands of different length as an error rather than as unequal.
    ///
    /// # Errors
    ///
    /// [`BitsetError::LengthMismatch`](crate::BitsetError::LengthMismatch) if the lengths differ.
    pub fn checked_eq(&self, other: &Bitset) -> Result<bool> {
        Ok(self.hamming_distance(other)? == 0)
    }
}

/// Number of positions at which two bitsets of equal length differ.
///
/// # Errors
///
/// [`BitsetError::LengthMismatch`](crate::BitsetError::LengthMismatch) if the lengths differ.
pub fn hamming_distance(left: &Bitset, right: &Bitset) -> Result<usize> {
    left.hamming_distance(right)
}

/// Hamming distance with the shorter operand padded with zeros up to the longer one's length.
///
/// ```
/// use bitlib::{bitset, hamming_distance_padded};
///
/// assert_eq!(hamming_distance_padded(&bitset![1, 0], &bitset![1, 0, 1, 1]), 2);
/// ```
#[must_use]
pub fn hamming_distance_padded(left: &Bitset, right: &Bitset) -> usize {
    let (longer, shorter) = if left.bit_len() >= right.bit_len() {
        (left, right)
    } else {
        (right, left)
    };
    let (overlap, tail) = longer.as_slice().split_at(shorter.bit_len());
    overlap.xor_weight(shorter.as_slice()) + tail.weight()
}

impl Not for Bitset {
    type Output = Bitset;

    fn not(mut self) -> Bitset {
        self.invert();
        self
    }
}

impl Not for &Bitset {
    type Output = Bitset;

    fn not(self) -> Bitset {
        self.complement()
    }
}

// Operator forms of the checked methods. They panic on a length mismatch, the same way
// slice indexing panics out of range.
macro_rules! bitset_operator {
    ($operator:ident, $operator_method:ident, $assign_operator:ident, $assign_method:ident, $checked:ident, $checked_assign:ident) => {
        impl $operator<&Bitset> for &Bitset {
            type Output = Bitset;

            /// # Panics
            ///
            /// Panics if the operands have different lengths.
            fn $operator_method(self, other: &Bitset) -> Bitset {
                self.$checked(other).unwrap_or_else(|error| panic!("{error}"))
            }
        }

        impl $assign_operator<&Bitset> for Bitset {
            /// # Panics
            ///
            /// Panics if the operands have different lengths.
            fn $assign_method(&mut self, other: &Bitset) {
                if let Err(error) = self.$checked_assign(other) {
                    panic!("{error}");
                }
            }
        }
    };
}

bitset_operator!(BitXor, bitxor, BitXorAssign, bitxor_assign, xor, xor_assign);
bitset_operator!(BitAnd, bitand, BitAndAssign, bitand_assign, and, and_assign);
bitset_operator!(BitOr, bitor, BitOrAssign, bitor_assign, or, or_assign);

#[cfg(test)]
mod tests {
    use crate::{Bit, Bitset, BitsetError, bitset};

    #[test]
    fn failed_compound_assignment_does_not_write() {
        let mut bits = bitset![1, 0, 1];
        let error = bits.xor_assign(&bitset![1, 1]).map(|_| ()).unwrap_err();
        assert_eq!(error, BitsetError::LengthMismatch { left: 3, right: 2 });
        assert!(bits.and_assign(&Bitset::new()).is_err());
        assert!(bits.or_assign(&Bitset::ones(4)).is_err());
        assert_eq!(bits, bitset![1, 0, 1]);
    }

    #[test]
    fn compound_assignment_matches_pure_form() {
        let left = bitset![0, 1, 1, 0];
        let right = bitset![1, 1, 0, 0];
        let mut bits = left.clone();
        bits.xor_assign(&right).unwrap();
        assert_eq!(bits, left.xor(&right).unwrap());
        let mut bits = left.clone();
        bits.and_assign(&right).unwrap();
        assert_eq!(bits, left.and(&right).unwrap());
        let mut bits = left.clone();
        bits.or_assign(&right).unwrap();
        assert_eq!(bits, left.or(&right).unwrap());
    }

    #[test]
    fn scalar_product_is_parity_of_common_ones() {
        assert_eq!(bitset![1, 1, 0, 1].scalar_product(&bitset![1, 0, 0, 1]), Ok(Bit::ZERO));
        assert_eq!(bitset![1, 1, 0, 1].scalar_product(&bitset![1, 1, 1, 1]), Ok(Bit::ONE));
    }

    #[test]
    #[should_panic(expected = "length mismatch")]
    fn operator_panics_on_mismatch() {
        let _ = &bitset![1, 0] ^ &bitset![1];
    }
}
