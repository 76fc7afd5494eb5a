use crate::bit::bitwise::bitwise_via_slice;
use crate::{Bit, BitsetError, BitwiseMut, IntoBitIterator, Result};
use derive_more::{From, Into};
use std::borrow::{Borrow, BorrowMut};
use std::ops::{Index, IndexMut};

/// A dynamically sized, ordered sequence of [`Bit`]s.
///
/// A `Bitset` stores one [`Bit`] per element; index 0 is the leftmost element for the purpose
/// of shifts and rotations. All pairwise operations require operands of equal length and
/// report [`BitsetError::LengthMismatch`] otherwise, without touching the receiver.
///
/// # Construction
///
/// ```
/// use bitlib::{Bit, Bitset, bitset};
///
/// let literal = bitset![0, 1, 1, 0];
/// let from_bools = Bitset::from([false, true, true, false]);
/// let collected: Bitset = [false, true, true, false].into_iter().collect();
/// let from_raw = Bitset::from_raw(&[false, true, true, false, true], 4).unwrap();
/// assert_eq!(literal, from_bools);
/// assert_eq!(literal, collected);
/// assert_eq!(literal, from_raw);
/// assert_eq!(Bitset::ones(3), bitset![1, 1, 1]);
/// ```
///
/// # Algebra
///
/// ```
/// use bitlib::{Bit, Bitset, bitset, hamming_distance};
///
/// let left = bitset![0, 1, 1, 0];
/// let right = bitset![1, 1, 0, 0];
/// assert_eq!(left.xor(&right).unwrap(), bitset![1, 0, 1, 0]);
/// assert_eq!(hamming_distance(&left, &right).unwrap(), 2);
/// assert_eq!(left.scalar_product(&right).unwrap(), Bit::ONE);
/// assert!(left.xor(&bitset![1]).is_err());
/// ```
///
/// # Rendering
///
/// ```
/// use bitlib::bitset;
///
/// let bits = bitset![0, 1, 1, 0];
/// assert_eq!(bits.to_binary_string(), "0110");
/// assert_eq!(bits.to_binary_string_with(","), "0,1,1,0");
/// assert_eq!(format!("{bits:#}"), "[0110]");
/// ```
#[must_use]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, From, Into)]
pub struct Bitset {
    bits: Vec<Bit>,
}

impl Bitset {
    /// Creates an empty bitset.
    pub fn new() -> Bitset {
        Bitset { bits: Vec::new() }
    }

    pub fn zeros(length: usize) -> Bitset {
        Self::filled(length, Bit::ZERO)
    }

    pub fn ones(length: usize) -> Bitset {
        Self::filled(length, Bit::ONE)
    }

    pub fn filled(length: usize, value: Bit) -> Bitset {
        Bitset {
            bits: vec![value; length],
        }
    }

    /// Copies the first `length` booleans of `buffer`.
    ///
    /// # Errors
    ///
    /// [`BitsetError::BufferTooShort`] if `buffer` holds fewer than `length` booleans.
    pub fn from_raw(buffer: &[bool], length: usize) -> Result<Bitset> {
        match buffer.get(..length) {
            Some(head) => Ok(head.iter().copied().collect()),
            None => {
                tracing::debug!(length, available = buffer.len(), "raw buffer too short");
                Err(BitsetError::BufferTooShort {
                    length,
                    available: buffer.len(),
                })
            }
        }
    }

    /// Creates a bitset of `length` uniformly random bits.
    ///
    /// ```
    /// use bitlib::Bitset;
    /// use rand::SeedableRng;
    ///
    /// let mut random_number_generator = rand::rngs::StdRng::seed_from_u64(7);
    /// let bits = Bitset::random(100, &mut random_number_generator);
    /// assert_eq!(bits.len(), 100);
    /// ```
    pub fn random(length: usize, random_number_generator: &mut impl rand::Rng) -> Bitset {
        let mut bits = Self::zeros(length);
        bits.assign_random(length, random_number_generator);
        bits
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Same as [`len`](Bitset::len).
    #[must_use]
    pub fn size(&self) -> usize {
        self.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Checked element access.
    ///
    /// # Errors
    ///
    /// [`BitsetError::IndexOutOfRange`] if `index >= self.len()`.
    pub fn at(&self, index: usize) -> Result<Bit> {
        self.bits
            .get(index)
            .copied()
            .ok_or_else(|| out_of_range(index, self.len()))
    }

    /// Checked mutable element access.
    ///
    /// # Errors
    ///
    /// [`BitsetError::IndexOutOfRange`] if `index >= self.len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut Bit> {
        let length = self.len();
        self.bits.get_mut(index).ok_or_else(|| out_of_range(index, length))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Bit> {
        self.bits.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Bit> {
        self.bits.iter_mut()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Bit] {
        &self.bits
    }

    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [Bit] {
        &mut self.bits
    }

    #[must_use]
    pub fn to_bools(&self) -> Vec<bool> {
        self.iter_bits().collect()
    }

    /// Truncates to `new_length` or pads with zeros up to it.
    pub fn resize(&mut self, new_length: usize) {
        self.resize_filled(new_length, Bit::ZERO);
    }

    /// Truncates to `new_length` or pads with copies of `value` up to it.
    pub fn resize_filled(&mut self, new_length: usize, value: Bit) {
        self.bits.resize(new_length, value);
    }

    pub fn set_all(&mut self) {
        self.fill_with(Bit::ONE);
    }

    pub fn reset_all(&mut self) {
        self.fill_with(Bit::ZERO);
    }

    pub fn fill_with(&mut self, value: Bit) {
        self.bits.fill(value);
    }

    /// Inverts every bit in place. See [`complement`](Bitset::complement) for the non-mutating form.
    pub fn invert(&mut self) {
        for bit in &mut self.bits {
            bit.invert();
        }
    }
}

fn out_of_range(index: usize, length: usize) -> BitsetError {
    tracing::debug!(index, length, "checked access out of range");
    BitsetError::IndexOutOfRange { index, length }
}

impl Index<usize> for Bitset {
    type Output = Bit;

    /// # Panics
    ///
    /// Panics if `index >= self.len()`; use [`Bitset::at`] for a checked read.
    fn index(&self, index: usize) -> &Bit {
        &self.bits[index]
    }
}

impl IndexMut<usize> for Bitset {
    fn index_mut(&mut self, index: usize) -> &mut Bit {
        &mut self.bits[index]
    }
}

impl AsRef<[Bit]> for Bitset {
    fn as_ref(&self) -> &[Bit] {
        &self.bits
    }
}

impl AsMut<[Bit]> for Bitset {
    fn as_mut(&mut self) -> &mut [Bit] {
        &mut self.bits
    }
}

impl Borrow<[Bit]> for Bitset {
    fn borrow(&self) -> &[Bit] {
        &self.bits
    }
}

impl BorrowMut<[Bit]> for Bitset {
    fn borrow_mut(&mut self) -> &mut [Bit] {
        &mut self.bits
    }
}

impl FromIterator<Bit> for Bitset {
    fn from_iter<Iterator: IntoIterator<Item = Bit>>(iterator: Iterator) -> Self {
        Bitset {
            bits: iterator.into_iter().collect(),
        }
    }
}

impl FromIterator<bool> for Bitset {
    fn from_iter<Iterator: IntoIterator<Item = bool>>(iterator: Iterator) -> Self {
        iterator.into_iter().map(Bit::from).collect()
    }
}

impl Extend<Bit> for Bitset {
    fn extend<T: IntoIterator<Item = Bit>>(&mut self, iter: T) {
        self.bits.extend(iter);
    }
}

impl From<&[bool]> for Bitset {
    fn from(bools: &[bool]) -> Self {
        bools.iter().copied().collect()
    }
}

impl From<Vec<bool>> for Bitset {
    fn from(bools: Vec<bool>) -> Self {
        bools.into_iter().collect()
    }
}

impl<const SIZE: usize> From<[bool; SIZE]> for Bitset {
    fn from(bools: [bool; SIZE]) -> Self {
        bools.into_iter().collect()
    }
}

impl From<Bitset> for Vec<bool> {
    fn from(bits: Bitset) -> Self {
        bits.to_bools()
    }
}

impl IntoIterator for Bitset {
    type Item = Bit;
    type IntoIter = std::vec::IntoIter<Bit>;

    fn into_iter(self) -> Self::IntoIter {
        self.bits.into_iter()
    }
}

impl<'life> IntoIterator for &'life Bitset {
    type Item = &'life Bit;
    type IntoIter = std::slice::Iter<'life, Bit>;

    fn into_iter(self) -> Self::IntoIter {
        self.bits.iter()
    }
}

impl<'life> IntoIterator for &'life mut Bitset {
    type Item = &'life mut Bit;
    type IntoIter = std::slice::IterMut<'life, Bit>;

    fn into_iter(self) -> Self::IntoIter {
        self.bits.iter_mut()
    }
}

impl<'life> IntoBitIterator for &'life Bitset {
    type BitIterator = <&'life [Bit] as IntoBitIterator>::BitIterator;

    fn iter_bits(self) -> Self::BitIterator {
        self.bits.as_slice().iter_bits()
    }
}

bitwise_via_slice!(Bitset, Bit);
