use crate::vec::Bitset;
use crate::{Bit, BitsetError, Result};

// Index 0 is the leftmost element: shifting left moves contents towards index 0.

impl Bitset {
    /// Rotates in place so that the element at `shift` becomes the first one,
    /// `new[i] = old[(i + shift) % len]`.
    ///
    /// # Errors
    ///
    /// [`BitsetError::InvalidShiftAmount`] if `shift > self.len()`.
    ///
    /// ```
    /// use bitlib::bitset;
    ///
    /// let mut bits = bitset![0, 1, 1, 0];
    /// bits.rotate_left(2).unwrap();
    /// assert_eq!(bits, bitset![1, 0, 0, 1]);
    /// ```
    pub fn rotate_left(&mut self, shift: usize) -> Result<&mut Self> {
        self.check_shift(shift)?;
        self.as_mut_slice().rotate_left(shift);
        Ok(self)
    }

    /// Rotates in place so that the element at `len - shift` becomes the first one,
    /// `new[i] = old[(i - shift) % len]`.
    ///
    /// # Errors
    ///
    /// [`BitsetError::InvalidShiftAmount`] if `shift > self.len()`.
    pub fn rotate_right(&mut self, shift: usize) -> Result<&mut Self> {
        self.check_shift(shift)?;
        self.as_mut_slice().rotate_right(shift);
        Ok(self)
    }

    /// Moves every element `shift` positions towards index 0; the trailing `shift` positions
    /// become zero.
    ///
    /// # Errors
    ///
    /// [`BitsetError::InvalidShiftAmount`] if `shift > self.len()`.
    ///
    /// ```
    /// use bitlib::bitset;
    ///
    /// let mut bits = bitset![1, 1, 0, 1];
    /// bits.shift_left(1).unwrap();
    /// assert_eq!(bits, bitset![1, 0, 1, 0]);
    /// ```
    pub fn shift_left(&mut self, shift: usize) -> Result<&mut Self> {
        self.check_shift(shift)?;
        let length = self.len();
        let bits = self.as_mut_slice();
        bits.copy_within(shift.., 0);
        bits[length - shift..].fill(Bit::ZERO);
        Ok(self)
    }

    /// Moves every element `shift` positions away from index 0; the leading `shift` positions
    /// become zero.
    ///
    /// # Errors
    ///
    /// [`BitsetError::InvalidShiftAmount`] if `shift > self.len()`.
    pub fn shift_right(&mut self, shift: usize) -> Result<&mut Self> {
        self.check_shift(shift)?;
        let length = self.len();
        let bits = self.as_mut_slice();
        bits.copy_within(..length - shift, shift);
        bits[..shift].fill(Bit::ZERO);
        Ok(self)
    }

    fn check_shift(&self, shift: usize) -> Result<()> {
        if shift > self.len() {
            tracing::debug!(shift, length = self.len(), "rejected shift amount");
            return Err(BitsetError::InvalidShiftAmount {
                shift,
                length: self.len(),
            });
        }
        Ok(())
    }
}
