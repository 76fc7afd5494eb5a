use thiserror::Error;

/// Errors reported by the checked [`Bitset`](crate::Bitset) and [`Bit`](crate::Bit) operations.
///
/// Every operation that returns one of these leaves its receiver untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum BitsetError {
    /// A pairwise operation was given operands of different lengths.
    #[error("length mismatch: left operand has {left} bits, right operand has {right} bits")]
    LengthMismatch { left: usize, right: usize },

    /// Checked element access past the end of the bitset.
    #[error("index {index} is out of range for a bitset of length {length}")]
    IndexOutOfRange { index: usize, length: usize },

    /// A shift or rotation by more positions than the bitset holds.
    #[error("cannot shift a bitset of length {length} by {shift} positions")]
    InvalidShiftAmount { shift: usize, length: usize },

    /// A raw buffer holds fewer booleans than requested.
    #[error("requested {length} bits from a buffer holding {available}")]
    BufferTooShort { length: usize, available: usize },

    /// Text being parsed as a bitset holds something other than a digit or separator.
    #[error("invalid binary digit {found:?} at position {position}")]
    InvalidDigit { position: usize, found: char },

    /// Text being parsed as a single bit is neither "0" nor "1".
    #[error("invalid bit literal {input:?}, expected \"0\" or \"1\"")]
    InvalidBit { input: String },
}

/// A specialized Result type for bitset operations
pub type Result<T> = std::result::Result<T, BitsetError>;

#[inline]
pub(crate) fn ensure_same_length(left: usize, right: usize) -> Result<()> {
    if left != right {
        tracing::debug!(left, right, "rejected operands of different length");
        return Err(BitsetError::LengthMismatch { left, right });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_length_is_accepted() {
        assert_eq!(ensure_same_length(0, 0), Ok(()));
        assert_eq!(ensure_same_length(7, 7), Ok(()));
    }

    #[test]
    fn different_lengths_are_reported_in_order() {
        assert_eq!(
            ensure_same_length(3, 5),
            Err(BitsetError::LengthMismatch { left: 3, right: 5 })
        );
    }

    #[test]
    fn messages_name_the_offending_values() {
        let error = BitsetError::IndexOutOfRange { index: 9, length: 4 };
        assert_eq!(error.to_string(), "index 9 is out of range for a bitset of length 4");
        let error = BitsetError::InvalidDigit { position: 2, found: 'x' };
        assert_eq!(error.to_string(), "invalid binary digit 'x' at position 2");
    }
}
