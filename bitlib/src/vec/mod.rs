mod algebra;
mod bitset;
mod shifts;
mod text;

pub use algebra::{hamming_distance, hamming_distance_padded};
pub use bitset::Bitset;

/// Builds a [`Bitset`] from a list of bit literals.
///
/// Each element may be anything [`Bit`](crate::Bit) converts from: `bool`, an integer (positive
/// means one) or a `Bit`.
///
/// ```
/// use bitlib::{Bitset, bitset};
///
/// let bits = bitset![0, 1, 1, 0];
/// assert_eq!(bits, Bitset::from([false, true, true, false]));
/// assert!(bitset![].is_empty());
/// ```
#[macro_export]
macro_rules! bitset {
    () => {
        $crate::Bitset::new()
    };
    ($($bit:expr),+ $(,)?) => {
        <$crate::Bitset as ::core::iter::FromIterator<$crate::Bit>>::from_iter([$($crate::Bit::from($bit)),+])
    };
}
