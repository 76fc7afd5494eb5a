pub mod bit;
pub use bit::{Bit, BitLength, Bitwise, BitwiseMut, BitwisePair, BitwisePairMut, IntoBitIterator, nand, nor};

pub mod error;
pub use error::{BitsetError, Result};

pub mod vec;
pub use vec::{Bitset, hamming_distance, hamming_distance_padded};

#[cfg(feature = "serde")]
mod serde;

#[cfg(feature = "schemars")]
mod schemars;
