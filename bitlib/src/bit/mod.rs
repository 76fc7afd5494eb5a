pub mod bitwise;

pub use bit_value::{Bit, nand, nor};
pub use bitwise::{BitLength, Bitwise, BitwiseMut, BitwisePair, BitwisePairMut, IntoBitIterator};

pub mod bit_value;
pub mod bitwise_via_iter;
pub mod bool;
pub mod bool_containers;
pub mod standard_types;
