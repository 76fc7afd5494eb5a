use crate::vec::Bitset;
use crate::{Bit, BitsetError};
use itertools::Itertools;
use std::str::FromStr;

impl Bitset {
    /// Renders every bit as `0` or `1`.
    #[must_use]
    pub fn to_binary_string(&self) -> String {
        self.to_binary_string_with("")
    }

    /// Renders every bit as `0` or `1` with `delimiter` between consecutive bits.
    ///
    /// ```
    /// use bitlib::bitset;
    ///
    /// assert_eq!(bitset![0, 1, 1, 0].to_binary_string_with(", "), "0, 1, 1, 0");
    /// assert_eq!(bitset![].to_binary_string_with(","), "");
    /// ```
    #[must_use]
    pub fn to_binary_string_with(&self, delimiter: &str) -> String {
        self.iter().join(delimiter)
    }
}

impl std::fmt::Display for Bitset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            write!(f, "[")?;
        }
        for bit in self {
            write!(f, "{bit}")?;
        }
        if f.alternate() {
            write!(f, "]")?;
        }
        Ok(())
    }
}

fn is_separator(character: char) -> bool {
    character.is_ascii_whitespace() || character == ',' || character == '_'
}

/// Parses `0`/`1` digits, optionally wrapped in `[` `]` and separated by whitespace, `,` or `_`.
impl FromStr for Bitset {
    type Err = BitsetError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        let (offset, digits) = match trimmed.strip_prefix('[').and_then(|inner| inner.strip_suffix(']')) {
            Some(inner) => (1, inner),
            None => (0, trimmed),
        };
        let leading = input.len() - input.trim_start().len();
        digits
            .char_indices()
            .filter(|&(_, character)| !is_separator(character))
            .map(|(position, character)| match character {
                '0' => Ok(Bit::ZERO),
                '1' => Ok(Bit::ONE),
                found => {
                    let position = leading + offset + position;
                    tracing::debug!(position, %found, "rejected binary digit");
                    Err(BitsetError::InvalidDigit { position, found })
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Bitset, BitsetError, bitset};

    #[test]
    fn display_forms() {
        let bits = bitset![1, 0, 1];
        assert_eq!(bits.to_string(), "101");
        assert_eq!(format!("{bits:#}"), "[101]");
        assert_eq!(Bitset::new().to_string(), "");
    }

    #[test]
    fn parses_what_it_renders() {
        let bits = bitset![0, 1, 1, 0, 1];
        assert_eq!(bits.to_string().parse::<Bitset>(), Ok(bits.clone()));
        assert_eq!(format!("{bits:#}").parse::<Bitset>(), Ok(bits.clone()));
        assert_eq!(bits.to_binary_string_with(", ").parse::<Bitset>(), Ok(bits));
        assert_eq!("".parse::<Bitset>(), Ok(Bitset::new()));
        assert_eq!("1111_0000".parse::<Bitset>().map(|bits| bits.len()), Ok(8));
    }

    #[test]
    fn reports_first_bad_digit() {
        assert_eq!(
            "01x1".parse::<Bitset>(),
            Err(BitsetError::InvalidDigit { position: 2, found: 'x' })
        );
        assert_eq!(
            " [012]".parse::<Bitset>(),
            Err(BitsetError::InvalidDigit { position: 4, found: '2' })
        );
    }
}
