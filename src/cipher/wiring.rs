use std::fmt;

use crate::cipher::alphabet::{self, ALPHABET_LEN};

/// A 26-symbol permutation of the alphabet, position to symbol.
///
/// Every rotor and reflector wiring goes through `parse`, so the rest of the
/// core may assume each letter appears exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wiring([u8; ALPHABET_LEN]);

impl Wiring {
    /// Parses a wiring string, uppercasing first. Returns None unless the
    /// input is exactly the alphabet in some order; malformed wiring makes
    /// the owning component absent rather than raising an error.
    pub fn parse(text: &str) -> Option<Wiring> {
        let upper = text.trim().to_ascii_uppercase();
        let bytes = upper.as_bytes();
        if bytes.len() != ALPHABET_LEN {
            return None;
        }
        let mut seen = [false; ALPHABET_LEN];
        let mut out = [0u8; ALPHABET_LEN];
        for (i, &c) in bytes.iter().enumerate() {
            let idx = alphabet::index_of(c)?;
            if seen[idx] {
                return None;
            }
            seen[idx] = true;
            out[i] = c;
        }
        Some(Wiring(out))
    }

    /// A copy rotated left by `amount` positions.
    pub fn rotated_left(&self, amount: usize) -> Wiring {
        let n = amount % ALPHABET_LEN;
        let mut out = [0u8; ALPHABET_LEN];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = self.0[(i + n) % ALPHABET_LEN];
        }
        Wiring(out)
    }

    pub fn symbol_at(&self, index: usize) -> u8 {
        self.0[index % ALPHABET_LEN]
    }

    /// Index of a letter within this wiring. The permutation invariant
    /// guarantees every letter of the alphabet appears exactly once.
    pub fn position_of(&self, symbol: u8) -> usize {
        self.0.iter().position(|&c| c == symbol).unwrap_or(0)
    }
}

impl fmt::Display for Wiring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &c in &self.0 {
            write!(f, "{}", c as char)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENIGMA_I: &str = "EKMFLGDQVZNTOWYHXUSPAIBRCJ";

    #[test]
    fn accepts_a_full_permutation() {
        let wiring = Wiring::parse(ENIGMA_I).expect("valid wiring");
        assert_eq!(wiring.symbol_at(0), b'E');
        assert_eq!(wiring.position_of(b'E'), 0);
        assert_eq!(wiring.to_string(), ENIGMA_I);
    }

    #[test]
    fn lowercase_and_padding_are_normalized() {
        let wiring = Wiring::parse("  ekmflgdqvzntowyhxuspaibrcj ").expect("valid wiring");
        assert_eq!(wiring.to_string(), ENIGMA_I);
    }

    #[test]
    fn rejects_wrong_length_duplicates_and_symbols() {
        assert!(Wiring::parse("").is_none());
        assert!(Wiring::parse("ABC").is_none());
        assert!(Wiring::parse("EKMFLGDQVZNTOWYHXUSPAIBRCC").is_none());
        assert!(Wiring::parse("EKMFLGDQVZNTOWYHXUSPAIBRC1").is_none());
    }

    #[test]
    fn rotation_wraps_and_preserves_symbols() {
        let wiring = Wiring::parse(ENIGMA_I).expect("valid wiring");
        let rotated = wiring.rotated_left(2);
        assert_eq!(rotated.symbol_at(0), b'M');
        assert_eq!(rotated.symbol_at(25), b'K');
        assert_eq!(wiring.rotated_left(26), wiring);
    }
}
