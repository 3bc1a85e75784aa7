use crate::cipher::alphabet::{self, ALPHABET_LEN};
use crate::cipher::wiring::Wiring;

/// One rotor: an immutable base permutation plus a rotational offset.
///
/// The rotated wiring is a cache derived from the base wiring and the
/// offset; it is refreshed whenever the offset changes and is never
/// independent state.
#[derive(Debug, Clone)]
pub struct Scrambler {
    base_wiring: Wiring,
    wiring: Wiring,
    position: usize,
}

impl Scrambler {
    /// Builds a rotor from a wiring string and a start letter.
    ///
    /// Returns None for malformed wiring or a start that is not a single
    /// letter; an absent rotor simply drops out of the chain. An empty start
    /// defaults to `A`. On success the wiring is pre-rotated so the resting
    /// contact alignment matches the configured start letter.
    pub fn new(wiring: &str, start: &str) -> Option<Scrambler> {
        let base = Wiring::parse(wiring)?;
        let start = start.trim();
        let position = if start.is_empty() {
            0
        } else {
            let upper = start.to_ascii_uppercase();
            let bytes = upper.as_bytes();
            if bytes.len() != 1 {
                return None;
            }
            alphabet::index_of(bytes[0])?
        };
        let wiring = base.rotated_left(position);
        Some(Scrambler {
            base_wiring: base,
            wiring,
            position,
        })
    }

    /// Current rotational offset, 0-25.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn base_wiring(&self) -> &Wiring {
        &self.base_wiring
    }

    pub fn rotated_wiring(&self) -> &Wiring {
        &self.wiring
    }

    /// Advances the offset by one, wrapping at 26, and refreshes the
    /// rotated-wiring cache.
    pub fn advance(&mut self) {
        self.position = (self.position + 1) % ALPHABET_LEN;
        self.wiring = self.base_wiring.rotated_left(self.position);
    }

    /// Forward pass: read the symbol at the input index of the alphabet
    /// shifted by the current offset, then return that symbol's index in
    /// the rotated wiring.
    pub fn forward(&self, input: usize) -> usize {
        let shifted = alphabet::shifted(self.position);
        self.wiring.position_of(shifted[input % ALPHABET_LEN])
    }

    /// Reverse pass: exact inverse of `forward` at the same offset. Reads
    /// the symbol at the input index of the rotated wiring and returns its
    /// index in the shifted alphabet.
    pub fn reverse(&self, input: usize) -> usize {
        let shifted = alphabet::shifted(self.position);
        let symbol = self.wiring.symbol_at(input);
        shifted.iter().position(|&c| c == symbol).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENIGMA_I: &str = "EKMFLGDQVZNTOWYHXUSPAIBRCJ";

    #[test]
    fn start_letter_pre_rotates_the_wiring() {
        let rotor = Scrambler::new(ENIGMA_I, "C").expect("valid rotor");
        assert_eq!(rotor.position(), 2);
        assert_eq!(rotor.rotated_wiring().symbol_at(0), b'M');
        assert_eq!(rotor.base_wiring().symbol_at(0), b'E');
    }

    #[test]
    fn empty_start_defaults_to_a() {
        let rotor = Scrambler::new(ENIGMA_I, "").expect("valid rotor");
        assert_eq!(rotor.position(), 0);
        assert_eq!(rotor.rotated_wiring(), rotor.base_wiring());
    }

    #[test]
    fn bad_wiring_or_start_means_no_rotor() {
        assert!(Scrambler::new("ABC", "A").is_none());
        assert!(Scrambler::new(ENIGMA_I, "AB").is_none());
        assert!(Scrambler::new(ENIGMA_I, "1").is_none());
    }

    #[test]
    fn advance_wraps_and_refreshes_the_cache() {
        let mut rotor = Scrambler::new(ENIGMA_I, "Z").expect("valid rotor");
        assert_eq!(rotor.position(), 25);
        rotor.advance();
        assert_eq!(rotor.position(), 0);
        assert_eq!(rotor.rotated_wiring(), rotor.base_wiring());
    }

    #[test]
    fn reverse_inverts_forward_at_any_offset() {
        let mut rotor = Scrambler::new(ENIGMA_I, "A").expect("valid rotor");
        for _ in 0..30 {
            for input in 0..26 {
                assert_eq!(rotor.reverse(rotor.forward(input)), input);
            }
            rotor.advance();
        }
    }
}
