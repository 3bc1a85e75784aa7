use std::collections::HashMap;

/// Symmetric letter-swap table applied before and after the rotor chain.
///
/// Built once per engine instantiation from pair notation such as
/// `"A-B, S-Z"`; immutable afterwards.
#[derive(Debug, Clone, Default)]
pub struct Plugboard {
    map: HashMap<u8, u8>,
}

impl Plugboard {
    /// Parses pair notation: `<letter>-<letter>` tokens separated by commas
    /// or whitespace. A letter pairing with itself is dropped, and a letter
    /// appearing in more than one pair keeps its first-seen pairing.
    pub fn parse(text: &str) -> Plugboard {
        let upper = text.to_ascii_uppercase();
        let mut map = HashMap::new();
        for token in upper.split(|c: char| c == ',' || c.is_whitespace()) {
            let bytes = token.as_bytes();
            if bytes.len() != 3 || bytes[1] != b'-' {
                continue;
            }
            let (a, b) = (bytes[0], bytes[2]);
            if !a.is_ascii_uppercase() || !b.is_ascii_uppercase() || a == b {
                continue;
            }
            if map.contains_key(&a) || map.contains_key(&b) {
                continue;
            }
            map.insert(a, b);
            map.insert(b, a);
        }
        Plugboard { map }
    }

    /// Swaps a letter if it is plugged, otherwise returns it unchanged.
    pub fn apply(&self, letter: u8) -> u8 {
        *self.map.get(&letter).unwrap_or(&letter)
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_are_bidirectional() {
        let board = Plugboard::parse("A-B, S-Z");
        assert_eq!(board.apply(b'A'), b'B');
        assert_eq!(board.apply(b'B'), b'A');
        assert_eq!(board.apply(b'S'), b'Z');
        assert_eq!(board.apply(b'Z'), b'S');
        assert_eq!(board.apply(b'Q'), b'Q');
    }

    #[test]
    fn first_seen_pairing_wins() {
        let board = Plugboard::parse("A-B A-C B-D");
        assert_eq!(board.apply(b'A'), b'B');
        assert_eq!(board.apply(b'C'), b'C');
        assert_eq!(board.apply(b'D'), b'D');
    }

    #[test]
    fn malformed_tokens_are_skipped() {
        let board = Plugboard::parse("A-A, XY, Q-, -Z, 1-2,, u-y");
        assert_eq!(board.apply(b'A'), b'A');
        assert_eq!(board.apply(b'U'), b'Y');
        assert_eq!(board.apply(b'Y'), b'U');
    }

    #[test]
    fn empty_input_builds_an_empty_board() {
        assert!(Plugboard::parse("").is_empty());
        assert!(Plugboard::parse("  , ").is_empty());
        assert!(!Plugboard::parse("A-B").is_empty());
    }
}
