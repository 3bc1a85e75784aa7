//! The fixed A-Z alphabet and the index arithmetic shared by every stage.

pub const ALPHABET: [u8; 26] = *b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const ALPHABET_LEN: usize = 26;

/// Index of an uppercase letter, or None for anything outside A-Z.
pub fn index_of(letter: u8) -> Option<usize> {
    if letter.is_ascii_uppercase() {
        Some((letter - b'A') as usize)
    } else {
        None
    }
}

/// Letter at an alphabet index, wrapping modulo 26.
pub fn letter_at(index: usize) -> u8 {
    ALPHABET[index % ALPHABET_LEN]
}

/// The alphabet rotated left by `shift` positions.
pub fn shifted(shift: usize) -> [u8; ALPHABET_LEN] {
    let mut out = [0u8; ALPHABET_LEN];
    for (i, slot) in out.iter_mut().enumerate() {
        *slot = ALPHABET[(i + shift) % ALPHABET_LEN];
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trips_through_letter() {
        for (i, &c) in ALPHABET.iter().enumerate() {
            assert_eq!(index_of(c), Some(i));
            assert_eq!(letter_at(i), c);
        }
        assert_eq!(index_of(b'a'), None);
        assert_eq!(index_of(b'-'), None);
    }

    #[test]
    fn shifted_alphabet_wraps_around() {
        assert_eq!(&shifted(0), &ALPHABET);
        assert_eq!(&shifted(1)[..4], b"BCDE");
        assert_eq!(shifted(25)[0], b'Z');
        assert_eq!(shifted(25)[1], b'A');
        assert_eq!(&shifted(26), &ALPHABET);
    }
}
