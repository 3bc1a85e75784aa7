use serde::{Deserialize, Serialize};

use crate::cipher::alphabet::{self, ALPHABET_LEN};
use crate::cipher::engine;
use crate::cipher::wiring::Wiring;
use crate::config::{MachineSettings, ScramblerSettings};

/// Known-plaintext constraint: the letter expected at a position that
/// indexes only the alphabetic characters of the ciphertext, 0-based,
/// skipping separators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnownPair {
    pub pos: usize,
    pub letter: char,
}

/// One start-position combination that satisfied every constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Start letters of the usable rotors, in chain order.
    pub positions: Vec<char>,
    /// Display form, e.g. `"A-Q-Z"`.
    pub positions_string: String,
    pub decrypted: String,
    pub trace: String,
}

/// Progress report handed to the search hook once per combination, before
/// that combination is decrypted.
#[derive(Debug, Clone, Copy)]
pub struct SearchProgress {
    pub combination: usize,
    pub total: usize,
    pub matches: usize,
}

/// Hook verdict: keep enumerating, or stop between combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchControl {
    Continue,
    Abort,
}

/// Expands a combination index into per-rotor offsets: a base-26 counter
/// with the first usable rotor as the least-significant digit.
pub fn index_to_positions(index: usize, count: usize) -> Vec<usize> {
    let mut positions = Vec::with_capacity(count);
    let mut remaining = index;
    for _ in 0..count {
        positions.push(remaining % ALPHABET_LEN);
        remaining /= ALPHABET_LEN;
    }
    positions
}

/// A slot takes part in the search when it is enabled and its wiring is a
/// real permutation, so every enumerated combination builds all its rotors.
fn usable_scrambler(slot: &ScramblerSettings) -> bool {
    slot.enabled && Wiring::parse(&slot.wiring).is_some()
}

/// Rebuilds the settings template with candidate start letters substituted
/// into the usable rotor slots; unusable slots are switched off.
fn candidate_settings(positions: &[usize], template: &MachineSettings) -> MachineSettings {
    let mut settings = template.clone();
    let mut next = 0;
    for slot in settings.scramblers.iter_mut() {
        if usable_scrambler(slot) {
            slot.position = (alphabet::letter_at(positions[next]) as char).to_string();
            next += 1;
        } else {
            slot.enabled = false;
        }
    }
    settings
}

/// Decrypts the ciphertext under one candidate and checks every constraint.
/// Matching compares the decrypted letter at each constrained position.
fn test_combination(
    cipher_upper: &str,
    pairs: &[KnownPair],
    settings: &MachineSettings,
) -> (bool, String) {
    let decrypted = engine::process_text_quiet(cipher_upper, settings);

    // letter-only constraint position -> byte index in the ciphertext
    let letter_indices: Vec<usize> = cipher_upper
        .char_indices()
        .filter(|(_, c)| c.is_ascii_uppercase())
        .map(|(i, _)| i)
        .collect();

    let bytes = decrypted.as_bytes();
    for pair in pairs {
        let expected = pair.letter.to_ascii_uppercase();
        let matched = letter_indices
            .get(pair.pos)
            .and_then(|&i| bytes.get(i))
            .map(|&b| b as char == expected)
            .unwrap_or(false);
        if !matched {
            return (false, decrypted);
        }
    }
    (true, decrypted)
}

/// Exhaustive known-plaintext search over rotor start positions.
///
/// Every combination of start letters for the usable rotors (`26^k` in
/// total) is decrypted with a fresh engine and kept when all constraints
/// hold. Candidates come back in ascending combination order. Zero usable
/// rotors means an undefined search space and an empty result.
pub fn search(
    ciphertext: &str,
    pairs: &[KnownPair],
    template: &MachineSettings,
) -> Vec<Candidate> {
    search_with_hook(ciphertext, pairs, template, |_| SearchControl::Continue)
}

/// `search` with a caller hook at the combination boundary. The hook runs
/// before each combination; answering `Abort` stops the enumeration and
/// returns the candidates collected so far. There is no cancellation point
/// inside a single combination's decryption.
pub fn search_with_hook(
    ciphertext: &str,
    pairs: &[KnownPair],
    template: &MachineSettings,
    mut hook: impl FnMut(SearchProgress) -> SearchControl,
) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    let count = template
        .scramblers
        .iter()
        .filter(|slot| usable_scrambler(slot))
        .count();
    if count == 0 {
        return candidates;
    }

    let total = ALPHABET_LEN.pow(count as u32);
    let cipher_upper = ciphertext.to_ascii_uppercase();

    for combination in 0..total {
        let progress = SearchProgress {
            combination,
            total,
            matches: candidates.len(),
        };
        if hook(progress) == SearchControl::Abort {
            break;
        }

        let positions = index_to_positions(combination, count);
        let settings = candidate_settings(&positions, template);
        let (matches, decrypted) = test_combination(&cipher_upper, pairs, &settings);
        if matches {
            let trace = engine::process_text(&cipher_upper, &settings).trace;
            let letters: Vec<char> = positions
                .iter()
                .map(|&p| alphabet::letter_at(p) as char)
                .collect();
            let positions_string = letters
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join("-");
            candidates.push(Candidate {
                positions: letters,
                positions_string,
                decrypted,
                trace,
            });
        }
    }
    candidates
}

/// Pre-search validation with human-readable messages; an empty result
/// means the request is runnable.
pub fn validate_attack(
    ciphertext: &str,
    pairs: &[KnownPair],
    template: &MachineSettings,
) -> Vec<String> {
    let mut errors = Vec::new();
    if ciphertext.trim().is_empty() {
        errors.push("ciphertext is empty".to_string());
    }
    if pairs.is_empty() {
        errors.push("at least one known plaintext letter is required".to_string());
    }
    let letter_count = ciphertext.chars().filter(|c| c.is_ascii_alphabetic()).count();
    if let Some(pair) = pairs.iter().find(|p| p.pos >= letter_count) {
        errors.push(format!(
            "known position {} is past the end of the ciphertext",
            pair.pos
        ));
    }
    if !template.scramblers.iter().any(usable_scrambler) {
        errors.push("no usable scrambler is configured".to_string());
    }
    errors
}
