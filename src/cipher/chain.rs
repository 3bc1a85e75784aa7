use std::slice;

use crate::cipher::alphabet::ALPHABET_LEN;
use crate::cipher::scrambler::Scrambler;

/// Ordered bank of the active rotors; rotor 1 sits closest to the input.
///
/// Disabled or malformed rotors never make it into the bank, so every
/// element here participates in the signal path.
#[derive(Debug, Clone, Default)]
pub struct ScramblerBank {
    scramblers: Vec<Scrambler>,
}

impl ScramblerBank {
    pub fn new(scramblers: Vec<Scrambler>) -> ScramblerBank {
        ScramblerBank { scramblers }
    }

    pub fn len(&self) -> usize {
        self.scramblers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scramblers.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Scrambler> {
        self.scramblers.iter()
    }

    pub fn positions(&self) -> Vec<usize> {
        self.scramblers.iter().map(|s| s.position()).collect()
    }

    /// Odometer step, run once before each character.
    ///
    /// Rotor 1 always advances. A rotor that just completed a full wrap
    /// (25 -> 0) carries into the next rotor, and the carry can ripple
    /// through the whole bank in one step; the scan stops at the first
    /// rotor that did not wrap.
    pub fn step(&mut self) {
        if self.scramblers.is_empty() {
            return;
        }
        let mut previous = self.positions();
        self.scramblers[0].advance();
        for i in 0..self.scramblers.len() - 1 {
            let wrapped = previous[i] == ALPHABET_LEN - 1 && self.scramblers[i].position() == 0;
            if !wrapped {
                break;
            }
            previous[i + 1] = self.scramblers[i + 1].position();
            self.scramblers[i + 1].advance();
        }
    }

    /// Runs a position through every rotor front to back. The returned path
    /// includes the input, then one entry per rotor.
    pub fn forward_path(&self, input: usize) -> Vec<usize> {
        let mut path = Vec::with_capacity(self.scramblers.len() + 1);
        path.push(input);
        let mut pos = input;
        for s in &self.scramblers {
            pos = s.forward(pos);
            path.push(pos);
        }
        path
    }

    /// Runs a position through every rotor back to front, the return leg of
    /// the signal. Same shape as `forward_path`.
    pub fn reverse_path(&self, input: usize) -> Vec<usize> {
        let mut path = Vec::with_capacity(self.scramblers.len() + 1);
        path.push(input);
        let mut pos = input;
        for s in self.scramblers.iter().rev() {
            pos = s.reverse(pos);
            path.push(pos);
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENIGMA_I: &str = "EKMFLGDQVZNTOWYHXUSPAIBRCJ";
    const ENIGMA_II: &str = "AJDKSIRUXBLHWTMCQGZNPYFVOE";

    fn bank(starts: &[&str]) -> ScramblerBank {
        let wirings = [ENIGMA_I, ENIGMA_II, ENIGMA_I];
        let scramblers = starts
            .iter()
            .enumerate()
            .map(|(i, start)| Scrambler::new(wirings[i], start).expect("valid rotor"))
            .collect();
        ScramblerBank::new(scramblers)
    }

    #[test]
    fn only_the_first_rotor_moves_without_a_wrap() {
        let mut bank = bank(&["A", "M"]);
        bank.step();
        assert_eq!(bank.positions(), vec![1, 12]);
    }

    #[test]
    fn stepping_an_empty_bank_is_a_no_op() {
        let mut bank = ScramblerBank::default();
        bank.step();
        assert!(bank.is_empty());
    }

    #[test]
    fn reverse_path_undoes_forward_path() {
        let bank = bank(&["C", "Q", "X"]);
        for input in 0..26 {
            let forward = bank.forward_path(input);
            let last = *forward.last().expect("non-empty path");
            let reverse = bank.reverse_path(last);
            assert_eq!(reverse.last(), Some(&input));
        }
    }
}
