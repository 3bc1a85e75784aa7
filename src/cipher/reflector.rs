use crate::cipher::alphabet;
use crate::cipher::wiring::Wiring;

/// Fixed substitution applied once between the forward and reverse rotor
/// passes. When disabled the signal bypasses this stage entirely.
///
/// The wiring is accepted as any valid permutation; an involution is not
/// separately enforced, and a non-involutive wiring loses the round-trip
/// symmetry of the machine.
#[derive(Debug, Clone)]
pub struct Reflector {
    wiring: Wiring,
}

impl Reflector {
    /// Builds a reflector, or None when the wiring is malformed (the stage
    /// is then absent, not an error).
    pub fn new(text: &str) -> Option<Reflector> {
        Wiring::parse(text).map(|wiring| Reflector { wiring })
    }

    /// Position of the symbol found at the input position of the wiring.
    pub fn reflect(&self, input: usize) -> usize {
        alphabet::index_of(self.wiring.symbol_at(input)).unwrap_or(input)
    }

    pub fn wiring(&self) -> &Wiring {
        &self.wiring
    }
}
