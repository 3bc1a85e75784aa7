//! Rotor-based polyalphabetic substitution cipher (a simplified Enigma)
//! with a brute-force known-plaintext attack over rotor start positions.
//!
//! Text flows character by character through plugboard, rotor chain,
//! reflector, and back; the attack enumerates every rotor start-position
//! combination and keeps the ones consistent with known plaintext letters.

pub mod cipher;
pub mod config;
pub mod logging;


pub use cipher::attack::{
    search, search_with_hook, validate_attack, Candidate, KnownPair, SearchControl,
    SearchProgress,
};
pub use cipher::engine::{process_text, process_text_quiet, EngineState, ProcessResult};
pub use cipher::trace::TraceRecorder;
pub use config::{
    preset_wiring, validate_settings, validate_wiring, AttackRequest, MachineSettings,
    ScramblerSettings,
};
