//! Cipher core: rotors, plugboard, reflector, the per-character signal path,
//! and the known-plaintext start-position search. Everything in here is pure
//! and deterministic; build.rs rejects any I/O creeping in.

pub mod alphabet;
pub mod attack;
pub mod chain;
pub mod engine;
pub mod plugboard;
pub mod reflector;
pub mod scrambler;
pub mod trace;
pub mod wiring;
