use crate::cipher::alphabet;
use crate::cipher::chain::ScramblerBank;
use crate::cipher::plugboard::Plugboard;
use crate::cipher::reflector::Reflector;
use crate::cipher::scrambler::Scrambler;
use crate::cipher::trace::TraceRecorder;
use crate::config::MachineSettings;

/// Machine state for one text pass: the active rotor bank, the plugboard,
/// and the optional reflector.
///
/// Rotor offsets mutate in place while the pass runs. State is built fresh
/// from settings at the start of every pass and never shared or reused, so
/// concurrent passes cannot observe each other.
#[derive(Debug, Clone)]
pub struct EngineState {
    bank: ScramblerBank,
    plugboard: Plugboard,
    reflector: Option<Reflector>,
}

/// Outcome of one text pass.
#[derive(Debug, Clone)]
pub struct ProcessResult {
    pub output: String,
    /// Human-readable signal-path rendering; purely descriptive.
    pub trace: String,
    /// False when nothing was active and the input passed through.
    pub processed: bool,
}

impl EngineState {
    /// Builds fresh state from a settings record. Disabled or malformed
    /// components drop out instead of failing the pass.
    pub fn from_settings(settings: &MachineSettings) -> EngineState {
        let mut scramblers = Vec::new();
        for slot in &settings.scramblers {
            if !slot.enabled {
                continue;
            }
            if let Some(scrambler) = Scrambler::new(&slot.wiring, &slot.position) {
                scramblers.push(scrambler);
            }
        }
        let plugboard = if settings.plugboard_enabled {
            Plugboard::parse(&settings.plugboard)
        } else {
            Plugboard::default()
        };
        let reflector = if settings.reflector_enabled {
            Reflector::new(&settings.reflector)
        } else {
            None
        };
        EngineState {
            bank: ScramblerBank::new(scramblers),
            plugboard,
            reflector,
        }
    }

    /// True when at least one stage was actually constructed.
    pub fn has_active_components(&self) -> bool {
        !self.bank.is_empty() || !self.plugboard.is_empty() || self.reflector.is_some()
    }

    pub fn bank(&self) -> &ScramblerBank {
        &self.bank
    }

    pub fn reflector(&self) -> Option<&Reflector> {
        self.reflector.as_ref()
    }

    /// Runs one letter through the full signal path, stepping the chain
    /// first. `letter` must already be an uppercase A-Z byte.
    pub fn process_letter(&mut self, letter: u8, recorder: Option<&mut TraceRecorder>) -> u8 {
        self.bank.step();

        let entered = self.plugboard.apply(letter);
        let input_pos = alphabet::index_of(entered).unwrap_or(0);

        let forward = self.bank.forward_path(input_pos);
        let mut pos = *forward.last().unwrap_or(&input_pos);

        if let Some(reflector) = &self.reflector {
            pos = reflector.reflect(pos);
        }

        let reverse = self.bank.reverse_path(pos);
        pos = *reverse.last().unwrap_or(&pos);

        let exited = alphabet::letter_at(pos);
        let output = self.plugboard.apply(exited);

        if let Some(recorder) = recorder {
            recorder.record_letter(self, letter, output, &forward, &reverse);
        }
        output
    }
}

/// Processes a whole text: uppercases it, runs letters through the machine,
/// and copies everything else through unchanged without stepping the chain.
/// The trace in the result covers the initial state and every letter.
pub fn process_text(text: &str, settings: &MachineSettings) -> ProcessResult {
    let mut state = EngineState::from_settings(settings);
    if !state.has_active_components() {
        return ProcessResult {
            output: text.to_ascii_uppercase(),
            trace: TraceRecorder::NO_ACTIVE_COMPONENTS.to_string(),
            processed: false,
        };
    }

    let mut recorder = TraceRecorder::new();
    recorder.record_initial(&state);

    let mut output = String::with_capacity(text.len());
    for c in text.to_ascii_uppercase().chars() {
        if c.is_ascii_uppercase() {
            output.push(state.process_letter(c as u8, Some(&mut recorder)) as char);
        } else {
            output.push(c);
        }
    }
    ProcessResult {
        output,
        trace: recorder.finish(),
        processed: true,
    }
}

/// Same pass without trace collection. The output is identical; trace
/// recording is a pure observer of the signal path.
pub fn process_text_quiet(text: &str, settings: &MachineSettings) -> String {
    let mut state = EngineState::from_settings(settings);
    if !state.has_active_components() {
        return text.to_ascii_uppercase();
    }
    let mut output = String::with_capacity(text.len());
    for c in text.to_ascii_uppercase().chars() {
        if c.is_ascii_uppercase() {
            output.push(state.process_letter(c as u8, None) as char);
        } else {
            output.push(c);
        }
    }
    output
}
