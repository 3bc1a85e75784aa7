use crate::cipher::alphabet::{self, ALPHABET, ALPHABET_LEN};
use crate::cipher::engine::EngineState;

const RULE: &str = "--------------------------------------------------------";
const DOUBLE_RULE: &str = "========================================================";

/// Collects a human-readable rendering of the signal path, one block per
/// character plus an initial-state block.
///
/// Recording is a pure observer: the ciphertext is identical whether or not
/// a recorder is attached.
#[derive(Debug, Default)]
pub struct TraceRecorder {
    entries: Vec<String>,
}

impl TraceRecorder {
    /// Trace text used when the machine short-circuits to pass-through.
    pub const NO_ACTIVE_COMPONENTS: &'static str = "(no active components)";

    pub fn new() -> TraceRecorder {
        TraceRecorder::default()
    }

    fn alphabet_line() -> String {
        ALPHABET.iter().map(|&c| c as char).collect()
    }

    fn shifted_line(shift: usize) -> String {
        alphabet::shifted(shift).iter().map(|&c| c as char).collect()
    }

    /// A 26-column line marking the descending (`v`) and ascending (`^`)
    /// signal positions.
    fn arrow_line(down: Option<usize>, up: Option<usize>) -> String {
        let mut columns = vec![' '; ALPHABET_LEN];
        if let Some(i) = down {
            if i < ALPHABET_LEN {
                columns[i] = 'v';
            }
        }
        if let Some(i) = up {
            if i < ALPHABET_LEN {
                columns[i] = '^';
            }
        }
        columns.into_iter().collect()
    }

    /// Renders the unshifted configuration once, before any character.
    pub fn record_initial(&mut self, state: &EngineState) {
        let mut lines = Vec::new();
        lines.push("[initial state]".to_string());
        lines.push(String::new());
        lines.push(format!("{}  <- input/output", Self::alphabet_line()));
        lines.push(String::new());
        for (i, scrambler) in state.bank().iter().enumerate() {
            lines.push(Self::alphabet_line());
            lines.push(format!("{}  <- scrambler {}", scrambler.base_wiring(), i + 1));
            lines.push(String::new());
        }
        if let Some(reflector) = state.reflector() {
            lines.push(Self::alphabet_line());
            lines.push(format!("{}  <- reflector (fixed)", reflector.wiring()));
            lines.push(String::new());
        }
        lines.push(DOUBLE_RULE.to_string());
        lines.push("[processing]".to_string());
        self.entries.push(lines.join("\n"));
    }

    /// Renders one character's path. `forward` and `reverse` are the
    /// position paths produced by the rotor bank, input included.
    pub fn record_letter(
        &mut self,
        state: &EngineState,
        input: u8,
        output: u8,
        forward: &[usize],
        reverse: &[usize],
    ) {
        let count = state.bank().len();
        let mut lines = Vec::new();
        lines.push(RULE.to_string());
        lines.push(format!("[processing '{}']", input as char));
        lines.push(String::new());
        lines.push(format!("{}  <- input/output", Self::alphabet_line()));
        lines.push(Self::arrow_line(
            forward.first().copied(),
            alphabet::index_of(output),
        ));
        for (i, scrambler) in state.bank().iter().enumerate() {
            let forward_in = forward.get(i).copied();
            let forward_out = forward.get(i + 1).copied();
            let reverse_in = reverse.get(count - 1 - i).copied();
            let reverse_out = reverse.get(count - i).copied();
            lines.push(Self::arrow_line(forward_in, reverse_out));
            lines.push(Self::shifted_line(scrambler.position()));
            lines.push(format!(
                "{}  <- scrambler {} (shifted left {})",
                scrambler.rotated_wiring(),
                i + 1,
                scrambler.position()
            ));
            lines.push(Self::arrow_line(forward_out, reverse_in));
        }
        if let Some(reflector) = state.reflector() {
            lines.push(Self::alphabet_line());
            lines.push(format!("{}  <- reflector (fixed)", reflector.wiring()));
        }
        lines.push(String::new());
        lines.push(format!("result: {} -> {}", input as char, output as char));
        self.entries.push(lines.join("\n"));
    }

    /// Joins the collected blocks into the final trace string.
    pub fn finish(self) -> String {
        self.entries.join("\n\n")
    }
}
