use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::cipher::attack::KnownPair;

/// One rotor slot as configured by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScramblerSettings {
    #[serde(default)]
    pub wiring: String,
    #[serde(default = "default_position")]
    pub position: String,
    #[serde(default)]
    pub enabled: bool,
}

fn default_position() -> String {
    "A".to_string()
}

/// Full machine configuration, the boundary record the engine consumes.
///
/// The engine itself treats malformed fields as "component absent"; the
/// strict validator below is where problems get reported to a human.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineSettings {
    #[serde(default)]
    pub plugboard: String,
    #[serde(default)]
    pub plugboard_enabled: bool,
    #[serde(default)]
    pub scramblers: Vec<ScramblerSettings>,
    #[serde(default)]
    pub reflector: String,
    #[serde(default)]
    pub reflector_enabled: bool,
}

/// On-disk request for the attack subcommand.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttackRequest {
    pub ciphertext: String,
    #[serde(default)]
    pub known_pairs: Vec<KnownPair>,
    pub settings: MachineSettings,
}

/// Named wiring preset.
#[derive(Debug, Clone, Copy)]
pub struct Preset {
    pub name: &'static str,
    pub wiring: &'static str,
}

lazy_static! {
    /// Historical scrambler drums selectable by name.
    pub static ref SCRAMBLER_PRESETS: Vec<Preset> = vec![
        Preset { name: "Enigma I", wiring: "EKMFLGDQVZNTOWYHXUSPAIBRCJ" },
        Preset { name: "Enigma II", wiring: "AJDKSIRUXBLHWTMCQGZNPYFVOE" },
        Preset { name: "Enigma III", wiring: "BDFHJLCPRTXVZNYEIWGAKMUSQO" },
        Preset { name: "Enigma IV", wiring: "ESOVPZJAYQUIRHXLNFTGKDCMWB" },
        Preset { name: "Enigma V", wiring: "VZBRGITYUPSDNHLXAWMJQOFECK" },
    ];

    /// Historical reflector plates selectable by name.
    pub static ref REFLECTOR_PRESETS: Vec<Preset> = vec![
        Preset { name: "Reflector B", wiring: "YRUHQSLDPXNGOKMIEBFZCWVJAT" },
        Preset { name: "Reflector C", wiring: "FVPJIAOYEDRZXWGCTKUQSBNMHL" },
    ];
}

/// Looks a preset up by name across both tables.
pub fn preset_wiring(name: &str) -> Option<&'static str> {
    SCRAMBLER_PRESETS
        .iter()
        .chain(REFLECTOR_PRESETS.iter())
        .find(|p| p.name.eq_ignore_ascii_case(name))
        .map(|p| p.wiring)
}

/// Strict wiring check with a human-readable reason. Empty wiring is fine:
/// the component is simply skipped.
pub fn validate_wiring(wiring: &str) -> Result<(), String> {
    let normalized = wiring.trim().to_ascii_uppercase();
    if normalized.is_empty() {
        return Ok(());
    }
    if normalized.len() != 26 {
        return Err(format!(
            "needs exactly 26 letters (currently {})",
            normalized.len()
        ));
    }
    if let Some(c) = normalized.chars().find(|c| !c.is_ascii_uppercase()) {
        return Err(format!("only letters A-Z are allowed (found '{}')", c));
    }
    let mut seen = [false; 26];
    for c in normalized.bytes() {
        let idx = (c - b'A') as usize;
        if seen[idx] {
            return Err(format!("letter '{}' appears more than once", c as char));
        }
        seen[idx] = true;
    }
    Ok(())
}

/// Validates every enabled component, returning human-readable messages.
/// An empty result means the settings are safe to hand to the engine;
/// callers are expected to withhold processing otherwise.
pub fn validate_settings(settings: &MachineSettings) -> Vec<String> {
    let mut errors = Vec::new();
    for (i, slot) in settings.scramblers.iter().enumerate() {
        if !slot.enabled {
            continue;
        }
        if let Err(reason) = validate_wiring(&slot.wiring) {
            errors.push(format!("scrambler {}: {}", i + 1, reason));
        }
    }
    if settings.reflector_enabled {
        if let Err(reason) = validate_wiring(&settings.reflector) {
            errors.push(format!("reflector: {}", reason));
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_round_trip_through_json() {
        let settings = MachineSettings {
            plugboard: "A-B".to_string(),
            plugboard_enabled: true,
            scramblers: vec![ScramblerSettings {
                wiring: "EKMFLGDQVZNTOWYHXUSPAIBRCJ".to_string(),
                position: "C".to_string(),
                enabled: true,
            }],
            reflector: "YRUHQSLDPXNGOKMIEBFZCWVJAT".to_string(),
            reflector_enabled: true,
        };
        let json = serde_json::to_string(&settings).expect("serialize");
        assert!(json.contains("plugboardEnabled"));
        assert!(json.contains("reflectorEnabled"));
        let back: MachineSettings = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, settings);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let settings: MachineSettings = serde_json::from_str("{}").expect("deserialize");
        assert!(!settings.plugboard_enabled);
        assert!(settings.scramblers.is_empty());
        let slot: ScramblerSettings =
            serde_json::from_str(r#"{"wiring":"","enabled":false}"#).expect("deserialize");
        assert_eq!(slot.position, "A");
    }

    #[test]
    fn preset_lookup_is_case_insensitive() {
        assert_eq!(
            preset_wiring("enigma i"),
            Some("EKMFLGDQVZNTOWYHXUSPAIBRCJ")
        );
        assert_eq!(
            preset_wiring("Reflector C"),
            Some("FVPJIAOYEDRZXWGCTKUQSBNMHL")
        );
        assert_eq!(preset_wiring("Reflector Z"), None);
    }

    #[test]
    fn wiring_validation_reports_the_reason() {
        assert!(validate_wiring("").is_ok());
        assert!(validate_wiring("EKMFLGDQVZNTOWYHXUSPAIBRCJ").is_ok());
        assert!(validate_wiring("ABC").expect_err("short").contains("26"));
        assert!(validate_wiring("EKMFLGDQVZNTOWYHXUSPAIBRC1")
            .expect_err("digit")
            .contains("A-Z"));
        assert!(validate_wiring("EKMFLGDQVZNTOWYHXUSPAIBRCC")
            .expect_err("duplicate")
            .contains("more than once"));
    }

    #[test]
    fn settings_validation_names_the_component() {
        let settings = MachineSettings {
            scramblers: vec![
                ScramblerSettings {
                    wiring: "BAD".to_string(),
                    position: "A".to_string(),
                    enabled: true,
                },
                ScramblerSettings {
                    wiring: "ALSO BAD".to_string(),
                    position: "A".to_string(),
                    enabled: false,
                },
            ],
            reflector: "NOPE".to_string(),
            reflector_enabled: true,
            ..MachineSettings::default()
        };
        let errors = validate_settings(&settings);
        assert_eq!(errors.len(), 2);
        assert!(errors[0].starts_with("scrambler 1:"));
        assert!(errors[1].starts_with("reflector:"));
    }
}
