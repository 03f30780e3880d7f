//! Serializable machine settings.
//!
//! [`MachineConfig`] is the daily-key view of a machine: component names,
//! plugboard cables, ring settings and start positions, all as text. It is
//! validated as a whole when turned into a [`Machine`].

use serde::{Deserialize, Serialize};

use crate::builder::EnigmaBuilder;
use crate::error::EnigmaError;
use crate::machine::Machine;

/// Complete, text-form machine settings.
///
/// Rotors, positions and ring settings are listed rightmost first.
///
/// # Examples
///
/// ```
/// use enigma::MachineConfig;
///
/// let config = MachineConfig::from_json(
///     r#"{ "rotors": ["III", "II", "I"], "reflector": "UKW-B", "positions": "AAA" }"#,
/// ).unwrap();
/// let mut machine = config.build().unwrap();
/// assert_eq!(machine.encrypt("A").unwrap(), "B");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    /// Historical rotor names.
    pub rotors: Vec<String>,
    /// Historical reflector name.
    pub reflector: String,
    /// Cable pairs, e.g. `"AB CD"`.
    #[serde(default)]
    pub plugboard: String,
    /// Start position letters; empty means all `A`.
    #[serde(default)]
    pub positions: String,
    /// Ring setting letters; empty means all `A`.
    #[serde(default)]
    pub ring_settings: String,
}

impl MachineConfig {
    /// Parses settings from a JSON document.
    ///
    /// # Errors
    /// Returns [`EnigmaError::ConfigParse`] if the document is malformed or
    /// lacks `rotors` / `reflector`.
    pub fn from_json(json: &str) -> Result<Self, EnigmaError> {
        serde_json::from_str(json).map_err(|e| EnigmaError::ConfigParse(e.to_string()))
    }

    /// Serializes the settings as pretty-printed JSON.
    ///
    /// # Errors
    /// Returns [`EnigmaError::ConfigParse`] if serialization fails.
    pub fn to_json(&self) -> Result<String, EnigmaError> {
        serde_json::to_string_pretty(self).map_err(|e| EnigmaError::ConfigParse(e.to_string()))
    }

    /// Builds a machine from these settings.
    ///
    /// # Errors
    /// Any error reported by [`EnigmaBuilder`].
    pub fn build(&self) -> Result<Machine, EnigmaError> {
        EnigmaBuilder::new()
            .rotors(&self.rotors)?
            .reflector(&self.reflector)?
            .plugboard(&self.plugboard)?
            .ring_settings_from_str(&self.ring_settings)?
            .rotor_positions_from_str(&self.positions)?
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wehrmacht() -> MachineConfig {
        MachineConfig {
            rotors: vec!["V".to_string(), "IV".to_string(), "II".to_string()],
            reflector: "UKW-B".to_string(),
            plugboard: "AV BS CG DL FU HZ IN KM OW RX".to_string(),
            positions: "CXW".to_string(),
            ring_settings: "LUB".to_string(),
        }
    }

    #[test]
    fn test_build_full_config() {
        let mut machine = wehrmacht().build().unwrap();
        assert_eq!(machine.rotor_positions(), vec![2, 23, 22]);
        assert_eq!(machine.ring_settings(), vec![11, 20, 1]);
        assert_eq!(machine.encrypt("ATTACK AT DAWN").unwrap(), "NBJIEN OB JVGV");
    }

    #[test]
    fn test_defaults_applied() {
        let config =
            MachineConfig::from_json(r#"{ "rotors": ["I", "II", "III"], "reflector": "UKW-A" }"#)
                .unwrap();
        assert!(config.plugboard.is_empty());
        assert!(config.positions.is_empty());
        assert!(config.ring_settings.is_empty());
        let machine = config.build().unwrap();
        assert_eq!(machine.rotor_positions(), vec![0, 0, 0]);
    }

    #[test]
    fn test_json_document_survives_serialization() {
        let config = wehrmacht();
        let json = config.to_json().unwrap();
        assert_eq!(MachineConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_missing_reflector_field() {
        let err = MachineConfig::from_json(r#"{ "rotors": ["I"] }"#).unwrap_err();
        assert!(matches!(err, EnigmaError::ConfigParse(_)));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            MachineConfig::from_json("rotors: I II III"),
            Err(EnigmaError::ConfigParse(_))
        ));
    }

    #[test]
    fn test_invalid_component_reported_at_build() {
        let mut config = wehrmacht();
        config.rotors[1] = "XI".to_string();
        assert_eq!(
            config.build().unwrap_err(),
            EnigmaError::UnknownRotorType("XI".to_string())
        );
    }

    #[test]
    fn test_position_length_checked_at_build() {
        let mut config = wehrmacht();
        config.positions = "CX".to_string();
        assert_eq!(
            config.build().unwrap_err(),
            EnigmaError::PositionCountMismatch {
                expected: 3,
                actual: 2
            }
        );
    }
}
