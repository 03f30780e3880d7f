//! Error types for the Enigma library.

use thiserror::Error;

/// Errors produced by the Enigma library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnigmaError {
    /// Wiring specification has the wrong length, a non-letter, or a repeated letter.
    #[error("invalid wiring: {0}")]
    InvalidWiring(String),
    /// Notch specification contains a non-letter.
    #[error("invalid notch character: {0:?}")]
    InvalidNotch(char),
    /// Plugboard pair is malformed, contains a non-letter, or reuses a letter.
    #[error("invalid plugboard pair: {0}")]
    InvalidPlugboardPair(String),
    /// Character outside A-Z reached the signal path.
    #[error("invalid character: {0:?} (only A-Z supported)")]
    InvalidCharacter(char),
    /// Number of rotor positions differs from the number of rotors.
    #[error("expected {expected} rotor positions, got {actual}")]
    PositionCountMismatch { expected: usize, actual: usize },
    /// Number of ring settings differs from the number of rotors.
    #[error("number of ring settings ({actual}) must match number of rotors ({expected})")]
    RingSettingCountMismatch { expected: usize, actual: usize },
    /// Rotor name is not in the historical registry.
    #[error("invalid rotor type: {0}")]
    UnknownRotorType(String),
    /// Reflector name is not in the historical registry.
    #[error("invalid reflector type: {0}")]
    UnknownReflectorType(String),
    /// Position string contains a non-letter.
    #[error("invalid position character: {0:?}")]
    InvalidPositionCharacter(char),
    /// Ring setting string contains a non-letter.
    #[error("invalid ring setting character: {0:?}")]
    InvalidRingSettingCharacter(char),
    /// No rotor was configured.
    #[error("at least one rotor must be specified")]
    MissingRotors,
    /// More rotors than any machine variant carries.
    #[error("at most {max} rotors are supported, got {actual}")]
    TooManyRotors { max: usize, actual: usize },
    /// No reflector was configured.
    #[error("reflector must be specified")]
    MissingReflector,
    /// Machine configuration document could not be parsed.
    #[error("invalid machine configuration: {0}")]
    ConfigParse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_wiring() {
        let err = EnigmaError::InvalidWiring("expected 26 letters, got 3".to_string());
        assert_eq!(
            format!("{}", err),
            "invalid wiring: expected 26 letters, got 3"
        );
    }

    #[test]
    fn test_display_invalid_character() {
        let err = EnigmaError::InvalidCharacter('1');
        assert_eq!(
            format!("{}", err),
            "invalid character: '1' (only A-Z supported)"
        );
    }

    #[test]
    fn test_display_position_count_mismatch() {
        let err = EnigmaError::PositionCountMismatch {
            expected: 3,
            actual: 2,
        };
        assert_eq!(format!("{}", err), "expected 3 rotor positions, got 2");
    }

    #[test]
    fn test_display_ring_setting_count_mismatch() {
        let err = EnigmaError::RingSettingCountMismatch {
            expected: 3,
            actual: 4,
        };
        assert_eq!(
            format!("{}", err),
            "number of ring settings (4) must match number of rotors (3)"
        );
    }

    #[test]
    fn test_display_unknown_types() {
        assert_eq!(
            format!("{}", EnigmaError::UnknownRotorType("IX".to_string())),
            "invalid rotor type: IX"
        );
        assert_eq!(
            format!("{}", EnigmaError::UnknownReflectorType("UKW-D".to_string())),
            "invalid reflector type: UKW-D"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(EnigmaError::MissingRotors, EnigmaError::MissingRotors);
        assert_ne!(EnigmaError::MissingRotors, EnigmaError::MissingReflector);
    }

    #[test]
    fn test_error_clone() {
        let err = EnigmaError::InvalidPlugboardPair("AB AC".to_string());
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}
