//! Fluent, fallible construction of a [`Machine`].
//!
//! Every step that can fail returns `Result<Self, EnigmaError>`, so a chain
//! of steps is written with `?` and stops at the first bad setting. Checks
//! that depend on several settings (rotor count against positions and ring
//! settings) run in [`EnigmaBuilder::build`].

use tracing::debug;

use crate::error::EnigmaError;
use crate::machine::Machine;
use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::rotor::Rotor;
use crate::utils::alphabet;

/// Largest rotor stack of any Enigma variant (the four-rotor M4).
pub const MAX_ROTORS: usize = 4;

/// Builder for [`Machine`].
///
/// Rotors, positions and ring settings are all given rightmost first.
///
/// # Examples
///
/// ```
/// use enigma::{EnigmaBuilder, EnigmaError};
///
/// fn build() -> Result<String, EnigmaError> {
///     let mut machine = EnigmaBuilder::new()
///         .rotors(&["III", "II", "I"])?
///         .reflector("UKW-B")?
///         .plugboard("")?
///         .rotor_positions_from_str("AAA")?
///         .ring_settings_from_str("BBB")?
///         .build()?;
///     machine.encrypt("AAAAA")
/// }
///
/// assert_eq!(build().unwrap(), "EWTYX");
/// ```
#[derive(Debug, Default)]
pub struct EnigmaBuilder {
    rotors: Vec<Rotor>,
    reflector: Option<Reflector>,
    plugboard: Option<Plugboard>,
    positions: Vec<i32>,
    ring_settings: Vec<i32>,
}

impl EnigmaBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses historical rotors by name, e.g. `&["III", "II", "I"]`.
    ///
    /// Replaces any rotors set earlier.
    ///
    /// # Errors
    /// Returns [`EnigmaError::UnknownRotorType`] for the first unknown name.
    pub fn rotors<S: AsRef<str>>(mut self, names: &[S]) -> Result<Self, EnigmaError> {
        self.rotors = names
            .iter()
            .map(|name| Rotor::historical(name.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self)
    }

    /// Uses custom rotors. Replaces any rotors set earlier.
    pub fn custom_rotors(mut self, rotors: Vec<Rotor>) -> Self {
        self.rotors = rotors;
        self
    }

    /// Uses a historical reflector by name, e.g. `"UKW-B"`.
    ///
    /// # Errors
    /// Returns [`EnigmaError::UnknownReflectorType`] for an unknown name.
    pub fn reflector(mut self, name: &str) -> Result<Self, EnigmaError> {
        self.reflector = Some(Reflector::historical(name)?);
        Ok(self)
    }

    /// Uses a custom reflector.
    pub fn custom_reflector(mut self, reflector: Reflector) -> Self {
        self.reflector = Some(reflector);
        self
    }

    /// Sets the plugboard connections, e.g. `"AB CD EF"`.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidPlugboardPair`] for a malformed pair.
    pub fn plugboard(mut self, connections: &str) -> Result<Self, EnigmaError> {
        self.plugboard = Some(Plugboard::new(connections)?);
        Ok(self)
    }

    /// Sets the start positions as integers (`A = 0`).
    pub fn rotor_positions(mut self, positions: &[i32]) -> Self {
        self.positions = positions.to_vec();
        self
    }

    /// Sets the start positions from letters, e.g. `"AAA"`.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidPositionCharacter`] for a non-letter.
    pub fn rotor_positions_from_str(mut self, positions: &str) -> Result<Self, EnigmaError> {
        self.positions =
            alphabet::parse_letters(positions, EnigmaError::InvalidPositionCharacter)?;
        Ok(self)
    }

    /// Sets the ring settings as integers (`A = 0`).
    pub fn ring_settings(mut self, settings: &[i32]) -> Self {
        self.ring_settings = settings.to_vec();
        self
    }

    /// Sets the ring settings from letters, e.g. `"BUL"`.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidRingSettingCharacter`] for a non-letter.
    pub fn ring_settings_from_str(mut self, settings: &str) -> Result<Self, EnigmaError> {
        self.ring_settings =
            alphabet::parse_letters(settings, EnigmaError::InvalidRingSettingCharacter)?;
        Ok(self)
    }

    /// Assembles the machine.
    ///
    /// A missing plugboard means no cables. Empty positions or ring settings
    /// leave the rotors at `A`.
    ///
    /// # Errors
    /// - [`EnigmaError::MissingRotors`] if no rotor was given.
    /// - [`EnigmaError::TooManyRotors`] for more than [`MAX_ROTORS`].
    /// - [`EnigmaError::MissingReflector`] if no reflector was given.
    /// - [`EnigmaError::RingSettingCountMismatch`] /
    ///   [`EnigmaError::PositionCountMismatch`] when a non-empty list does
    ///   not match the rotor count.
    pub fn build(self) -> Result<Machine, EnigmaError> {
        if self.rotors.is_empty() {
            return Err(EnigmaError::MissingRotors);
        }
        if self.rotors.len() > MAX_ROTORS {
            return Err(EnigmaError::TooManyRotors {
                max: MAX_ROTORS,
                actual: self.rotors.len(),
            });
        }
        let reflector = self.reflector.ok_or(EnigmaError::MissingReflector)?;

        let mut machine = Machine::new(self.rotors, reflector, self.plugboard);
        if !self.ring_settings.is_empty() {
            machine.set_ring_settings(&self.ring_settings)?;
        }
        if !self.positions.is_empty() {
            machine.set_rotor_positions(&self.positions)?;
        }

        debug!(
            rotors = ?machine.rotors().iter().map(Rotor::name).collect::<Vec<_>>(),
            reflector = machine.reflector().name(),
            plugboard = %machine.plugboard().connections(),
            positions = %machine.position_letters(),
            "assembled machine"
        );
        Ok(machine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_end_to_end() {
        let mut machine = EnigmaBuilder::new()
            .rotors(&["I", "II", "III"])
            .unwrap()
            .reflector("UKW-B")
            .unwrap()
            .plugboard("AB CD EF")
            .unwrap()
            .rotor_positions_from_str("AAA")
            .unwrap()
            .ring_settings_from_str("AAA")
            .unwrap()
            .build()
            .unwrap();
        let encrypted = machine.encrypt("HELLO").unwrap();

        let mut machine2 = EnigmaBuilder::new()
            .rotors(&["I", "II", "III"])
            .unwrap()
            .reflector("UKW-B")
            .unwrap()
            .plugboard("AB CD EF")
            .unwrap()
            .rotor_positions_from_str("AAA")
            .unwrap()
            .ring_settings_from_str("AAA")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(machine2.decrypt(&encrypted).unwrap(), "HELLO");
    }

    #[test]
    fn test_unknown_rotor() {
        let err = EnigmaBuilder::new().rotors(&["I", "IX"]).unwrap_err();
        assert_eq!(err, EnigmaError::UnknownRotorType("IX".to_string()));
    }

    #[test]
    fn test_unknown_reflector() {
        let err = EnigmaBuilder::new().reflector("UKW-D").unwrap_err();
        assert_eq!(err, EnigmaError::UnknownReflectorType("UKW-D".to_string()));
    }

    #[test]
    fn test_bad_plugboard() {
        let err = EnigmaBuilder::new().plugboard("AB AC").unwrap_err();
        assert!(matches!(err, EnigmaError::InvalidPlugboardPair(_)));
    }

    #[test]
    fn test_missing_rotors() {
        let err = EnigmaBuilder::new()
            .reflector("UKW-B")
            .unwrap()
            .build()
            .unwrap_err();
        assert_eq!(err, EnigmaError::MissingRotors);
    }

    #[test]
    fn test_too_many_rotors() {
        let err = EnigmaBuilder::new()
            .rotors(&["I", "II", "III", "IV", "V"])
            .unwrap()
            .reflector("UKW-B")
            .unwrap()
            .build()
            .unwrap_err();
        assert_eq!(err, EnigmaError::TooManyRotors { max: 4, actual: 5 });
    }

    #[test]
    fn test_missing_reflector() {
        let err = EnigmaBuilder::new()
            .rotors(&["I", "II", "III"])
            .unwrap()
            .build()
            .unwrap_err();
        assert_eq!(err, EnigmaError::MissingReflector);
    }

    #[test]
    fn test_invalid_position_string() {
        let err = EnigmaBuilder::new()
            .rotor_positions_from_str("A1A")
            .unwrap_err();
        assert_eq!(err, EnigmaError::InvalidPositionCharacter('1'));
    }

    #[test]
    fn test_invalid_ring_string() {
        let err = EnigmaBuilder::new()
            .ring_settings_from_str("A A")
            .unwrap_err();
        assert_eq!(err, EnigmaError::InvalidRingSettingCharacter(' '));
    }

    #[test]
    fn test_lowercase_position_string() {
        let machine = EnigmaBuilder::new()
            .rotors(&["I", "II", "III"])
            .unwrap()
            .reflector("UKW-B")
            .unwrap()
            .rotor_positions_from_str("xyz")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(machine.rotor_positions(), vec![23, 24, 25]);
    }

    #[test]
    fn test_ring_setting_count_mismatch() {
        let err = EnigmaBuilder::new()
            .rotors(&["I", "II", "III"])
            .unwrap()
            .reflector("UKW-B")
            .unwrap()
            .ring_settings(&[1, 2])
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            EnigmaError::RingSettingCountMismatch {
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn test_position_count_mismatch() {
        let err = EnigmaBuilder::new()
            .rotors(&["I", "II", "III"])
            .unwrap()
            .reflector("UKW-B")
            .unwrap()
            .rotor_positions_from_str("AAAA")
            .unwrap()
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            EnigmaError::PositionCountMismatch {
                expected: 3,
                actual: 4
            }
        );
    }

    #[test]
    fn test_custom_components() {
        let rotor = Rotor::new("ID", "ABCDEFGHIJKLMNOPQRSTUVWXYZ", "").unwrap();
        let reflector = Reflector::new("R", "BADCFEHGJILKNMPORQTSVUXWZY").unwrap();
        let mut machine = EnigmaBuilder::new()
            .custom_rotors(vec![rotor])
            .custom_reflector(reflector)
            .build()
            .unwrap();
        // Identity rotor at every position leaves only the reflector pairing
        assert_eq!(machine.encrypt("AB").unwrap(), "BA");
    }

    #[test]
    fn test_integer_settings() {
        let machine = EnigmaBuilder::new()
            .rotors(&["III", "II", "I"])
            .unwrap()
            .reflector("UKW-B")
            .unwrap()
            .rotor_positions(&[-1, 27, 2])
            .ring_settings(&[1, 2, 3])
            .build()
            .unwrap();
        assert_eq!(machine.rotor_positions(), vec![25, 1, 2]);
        assert_eq!(machine.ring_settings(), vec![1, 2, 3]);
    }

    #[test]
    fn test_later_rotors_call_replaces_earlier() {
        let machine = EnigmaBuilder::new()
            .rotors(&["I", "II", "III"])
            .unwrap()
            .rotors(&["IV"])
            .unwrap()
            .reflector("UKW-C")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(machine.rotors().len(), 1);
        assert_eq!(machine.rotors()[0].name(), "IV");
    }
}
