//! Machine: the Enigma encryption engine.
//!
//! Orchestrates the rotor stack, reflector and plugboard. For every letter
//! the rotors step first, then the signal runs plugboard → rotors (right to
//! left) → reflector → rotors (left to right) → plugboard.
//!
//! Because the reflector is an involution and every rotor pass is undone on
//! the way back, the whole transform is reciprocal: the same machine state
//! encrypts and decrypts.

use tracing::{debug, trace};

use crate::error::EnigmaError;
use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::rotor::Rotor;
use crate::utils::alphabet::{index_letter, letter_index};

/// Number of stepping pawls. Rotors beyond the third (the M4 Greek wheel)
/// are never moved.
const STEPPING_PAWLS: usize = 3;

/// An assembled Enigma machine.
///
/// # Architecture
///
/// Rotors are stored rightmost first: index 0 is the fast rotor next to the
/// entry wheel, the last index sits beside the reflector. Only rotor
/// positions change while encrypting; everything else is fixed once built.
///
/// The machine remembers the positions it was last set to (the message
/// key) so [`reset`](Self::reset) can rewind it for decryption.
#[derive(Debug, Clone)]
pub struct Machine {
    rotors: Vec<Rotor>,
    reflector: Reflector,
    plugboard: Plugboard,
    start_positions: Vec<usize>,
}

impl Machine {
    /// Creates a machine from its components.
    ///
    /// # Parameters
    /// - `rotors`: Rotor stack, rightmost first.
    /// - `reflector`: The reflector beside the leftmost rotor.
    /// - `plugboard`: Cable connections, or `None` for no cables.
    ///
    /// The current rotor positions become the start positions used by
    /// [`reset`](Self::reset).
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::{Machine, Reflector, Rotor};
    ///
    /// let rotors = vec![
    ///     Rotor::historical("III").unwrap(),
    ///     Rotor::historical("II").unwrap(),
    ///     Rotor::historical("I").unwrap(),
    /// ];
    /// let reflector = Reflector::historical("UKW-B").unwrap();
    /// let mut machine = Machine::new(rotors, reflector, None);
    ///
    /// assert_eq!(machine.encrypt("AAAAA").unwrap(), "BDZGO");
    /// ```
    pub fn new(rotors: Vec<Rotor>, reflector: Reflector, plugboard: Option<Plugboard>) -> Self {
        let start_positions = rotors.iter().map(Rotor::position).collect();
        Machine {
            rotors,
            reflector,
            plugboard: plugboard.unwrap_or_default(),
            start_positions,
        }
    }

    /// Returns the rotor stack, rightmost first.
    pub fn rotors(&self) -> &[Rotor] {
        &self.rotors
    }

    /// Returns the reflector.
    pub fn reflector(&self) -> &Reflector {
        &self.reflector
    }

    /// Returns the plugboard.
    pub fn plugboard(&self) -> &Plugboard {
        &self.plugboard
    }

    /// Encrypts a single letter, stepping the rotors first.
    ///
    /// Lowercase input is folded to uppercase.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidCharacter`] for anything outside `A-Z`.
    /// The rotors do not move in that case.
    pub fn encrypt_char(&mut self, c: char) -> Result<char, EnigmaError> {
        let input = letter_index(c).ok_or(EnigmaError::InvalidCharacter(c))?;

        self.step_rotors();

        let mut signal = self.plugboard.forward(input);
        for rotor in &self.rotors {
            signal = rotor.forward(signal);
        }
        signal = self.reflector.reflect(signal);
        for rotor in self.rotors.iter().rev() {
            signal = rotor.backward(signal);
        }
        signal = self.plugboard.forward(signal);

        Ok(index_letter(signal))
    }

    /// Encrypts a message.
    ///
    /// Spaces are kept and do not move the rotors. Lowercase letters are
    /// folded to uppercase. Every other character is dropped without moving
    /// the rotors.
    ///
    /// # Errors
    /// Propagates [`encrypt_char`](Self::encrypt_char) errors; input is
    /// filtered first, so this does not fail in practice.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::EnigmaBuilder;
    ///
    /// let mut machine = EnigmaBuilder::new()
    ///     .rotors(&["III", "II", "I"]).unwrap()
    ///     .reflector("UKW-B").unwrap()
    ///     .build()
    ///     .unwrap();
    ///
    /// let ciphertext = machine.encrypt("Hello, World!").unwrap();
    /// assert_eq!(ciphertext, "ILBDA AMTAZ");
    ///
    /// machine.reset();
    /// assert_eq!(machine.decrypt(&ciphertext).unwrap(), "HELLO WORLD");
    /// ```
    pub fn encrypt(&mut self, message: &str) -> Result<String, EnigmaError> {
        let mut result = String::with_capacity(message.len());
        for c in message.chars() {
            if c == ' ' {
                result.push(' ');
                continue;
            }
            if letter_index(c).is_none() {
                continue;
            }
            result.push(self.encrypt_char(c)?);
        }
        trace!(
            letters = result.len(),
            positions = %self.position_letters(),
            "processed message"
        );
        Ok(result)
    }

    /// Decrypts a message. Identical to [`encrypt`](Self::encrypt); the
    /// machine must start from the positions used for encryption.
    pub fn decrypt(&mut self, message: &str) -> Result<String, EnigmaError> {
        self.encrypt(message)
    }

    /// Sets every rotor position, rightmost first, and records them as the
    /// start positions for [`reset`](Self::reset).
    ///
    /// # Errors
    /// Returns [`EnigmaError::PositionCountMismatch`] if `positions.len()`
    /// differs from the number of rotors; no rotor is changed then.
    pub fn set_rotor_positions(&mut self, positions: &[i32]) -> Result<(), EnigmaError> {
        if positions.len() != self.rotors.len() {
            return Err(EnigmaError::PositionCountMismatch {
                expected: self.rotors.len(),
                actual: positions.len(),
            });
        }
        for (rotor, &pos) in self.rotors.iter_mut().zip(positions) {
            rotor.set_position(pos);
        }
        self.start_positions = self.rotor_positions();
        debug!(positions = %self.position_letters(), "rotor positions set");
        Ok(())
    }

    /// Returns a snapshot of the rotor positions, rightmost first.
    pub fn rotor_positions(&self) -> Vec<usize> {
        self.rotors.iter().map(Rotor::position).collect()
    }

    /// Returns the letters showing in the rotor windows, rightmost first.
    pub fn position_letters(&self) -> String {
        self.rotors.iter().map(|r| index_letter(r.position())).collect()
    }

    /// Sets every ring setting, rightmost first.
    ///
    /// # Errors
    /// Returns [`EnigmaError::RingSettingCountMismatch`] if `settings.len()`
    /// differs from the number of rotors; no rotor is changed then.
    pub fn set_ring_settings(&mut self, settings: &[i32]) -> Result<(), EnigmaError> {
        if settings.len() != self.rotors.len() {
            return Err(EnigmaError::RingSettingCountMismatch {
                expected: self.rotors.len(),
                actual: settings.len(),
            });
        }
        for (rotor, &setting) in self.rotors.iter_mut().zip(settings) {
            rotor.set_ring_setting(setting);
        }
        Ok(())
    }

    /// Returns the ring settings, rightmost first.
    pub fn ring_settings(&self) -> Vec<usize> {
        self.rotors.iter().map(Rotor::ring_setting).collect()
    }

    /// Rewinds the rotors to the start positions.
    ///
    /// After reset, encrypting the same plaintext produces the same
    /// ciphertext as the first time, and decrypting a ciphertext produced
    /// from the start positions recovers the plaintext.
    pub fn reset(&mut self) {
        for (rotor, &pos) in self.rotors.iter_mut().zip(&self.start_positions) {
            rotor.set_position(pos as i32);
        }
    }

    /// Advances the rotors for one keypress.
    ///
    /// Pawl 0 always moves the rightmost rotor. Pawl `k` engages when rotor
    /// `k - 1` sits on a notch and then pushes both rotor `k` and rotor
    /// `k - 1`; for the middle rotor this is the double step. All notch
    /// states are read before anything moves.
    fn step_rotors(&mut self) {
        let pawls = self.rotors.len().min(STEPPING_PAWLS);
        let mut advance = [false; STEPPING_PAWLS];
        if pawls > 0 {
            advance[0] = true;
        }
        for k in 1..pawls {
            if self.rotors[k - 1].at_notch() {
                advance[k] = true;
                advance[k - 1] = true;
                if k > 1 {
                    trace!(rotor = k - 1, "double step");
                }
            }
        }

        for (rotor, step) in self.rotors.iter_mut().zip(advance) {
            if step {
                rotor.step();
            }
        }
    }
}
