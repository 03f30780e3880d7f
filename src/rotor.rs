//! Rotor: rotating substitution wheel.
//!
//! Implements the atomic substitution unit of the Enigma. Each rotor holds
//! a forward wiring permutation, its precomputed inverse, a rotational
//! position, a ring setting and the set of turnover notches that drive the
//! rotor to its left.
//!
//! The position and ring setting shift the wiring relative to the fixed
//! contacts, so the same rotor yields a different permutation at every
//! position while `backward(forward(x)) == x` always holds.

use crate::error::EnigmaError;
use crate::historical;
use crate::utils::alphabet::{self, letter_index, ALPHABET_SIZE};

/// A single Enigma rotor (Walze).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    name: String,
    wiring: [usize; ALPHABET_SIZE],
    wiring_rev: [usize; ALPHABET_SIZE],
    position: usize,
    ring_setting: usize,
    notches: Vec<usize>,
}

impl Rotor {
    /// Creates a rotor from a 26-letter wiring string and its notch letters.
    ///
    /// Both strings are case-insensitive. Position and ring setting start at `A`.
    ///
    /// # Parameters
    /// - `name`: Rotor identifier, e.g. `"I"`.
    /// - `wiring`: Output letter for each input contact `A..Z`.
    /// - `notches`: Letters at which this rotor turns its left neighbour.
    ///   May be empty for non-stepping wheels.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidWiring`] if `wiring` is not a permutation
    /// of `A-Z`, or [`EnigmaError::InvalidNotch`] for a non-letter notch.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::Rotor;
    ///
    /// let rotor = Rotor::new("I", "EKMFLGDQVZNTOWYHXUSPAIBRCJ", "Q").unwrap();
    /// assert_eq!(rotor.forward(0), 4); // A -> E
    /// assert!(Rotor::new("bad", "ABC", "Q").is_err());
    /// ```
    pub fn new(name: &str, wiring: &str, notches: &str) -> Result<Self, EnigmaError> {
        let forward = alphabet::parse_permutation(wiring)?;

        let mut reverse = [0usize; ALPHABET_SIZE];
        for (input, &output) in forward.iter().enumerate() {
            reverse[output] = input;
        }

        let mut notch_positions = Vec::with_capacity(notches.len());
        for c in notches.chars() {
            let notch = letter_index(c).ok_or(EnigmaError::InvalidNotch(c))?;
            if !notch_positions.contains(&notch) {
                notch_positions.push(notch);
            }
        }

        Ok(Rotor {
            name: name.to_string(),
            wiring: forward,
            wiring_rev: reverse,
            position: 0,
            ring_setting: 0,
            notches: notch_positions,
        })
    }

    /// Creates one of the named historical rotors (`"I"`..`"VIII"`,
    /// `"Beta"`, `"Gamma"`).
    ///
    /// # Errors
    /// Returns [`EnigmaError::UnknownRotorType`] for a name not in the registry.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::Rotor;
    ///
    /// let rotor = Rotor::historical("VI").unwrap();
    /// assert_eq!(rotor.notches(), &[25, 12]);
    /// assert!(Rotor::historical("IX").is_err());
    /// ```
    pub fn historical(name: &str) -> Result<Self, EnigmaError> {
        let spec = historical::rotor_spec(name)?;
        Self::new(spec.name, spec.wiring, spec.notches)
    }

    /// Returns the rotor identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the turnover notch positions.
    pub fn notches(&self) -> &[usize] {
        &self.notches
    }

    /// Sets the rotor position (`A = 0`). Any integer is accepted and reduced
    /// modulo 26, negatives included.
    pub fn set_position(&mut self, pos: i32) {
        self.position = alphabet::normalize(pos);
    }

    /// Returns the current rotor position in `[0, 26)`.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Sets the ring setting (`A = 0`), reduced modulo 26.
    pub fn set_ring_setting(&mut self, setting: i32) {
        self.ring_setting = alphabet::normalize(setting);
    }

    /// Returns the current ring setting in `[0, 26)`.
    pub fn ring_setting(&self) -> usize {
        self.ring_setting
    }

    /// Returns `true` if the rotor sits on one of its turnover notches.
    pub fn at_notch(&self) -> bool {
        self.notches.contains(&self.position)
    }

    /// Advances the rotor by one position.
    pub fn step(&mut self) {
        self.position = (self.position + 1) % ALPHABET_SIZE;
    }

    /// Offset of the wiring core relative to the contacts.
    fn shift(&self) -> usize {
        (self.position + ALPHABET_SIZE - self.ring_setting) % ALPHABET_SIZE
    }

    /// Passes a signal through the rotor towards the reflector.
    ///
    /// # Parameters
    /// - `input`: Entry contact in `[0, 26)`.
    ///
    /// # Returns
    /// Exit contact in `[0, 26)`.
    pub fn forward(&self, input: usize) -> usize {
        let shift = self.shift();
        let output = self.wiring[(input + shift) % ALPHABET_SIZE];
        (output + ALPHABET_SIZE - shift) % ALPHABET_SIZE
    }

    /// Passes a signal through the rotor on its way back from the reflector.
    ///
    /// Inverse of [`forward`](Self::forward) for the current position and
    /// ring setting.
    pub fn backward(&self, input: usize) -> usize {
        let shift = self.shift();
        let output = self.wiring_rev[(input + shift) % ALPHABET_SIZE];
        (output + ALPHABET_SIZE - shift) % ALPHABET_SIZE
    }
}
