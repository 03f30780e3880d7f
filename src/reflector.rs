//! Reflector (Umkehrwalze): the fixed wheel that sends the signal back.

use crate::error::EnigmaError;
use crate::historical;
use crate::utils::alphabet::{self, ALPHABET_SIZE};

/// A static reflector wiring.
///
/// Historical reflectors are involutions without fixed points, which is
/// why no letter can ever encrypt to itself. Construction only checks that
/// the wiring is a permutation; see [`is_involution`](Self::is_involution).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reflector {
    name: String,
    wiring: [usize; ALPHABET_SIZE],
}

impl Reflector {
    /// Creates a reflector from a 26-letter wiring string.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidWiring`] if `wiring` is not a permutation
    /// of `A-Z`.
    pub fn new(name: &str, wiring: &str) -> Result<Self, EnigmaError> {
        let wiring = alphabet::parse_permutation(wiring)?;
        Ok(Reflector {
            name: name.to_string(),
            wiring,
        })
    }

    /// Creates one of the named historical reflectors, e.g. `"UKW-B"`.
    ///
    /// # Errors
    /// Returns [`EnigmaError::UnknownReflectorType`] for a name not in the registry.
    pub fn historical(name: &str) -> Result<Self, EnigmaError> {
        let spec = historical::reflector_spec(name)?;
        Self::new(spec.name, spec.wiring)
    }

    /// Returns the reflector identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Passes a signal through the reflector.
    pub fn reflect(&self, input: usize) -> usize {
        self.wiring[input]
    }

    /// Returns `true` if every contact is paired with a distinct partner.
    pub fn is_involution(&self) -> bool {
        (0..ALPHABET_SIZE).all(|x| self.wiring[self.wiring[x]] == x && self.wiring[x] != x)
    }
}
