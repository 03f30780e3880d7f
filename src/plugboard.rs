//! Plugboard (Steckerbrett): letter-pair swaps around the rotor stack.

use crate::error::EnigmaError;
use crate::utils::alphabet::{index_letter, letter_index, ALPHABET_SIZE};

/// A set of cable connections, each swapping two letters.
///
/// The mapping is its own inverse, so the same table serves the signal on
/// the way in and on the way out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugboard {
    wiring: [usize; ALPHABET_SIZE],
    pairs: Vec<(usize, usize)>,
}

impl Default for Plugboard {
    fn default() -> Self {
        Self::identity()
    }
}

impl Plugboard {
    /// Creates a plugboard with no cables.
    pub fn identity() -> Self {
        let mut wiring = [0usize; ALPHABET_SIZE];
        for (i, item) in wiring.iter_mut().enumerate() {
            *item = i;
        }
        Plugboard {
            wiring,
            pairs: Vec::new(),
        }
    }

    /// Parses whitespace-separated letter pairs such as `"AB CD EF"`.
    ///
    /// Letters are case-insensitive. An empty or blank string yields the
    /// identity plugboard.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidPlugboardPair`] if a pair is not two
    /// characters long, contains a non-letter, or uses a letter that is
    /// already connected.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::Plugboard;
    ///
    /// let plugboard = Plugboard::new("AB cd").unwrap();
    /// assert_eq!(plugboard.forward(0), 1);
    /// assert_eq!(plugboard.forward(3), 2);
    /// assert!(Plugboard::new("AB AC").is_err());
    /// ```
    pub fn new(connections: &str) -> Result<Self, EnigmaError> {
        let mut plugboard = Self::identity();
        let mut used = [false; ALPHABET_SIZE];

        for pair in connections.split_whitespace() {
            let letters: Vec<char> = pair.chars().collect();
            if letters.len() != 2 {
                return Err(EnigmaError::InvalidPlugboardPair(pair.to_string()));
            }

            let (a, b) = match (letter_index(letters[0]), letter_index(letters[1])) {
                (Some(a), Some(b)) => (a, b),
                _ => return Err(EnigmaError::InvalidPlugboardPair(pair.to_string())),
            };

            if a == b || used[a] || used[b] {
                return Err(EnigmaError::InvalidPlugboardPair(pair.to_string()));
            }

            plugboard.wiring[a] = b;
            plugboard.wiring[b] = a;
            plugboard.pairs.push((a, b));
            used[a] = true;
            used[b] = true;
        }

        Ok(plugboard)
    }

    /// Passes a signal through the plugboard (either direction).
    pub fn forward(&self, input: usize) -> usize {
        self.wiring[input]
    }

    /// Returns the connected pairs in the order they were given.
    pub fn pairs(&self) -> &[(usize, usize)] {
        &self.pairs
    }

    /// Formats the connections back into `"AB CD"` notation.
    pub fn connections(&self) -> String {
        self.pairs
            .iter()
            .map(|&(a, b)| format!("{}{}", index_letter(a), index_letter(b)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
