//! Letter/contact conversion utilities.
//!
//! Every wiring table in the machine is a permutation over 26 contacts,
//! numbered `A = 0` through `Z = 25`. These helpers convert between the
//! two representations and keep contact arithmetic inside `[0, 26)`.

use crate::error::EnigmaError;

/// Number of contacts on every rotor, reflector and plugboard.
pub const ALPHABET_SIZE: usize = 26;

/// Converts an ASCII letter of either case to its contact index.
///
/// # Returns
/// `Some(0..=25)` for `A-Z` or `a-z`, `None` for anything else.
pub fn letter_index(letter: char) -> Option<usize> {
    let upper = letter.to_ascii_uppercase();
    if upper.is_ascii_uppercase() {
        Some((upper as u8 - b'A') as usize)
    } else {
        None
    }
}

/// Converts a contact index back to its uppercase letter.
///
/// Indices outside `[0, 26)` wrap around.
pub fn index_letter(index: usize) -> char {
    (b'A' + (index % ALPHABET_SIZE) as u8) as char
}

/// Reduces any integer to a contact index using Euclidean modulo,
/// so `-1` maps to `25`.
pub fn normalize(value: i32) -> usize {
    value.rem_euclid(ALPHABET_SIZE as i32) as usize
}

/// Parses a letter string such as `"AQV"` into contact indices.
///
/// Lowercase letters are accepted. The first non-letter is reported
/// through `on_invalid`, which picks the error kind for the caller.
///
/// # Errors
/// Returns the error built by `on_invalid` for the offending character.
pub fn parse_letters(
    input: &str,
    on_invalid: fn(char) -> EnigmaError,
) -> Result<Vec<i32>, EnigmaError> {
    input
        .chars()
        .map(|c| letter_index(c).map(|i| i as i32).ok_or_else(|| on_invalid(c)))
        .collect()
}

/// Builds a 26-entry table from a wiring string, rejecting strings that
/// are not a permutation of the alphabet.
///
/// # Errors
/// Returns [`EnigmaError::InvalidWiring`] for the wrong length, a
/// non-letter, or a letter that appears twice.
pub fn parse_permutation(wiring: &str) -> Result<[usize; ALPHABET_SIZE], EnigmaError> {
    let count = wiring.chars().count();
    if count != ALPHABET_SIZE {
        return Err(EnigmaError::InvalidWiring(format!(
            "expected {} letters, got {}",
            ALPHABET_SIZE, count
        )));
    }

    let mut table = [0usize; ALPHABET_SIZE];
    let mut seen = [false; ALPHABET_SIZE];
    for (i, c) in wiring.chars().enumerate() {
        let output = letter_index(c).ok_or_else(|| {
            EnigmaError::InvalidWiring(format!("invalid character in wiring: {:?}", c))
        })?;
        if seen[output] {
            return Err(EnigmaError::InvalidWiring(format!(
                "letter {} is wired more than once",
                index_letter(output)
            )));
        }
        seen[output] = true;
        table[i] = output;
    }
    Ok(table)
}
