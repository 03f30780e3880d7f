//! Historical rotor and reflector wirings.
//!
//! Wirings of the Wehrmacht/Kriegsmarine Enigma I, M3 and M4 components.
//! The registry is compiled-in constant data and never changes at runtime;
//! lookups by name return an error for unknown components.

use crate::error::EnigmaError;

/// Wiring and notch data for a named rotor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotorSpec {
    /// Rotor identifier as stamped on the wheel.
    pub name: &'static str,
    /// Output letter for each input contact `A..Z`.
    pub wiring: &'static str,
    /// Turnover notch letters.
    pub notches: &'static str,
}

/// Wiring data for a named reflector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReflectorSpec {
    /// Reflector identifier.
    pub name: &'static str,
    /// Output letter for each input contact `A..Z`.
    pub wiring: &'static str,
}

/// Rotors I-V (Enigma I / M3), VI-VIII (Kriegsmarine) and the M4 Greek wheels.
pub const ROTORS: [RotorSpec; 10] = [
    RotorSpec {
        name: "I",
        wiring: "EKMFLGDQVZNTOWYHXUSPAIBRCJ",
        notches: "Q",
    },
    RotorSpec {
        name: "II",
        wiring: "AJDKSIRUXBLHWTMCQGZNPYFVOE",
        notches: "E",
    },
    RotorSpec {
        name: "III",
        wiring: "BDFHJLCPRTXVZNYEIWGAKMUSQO",
        notches: "V",
    },
    RotorSpec {
        name: "IV",
        wiring: "ESOVPZJAYQUIRHXLNFTGKDCMWB",
        notches: "J",
    },
    RotorSpec {
        name: "V",
        wiring: "VZBRGITYUPSDNHLXAWMJQOFECK",
        notches: "Z",
    },
    RotorSpec {
        name: "VI",
        wiring: "JPGVOUMFYQBENHZRDKASXLICTW",
        notches: "ZM",
    },
    RotorSpec {
        name: "VII",
        wiring: "NZJHGRCXMYSWBOUFAIVLPEKQDT",
        notches: "ZM",
    },
    RotorSpec {
        name: "VIII",
        wiring: "FKQHTLXOCBJSPDZRAMEWNIUYGV",
        notches: "ZM",
    },
    // Greek wheels sit beside the thin reflector and never turn.
    RotorSpec {
        name: "Beta",
        wiring: "LEYJVCNIXWPBQMDRTAKZGFUHOS",
        notches: "",
    },
    RotorSpec {
        name: "Gamma",
        wiring: "FSOKANUERHMBTIYCWLQPZXVGJD",
        notches: "",
    },
];

/// Wide reflectors A-C and the thin M4 reflectors.
pub const REFLECTORS: [ReflectorSpec; 5] = [
    ReflectorSpec {
        name: "UKW-A",
        wiring: "EJMZALYXVBWFCRQUONTSPIKHGD",
    },
    ReflectorSpec {
        name: "UKW-B",
        wiring: "YRUHQSLDPXNGOKMIEBFZCWVJAT",
    },
    ReflectorSpec {
        name: "UKW-C",
        wiring: "FVPJIAOYEDRZXWGCTKUQSBNMHL",
    },
    ReflectorSpec {
        name: "UKW-B-thin",
        wiring: "ENKQAUYWJICOPBLMDXZVFTHRGS",
    },
    ReflectorSpec {
        name: "UKW-C-thin",
        wiring: "RDOBJNTKVEHMLFCWZAXGYIPSUQ",
    },
];

/// Looks up a rotor by name.
///
/// # Errors
/// Returns [`EnigmaError::UnknownRotorType`] if no rotor has this name.
pub fn rotor_spec(name: &str) -> Result<&'static RotorSpec, EnigmaError> {
    ROTORS
        .iter()
        .find(|spec| spec.name == name)
        .ok_or_else(|| EnigmaError::UnknownRotorType(name.to_string()))
}

/// Looks up a reflector by name.
///
/// # Errors
/// Returns [`EnigmaError::UnknownReflectorType`] if no reflector has this name.
pub fn reflector_spec(name: &str) -> Result<&'static ReflectorSpec, EnigmaError> {
    REFLECTORS
        .iter()
        .find(|spec| spec.name == name)
        .ok_or_else(|| EnigmaError::UnknownReflectorType(name.to_string()))
}

/// Names of all registered rotors.
pub fn rotor_names() -> impl Iterator<Item = &'static str> {
    ROTORS.iter().map(|spec| spec.name)
}

/// Names of all registered reflectors.
pub fn reflector_names() -> impl Iterator<Item = &'static str> {
    REFLECTORS.iter().map(|spec| spec.name)
}
