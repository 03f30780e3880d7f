//! Enigma rotor cipher machine.
//!
//! A faithful model of the Enigma I, M3 and M4: a stack of stepping rotors,
//! a reflector and a plugboard composed into a reciprocal cipher. The same
//! machine state that turns plaintext into ciphertext turns it back.
//!
//! # Architecture
//!
//! ```text
//! Plugboard  (letter-pair swaps, applied on entry and exit)
//!     ↕
//! Rotor × N  (substitution wheels, rightmost first; step before each letter)
//!     ↕
//! Reflector  (fixed involution, sends the signal back through the rotors)
//!
//! Machine    (orchestrator: stepping pawls + signal path)
//! ```
//!
//! The historical wirings live in [`historical`]; machines are usually put
//! together with [`EnigmaBuilder`] or from a [`MachineConfig`].
//!
//! # Examples
//!
//! Encrypt and decrypt with the classic I-II-III / UKW-B setup:
//!
//! ```
//! use enigma::EnigmaBuilder;
//!
//! let mut machine = EnigmaBuilder::new()
//!     .rotors(&["III", "II", "I"]).unwrap()
//!     .reflector("UKW-B").unwrap()
//!     .rotor_positions_from_str("AAA").unwrap()
//!     .build()
//!     .unwrap();
//!
//! let ciphertext = machine.encrypt("HELLO WORLD").unwrap();
//! assert_eq!(ciphertext, "ILBDA AMTAZ");
//!
//! machine.reset();
//! assert_eq!(machine.decrypt(&ciphertext).unwrap(), "HELLO WORLD");
//! ```
//!
//! A four-rotor naval machine with plugboard and ring settings:
//!
//! ```
//! use enigma::EnigmaBuilder;
//!
//! let mut machine = EnigmaBuilder::new()
//!     .rotors(&["VIII", "VI", "II", "Beta"]).unwrap()
//!     .reflector("UKW-B-thin").unwrap()
//!     .plugboard("AT BL DF GJ HM NW OP QY RZ VX").unwrap()
//!     .ring_settings_from_str("AAEA").unwrap()
//!     .rotor_positions_from_str("VAJN").unwrap()
//!     .build()
//!     .unwrap();
//!
//! let ciphertext = machine.encrypt("WETTERVORHERSAGE").unwrap();
//! machine.reset();
//! assert_eq!(machine.decrypt(&ciphertext).unwrap(), "WETTERVORHERSAGE");
//! ```

#![deny(clippy::all)]

pub mod error;
pub mod historical;

mod builder;
mod config;
mod machine;
mod plugboard;
mod reflector;
mod rotor;
pub mod utils;

pub use builder::{EnigmaBuilder, MAX_ROTORS};
pub use config::MachineConfig;
pub use error::EnigmaError;
pub use machine::Machine;
pub use plugboard::Plugboard;
pub use reflector::Reflector;
pub use rotor::Rotor;
