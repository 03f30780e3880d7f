//! Shared helpers for mapping letters onto rotor contacts.

pub mod alphabet;
