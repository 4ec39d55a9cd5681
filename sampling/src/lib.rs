//! Deterministic randomness for the BFP workspace.
//!
//! [`source::Source`] wraps a seeded ChaCha8 stream so every test and bench is
//! reproducible from its seed. [`distributions`] turns that stream into mantissa
//! vectors with a controlled headroom, or noise-like signals.

pub mod distributions;
pub mod source;
