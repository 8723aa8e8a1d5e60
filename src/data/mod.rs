//! ## Data import and manipulation functions.
//!
//! FASTA/plain-text reading plus convenience traits for handling [`Result`]
//! in binaries. IO failures use [`std::io::Error`] with the offending file
//! path folded into the message; validation failures use the enum error
//! types of the [`search`](crate::search) module.

/// A module with error types and convenience traits for handling [`Result`].
pub mod err;
/// FASTA/plain-text sequence reading.
pub mod fasta;
