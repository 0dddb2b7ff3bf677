//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! This crate defines traits that abstract external concerns:
//!
//! - [`stream`]: Resolving an input path to a readable byte stream
//! - [`records`]: Parsing a byte stream into customer rows
//!
//! These ports allow the domain and application layers to remain
//! independent of specific implementations.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod records;
pub mod stream;

pub use records::RecordSource;
pub use stream::{ByteStream, StreamOpener};
