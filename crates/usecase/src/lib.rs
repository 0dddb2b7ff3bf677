//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! This crate wires the record source, the domain aggregator and the
//! domain sorter into a single pipeline:
//!
//! - [`orchestrator`]: The `CountDomains` use case
//! - [`dto`]: Data transfer objects for use case boundaries
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;

pub use dto::DomainReport;
pub use orchestrator::CountDomains;
