//! GateCode Core
//!
//! Core types and pure logic for the GateCode submission client.
//!
//! This crate contains:
//! - Domain types: languages, outcomes, run/judge results, submission records
//! - DTOs: wire payloads exchanged with the judge service
//! - Interpretation: status canonicalization, result ingestion and output diffing
//! - Statistics: the injectable percentile provider

pub mod domain;
pub mod dto;
pub mod interpret;
pub mod stats;
