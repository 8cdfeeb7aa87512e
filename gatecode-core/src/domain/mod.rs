//! Core domain types
//!
//! These types are produced by the interpreter from raw judge payloads and are
//! the only shapes the rest of the system sees. Raw status strings never
//! travel past ingestion.

pub mod language;
pub mod outcome;
pub mod result;
pub mod submission;
