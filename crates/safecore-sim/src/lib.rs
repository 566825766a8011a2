//! # safecore-sim
//!
//! The "Patient Zero" reference simulation for the SafeCore runtime.
//!
//! This crate provides:
//! - `generator` — synthetic patient records with nested PII and medical
//!   fields (fictional data only)
//! - `runner` — wiring that assembles the reference stack and runs the
//!   orchestrator once
//! - `scenarios` — the narrated demo scenarios the CLI dispatches to

pub mod generator;
pub mod runner;
pub mod scenarios;

pub use generator::generate_record;
pub use runner::{execute_run, RunArtifacts, RunOptions};
