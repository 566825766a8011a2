//! # safecore-core
//!
//! The deterministic orchestration runtime for the SafeCore simulation.
//!
//! This crate provides:
//! - The four component traits (`IdentityVault`, `SecureStore`, `AccessGate`,
//!   `AuditSink`)
//! - The `SimulationOrchestrator` that wires them together in the fixed
//!   pipeline order
//!
//! ## Usage
//!
//! ```rust,ignore
//! use safecore_core::{SimulationOrchestrator, traits::{IdentityVault, SecureStore}};
//! ```

pub mod orchestrator;
pub mod traits;

pub use orchestrator::SimulationOrchestrator;
