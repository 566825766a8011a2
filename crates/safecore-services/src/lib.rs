//! # safecore-services
//!
//! Reference stub implementations of the SafeCore component traits:
//!
//! - `InMemoryVault`     — `IdentityVault` over a Mutex-guarded map
//! - `StubDataLayer`     — `SecureStore` with a reversible blob frame
//! - `RequestLogicLayer` — `AccessGate` with boundary + inactivity checks
//!
//! Each type simulates a cross-process trust boundary entirely in-process.
//! They are interchangeable behind the traits in `safecore-core`: a real
//! vault, an encrypting data layer, or a session service can be dropped in
//! without touching the orchestrator.

pub mod data_layer;
pub mod logic_layer;
pub mod vault;

pub use data_layer::StubDataLayer;
pub use logic_layer::{RequestLogicLayer, DEFAULT_MAX_IDLE_SECS};
pub use vault::InMemoryVault;
