//! # foxhen-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `TargetRepository` — read access to the target registry
//! - Define **driving/inbound ports** as use-case structs:
//!   - `TargetService` — list and get targets
//! - Orchestrate domain objects without knowing *how* the registry is stored
//!
//! ## Dependency rule
//! Depends on `foxhen-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
