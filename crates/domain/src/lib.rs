//! # foxhen-domain
//!
//! Pure domain model for the foxhen target registry.
//!
//! ## Responsibilities
//! - Foundational types: the [`TargetId`](id::TargetId) identifier and error conventions
//! - Define **Targets** (the trackable units the platform reports on)
//! - Define the **health status** value returned by the probe endpoint
//! - Contain all invariant enforcement (non-empty ids, names, states)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod health;
pub mod target;
