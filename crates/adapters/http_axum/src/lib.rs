//! # foxhen-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **JSON API** under a versioned prefix (`/api/v1` by default):
//!   `GET /health`, `GET /targets`, `GET /targets/{id}`
//! - Intercept every request with a **CORS stage** that stamps permissive
//!   headers on the response and answers `OPTIONS` pre-flights with `204`
//!   before route dispatch
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP responses
//!
//! ## Dependency rule
//! Depends on `foxhen-app` (for port traits and services) and `foxhen-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod config;
pub mod cors;
pub mod error;
pub mod router;
pub mod state;
