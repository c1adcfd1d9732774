//! # API Shared
//!
//! Shared definitions for Verve front ends.
//!
//! Contains:
//! - Request/response wire types (`wire` module), serialisable and documented for OpenAPI
//! - Shared services like `HealthService`
//!
//! Used by `api-rest` and `verve-cli` so both surfaces emit the same JSON shapes.

pub mod health;
pub mod wire;

pub use health::HealthService;
pub use wire::*;
