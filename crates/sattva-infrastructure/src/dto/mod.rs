//! Versioned DTOs for every persisted entity.
//!
//! Domain models stay version-agnostic; each entity persists through a
//! versioned envelope carrying a `schema_version` field, upgraded by its
//! migration chain at load time.

pub mod mood;
pub mod quote;
pub mod session;
pub mod user;
