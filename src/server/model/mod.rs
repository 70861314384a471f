//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types are produced from
//! request DTOs and carry input that has already passed presence and bounds checks.

pub mod auth;
pub mod completion;
pub mod dashboard;
pub mod export;
pub mod family;
pub mod member;
