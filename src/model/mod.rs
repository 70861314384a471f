//! Request and response DTOs shared by the HTTP API.
//!
//! Field names follow the census forms (Indonesian) so that the JSON payloads match the
//! form field names used by the data-entry client.

pub mod api;
pub mod auth;
pub mod completion;
pub mod dashboard;
pub mod export;
pub mod family;
pub mod member;
