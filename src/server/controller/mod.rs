//! HTTP request handlers.
//!
//! Each handler checks the session through `AuthGuard` where required, converts the
//! request DTO into validated params, calls a service, and converts the result back
//! into a response DTO.

pub mod auth;
pub mod completion;
pub mod dashboard;
pub mod export;
pub mod family;
pub mod member;
