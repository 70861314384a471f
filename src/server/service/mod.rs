//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer and
//! are responsible for:
//!
//! - **Business Logic**: Workflow rules such as the member limit and next-step routing
//! - **Orchestration**: Coordinating repository calls for a single request
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Error Mapping**: Turning repository outcomes into client-facing errors

pub mod auth;
pub mod completion;
pub mod dashboard;
pub mod export;
pub mod family;
pub mod member;
