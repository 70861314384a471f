//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the census service,
//! including API endpoints, business logic, data access, and infrastructure services.
//! The backend uses Axum as the web framework, SeaORM for database operations, and
//! tower-sessions for the administrator session.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, session checks, and DTO conversion
//! - **Service Layer** (`service/`) - Validation and workflow rules between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session wrappers and the authentication guard
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB pool, administrator credentials)
//! - **Startup** (`startup`) - Database connection, migrations, session key and tracing setup
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Middleware** loads the signed session cookie and guards protected endpoints
//! 3. **Controller** converts DTOs to params and calls a service
//! 4. **Service** validates input and orchestrates data operations
//! 5. **Data** queries the database and converts entities to domain models
//! 6. **Controller** converts domain models to DTOs and returns the HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;

#[cfg(test)]
mod test;
