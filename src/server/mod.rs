//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework, SeaORM for database
//! operations, and Serenity for the Discord notification sink.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of
//! concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic: derived statistics, comparison, absence workflow, notifications
//! - **Data Layer** (`data/`) - Database operations through per-entity repositories
//! - **Model Layer** (`model/`) - Operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session wrapper and the authorization guard
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, HTTP clients, etc.)
//! - **Startup** (`startup`) - Initialization of database, sessions, and clients
//! - **Router** (`router`) - Route configuration and OpenAPI documentation
//! - **Scheduler** (`scheduler/`) - Optional cron job for schedule reminders
//!
//! # Request Flow
//!
//! 1. **Router** routes the request to a controller
//! 2. **AuthGuard** resolves the session user and checks the access tier
//! 3. **Controller** validates input and calls a service or repository
//! 4. **Service** applies business rules and derives statistics
//! 5. **Data** runs the queries and returns entity models
//! 6. **Controller** converts to DTOs and builds the response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
