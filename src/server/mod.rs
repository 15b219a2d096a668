//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework and SeaORM over SQLite for persistence.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic, transactions, and the Gas Safe client
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models, parameter types, and pure business rules
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Authentication guard and typed session access
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, HTTP clients, register client)
//! - **Startup** (`startup`) - Initialization of database, sessions, HTTP and OAuth clients
//! - **Router** (`router`) - Axum route table and OpenAPI documentation
//! - **Scheduler** (`scheduler/`) - Daily document expiry and cache cleanup
//!
//! # Request Flow
//!
//! 1. **Router** routes the request to a controller
//! 2. **Controller** checks access with `AuthGuard`, then validates input
//! 3. **Service** executes business logic and orchestrates repositories
//! 4. **Data** queries the database and converts entities to domain models
//! 5. **Controller** converts the domain model to a DTO inside the response envelope

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
