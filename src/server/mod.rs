//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the pickup point
//! service: API endpoints, the reception and product lifecycle engines, data access
//! and infrastructure. The backend uses Axum as the web framework and SeaORM for
//! database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Operation deadlines and lifecycle logging
//! - **Data Layer** (`data/`) - Transactions, row locking and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and listing parameters
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session role storage and permission guards
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB pool, operation deadline)
//! - **Startup** (`startup`) - Initialization of the database and sessions
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Middleware** loads the session and checks the caller's permissions
//! 3. **Controller** validates the request and calls the service
//! 4. **Service** bounds the operation by its deadline
//! 5. **Data** runs the operation in one serializable transaction
//! 6. **Controller** converts the domain model to a DTO and responds

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
