//! HTTP server module for the dashboard backend.
//!
//! This module provides an axum-based HTTP server that exposes the dashboard
//! derivations as a REST API. The browser frontend calls these endpoints
//! whenever the site dropdown or the payload slider changes.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                              │
//! │  - Query parsing and range validation                    │
//! │  - JSON serialization                                    │
//! │  - CORS, compression, error handling                     │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Service Layer (services/)                               │
//! │  - Site catalog, outcome aggregation, payload filter     │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  DashboardContext (immutable, shared via Arc)            │
//! │  - LaunchDataset loaded once at startup                  │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
