//! Rental manager API service
//!
//! REST backend for running a boarding house. Every route except the
//! public ones requires the `x-api-key` header; most also require a bearer
//! token obtained from `PATCH /users`.

pub mod config;
pub mod error;
pub mod guard;
pub mod handlers;
pub mod jwt;
pub mod middleware;
pub mod models;
pub mod openapi;
pub mod password;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod validation;

pub use routes::create_router;
pub use state::AppState;
