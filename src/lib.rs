//! # Garage - an in-memory GraphQL API for people and their cars
//!
//! Garage keeps two ordered collections, people and cars, in memory and
//! serves them through a GraphQL schema with full CRUD mutations and a
//! relational `personWithCars` lookup.
//!
//! ## Features
//!
//! - **GraphQL API**: async-graphql schema served over HTTP with axum
//! - **Cascade delete**: deleting a person removes the cars that reference them
//! - **Seed data**: three people and nine cars loaded at startup
//!
//! ## Quick Start
//!
//! ```bash
//! # Serve on http://127.0.0.1:4000
//! garage serve
//!
//! # One-off query against a fresh store
//! garage query '{ people { id firstName lastName } }'
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Configuration loading
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP server
//! - [`model`]: Data models (Person, Car, PersonWithCars)
//! - [`store`]: The in-memory entity store

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading.
///
/// Handles `.garage.yml` files and upward discovery.
pub mod config;

/// Error types and result aliases.
///
/// Defines `GarageError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema, resolvers and HTTP server.
pub mod graphql;

/// Data models for people and cars.
pub mod model;

/// In-memory entity store.
///
/// Owns both collections and enforces the cascade on person deletion.
pub mod store;

pub mod logging;
