//! GraphQL schema and resolvers for garage.
//!
//! Exposes the people and cars collections over GraphQL, with full CRUD
//! mutations and a relational `personWithCars` lookup.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server
//! garage serve --port 4000
//!
//! # Execute a query from CLI
//! garage query '{ personWithCars(id: "2") { person { firstName } cars { make model } } }'
//!
//! # Execute a mutation from CLI
//! garage mutate 'createPerson(id: "4", firstName: "Ada", lastName: "Lovelace") { id }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `person`, `people`, `car`, `cars`, `personWithCars`
//! - **Mutations**: `createPerson`, `updatePerson`, `deletePerson`,
//!   `createCar`, `updateCar`, `deleteCar`

mod schema;
mod server;
mod types;

pub use schema::{GarageSchema, MutationRoot, QueryRoot, build_schema};
pub use server::{router, run_server};
pub use types::*;
