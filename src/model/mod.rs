//! Data models for garage.
//!
//! - [`Person`]: someone who may own cars
//! - [`Car`]: a car pointing at its owner through `person_id`
//! - [`PersonWithCars`]: derived pairing returned by relational lookups

mod car;
mod person;
mod person_with_cars;

pub use car::Car;
pub use person::Person;
pub use person_with_cars::PersonWithCars;
