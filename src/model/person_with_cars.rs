use serde::Serialize;

use super::{Car, Person};

/// A person lookup paired with every car that names the same id as owner.
///
/// The two halves are resolved independently: a missing person still comes
/// back with whatever cars reference the id, and vice versa.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonWithCars {
    pub person: Option<Person>,
    pub cars: Vec<Car>,
}
