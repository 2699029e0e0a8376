use super::seed::{seed_cars, seed_people};
use crate::{
    error::{GarageError, Result},
    model::{Car, Person, PersonWithCars},
};

/// Owns the people and cars collections.
#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    people: Vec<Person>,
    cars: Vec<Car>,
}

impl EntityStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the startup people and cars.
    pub fn seeded() -> Self {
        Self::with_records(seed_people(), seed_cars())
    }

    pub fn with_records(people: Vec<Person>, cars: Vec<Car>) -> Self {
        Self { people, cars }
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    /// First person with `id`, in insertion order.
    pub fn person(&self, id: &str) -> Option<&Person> {
        self.people.iter().find(|p| p.id == id)
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// First car with `id`, in insertion order.
    pub fn car(&self, id: &str) -> Option<&Car> {
        self.cars.iter().find(|c| c.id == id)
    }

    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    /// Cars whose owner reference equals `person_id`, whether or not such a
    /// person exists.
    pub fn cars_owned_by<'a>(&'a self, person_id: &'a str) -> impl Iterator<Item = &'a Car> {
        self.cars.iter().filter(move |c| c.is_owned_by(person_id))
    }

    pub fn person_with_cars(&self, id: &str) -> PersonWithCars {
        PersonWithCars {
            person: self.person(id).cloned(),
            cars: self.cars_owned_by(id).cloned().collect(),
        }
    }

    // -------------------------------------------------------------------------
    // People mutations
    // -------------------------------------------------------------------------

    /// Appends `person`. Duplicate ids are accepted.
    pub fn create_person(&mut self, person: Person) -> Person {
        tracing::info!(id = %person.id, "Creating person");
        self.people.push(person.clone());
        person
    }

    /// Overwrites the names of the first person with `person.id`.
    pub fn update_person(&mut self, person: Person) -> Result<Person> {
        tracing::info!(id = %person.id, "Updating person");

        let existing = self
            .people
            .iter_mut()
            .find(|p| p.id == person.id)
            .ok_or_else(|| GarageError::person_not_found(&person.id))?;
        existing.first_name = person.first_name;
        existing.last_name = person.last_name;
        Ok(existing.clone())
    }

    /// Removes every person with `id` and every car owned by `id`.
    ///
    /// Returns the first matching person as it was before removal.
    pub fn delete_person(&mut self, id: &str) -> Result<Person> {
        tracing::info!(id = %id, "Deleting person");

        let removed = self
            .person(id)
            .cloned()
            .ok_or_else(|| GarageError::person_not_found(id))?;

        // Unlike the lookup above, this drops all matches.
        self.people.retain(|p| p.id != id);

        let before = self.cars.len();
        self.cars.retain(|c| !c.is_owned_by(id));
        tracing::debug!(id = %id, cars = before - self.cars.len(), "Cascaded car removal");

        Ok(removed)
    }

    // -------------------------------------------------------------------------
    // Car mutations
    // -------------------------------------------------------------------------

    /// Appends `car`. Neither the id nor the owner reference is checked.
    pub fn create_car(&mut self, car: Car) -> Car {
        tracing::info!(id = %car.id, person_id = %car.person_id, "Creating car");
        self.cars.push(car.clone());
        car
    }

    /// Overwrites every non-id field of the first car with `car.id`.
    pub fn update_car(&mut self, car: Car) -> Result<Car> {
        tracing::info!(id = %car.id, "Updating car");

        let existing = self
            .cars
            .iter_mut()
            .find(|c| c.id == car.id)
            .ok_or_else(|| GarageError::car_not_found(&car.id))?;
        existing.year = car.year;
        existing.make = car.make;
        existing.model = car.model;
        existing.price = car.price;
        existing.person_id = car.person_id;
        Ok(existing.clone())
    }

    /// Removes every car with `id`, returning the first as it was.
    pub fn delete_car(&mut self, id: &str) -> Result<Car> {
        tracing::info!(id = %id, "Deleting car");

        let removed = self
            .car(id)
            .cloned()
            .ok_or_else(|| GarageError::car_not_found(id))?;
        self.cars.retain(|c| c.id != id);
        Ok(removed)
    }
}
