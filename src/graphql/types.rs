use crate::model::{self, Car as ModelCar, Person as ModelPerson};
use async_graphql::SimpleObject;

/// A person who may own cars
#[derive(SimpleObject, Clone)]
pub struct Person {
    pub id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl From<ModelPerson> for Person {
    fn from(p: ModelPerson) -> Self {
        Self {
            id: p.id,
            first_name: Some(p.first_name),
            last_name: Some(p.last_name),
        }
    }
}

/// A car, linked to its owner by `personId`
#[derive(SimpleObject, Clone)]
pub struct Car {
    pub id: String,
    pub year: Option<i32>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub price: Option<f64>,
    pub person_id: Option<String>,
}

impl From<ModelCar> for Car {
    fn from(c: ModelCar) -> Self {
        Self {
            id: c.id,
            year: Some(c.year),
            make: Some(c.make),
            model: Some(c.model),
            price: Some(c.price),
            person_id: Some(c.person_id),
        }
    }
}

/// A person lookup together with the cars that reference the same id
#[derive(SimpleObject)]
pub struct PersonWithCars {
    pub person: Option<Person>,
    pub cars: Option<Vec<Option<Car>>>,
}

impl From<model::PersonWithCars> for PersonWithCars {
    fn from(p: model::PersonWithCars) -> Self {
        Self {
            person: p.person.map(Into::into),
            cars: nullable_list(p.cars),
        }
    }
}

/// Shape a collection as a nullable list of nullable items (`[T]` in SDL).
pub(crate) fn nullable_list<M, T: From<M>>(items: Vec<M>) -> Option<Vec<Option<T>>> {
    Some(items.into_iter().map(|m| Some(m.into())).collect())
}
