use async_graphql::{Context, EmptySubscription, Object, Schema};

use crate::error::{self, GarageError};
use crate::model::{Car as ModelCar, Person as ModelPerson};
use crate::store::{self, SharedStore};

use super::types::*;

pub type GarageSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(store: SharedStore) -> GarageSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

fn get_store<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a SharedStore> {
    ctx.data::<SharedStore>()
}

/// A missing record nulls the field and records the error against it,
/// leaving sibling fields in the same operation intact. Any other failure
/// still fails the field.
fn null_on_not_found<M, T: From<M>>(
    ctx: &Context<'_>,
    result: error::Result<M>,
) -> async_graphql::Result<Option<T>> {
    match result {
        Ok(record) => Ok(Some(record.into())),
        Err(e @ GarageError::NotFound { .. }) => {
            ctx.add_error(async_graphql::Error::from(e).into_server_error(ctx.item.pos));
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

pub struct QueryRoot;

#[Object(name = "Query")]
impl QueryRoot {
    /// Get a single person by ID
    async fn person(
        &self,
        ctx: &Context<'_>,
        id: String,
    ) -> async_graphql::Result<Option<Person>> {
        tracing::debug!(id = %id, "Query person");
        let store = store::read(get_store(ctx)?)?;
        Ok(store.person(&id).cloned().map(Into::into))
    }

    /// List every person in insertion order
    async fn people(
        &self,
        ctx: &Context<'_>,
    ) -> async_graphql::Result<Option<Vec<Option<Person>>>> {
        let store = store::read(get_store(ctx)?)?;
        Ok(nullable_list(store.people().to_vec()))
    }

    /// Get a single car by ID
    async fn car(&self, ctx: &Context<'_>, id: String) -> async_graphql::Result<Option<Car>> {
        tracing::debug!(id = %id, "Query car");
        let store = store::read(get_store(ctx)?)?;
        Ok(store.car(&id).cloned().map(Into::into))
    }

    /// List every car in insertion order
    async fn cars(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Vec<Option<Car>>>> {
        let store = store::read(get_store(ctx)?)?;
        Ok(nullable_list(store.cars().to_vec()))
    }

    /// Get a person together with the cars that reference them
    async fn person_with_cars(
        &self,
        ctx: &Context<'_>,
        id: String,
    ) -> async_graphql::Result<Option<PersonWithCars>> {
        tracing::debug!(id = %id, "Query personWithCars");
        let store = store::read(get_store(ctx)?)?;
        Ok(Some(store.person_with_cars(&id).into()))
    }
}

pub struct MutationRoot;

#[Object(name = "Mutation")]
impl MutationRoot {
    /// Create a new person
    async fn create_person(
        &self,
        ctx: &Context<'_>,
        id: String,
        first_name: String,
        last_name: String,
    ) -> async_graphql::Result<Option<Person>> {
        let mut store = store::write(get_store(ctx)?)?;
        let person = store.create_person(ModelPerson::new(id, first_name, last_name));
        Ok(Some(person.into()))
    }

    /// Overwrite the names of an existing person
    async fn update_person(
        &self,
        ctx: &Context<'_>,
        id: String,
        first_name: String,
        last_name: String,
    ) -> async_graphql::Result<Option<Person>> {
        let mut store = store::write(get_store(ctx)?)?;
        let result = store.update_person(ModelPerson::new(id, first_name, last_name));
        null_on_not_found(ctx, result)
    }

    /// Delete a person and every car they own
    async fn delete_person(
        &self,
        ctx: &Context<'_>,
        id: String,
    ) -> async_graphql::Result<Option<Person>> {
        let mut store = store::write(get_store(ctx)?)?;
        let result = store.delete_person(&id);
        null_on_not_found(ctx, result)
    }

    /// Create a new car
    #[allow(clippy::too_many_arguments)]
    async fn create_car(
        &self,
        ctx: &Context<'_>,
        id: String,
        year: i32,
        make: String,
        model: String,
        price: f64,
        person_id: String,
    ) -> async_graphql::Result<Option<Car>> {
        let mut store = store::write(get_store(ctx)?)?;
        let car = store.create_car(ModelCar::new(id, year, make, model, price, person_id));
        Ok(Some(car.into()))
    }

    /// Overwrite every field of an existing car
    #[allow(clippy::too_many_arguments)]
    async fn update_car(
        &self,
        ctx: &Context<'_>,
        id: String,
        year: i32,
        make: String,
        model: String,
        price: f64,
        person_id: String,
    ) -> async_graphql::Result<Option<Car>> {
        let mut store = store::write(get_store(ctx)?)?;
        let result = store.update_car(ModelCar::new(id, year, make, model, price, person_id));
        null_on_not_found(ctx, result)
    }

    /// Delete a car
    async fn delete_car(
        &self,
        ctx: &Context<'_>,
        id: String,
    ) -> async_graphql::Result<Option<Car>> {
        let mut store = store::write(get_store(ctx)?)?;
        let result = store.delete_car(&id);
        null_on_not_found(ctx, result)
    }
}
