mod mutate;
mod query;
mod schema;
mod seed;
mod serve;

pub use mutate::handle_mutate;
pub use query::handle_query;
pub use schema::handle_schema;
pub use seed::handle_seed;
pub use serve::handle_serve;

use anyhow::Context;

use crate::config::GarageConfig;
use crate::graphql::{GarageSchema, build_schema};
use crate::store::{self, EntityStore};

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: GarageConfig,
}

impl CommandContext {
    pub fn new(config: GarageConfig) -> Self {
        Self { config }
    }

    /// A fresh store, seeded unless the config turns it off.
    pub fn store(&self) -> EntityStore {
        if self.config.store.seed {
            EntityStore::seeded()
        } else {
            EntityStore::new()
        }
    }

    pub fn schema(&self) -> GarageSchema {
        build_schema(store::shared(self.store()))
    }
}

fn parse_variables(variables: Option<String>) -> anyhow::Result<async_graphql::Variables> {
    match variables {
        Some(v) => {
            let json: serde_json::Value =
                serde_json::from_str(&v).context("Variables must be a JSON object")?;
            Ok(async_graphql::Variables::from_json(json))
        }
        None => Ok(async_graphql::Variables::default()),
    }
}

fn execute(ctx: &CommandContext, query: &str, variables: Option<String>) -> anyhow::Result<()> {
    let schema = ctx.schema();
    let request = async_graphql::Request::new(query).variables(parse_variables(variables)?);
    let response = tokio::runtime::Runtime::new()?.block_on(schema.execute(request));

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
