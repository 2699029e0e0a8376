use anyhow::{Context, Result};
use colored::Colorize;

use super::CommandContext;
use crate::graphql::run_server;

pub fn handle_serve(
    mut ctx: CommandContext,
    host: Option<String>,
    port: Option<u16>,
    no_seed: bool,
) -> Result<()> {
    if let Some(host) = host {
        ctx.config.server.host = host;
    }
    if let Some(port) = port {
        ctx.config.server.port = port;
    }
    if no_seed {
        ctx.config.store.seed = false;
    }

    let addr = ctx.config.server.bind_address();
    let schema = ctx.schema();

    println!("{} http://{}/graphql", "GraphQL endpoint:".green(), addr);
    println!("{} http://{}/", "GraphiQL:".green(), addr);

    tokio::runtime::Runtime::new()?
        .block_on(async { run_server(schema, &addr).await })
        .with_context(|| format!("GraphQL server on {} failed", addr))?;
    Ok(())
}
