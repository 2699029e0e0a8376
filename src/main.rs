use anyhow::{Context, Result};
use clap::Parser;

use garage::cli::handlers::{
    CommandContext, handle_mutate, handle_query, handle_schema, handle_seed, handle_serve,
};
use garage::cli::{Cli, Commands};
use garage::config::GarageConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();
    garage::logging::init(cli.verbose, cli.log_file.clone());

    let ctx = CommandContext::new(load_config(&cli)?);

    match cli.command {
        Commands::Serve {
            host,
            port,
            no_seed,
        } => handle_serve(ctx, host, port, no_seed),
        Commands::Query { query, variables } => handle_query(ctx, query, variables),
        Commands::Mutate {
            mutation,
            variables,
        } => handle_mutate(ctx, mutation, variables),
        Commands::Schema => handle_schema(ctx),
        Commands::Seed { json } => handle_seed(json),
    }
}

fn load_config(cli: &Cli) -> Result<GarageConfig> {
    let cwd = std::env::current_dir()?;
    GarageConfig::load(cli.config.as_deref(), &cwd).context("Failed to load garage configuration")
}
