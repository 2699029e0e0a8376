use anyhow::Result;

use super::{CommandContext, execute};

pub fn handle_mutate(
    ctx: CommandContext,
    mutation: String,
    variables: Option<String>,
) -> Result<()> {
    let query = format!("mutation {{ {} }}", mutation);
    execute(&ctx, &query, variables)
}
