use crate::context::ExecutionContext;
use anyhow::{Context, Result};
use conch_client::ConchApi;

pub fn get(ctx: &ExecutionContext, serial: &str) -> Result<()> {
    let device = ctx
        .client()?
        .get_device(serial)
        .with_context(|| format!("failed to look up device {}", serial))?;

    println!("{}", serde_json::to_string_pretty(&device)?);
    Ok(())
}
