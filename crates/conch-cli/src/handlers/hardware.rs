use crate::context::ExecutionContext;
use anyhow::{Context, Result};
use conch_client::ConchApi;

pub fn products(ctx: &ExecutionContext) -> Result<()> {
    let mut products = ctx
        .client()?
        .get_hardware_products()
        .context("failed to list hardware products")?;
    products.sort_by(|a, b| a.name.cmp(&b.name));

    let name_width = products
        .iter()
        .map(|p| p.name.len())
        .max()
        .unwrap_or(0)
        .max("NAME".len());
    let vendor_width = products
        .iter()
        .map(|p| p.vendor.len())
        .max()
        .unwrap_or(0)
        .max("VENDOR".len());

    println!(
        "{:<name_width$}  {:<vendor_width$}  {}",
        "NAME", "VENDOR", "ALIAS"
    );
    for product in &products {
        println!(
            "{:<name_width$}  {:<vendor_width$}  {}",
            product.name, product.vendor, product.alias
        );
    }

    Ok(())
}
