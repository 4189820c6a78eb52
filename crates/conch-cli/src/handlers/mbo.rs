use crate::context::ExecutionContext;
use anyhow::{bail, Result};
use conch_report::{MantaReport, ProcessOptions};

#[allow(clippy::too_many_arguments)]
pub fn show(
    ctx: &ExecutionContext,
    file: Option<String>,
    url: Option<String>,
    datacenter: Option<String>,
    remediation_min: i64,
    full: bool,
    include_vendors: bool,
    include_components: bool,
) -> Result<()> {
    let report = build_report(ctx, file, url, datacenter, remediation_min)?;
    print!("{}", report.as_text(full, include_vendors, include_components));
    Ok(())
}

pub fn csv(
    ctx: &ExecutionContext,
    file: Option<String>,
    url: Option<String>,
    datacenter: Option<String>,
    remediation_min: i64,
) -> Result<()> {
    let report = build_report(ctx, file, url, datacenter, remediation_min)?;
    print!("{}", report.as_csv()?);
    Ok(())
}

pub fn serve(
    ctx: &ExecutionContext,
    file: Option<String>,
    url: Option<String>,
    datacenter: Option<String>,
    remediation_min: i64,
    listen: &str,
) -> Result<()> {
    let report = build_report(ctx, file, url, datacenter, remediation_min)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(conch_server::run(report, listen))
}

fn build_report(
    ctx: &ExecutionContext,
    file: Option<String>,
    url: Option<String>,
    datacenter: Option<String>,
    remediation_min: i64,
) -> Result<MantaReport> {
    let mut report = MantaReport::new();
    match (file, url) {
        (Some(_), Some(_)) => bail!("--file and --url are mutually exclusive"),
        (Some(path), None) => report.load_file(&path)?,
        (None, Some(url)) => report.load_url(&url)?,
        (None, None) => bail!("one of --file or --url is required"),
    }

    let options = ProcessOptions {
        datacenter,
        remediation_min_seconds: remediation_min,
    };
    let stats = report.process(ctx.client()?, &options)?;

    if stats.devices_skipped > 0 {
        eprintln!(
            "Warning: skipped {} of {} devices (lookup failures or unassigned hardware)",
            stats.devices_skipped, stats.devices_seen
        );
    }

    Ok(report)
}
