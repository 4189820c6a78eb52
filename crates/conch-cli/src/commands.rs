use super::args::{Cli, Commands, DeviceCommand, HardwareCommand, MboCommand, ReportCommand};
use super::handlers;
use crate::context::ExecutionContext;
use anyhow::Result;
use tracing_subscriber::EnvFilter;

pub fn run(cli: Cli) -> Result<()> {
    init_logging(&cli);

    let ctx = ExecutionContext::new(cli.api, cli.token)?;

    match cli.command {
        Commands::Report { command } => match command {
            ReportCommand::Mbo { command } => match command {
                MboCommand::Show {
                    file,
                    url,
                    datacenter,
                    remediation_min,
                    full,
                    include_vendors,
                    include_components,
                } => handlers::mbo::show(
                    &ctx,
                    file,
                    url,
                    datacenter,
                    remediation_min,
                    full,
                    include_vendors,
                    include_components,
                ),
                MboCommand::Csv {
                    file,
                    url,
                    datacenter,
                    remediation_min,
                } => handlers::mbo::csv(&ctx, file, url, datacenter, remediation_min),
                MboCommand::Serve {
                    file,
                    url,
                    datacenter,
                    remediation_min,
                    listen,
                } => handlers::mbo::serve(&ctx, file, url, datacenter, remediation_min, &listen),
            },
        },

        Commands::Device { command } => match command {
            DeviceCommand::Get { serial } => handlers::device::get(&ctx, &serial),
        },

        Commands::Hardware { command } => match command {
            HardwareCommand::Products => handlers::hardware::products(&ctx),
        },
    }
}

// RUST_LOG wins over --log-level when set; logs go to stderr so report
// output stays pipeable.
fn init_logging(cli: &Cli) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level.to_string()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}
