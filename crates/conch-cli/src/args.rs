use crate::types::LogLevel;
use clap::{Parser, Subcommand};
use conch_report::DEFAULT_REMEDIATION_MIN_SECONDS;

#[derive(Parser)]
#[command(name = "conch")]
#[command(about = "Client for the Conch inventory API", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Conch API base URL")]
    pub api: Option<String>,

    #[arg(long, global = true, help = "Conch API bearer token")]
    pub token: Option<String>,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Report {
        #[command(subcommand)]
        command: ReportCommand,
    },

    Device {
        #[command(subcommand)]
        command: DeviceCommand,
    },

    Hardware {
        #[command(subcommand)]
        command: HardwareCommand,
    },
}

#[derive(Subcommand)]
pub enum ReportCommand {
    Mbo {
        #[command(subcommand)]
        command: MboCommand,
    },
}

#[derive(Subcommand)]
pub enum MboCommand {
    Show {
        #[arg(long, help = "Path to a raw MBO report export")]
        file: Option<String>,

        #[arg(long, help = "URL of a raw MBO report export")]
        url: Option<String>,

        #[arg(long, help = "Restrict to one datacenter (UUID, name, or short UUID)")]
        datacenter: Option<String>,

        #[arg(long, default_value_t = DEFAULT_REMEDIATION_MIN_SECONDS)]
        remediation_min: i64,

        #[arg(long, help = "Show vendor and per-component breakdowns")]
        full: bool,

        #[arg(long)]
        include_vendors: bool,

        #[arg(long)]
        include_components: bool,
    },

    Csv {
        #[arg(long, help = "Path to a raw MBO report export")]
        file: Option<String>,

        #[arg(long, help = "URL of a raw MBO report export")]
        url: Option<String>,

        #[arg(long, help = "Restrict to one datacenter (UUID, name, or short UUID)")]
        datacenter: Option<String>,

        #[arg(long, default_value_t = DEFAULT_REMEDIATION_MIN_SECONDS)]
        remediation_min: i64,
    },

    Serve {
        #[arg(long, help = "Path to a raw MBO report export")]
        file: Option<String>,

        #[arg(long, help = "URL of a raw MBO report export")]
        url: Option<String>,

        #[arg(long, help = "Restrict to one datacenter (UUID, name, or short UUID)")]
        datacenter: Option<String>,

        #[arg(long, default_value_t = DEFAULT_REMEDIATION_MIN_SECONDS)]
        remediation_min: i64,

        #[arg(long, default_value = "127.0.0.1:8080")]
        listen: String,
    },
}

#[derive(Subcommand)]
pub enum DeviceCommand {
    Get { serial: String },
}

#[derive(Subcommand)]
pub enum HardwareCommand {
    Products,
}
