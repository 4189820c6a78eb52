mod error;
mod rest;

use conch_types::{Device, HardwareProduct};

pub use error::{ClientError, Result};
pub use rest::{fetch_body, RestClient};

/// The collaborator surface the report aggregator depends on.
///
/// Kept as a trait so the aggregation pass can be driven by a fake in tests;
/// `RestClient` is the production implementation.
pub trait ConchApi {
    /// Full hardware product catalog, fetched once per aggregation run.
    fn get_hardware_products(&self) -> Result<Vec<HardwareProduct>>;

    /// Full device record including resolved location.
    fn get_device(&self, serial: &str) -> Result<Device>;
}
