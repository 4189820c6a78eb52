//! In-memory stand-ins for the Conch API, used across the workspace's tests.

use chrono::{DateTime, Utc};
use conch_client::{ClientError, ConchApi};
use conch_types::{
    ComponentFailReport, Datacenter, Device, DeviceLocation, FailurePair, HardwareProduct,
    ValidationResult,
};
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

/// A `ConchApi` implementation backed by in-memory maps.
///
/// Unknown serials answer with `NotFound`, matching what the real API does
/// for decommissioned devices; `fail_catalog` simulates the fatal
/// catalog-fetch error path.
#[derive(Default)]
pub struct FakeConch {
    products: Vec<HardwareProduct>,
    devices: HashMap<String, Device>,
    broken_serials: HashSet<String>,
    fail_catalog: bool,
}

impl FakeConch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_product(mut self, product: HardwareProduct) -> Self {
        self.products.push(product);
        self
    }

    pub fn with_device(mut self, serial: &str, device: Device) -> Self {
        self.devices.insert(serial.to_string(), device);
        self
    }

    /// Make `get_device` fail for this serial even if a record exists.
    pub fn with_broken_serial(mut self, serial: &str) -> Self {
        self.broken_serials.insert(serial.to_string());
        self
    }

    /// Make `get_hardware_products` fail, aborting any aggregation run.
    pub fn with_broken_catalog(mut self) -> Self {
        self.fail_catalog = true;
        self
    }
}

impl ConchApi for FakeConch {
    fn get_hardware_products(&self) -> Result<Vec<HardwareProduct>, ClientError> {
        if self.fail_catalog {
            return Err(ClientError::UnexpectedStatus {
                status: 500,
                url: "fake:///hardware_product".to_string(),
            });
        }
        Ok(self.products.clone())
    }

    fn get_device(&self, serial: &str) -> Result<Device, ClientError> {
        if self.broken_serials.contains(serial) {
            return Err(ClientError::UnexpectedStatus {
                status: 500,
                url: format!("fake:///device/{}", serial),
            });
        }
        self.devices
            .get(serial)
            .cloned()
            .ok_or_else(|| ClientError::NotFound {
                url: format!("fake:///device/{}", serial),
            })
    }
}

/// Parse an RFC 3339 timestamp; panics on bad input (test fixtures only).
pub fn ts(value: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value)
        .unwrap_or_else(|e| panic!("bad fixture timestamp '{}': {}", value, e))
        .with_timezone(&Utc)
}

/// A device resolving to the given product and (optionally) a datacenter.
pub fn device(serial: &str, product: Uuid, datacenter: Option<(Uuid, &str)>) -> Device {
    Device {
        id: serial.to_string(),
        hardware_product: product,
        location: datacenter.map(|(id, name)| DeviceLocation {
            datacenter: Some(Datacenter {
                id,
                name: name.to_string(),
            }),
        }),
    }
}

pub fn product(id: Uuid, name: &str, vendor: &str) -> HardwareProduct {
    HardwareProduct {
        id,
        name: name.to_string(),
        alias: name.to_string(),
        vendor: vendor.to_string(),
    }
}

/// A fail/pass pair carrying the validation result on the failing side,
/// the shape the bulk export actually has.
pub fn failure_pair(
    component_type: &str,
    component_name: &str,
    first_fail: Option<&str>,
    first_pass: Option<&str>,
) -> FailurePair {
    FailurePair {
        first_fail: ComponentFailReport {
            device_id: String::new(),
            created: first_fail.map(ts),
            result: ValidationResult {
                component_type: component_type.to_string(),
                component_name: component_name.to_string(),
                log: String::new(),
            },
        },
        first_pass: ComponentFailReport {
            device_id: String::new(),
            created: first_pass.map(ts),
            result: ValidationResult::default(),
        },
    }
}
