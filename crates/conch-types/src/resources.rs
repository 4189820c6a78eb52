use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A device record as returned by `GET /device/{serial}`.
///
/// Only the fields the reporting path reads are modeled; the API returns
/// considerably more and unknown fields are ignored on decode.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Device {
    #[serde(default)]
    pub id: String,
    /// Nil when the device record is incomplete; such devices are skipped.
    #[serde(default)]
    pub hardware_product: Uuid,
    #[serde(default)]
    pub location: Option<DeviceLocation>,
}

/// Resolved rack/datacenter placement for a device.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeviceLocation {
    #[serde(default)]
    pub datacenter: Option<Datacenter>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Datacenter {
    #[serde(default)]
    pub id: Uuid,
    #[serde(default)]
    pub name: String,
}

/// One entry of the hardware product catalog (`GET /hardware_product`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HardwareProduct {
    #[serde(default)]
    pub id: Uuid,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub alias: String,
    #[serde(default)]
    pub vendor: String,
}
