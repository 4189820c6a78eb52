//! Static presentation tables: which component types skip the subtype
//! breakdown, and how internal field-style component keys are displayed.
//! Kept as data so they can be tested and extended without touching the
//! presenter control flow.

/// Component types whose subtype breakdown is never shown.
///
/// These disks/CPUs report a grab-bag of per-slot keys that add noise
/// without adding signal.
pub const EXCLUDED_SUBTYPE_BREAKDOWNS: &[&str] = &["SAS_SSD", "SATA_SSD", "SAS_HDD", "CPU"];

/// Generic component-key labels, applied regardless of component type.
static DISPLAY_NAMES: &[(&str, &str)] = &[
    ("bios_firmware_version", "BIOS Firmware Revision"),
    ("cpu_num", "CPU Count"),
    ("dimm_count", "DIMM Count"),
    ("links_up", "Active Network Links"),
    ("memory_total", "Total Memory"),
    ("nics_num", "Network Interface Count"),
    ("num_peer_switch_ports", "Peer Switch Port Count"),
    ("sas_hdd_num", "SAS HDD Count"),
    ("sas_ssd_num", "SAS SSD Count"),
    ("sata_hdd_num", "SATA HDD Count"),
    ("sata_ssd_num", "SATA SSD Count"),
    ("switch_peer", "Switch Peer Link"),
    ("usb_hdd_num", "USB HDD Count"),
];

/// Labels that only apply under a specific component type. A `product_name`
/// mismatch under BIOS means the firmware was programmed for the wrong
/// product, not that the product is misnamed.
static CATEGORY_DISPLAY_NAMES: &[(&str, &str, &str)] =
    &[("BIOS", "product_name", "Firmware Programming Issue")];

pub fn subtype_breakdown_excluded(component_type: &str) -> bool {
    EXCLUDED_SUBTYPE_BREAKDOWNS.contains(&component_type)
}

/// Human label for a component key, category-specific overrides first.
/// Unmapped keys fall back to the raw string.
pub fn display_name<'a>(component_type: &str, component_name: &'a str) -> &'a str {
    for (category, name, label) in CATEGORY_DISPLAY_NAMES {
        if *category == component_type && *name == component_name {
            return label;
        }
    }
    for (name, label) in DISPLAY_NAMES {
        if *name == component_name {
            return label;
        }
    }
    component_name
}
