use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// NOTE: Wire Shape
//
// The bulk remediation export is keyed twice: device serial, then a free-form
// component key chosen by whoever produced the dump. Only the fail/pass pair
// underneath is structured. Every field is defaulted so a sparse record still
// decodes; qualification (zero timestamps, thresholds) happens in the
// aggregator, not here.

/// The raw remediation export: serial -> component key -> fail/pass pair.
pub type RawMboReport = BTreeMap<String, BTreeMap<String, FailurePair>>;

/// The first failing and first passing validation report for one component.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FailurePair {
    #[serde(default)]
    pub first_fail: ComponentFailReport,
    #[serde(default)]
    pub first_pass: ComponentFailReport,
}

/// A single validation report observed for a device component.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComponentFailReport {
    #[serde(default)]
    pub device_id: String,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    #[serde(default, rename = "validation_result")]
    pub result: ValidationResult,
}

impl ComponentFailReport {
    /// True when no usable timestamp is present: absent, the Unix epoch, or
    /// a serialized zero time (year 1). Records with a zero timestamp on
    /// either side of the pair cannot yield a duration and are excluded.
    pub fn created_is_zero(&self) -> bool {
        match self.created {
            None => true,
            Some(ts) => ts.timestamp() == 0 || ts.year() <= 1,
        }
    }
}

/// Nested validation payload carried by each fail/pass report.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    #[serde(default)]
    pub component_type: String,
    #[serde(default)]
    pub component_name: String,
    #[serde(default)]
    pub log: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn missing_created_is_zero() {
        let report = ComponentFailReport::default();
        assert!(report.created_is_zero());
    }

    #[test]
    fn epoch_created_is_zero() {
        let report = ComponentFailReport {
            created: Some(Utc.timestamp_opt(0, 0).unwrap()),
            ..Default::default()
        };
        assert!(report.created_is_zero());
    }

    #[test]
    fn go_zero_time_is_zero() {
        let report: ComponentFailReport =
            serde_json::from_str(r#"{"created": "0001-01-01T00:00:00Z"}"#).unwrap();
        assert!(report.created_is_zero());
    }

    #[test]
    fn real_timestamp_is_not_zero() {
        let report: ComponentFailReport =
            serde_json::from_str(r#"{"created": "2020-01-01T00:00:00Z"}"#).unwrap();
        assert!(!report.created_is_zero());
    }

    #[test]
    fn sparse_pair_decodes_with_defaults() {
        let json = r#"{
            "first_fail": {
                "created": "2020-01-01T00:00:00Z",
                "validation_result": {"component_type": "BIOS", "component_name": "product_name"}
            },
            "first_pass": {"created": "2020-01-01T02:00:00Z"}
        }"#;
        let pair: FailurePair = serde_json::from_str(json).unwrap();
        assert_eq!(pair.first_fail.result.component_type, "BIOS");
        assert_eq!(pair.first_pass.result.component_type, "");
        assert!(!pair.first_pass.created_is_zero());
    }

    #[test]
    fn raw_report_decodes_nested_maps() {
        let json = r#"{
            "srv001": {
                "bios": {
                    "first_fail": {"created": "2020-01-01T00:00:00Z"},
                    "first_pass": {"created": "2020-01-01T02:00:00Z"}
                }
            }
        }"#;
        let raw: RawMboReport = serde_json::from_str(json).unwrap();
        assert_eq!(raw.len(), 1);
        assert!(raw["srv001"].contains_key("bios"));
    }
}
