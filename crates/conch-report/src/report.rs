use crate::error::{ReportError, Result};
use crate::stats;
use conch_client::ConchApi;
use conch_types::{ComponentFailReport, FailurePair, HardwareProduct, RawMboReport};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use uuid::Uuid;

/// Classification key for unresolvable vendors, datacenters, and component
/// types, and the normalization target for "Undetermined".
pub const UNKNOWN: &str = "UNKNOWN";

/// Failures remediated faster than this are assumed to be transient
/// validation flaps, not real remediation work.
pub const DEFAULT_REMEDIATION_MIN_SECONDS: i64 = 90;

/// Policy parameters for one aggregation run.
#[derive(Debug, Clone)]
pub struct ProcessOptions {
    /// Full/partial datacenter UUID or exact name; `None` keeps everything.
    pub datacenter: Option<String>,
    /// Inclusive lower bound on remediation time, in whole seconds.
    pub remediation_min_seconds: i64,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            datacenter: None,
            remediation_min_seconds: DEFAULT_REMEDIATION_MIN_SECONDS,
        }
    }
}

/// What happened during a `process()` run. Skips are best-effort losses,
/// never errors; this is the only place they are reported.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct ProcessStats {
    pub devices_seen: usize,
    pub devices_skipped: usize,
    pub observations: usize,
}

/// Accumulator for one classification key (a component type, a
/// type+subtype, or a vendor+type).
///
/// Created lazily on first observation, mutated during the aggregation
/// pass, finalized exactly once by `calc()`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TypeReport {
    /// Raw remediation samples in nanoseconds, kept only for statistics.
    pub all: Vec<i64>,
    pub count: i64,
    /// Set by `calc()`, nanoseconds.
    pub mean: i64,
    /// Set by `calc()`, nanoseconds.
    pub median: i64,
    pub devices: Vec<TypeReportDevice>,
}

impl TypeReport {
    fn record(&mut self, obs: &Observation<'_>) {
        self.all.push(obs.remediation_ns);
        self.count += 1;
        self.devices.push(TypeReportDevice {
            device_id: obs.device_id.to_string(),
            failure_type: obs.failure_type.clone(),
            component_name: obs.component_name.clone(),
            remediation_ns: obs.remediation_ns,
            first_fail: obs.pair.first_fail.clone(),
            first_pass: obs.pair.first_pass.clone(),
        });
    }

    fn calc(&mut self) {
        self.mean = stats::mean(&self.all);
        self.median = stats::median(&self.all);
    }
}

/// Denormalized per-failure record for detail display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeReportDevice {
    pub device_id: String,
    pub failure_type: String,
    pub component_name: String,
    pub remediation_ns: i64,
    pub first_fail: ComponentFailReport,
    pub first_pass: ComponentFailReport,
}

/// All aggregates for one datacenter. Built once per run, never mutated
/// after `process()` returns.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatacenterReport {
    pub name: String,
    pub id: Uuid,
    /// component type -> accumulator
    pub times_by_type: BTreeMap<String, TypeReport>,
    /// component type -> component name -> accumulator
    pub times_by_subtype: BTreeMap<String, BTreeMap<String, TypeReport>>,
    /// vendor -> component type -> accumulator
    pub times_by_vendor_and_type: BTreeMap<String, BTreeMap<String, TypeReport>>,
}

impl DatacenterReport {
    fn new(name: String, id: Uuid) -> Self {
        Self {
            name,
            id,
            ..Default::default()
        }
    }

    /// One qualifying observation lands in all three aggregate dimensions.
    fn record(&mut self, vendor: &str, obs: &Observation<'_>) {
        self.times_by_type
            .entry(obs.failure_type.clone())
            .or_default()
            .record(obs);

        self.times_by_vendor_and_type
            .entry(vendor.to_string())
            .or_default()
            .entry(obs.failure_type.clone())
            .or_default()
            .record(obs);

        self.times_by_subtype
            .entry(obs.failure_type.clone())
            .or_default()
            .entry(obs.component_name.clone())
            .or_default()
            .record(obs);
    }

    fn calc(&mut self) {
        for report in self.times_by_type.values_mut() {
            report.calc();
        }
        for subtypes in self.times_by_subtype.values_mut() {
            for report in subtypes.values_mut() {
                report.calc();
            }
        }
        for types in self.times_by_vendor_and_type.values_mut() {
            for report in types.values_mut() {
                report.calc();
            }
        }
    }
}

/// The overall report container: raw input plus processed aggregates.
///
/// `been_processed` guards the presenters; it flips to true only after every
/// reachable accumulator has been finalized.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MantaReport {
    pub raw: RawMboReport,
    pub processed: BTreeMap<String, DatacenterReport>,
    pub been_processed: bool,
}

/// A single qualifying failure observation, shared by the triple fan-out.
struct Observation<'a> {
    device_id: &'a str,
    failure_type: String,
    component_name: String,
    remediation_ns: i64,
    pair: &'a FailurePair,
}

impl MantaReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_raw(raw: RawMboReport) -> Self {
        Self {
            raw,
            ..Default::default()
        }
    }

    /// Aggregate `raw` into per-datacenter reports.
    ///
    /// The hardware product catalog is fetched once up front and a failure
    /// there aborts the run. Each device then costs one lookup; devices that
    /// fail to resolve are skipped with a warning. Devices whose hardware
    /// product reference is the nil UUID are incomplete records and are
    /// skipped the same way.
    pub fn process(&mut self, api: &dyn ConchApi, options: &ProcessOptions) -> Result<ProcessStats> {
        let catalog = api.get_hardware_products().map_err(ReportError::Catalog)?;
        let products: HashMap<Uuid, HardwareProduct> =
            catalog.into_iter().map(|p| (p.id, p)).collect();

        self.processed.clear();
        self.been_processed = false;
        let mut run = ProcessStats::default();

        for (serial, failures) in &self.raw {
            run.devices_seen += 1;

            let device = match api.get_device(serial) {
                Ok(device) => device,
                Err(e) => {
                    tracing::warn!(serial = %serial, error = %e, "skipping unresolvable device");
                    run.devices_skipped += 1;
                    continue;
                }
            };

            if device.hardware_product.is_nil() {
                tracing::warn!(serial = %serial, "skipping device with no hardware product");
                run.devices_skipped += 1;
                continue;
            }

            let (dc_name, dc_id) = device
                .location
                .as_ref()
                .and_then(|loc| loc.datacenter.as_ref())
                .map(|dc| (dc.name.clone(), dc.id))
                .unwrap_or_else(|| (UNKNOWN.to_string(), Uuid::nil()));

            if let Some(filter) = options.datacenter.as_deref() {
                if !datacenter_matches(filter, dc_id, &dc_name) {
                    continue;
                }
            }

            let vendor = products
                .get(&device.hardware_product)
                .map(|p| p.vendor.as_str())
                .filter(|v| !v.is_empty())
                .unwrap_or(UNKNOWN)
                .to_string();

            // The datacenter entry exists as soon as a device resolves to
            // it, even if every failure below falls under the threshold.
            let dc_report = self
                .processed
                .entry(dc_name.clone())
                .or_insert_with(|| DatacenterReport::new(dc_name.clone(), dc_id));

            for pair in failures.values() {
                if pair.first_fail.created_is_zero() || pair.first_pass.created_is_zero() {
                    continue;
                }
                let (Some(first_fail), Some(first_pass)) =
                    (pair.first_fail.created, pair.first_pass.created)
                else {
                    continue;
                };
                let remediation = first_pass - first_fail;
                if remediation.num_seconds() < options.remediation_min_seconds {
                    continue;
                }

                let obs = Observation {
                    device_id: serial,
                    failure_type: normalize_key(&pair.first_fail.result.component_type),
                    component_name: normalize_component_name(
                        &pair.first_fail.result.component_name,
                    ),
                    remediation_ns: remediation.num_nanoseconds().unwrap_or(i64::MAX),
                    pair,
                };
                dc_report.record(&vendor, &obs);
                run.observations += 1;
            }
        }

        for dc_report in self.processed.values_mut() {
            dc_report.calc();
        }
        self.been_processed = true;

        tracing::info!(
            devices = run.devices_seen,
            skipped = run.devices_skipped,
            observations = run.observations,
            "aggregation complete"
        );
        Ok(run)
    }
}

/// Exact ID, exact name, or short-UUID match (the filter is a prefix of the
/// ID's first hyphen-separated segment).
fn datacenter_matches(filter: &str, id: Uuid, name: &str) -> bool {
    let id_str = id.to_string();
    if id_str == filter || name == filter {
        return true;
    }
    id_str
        .split('-')
        .next()
        .is_some_and(|segment| segment.starts_with(filter))
}

fn normalize_key(value: &str) -> String {
    if value.is_empty() || value == "Undetermined" {
        UNKNOWN.to_string()
    } else {
        value.to_string()
    }
}

/// Component names get the same normalization as types, plus the vendor
/// naming quirk: every `*_peer` port check is really the switch peer link.
fn normalize_component_name(value: &str) -> String {
    if value.ends_with("_peer") {
        return "switch_peer".to_string();
    }
    normalize_key(value)
}
