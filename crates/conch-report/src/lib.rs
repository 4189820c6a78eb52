// NOTE: MBO Report Pipeline
//
// Data flows strictly one way: loader -> aggregator -> presenters.
//
// - The loader fills `MantaReport::raw` from a file or URL and resets any
//   previously processed state, so stale aggregates never leak across loads.
// - `process()` owns and mutates every aggregate during its single pass;
//   afterwards the structure is read-only. Presenters (and the HTTP listener
//   in conch-server) never write back.
// - Per-device lookups are best-effort: a device that fails to resolve is
//   skipped (warned and counted), it never fails the run. Only the upfront
//   catalog fetch is fatal.

mod error;
pub mod hms;
pub mod labels;
mod loader;
pub mod presenters;
mod report;
pub mod stats;

pub use error::{ReportError, Result};
pub use report::{
    DatacenterReport, MantaReport, ProcessOptions, ProcessStats, TypeReport, TypeReportDevice,
    DEFAULT_REMEDIATION_MIN_SECONDS, UNKNOWN,
};
