//! Read-only renderings of a processed [`MantaReport`](crate::MantaReport).
//! No presenter mutates aggregate state.

pub mod csv;
pub mod text;

use crate::error::Result;
use crate::report::MantaReport;

impl MantaReport {
    /// Indented plain-text rendering; empty until `process()` has run.
    pub fn as_text(&self, full_output: bool, include_vendors: bool, include_components: bool) -> String {
        text::render(self, full_output, include_vendors, include_components)
    }

    /// Two concatenated CSV tables; empty until `process()` has run.
    pub fn as_csv(&self) -> Result<String> {
        csv::render(self)
    }
}
