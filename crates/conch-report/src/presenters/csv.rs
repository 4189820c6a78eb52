use crate::error::{ReportError, Result};
use crate::hms::format_hms;
use crate::labels;
use crate::report::MantaReport;

/// Two tables separated by a blank line: (datacenter, vendor, type) then
/// (datacenter, type, component). The second table applies the same
/// exclusion list and display names as the text presenter.
pub fn render(report: &MantaReport) -> Result<String> {
    if !report.been_processed {
        return Ok(String::new());
    }

    let mut by_vendor = csv::Writer::from_writer(vec![]);
    by_vendor
        .write_record(["Datacenter", "Vendor", "Type", "Failure Count", "Mean", "Median"])
        .map_err(|e| ReportError::Csv(e.to_string()))?;

    for (dc_name, dc) in &report.processed {
        for (vendor, types) in &dc.times_by_vendor_and_type {
            for (failure_type, times) in types {
                by_vendor
                    .write_record([
                        dc_name.as_str(),
                        vendor.as_str(),
                        failure_type.as_str(),
                        &times.count.to_string(),
                        &format_hms(times.mean),
                        &format_hms(times.median),
                    ])
                    .map_err(|e| ReportError::Csv(e.to_string()))?;
            }
        }
    }

    let mut by_component = csv::Writer::from_writer(vec![]);
    by_component
        .write_record(["Datacenter", "Type", "Component", "Failure Count", "Mean", "Median"])
        .map_err(|e| ReportError::Csv(e.to_string()))?;

    for (dc_name, dc) in &report.processed {
        for (failure_type, subtypes) in &dc.times_by_subtype {
            if labels::subtype_breakdown_excluded(failure_type) {
                continue;
            }
            for (component_name, times) in subtypes {
                by_component
                    .write_record([
                        dc_name.as_str(),
                        failure_type.as_str(),
                        labels::display_name(failure_type, component_name),
                        &times.count.to_string(),
                        &format_hms(times.mean),
                        &format_hms(times.median),
                    ])
                    .map_err(|e| ReportError::Csv(e.to_string()))?;
            }
        }
    }

    let first = into_string(by_vendor)?;
    let second = into_string(by_component)?;
    Ok(format!("{}\n{}", first, second))
}

fn into_string(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer
        .into_inner()
        .map_err(|e| ReportError::Csv(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ReportError::Csv(e.to_string()))
}
