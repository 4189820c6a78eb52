use crate::hms::format_hms;
use crate::labels;
use crate::report::{MantaReport, TypeReport};
use std::fmt::Write;

pub fn render(
    report: &MantaReport,
    full_output: bool,
    include_vendors: bool,
    include_components: bool,
) -> String {
    if !report.been_processed {
        return String::new();
    }

    let mut out = String::new();
    for (dc_name, dc) in &report.processed {
        let _ = writeln!(out, "{}:", dc_name);

        if full_output || include_vendors {
            let _ = writeln!(out, "  By Vendor:");
            for (vendor, types) in &dc.times_by_vendor_and_type {
                let _ = writeln!(out, "    {}:", vendor);
                for (failure_type, times) in types {
                    let _ = writeln!(out, "      {}", summary_line(failure_type, times));
                }
            }
        }

        let _ = writeln!(out, "  By Component Type:");
        for (failure_type, times) in &dc.times_by_type {
            let _ = writeln!(out, "    {}", summary_line(failure_type, times));

            if labels::subtype_breakdown_excluded(failure_type) {
                continue;
            }
            if !(full_output || include_components) {
                continue;
            }
            if let Some(subtypes) = dc.times_by_subtype.get(failure_type) {
                let _ = writeln!(out, "      By Component:");
                for (component_name, sub_times) in subtypes {
                    let label = labels::display_name(failure_type, component_name);
                    let _ = writeln!(out, "        {}", summary_line(label, sub_times));
                }
            }
        }
        out.push('\n');
    }
    out
}

fn summary_line(key: &str, times: &TypeReport) -> String {
    format!(
        "{}: {} (mean: {}, median: {})",
        key,
        times.count,
        format_hms(times.mean),
        format_hms(times.median)
    )
}
