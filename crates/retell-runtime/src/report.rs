//! Plain-text report rendering for the console adapter.

use chrono::{DateTime, Local};

use crate::types::ReconstructionResult;

/// Render `result` as the fixed-layout report, stamped with the local
/// time at the moment of formatting.
pub fn format_report(result: &ReconstructionResult) -> String {
    format_report_at(result, Local::now())
}

/// Frozen-clock variant of [`format_report`]. Byte-identical output for
/// identical input and timestamp.
pub fn format_report_at(
    result: &ReconstructionResult,
    generated_at: DateTime<Local>,
) -> String {
    let rule = "=".repeat(80);
    let mut report = String::new();

    report.push('\n');
    report.push_str(&rule);
    report.push('\n');
    report.push_str("                    TEXT RECONSTRUCTION REPORT\n");
    report.push_str(&rule);
    report.push_str("\n\n");

    report.push_str("1. ORIGINAL FRAGMENT:\n");
    report.push_str(&format!("   \"{}\"\n\n", result.original_text));

    report.push_str("2. AI-RECONSTRUCTED TEXT:\n");
    report.push_str(&format!("   {}\n\n", result.reconstructed_text));

    report.push_str("3. CONTEXTUAL SOURCES:\n");
    if result.sources.is_empty() {
        report.push_str("   No contextual sources found.");
    } else {
        for (i, source) in result.sources.iter().enumerate() {
            report.push_str(&format!(
                "\n   {}. {}\n      Link: {}\n      Summary: {}\n",
                i + 1,
                source.title,
                source.link,
                source.snippet
            ));
        }
    }

    report.push('\n');
    report.push_str(&rule);
    report.push_str(&format!(
        "\nReport generated on: {}\n",
        generated_at.format("%Y-%m-%d %H:%M:%S")
    ));
    report.push_str(&rule);
    report.push('\n');

    report
}
