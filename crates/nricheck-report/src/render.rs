//! Plain-text rendering of an engine output.
//!
//! The document is the deliverable attached to a report email or shown in a
//! terminal; HTML/PDF layout belongs to the surrounding application, not
//! here.

use nricheck_engine::{EngineOutput, Severity};

/// Render a complete plain-text report from an engine output.
pub fn render_report(output: &EngineOutput) -> String {
    let mut doc = String::new();

    doc.push_str("NRI COMPLIANCE ASSESSMENT\n");
    doc.push_str("=========================\n\n");
    doc.push_str(&format!("Compliance score: {}/100\n", output.score));
    doc.push_str(&format!(
        "Estimated penalty exposure: {}\n",
        penalty_range(output.total_penalty_min, output.total_penalty_max)
    ));
    doc.push_str(&format!("Items found: {}\n", output.findings.len()));

    if output.findings.is_empty() {
        doc.push_str("\nNo compliance gaps identified from your answers.\n");
        return doc;
    }

    for finding in &output.findings {
        doc.push('\n');
        doc.push_str(&format!(
            "[{}] {} ({})\n",
            severity_label(finding.severity),
            finding.name,
            finding.status
        ));
        doc.push_str(&format!("  Obligation: {}\n", finding.obligation));
        doc.push_str(&format!("  Why it applies: {}\n", finding.why_it_applies));
        doc.push_str(&format!("  If unresolved: {}\n", finding.consequence));
        if finding.penalty_max > 0 {
            doc.push_str(&format!(
                "  Penalty exposure: {}\n",
                penalty_range(finding.penalty_min, finding.penalty_max)
            ));
        }
        doc.push_str("  What to do:\n");
        for (i, step) in finding.remediation.iter().enumerate() {
            doc.push_str(&format!("    {}. {}\n", i + 1, step));
        }
        doc.push_str(&format!(
            "  Effort: {} | {} | {}\n",
            finding.effort.difficulty.as_str(),
            finding.effort.time_estimate,
            finding.effort.cost_estimate
        ));
    }

    doc.push_str(
        "\nThis assessment is informational and is not legal or tax advice.\n",
    );
    doc
}

fn severity_label(severity: Severity) -> &'static str {
    match severity {
        Severity::Urgent => "URGENT",
        Severity::Warning => "WARNING",
        Severity::Info => "INFO",
    }
}

fn penalty_range(min: u64, max: u64) -> String {
    if max == 0 {
        "none estimated".to_string()
    } else if min == max {
        format!("${min}")
    } else {
        format!("${min} – ${max}")
    }
}
