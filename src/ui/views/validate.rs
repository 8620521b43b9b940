use astrodb::integrity::{IntegrityReport, PassSummary};

use crate::ui::icon::Icon;

pub fn render_pass_line(
    summary: &PassSummary,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let icon = if summary.is_clean() {
        Icon::Success
    } else {
        Icon::Error
    }
    .colored(supports_color, supports_unicode);

    let mut line = format!(
        "  {} {:<24} {} checked",
        icon,
        summary.pass.name(),
        summary.checked
    );
    if !summary.is_clean() {
        line.push_str(&format!(", {} violation(s)", summary.violations));
    }
    line.push('\n');
    line
}

pub fn render_pass_summary(
    report: &IntegrityReport,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::from("Passes\n");
    for summary in &report.passes {
        out.push_str(&render_pass_line(summary, supports_color, supports_unicode));
    }
    out.push_str(&format!(
        "Summary: {} passes, {} violations ({} reference, {} value)\n",
        report.passes.len(),
        report.violations.len(),
        report.references(),
        report.values()
    ));
    out
}
