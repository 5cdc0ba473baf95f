use dragee_types::{Report, Severity};

/// Render report errors as GitHub Actions workflow command annotations.
///
/// Format: `::{level} title={rule_id}::{dragee}: {message}`.
/// `severity_of` maps a rule id to the severity it was registered with; unknown
/// or missing ids are rendered as errors.
pub fn render_github_annotations(
    report: &Report,
    severity_of: impl Fn(&str) -> Option<Severity>,
) -> Vec<String> {
    let mut out = Vec::new();

    for e in &report.errors {
        let severity = e
            .rule_id
            .as_deref()
            .and_then(&severity_of)
            .unwrap_or(Severity::Error);
        let level = match severity {
            Severity::Error => "error",
            Severity::Warn => "warning",
            Severity::Info => "notice",
        };

        let message = escape_data(&format!("{}: {}", e.dragee_name, e.message));

        match e.rule_id.as_deref() {
            Some(rule_id) => out.push(format!(
                "::{} title={}::{}",
                level,
                escape_property(rule_id),
                message
            )),
            None => out.push(format!("::{}::{}", level, message)),
        }
    }

    out
}

fn escape_data(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}
