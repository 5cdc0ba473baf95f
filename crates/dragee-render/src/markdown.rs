use dragee_types::Report;

pub fn render_markdown(report: &Report) -> String {
    let mut out = String::new();

    out.push_str(&format!("# Dragee report: `{}`\n\n", report.namespace));
    let verdict = if report.pass { "PASS" } else { "FAIL" };
    out.push_str(&format!(
        "- Verdict: **{}**\n- Rules: {} / passed: {} / errors: {}\n\n",
        verdict, report.stats.rules_count, report.stats.pass_count, report.stats.errors_count
    ));

    if report.errors.is_empty() {
        out.push_str("No errors.\n");
        return out;
    }

    out.push_str("## Errors\n\n");

    for e in &report.errors {
        out.push_str(&format!(
            "- `{}` on `{}`: {}\n",
            e.rule_id.as_deref().unwrap_or("-"),
            e.dragee_name,
            e.message
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use dragee_types::RuleError;

    #[test]
    fn renders_passing_report() {
        let report = Report::new("ddd", 2, Vec::new());
        let md = render_markdown(&report);
        assert!(md.contains("Verdict: **PASS**"));
        assert!(md.contains("No errors"));
        assert!(!md.contains("## Errors"));
    }

    #[test]
    fn renders_errors_in_report_order() {
        let report = Report::new(
            "ddd",
            2,
            vec![
                RuleError::new("must not depend on repositories", "Order")
                    .for_rule("ddd/aggregates-allowed-dependencies"),
                RuleError::new("unattributed", "Money"),
            ],
        );

        insta::assert_snapshot!(render_markdown(&report), @r"
        # Dragee report: `ddd`

        - Verdict: **FAIL**
        - Rules: 2 / passed: 0 / errors: 2

        ## Errors

        - `ddd/aggregates-allowed-dependencies` on `Order`: must not depend on repositories
        - `-` on `Money`: unattributed
        ");
    }
}
