use std::fmt::{Display, Formatter};

use markdown_table::{Heading, HeadingAlignment, MarkdownTable};

use crate::domain::policyreport::{policy_result::PolicyResult, report::Report};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResultRow {
    pub policy: String,
    pub rule: String,
    pub result: String,
    pub severity: String,
    pub resource: String,
    pub message: String,
}

/// Rows ordered by descending severity.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MarkdownResultsTable(pub Vec<ResultRow>);

impl MarkdownResultsTable {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&Report> for MarkdownResultsTable {
    fn from(value: &Report) -> Self {
        MarkdownResultsTable(
            value
                .sorted_by_severity()
                .into_iter()
                .map(|r| ResultRow {
                    policy: r.policy.clone(),
                    rule: r.rule.clone(),
                    result: result_cell(r.result),
                    severity: r.severity.to_string(),
                    resource: r.resource_string(),
                    message: r.description.clone(),
                })
                .collect(),
        )
    }
}

fn result_cell(result: PolicyResult) -> String {
    let icon = match result {
        PolicyResult::Pass => "✅",
        PolicyResult::Fail => "❌",
        PolicyResult::Warn => "⚠️",
        PolicyResult::Error => "💥",
        PolicyResult::Skip => "⏭️",
    };
    format!("{icon} {result}")
}

fn or_dash(value: &str) -> String {
    if value.is_empty() {
        "-".to_string()
    } else {
        escape_cell(value)
    }
}

/// Keeps a value on a single table row: pipes are escaped, line breaks
/// become `<br>`.
fn escape_cell(value: &str) -> String {
    value
        .trim_end_matches(['\r', '\n'])
        .replace("\r\n", "\n")
        .replace('|', "\\|")
        .replace(['\r', '\n'], "<br>")
}

impl Display for MarkdownResultsTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            return f.write_str("");
        }

        let headers = vec![
            Heading::new("POLICY".to_string(), Some(HeadingAlignment::Left)),
            Heading::new("RULE".to_string(), Some(HeadingAlignment::Left)),
            Heading::new("RESULT".to_string(), Some(HeadingAlignment::Center)),
            Heading::new("SEVERITY".to_string(), Some(HeadingAlignment::Center)),
            Heading::new("RESOURCE".to_string(), Some(HeadingAlignment::Left)),
            Heading::new("MESSAGE".to_string(), Some(HeadingAlignment::Left)),
        ];

        let data = self
            .0
            .iter()
            .map(|row| {
                vec![
                    or_dash(&row.policy),
                    or_dash(&row.rule),
                    row.result.clone(),
                    or_dash(&row.severity),
                    or_dash(&row.resource),
                    or_dash(&row.message),
                ]
            })
            .collect();

        let mut table = MarkdownTable::new(data);
        table.with_headings(headers);

        f.write_str(&table.as_markdown().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::policyreport::{
        object_reference::ObjectReference, report_result::ReportResult,
        severity::ResultSeverity,
    };

    fn a_report() -> Report {
        Report::new("polr").with_results(vec![
            ReportResult::new("require-labels", PolicyResult::Pass)
                .with_severity(ResultSeverity::Low),
            ReportResult::new("disallow-privileged", PolicyResult::Fail)
                .with_rule("privileged-containers")
                .with_severity(ResultSeverity::High)
                .with_subject(ObjectReference::new("default", "Pod", "nginx"))
                .with_description("privileged mode is not allowed"),
        ])
    }

    #[test]
    fn rows_are_sorted_by_descending_severity() {
        let table = MarkdownResultsTable::from(&a_report());

        assert_eq!(
            table.0[0],
            ResultRow {
                policy: "disallow-privileged".to_string(),
                rule: "privileged-containers".to_string(),
                result: "❌ fail".to_string(),
                severity: "high".to_string(),
                resource: "default/pod/nginx".to_string(),
                message: "privileged mode is not allowed".to_string(),
            }
        );
        assert_eq!(table.0[1].policy, "require-labels");
        assert_eq!(table.0[1].resource, "");
    }

    #[test]
    fn rendering_includes_headings_and_cells() {
        let rendered = MarkdownResultsTable::from(&a_report()).to_string();

        assert!(rendered.contains("POLICY"));
        assert!(rendered.contains("default/pod/nginx"));
        assert!(rendered.contains("privileged mode is not allowed"));
    }

    #[test]
    fn pipes_and_line_breaks_stay_inside_their_cell() {
        let report = Report::new("polr").with_results(vec![
            ReportResult::new("p", PolicyResult::Fail).with_description("a | b\nc"),
        ]);

        let rendered = MarkdownResultsTable::from(&report).to_string();
        let row = rendered.lines().find(|line| line.contains("fail")).unwrap();

        assert!(row.contains("a \\| b<br>c"), "{row}");
        assert!(!rendered.lines().any(|line| line.trim_start().starts_with("c ")));
    }

    #[test]
    fn an_empty_table_renders_nothing() {
        let table = MarkdownResultsTable::from(&Report::new("empty"));
        assert!(table.is_empty());
        assert_eq!(table.to_string(), "");
    }
}
