use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::domain::policyreport::{report::Report, report_interface::ReportInterface};

use super::markdown_summary_table::MarkdownSummaryTable;

#[derive(Clone, Debug, Default)]
pub struct MarkdownSummary {
    pub key: String,
    pub source: String,
    pub scope: String,
    pub kinds: String,
    pub highest_severity: String,
    pub results_by_status: MarkdownSummaryTable,
}

impl From<&Report> for MarkdownSummary {
    fn from(value: &Report) -> Self {
        MarkdownSummary {
            key: value.key(),
            source: value.source.clone(),
            scope: scope_of(value),
            kinds: value.kinds().join(", "),
            highest_severity: value
                .highest_severity()
                .map(|s| s.to_string())
                .unwrap_or_default(),
            results_by_status: MarkdownSummaryTable::from(&value.summary),
        }
    }
}

fn scope_of(report: &Report) -> String {
    if let Some(scope) = &report.scope {
        return scope.to_resource_string();
    }

    match &report.scope_selector {
        Some(selector) if selector.is_empty() => "all resources".to_string(),
        Some(selector) => selector
            .match_labels
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .chain(
                selector
                    .match_expressions
                    .iter()
                    .map(|e| format!("{} {} ({})", e.key, e.operator, e.values.join(","))),
            )
            .join(", "),
        None => String::new(),
    }
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}

impl Display for MarkdownSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let format = format!(
            "### Summary\n* **Report**: {}\n* **Source**: {}\n* **Scope**: {}\n* **Kinds**: {}\n* **Highest severity**: {}\n\n{}",
            or_dash(&self.key),
            or_dash(&self.source),
            or_dash(&self.scope),
            or_dash(&self.kinds),
            or_dash(&self.highest_severity),
            &self.results_by_status
        );

        f.write_str(&format)
    }
}
