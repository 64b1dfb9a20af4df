mod markdown_results_table;
mod markdown_summary;
mod markdown_summary_table;

use std::fmt::{Display, Formatter};

pub use markdown_results_table::{MarkdownResultsTable, ResultRow};
pub use markdown_summary::MarkdownSummary;
pub use markdown_summary_table::MarkdownSummaryTable;

use crate::domain::policyreport::report::Report;

#[derive(Clone, Debug, Default)]
pub struct MarkdownReport {
    pub summary: MarkdownSummary,
    pub results: MarkdownResultsTable,
}

impl From<&Report> for MarkdownReport {
    fn from(value: &Report) -> Self {
        Self {
            summary: MarkdownSummary::from(value),
            results: MarkdownResultsTable::from(value),
        }
    }
}

impl Display for MarkdownReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "## Policy Report\n{}\n{}",
            self.summary,
            self.results_section()
        )
    }
}

impl MarkdownReport {
    fn results_section(&self) -> String {
        if self.results.is_empty() {
            return "\n_No results._\n".to_string();
        }

        format!("\n### Results\n\n{}", self.results)
    }
}
