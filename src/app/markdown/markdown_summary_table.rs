use std::fmt::{Display, Formatter};

use markdown_table::{Heading, HeadingAlignment, MarkdownTable};

use crate::domain::policyreport::report_summary::ReportSummary;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MarkdownSummaryTable {
    pub pass: u64,
    pub fail: u64,
    pub warn: u64,
    pub error: u64,
    pub skip: u64,
    pub total: u64,
}

impl From<&ReportSummary> for MarkdownSummaryTable {
    fn from(value: &ReportSummary) -> Self {
        MarkdownSummaryTable {
            pass: value.pass,
            fail: value.fail,
            warn: value.warn,
            error: value.error,
            skip: value.skip,
            total: value.total(),
        }
    }
}

impl Display for MarkdownSummaryTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let headers = vec![
            Heading::new("PASS".to_string(), Some(HeadingAlignment::Center)),
            Heading::new("FAIL".to_string(), Some(HeadingAlignment::Center)),
            Heading::new("WARN".to_string(), Some(HeadingAlignment::Center)),
            Heading::new("ERROR".to_string(), Some(HeadingAlignment::Center)),
            Heading::new("SKIP".to_string(), Some(HeadingAlignment::Center)),
            Heading::new("TOTAL".to_string(), Some(HeadingAlignment::Center)),
        ];

        let data = vec![vec![
            self.pass.to_string(),
            self.fail.to_string(),
            self.warn.to_string(),
            self.error.to_string(),
            self.skip.to_string(),
            self.total.to_string(),
        ]];

        let mut table = MarkdownTable::new(data);
        table.with_headings(headers);

        f.write_str(&table.as_markdown().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_carries_the_total() {
        let summary = ReportSummary {
            pass: 4,
            fail: 2,
            warn: 1,
            error: 0,
            skip: 3,
        };

        let table = MarkdownSummaryTable::from(&summary);
        assert_eq!(table.total, 10);

        let rendered = table.to_string();
        assert!(rendered.contains("PASS"));
        assert!(rendered.contains("TOTAL"));
        assert!(rendered.contains("10"));
    }

    #[test]
    fn counts_beyond_u32_render_without_overflow() {
        let summary = ReportSummary {
            pass: u64::from(u32::MAX),
            fail: 1,
            ..Default::default()
        };

        let table = MarkdownSummaryTable::from(&summary);
        assert_eq!(table.total, 4_294_967_296);
        assert!(table.to_string().contains("4294967296"));
    }
}
