pub mod cli;
pub mod markdown;
pub mod report_query;

pub use cli::{Cli, CliError, OutputFormat, render};
pub use report_query::{LimitsSource, ReportQuery};
