mod report_reader;

pub use report_reader::{
    ReportFormat, ReportReadError, read_report, report_from_json, report_from_yaml,
};
