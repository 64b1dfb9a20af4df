pub mod label_selector;
pub mod limits;
pub mod object_meta;
pub mod object_reference;
pub mod policy_result;
pub mod report;
pub mod report_interface;
pub mod report_result;
pub mod report_summary;
pub mod severity;
pub mod status_filter;
pub mod timestamp;
pub mod validation_error;

pub use label_selector::{LabelSelector, LabelSelectorRequirement};
pub use limits::{Limits, ReportConfiguration};
pub use object_meta::ObjectMeta;
pub use object_reference::{ObjectReference, to_resource_string};
pub use policy_result::PolicyResult;
pub use report::Report;
pub use report_interface::ReportInterface;
pub use report_result::ReportResult;
pub use report_summary::ReportSummary;
pub use severity::{ResultSeverity, SEVERITY_LEVELS};
pub use status_filter::StatusFilter;
pub use timestamp::Timestamp;
pub use validation_error::ValidationError;
