use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::label_selector::LabelSelector;
use super::limits::{Limits, ReportConfiguration};
use super::object_meta::ObjectMeta;
use super::object_reference::ObjectReference;
use super::report_interface::ReportInterface;
use super::report_result::ReportResult;
use super::report_summary::ReportSummary;
use super::severity::ResultSeverity;
use super::validation_error::ValidationError;

pub const API_VERSION: &str = "reports.x-k8s.io/v1beta2";
pub const KIND: &str = "Report";

/// The outcome of one evaluation cycle of one or more policy engines.
///
/// `summary` is kept in sync by [`Report::push_result`] and
/// [`Report::with_results`]; whoever mutates `results` directly must call
/// [`Report::refresh_summary`]. Either `scope` or `scope_selector` may be set,
/// not both (see [`Report::validate`]).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(default)]
    pub metadata: ObjectMeta,

    /// Engine that produced the results, unless a result overrides it.
    #[serde(default)]
    pub source: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<ObjectReference>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope_selector: Option<LabelSelector>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration: Option<ReportConfiguration>,

    #[serde(default)]
    pub summary: ReportSummary,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub results: Vec<ReportResult>,
}

impl Report {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            api_version: Some(API_VERSION.to_string()),
            kind: Some(KIND.to_string()),
            metadata: ObjectMeta {
                name: Some(name.into()),
                ..Default::default()
            },
            source: String::new(),
            scope: None,
            scope_selector: None,
            configuration: None,
            summary: ReportSummary::default(),
            results: Vec::new(),
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.metadata.namespace = Some(namespace.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn with_scope(mut self, scope: ObjectReference) -> Self {
        self.scope = Some(scope);
        self
    }

    pub fn with_scope_selector(mut self, selector: LabelSelector) -> Self {
        self.scope_selector = Some(selector);
        self
    }

    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.configuration = Some(ReportConfiguration { limits });
        self
    }

    pub fn with_results(mut self, results: Vec<ReportResult>) -> Self {
        self.results = results;
        self.refresh_summary();
        self
    }

    pub fn push_result(&mut self, result: ReportResult) {
        self.summary.increment(result.result);
        self.results.push(result);
    }

    pub fn refresh_summary(&mut self) {
        self.summary = ReportSummary::compute(&self.results);
    }

    pub fn has_consistent_summary(&self) -> bool {
        self.summary == ReportSummary::compute(&self.results)
    }

    pub fn limits(&self) -> Option<&Limits> {
        self.configuration.as_ref().map(|c| &c.limits)
    }

    /// The result source when set, the report source otherwise.
    pub fn effective_source<'a>(&'a self, result: &'a ReportResult) -> &'a str {
        if result.source.is_empty() {
            &self.source
        } else {
            &result.source
        }
    }

    pub fn results_at_least(&self, threshold: ResultSeverity) -> Vec<&ReportResult> {
        self.results
            .iter()
            .filter(|r| r.meets_severity(threshold))
            .collect()
    }

    /// Most critical first; results of equal severity keep their order.
    pub fn sorted_by_severity(&self) -> Vec<&ReportResult> {
        self.results
            .iter()
            .sorted_by(|a, b| b.severity.cmp(&a.severity))
            .collect()
    }

    pub fn highest_severity(&self) -> Option<ResultSeverity> {
        self.results.iter().map(|r| r.severity).max()
    }

    /// Checks what the types cannot: scope exclusivity and required policy
    /// names. A result with both subjects and a selector is accepted.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.scope.is_some() && self.scope_selector.is_some() {
            return Err(ValidationError::AmbiguousScope);
        }

        for (index, result) in self.results.iter().enumerate() {
            if result.policy.trim().is_empty() {
                return Err(ValidationError::MissingField(format!(
                    "results[{index}].policy"
                )));
            }

            if result.has_resource() && result.has_resource_selector() {
                warn!(
                    "result {index} of report {} ({}) sets both resources and resourceSelector",
                    self.key(),
                    result.policy
                );
            }
        }

        if !self.has_consistent_summary() {
            warn!(
                "report {} has a stale summary ({}), expected {}",
                self.key(),
                self.summary,
                ReportSummary::compute(&self.results)
            );
        }

        Ok(())
    }
}

impl ReportInterface for Report {
    /// The object uid when known, the key otherwise.
    fn id(&self) -> String {
        self.metadata
            .uid
            .clone()
            .filter(|uid| !uid.is_empty())
            .unwrap_or_else(|| self.key())
    }

    fn key(&self) -> String {
        self.metadata.key()
    }

    fn scope(&self) -> Option<&ObjectReference> {
        self.scope.as_ref()
    }

    fn results(&self) -> &[ReportResult] {
        &self.results
    }

    fn summary(&self) -> ReportSummary {
        self.summary
    }

    fn source(&self) -> &str {
        &self.source
    }
}
