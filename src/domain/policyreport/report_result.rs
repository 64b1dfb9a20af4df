use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::label_selector::LabelSelector;
use super::object_reference::{ObjectReference, to_resource_string};
use super::policy_result::PolicyResult;
use super::severity::ResultSeverity;
use super::timestamp::Timestamp;

/// The result of evaluating one policy rule.
///
/// A result may name concrete subjects, carry a resource selector, both, or
/// neither. With neither it applies to the scope of the whole report.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReportResult {
    /// Opaque identifier assigned by the producer. Not part of the wire format.
    #[serde(skip)]
    id: String,

    /// Policy engine that produced this result. Overrides the report source.
    #[serde(default)]
    pub source: String,

    #[serde(default)]
    pub policy: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub rule: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub category: String,

    #[serde(default, skip_serializing_if = "ResultSeverity::is_unset")]
    pub severity: ResultSeverity,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Timestamp>,

    pub result: PolicyResult,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub scored: bool,

    /// Only the first subject is authoritative, see [`ReportResult::resource`].
    #[serde(rename = "resources", default, skip_serializing_if = "Vec::is_empty")]
    pub subjects: Vec<ObjectReference>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_selector: Option<LabelSelector>,

    #[serde(rename = "message", default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, String>,
}

impl ReportResult {
    pub fn new(policy: impl Into<String>, result: PolicyResult) -> Self {
        Self {
            id: String::new(),
            source: String::new(),
            policy: policy.into(),
            rule: String::new(),
            category: String::new(),
            severity: ResultSeverity::Unset,
            timestamp: None,
            result,
            scored: false,
            subjects: Vec::new(),
            resource_selector: None,
            description: String::new(),
            properties: BTreeMap::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn with_rule(mut self, rule: impl Into<String>) -> Self {
        self.rule = rule.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_severity(mut self, severity: ResultSeverity) -> Self {
        self.severity = severity;
        self
    }

    pub fn with_timestamp(mut self, timestamp: impl Into<Timestamp>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    pub fn scored(mut self, scored: bool) -> Self {
        self.scored = scored;
        self
    }

    pub fn with_subject(mut self, subject: ObjectReference) -> Self {
        self.subjects.push(subject);
        self
    }

    pub fn with_resource_selector(mut self, selector: LabelSelector) -> Self {
        self.resource_selector = Some(selector);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }

    pub fn has_resource(&self) -> bool {
        !self.subjects.is_empty()
    }

    /// The resolved resource: the first subject, if any.
    pub fn resource(&self) -> Option<&ObjectReference> {
        self.subjects.first()
    }

    pub fn kind(&self) -> &str {
        self.resource().map(ObjectReference::kind).unwrap_or_default()
    }

    pub fn resource_string(&self) -> String {
        self.resource().map(to_resource_string).unwrap_or_default()
    }

    pub fn has_resource_selector(&self) -> bool {
        self.resource_selector.is_some()
    }

    /// True when the result names neither subjects nor a selector.
    pub fn applies_to_scope(&self) -> bool {
        !self.has_resource() && !self.has_resource_selector()
    }

    pub fn meets_severity(&self, threshold: ResultSeverity) -> bool {
        self.severity.is_at_least(threshold)
    }
}
