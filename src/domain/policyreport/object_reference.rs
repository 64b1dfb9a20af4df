use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Reference to a concrete resource (the subject of a result, or the scope of
/// a report). Every field is optional on the wire.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct ObjectReference {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_path: Option<String>,
}

impl ObjectReference {
    /// Empty components are left unset.
    pub fn new(namespace: &str, kind: &str, name: &str) -> Self {
        Self {
            namespace: non_empty_owned(namespace),
            kind: non_empty_owned(kind),
            name: non_empty_owned(name),
            ..Default::default()
        }
    }

    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = Some(api_version.into());
        self
    }

    pub fn with_uid(mut self, uid: impl Into<String>) -> Self {
        self.uid = Some(uid.into());
        self
    }

    pub fn kind(&self) -> &str {
        self.kind.as_deref().unwrap_or_default()
    }

    pub fn namespace(&self) -> &str {
        self.namespace.as_deref().unwrap_or_default()
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn to_resource_string(&self) -> String {
        to_resource_string(self)
    }
}

/// Formats a reference as `namespace/kind/name`.
///
/// Missing components are skipped without leaving a separator behind, and
/// only the kind is lowercased.
pub fn to_resource_string(reference: &ObjectReference) -> String {
    let namespace = Some(reference.namespace()).filter(|s| !s.is_empty());
    let kind = Some(reference.kind()).filter(|s| !s.is_empty());
    let name = Some(reference.name()).filter(|s| !s.is_empty());

    [
        namespace.map(str::to_string),
        kind.map(str::to_lowercase),
        name.map(str::to_string),
    ]
    .into_iter()
    .flatten()
    .join("/")
}

fn non_empty_owned(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "", "", "")]
    #[case("ns1", "", "", "ns1")]
    #[case("", "Pod", "", "pod")]
    #[case("", "", "foo", "foo")]
    #[case("ns1", "Pod", "", "ns1/pod")]
    #[case("", "Pod", "foo", "pod/foo")]
    #[case("ns1", "", "foo", "ns1/foo")]
    #[case("ns1", "Pod", "foo", "ns1/pod/foo")]
    fn it_formats_resource_strings(
        #[case] namespace: &str,
        #[case] kind: &str,
        #[case] name: &str,
        #[case] expected: &str,
    ) {
        let reference = ObjectReference::new(namespace, kind, name);
        let formatted = reference.to_resource_string();

        assert_eq!(formatted, expected);
        assert!(!formatted.starts_with('/'));
        assert!(!formatted.ends_with('/'));
        assert!(!formatted.contains("//"));
    }

    #[test]
    fn explicit_empty_fields_behave_like_missing_ones() {
        let reference = ObjectReference {
            namespace: Some(String::new()),
            kind: Some("Deployment".to_string()),
            name: Some(String::new()),
            ..Default::default()
        };

        assert_eq!(to_resource_string(&reference), "deployment");
    }

    #[test]
    fn only_kind_is_lowercased() {
        let reference = ObjectReference::new("Team-A", "ConfigMap", "MyConfig");
        assert_eq!(reference.to_resource_string(), "Team-A/configmap/MyConfig");
    }

    #[test]
    fn it_serializes_with_kubernetes_field_names() {
        let reference = ObjectReference::new("default", "Pod", "nginx")
            .with_api_version("v1")
            .with_uid("1234");

        let json = serde_json::to_value(&reference).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "apiVersion": "v1",
                "kind": "Pod",
                "namespace": "default",
                "name": "nginx",
                "uid": "1234",
            })
        );
    }
}
