/// The cluster-scoped `config.openshift.io/v1` Infrastructure resource
use kube::api::{Api, ApiResource, DynamicObject, GroupVersionKind, ResourceExt};
use serde::Deserialize;
use tracing::debug;

use super::access::ClusterHandle;
use crate::error::{Error, ExtractionError, Result};
use crate::platform::{ExtractPlatform, PlatformType};

/// The only Infrastructure instance a cluster carries
pub const INFRASTRUCTURE_NAME: &str = "cluster";

const GROUP: &str = "config.openshift.io";
const VERSION: &str = "v1";
const KIND: &str = "Infrastructure";
const PLURAL: &str = "infrastructures";

/// API resource descriptor for Infrastructure
pub fn infrastructure_resource() -> ApiResource {
    let gvk = GroupVersionKind::gvk(GROUP, VERSION, KIND);
    ApiResource::from_gvk_with_plural(&gvk, PLURAL)
}

/// Fetched Infrastructure record
#[derive(Debug, Clone)]
pub struct Infrastructure {
    pub name: String,
    pub status: InfrastructureStatus,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfrastructureStatus {
    /// Deprecated, superseded by `platform_status`
    #[serde(default)]
    pub platform: Option<String>,

    #[serde(default)]
    pub platform_status: Option<PlatformStatus>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlatformStatus {
    #[serde(rename = "type", default)]
    pub type_: Option<String>,
}

impl InfrastructureStatus {
    /// Legacy `status.platform`, when set
    pub fn deprecated_platform(&self) -> Option<&str> {
        self.platform
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }

    /// `status.platformStatus.type`, when set
    pub fn platform_status_type(&self) -> Option<&str> {
        self.platform_status
            .as_ref()
            .and_then(|s| s.type_.as_deref())
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

impl Infrastructure {
    /// Decode from the generic API object
    pub fn from_dynamic(object: DynamicObject) -> Result<Self, ExtractionError> {
        let name = object.name_any();
        let status: InfrastructureStatus = match object.data.get("status") {
            Some(status) if !status.is_null() => {
                serde_json::from_value(status.clone()).map_err(ExtractionError::MalformedStatus)?
            }
            _ => InfrastructureStatus::default(),
        };
        Ok(Self { name, status })
    }
}

impl ExtractPlatform for Infrastructure {
    fn extract_platform(&self) -> Result<PlatformType, ExtractionError> {
        self.status
            .platform_status_type()
            .map(PlatformType::from)
            .ok_or(ExtractionError::PlatformUnavailable)
    }
}

/// Get a named Infrastructure record
pub async fn fetch(handle: &ClusterHandle, name: &str) -> Result<Infrastructure> {
    let api: Api<DynamicObject> = Api::all_with(handle.client(), &infrastructure_resource());

    debug!("Getting {}/{}", PLURAL, name);
    let object = api.get(name).await.map_err(|source| Error::Fetch {
        name: name.to_string(),
        source,
    })?;

    Ok(Infrastructure::from_dynamic(object)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(status: serde_json::Value) -> Infrastructure {
        let object: DynamicObject = serde_json::from_value(json!({
            "apiVersion": "config.openshift.io/v1",
            "kind": "Infrastructure",
            "metadata": { "name": "cluster" },
            "spec": { "platformSpec": { "type": "AWS" } },
            "status": status,
        }))
        .unwrap();
        Infrastructure::from_dynamic(object).unwrap()
    }

    #[test]
    fn test_resource_descriptor() {
        let ar = infrastructure_resource();
        assert_eq!(ar.api_version, "config.openshift.io/v1");
        assert_eq!(ar.kind, "Infrastructure");
        assert_eq!(ar.plural, "infrastructures");
    }

    #[test]
    fn test_structured_field_wins() {
        let infra = record(json!({
            "platform": "AWS",
            "platformStatus": { "type": "AWS", "aws": { "region": "us-east-1" } },
        }));
        assert_eq!(infra.name, "cluster");
        assert_eq!(infra.extract_platform().unwrap(), PlatformType::Aws);
    }

    #[test]
    fn test_structured_field_ignores_contradicting_legacy() {
        let infra = record(json!({
            "platform": "GCP",
            "platformStatus": { "type": "BareMetal" },
        }));
        assert_eq!(infra.extract_platform().unwrap(), PlatformType::BareMetal);
        assert_eq!(infra.status.deprecated_platform(), Some("GCP"));
    }

    #[test]
    fn test_structured_field_without_legacy() {
        let infra = record(json!({ "platformStatus": { "type": "None" } }));
        assert_eq!(infra.extract_platform().unwrap(), PlatformType::None);
        assert_eq!(infra.status.deprecated_platform(), None);
    }

    #[test]
    fn test_legacy_field_alone_is_not_enough() {
        let infra = record(json!({ "platform": "AWS" }));
        let err = infra.extract_platform().unwrap_err();
        assert!(matches!(err, ExtractionError::PlatformUnavailable));
        assert_eq!(err.to_string(), "platform type unavailable");
    }

    #[test]
    fn test_empty_structured_type() {
        let infra = record(json!({ "platform": "AWS", "platformStatus": { "type": "" } }));
        assert!(matches!(
            infra.extract_platform().unwrap_err(),
            ExtractionError::PlatformUnavailable
        ));

        let infra = record(json!({ "platform": "AWS", "platformStatus": {} }));
        assert!(matches!(
            infra.extract_platform().unwrap_err(),
            ExtractionError::PlatformUnavailable
        ));
    }

    #[test]
    fn test_missing_status() {
        let infra = record(serde_json::Value::Null);
        assert!(infra.status.platform_status.is_none());
        assert!(matches!(
            infra.extract_platform().unwrap_err(),
            ExtractionError::PlatformUnavailable
        ));
    }

    #[test]
    fn test_malformed_status() {
        let object: DynamicObject = serde_json::from_value(json!({
            "apiVersion": "config.openshift.io/v1",
            "kind": "Infrastructure",
            "metadata": { "name": "cluster" },
            "status": { "platformStatus": { "type": 7 } },
        }))
        .unwrap();
        assert!(matches!(
            Infrastructure::from_dynamic(object).unwrap_err(),
            ExtractionError::MalformedStatus(_)
        ));
    }
}
