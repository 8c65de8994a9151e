//! In-memory Kubernetes documents
//!
//! Core kinds are the `k8s-openapi` types, which skip every `None` field on
//! serialization. Builders leave optional fields as `None` rather than empty
//! collections, so the YAML never carries `null` or `{}`/`[]` placeholders.
//! The VerticalPodAutoscaler is a CRD with no upstream type and is modelled
//! here.

use std::collections::BTreeMap;
use std::fmt;

use k8s_openapi::Resource;
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::{
    ConfigMap, Namespace, ResourceQuota, Secret, Service, ServiceAccount,
};
use k8s_openapi::api::networking::v1::Ingress;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use serde::Serialize;

/// Label or annotation map. Ordered so output is deterministic.
pub type Labels = BTreeMap<String, String>;

/// The nine resource kinds kgen generates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceKind {
    Namespace,
    ServiceAccount,
    ConfigMap,
    Secret,
    Deployment,
    Service,
    Ingress,
    ResourceQuota,
    VerticalPodAutoscaler,
}

impl ResourceKind {
    /// Every kind, in emission order.
    pub const ALL: [ResourceKind; 9] = [
        ResourceKind::Namespace,
        ResourceKind::ServiceAccount,
        ResourceKind::ConfigMap,
        ResourceKind::Secret,
        ResourceKind::Deployment,
        ResourceKind::Service,
        ResourceKind::Ingress,
        ResourceKind::ResourceQuota,
        ResourceKind::VerticalPodAutoscaler,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Namespace => Namespace::KIND,
            ResourceKind::ServiceAccount => ServiceAccount::KIND,
            ResourceKind::ConfigMap => ConfigMap::KIND,
            ResourceKind::Secret => Secret::KIND,
            ResourceKind::Deployment => Deployment::KIND,
            ResourceKind::Service => Service::KIND,
            ResourceKind::Ingress => Ingress::KIND,
            ResourceKind::ResourceQuota => ResourceQuota::KIND,
            ResourceKind::VerticalPodAutoscaler => VerticalPodAutoscaler::KIND,
        }
    }

    pub fn api_version(&self) -> &'static str {
        match self {
            ResourceKind::Namespace => Namespace::API_VERSION,
            ResourceKind::ServiceAccount => ServiceAccount::API_VERSION,
            ResourceKind::ConfigMap => ConfigMap::API_VERSION,
            ResourceKind::Secret => Secret::API_VERSION,
            ResourceKind::Deployment => Deployment::API_VERSION,
            ResourceKind::Service => Service::API_VERSION,
            ResourceKind::Ingress => Ingress::API_VERSION,
            ResourceKind::ResourceQuota => ResourceQuota::API_VERSION,
            ResourceKind::VerticalPodAutoscaler => VerticalPodAutoscaler::API_VERSION,
        }
    }

    /// True for kinds that live inside a namespace.
    pub fn is_namespaced(&self) -> bool {
        !matches!(self, ResourceKind::Namespace)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `apiVersion` + `kind` header for kinds without an upstream type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeMeta {
    pub api_version: String,
    pub kind: String,
}

impl From<ResourceKind> for TypeMeta {
    fn from(kind: ResourceKind) -> Self {
        Self {
            api_version: kind.api_version().to_string(),
            kind: kind.as_str().to_string(),
        }
    }
}

/// `autoscaling.k8s.io/v1` VerticalPodAutoscaler.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerticalPodAutoscaler {
    #[serde(flatten)]
    pub type_meta: TypeMeta,
    pub metadata: ObjectMeta,
    pub spec: VerticalPodAutoscalerSpec,
}

impl VerticalPodAutoscaler {
    pub const API_VERSION: &'static str = "autoscaling.k8s.io/v1";
    pub const KIND: &'static str = "VerticalPodAutoscaler";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerticalPodAutoscalerSpec {
    pub target_ref: CrossVersionObjectReference,
    pub update_policy: UpdatePolicy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossVersionObjectReference {
    pub api_version: String,
    pub kind: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePolicy {
    pub update_mode: String,
}

/// One generated manifest document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Document {
    Namespace(Namespace),
    ServiceAccount(ServiceAccount),
    ConfigMap(ConfigMap),
    Secret(Secret),
    Deployment(Deployment),
    Service(Service),
    Ingress(Ingress),
    ResourceQuota(ResourceQuota),
    VerticalPodAutoscaler(VerticalPodAutoscaler),
}

impl Document {
    pub fn kind(&self) -> ResourceKind {
        match self {
            Document::Namespace(_) => ResourceKind::Namespace,
            Document::ServiceAccount(_) => ResourceKind::ServiceAccount,
            Document::ConfigMap(_) => ResourceKind::ConfigMap,
            Document::Secret(_) => ResourceKind::Secret,
            Document::Deployment(_) => ResourceKind::Deployment,
            Document::Service(_) => ResourceKind::Service,
            Document::Ingress(_) => ResourceKind::Ingress,
            Document::ResourceQuota(_) => ResourceKind::ResourceQuota,
            Document::VerticalPodAutoscaler(_) => ResourceKind::VerticalPodAutoscaler,
        }
    }

    pub fn metadata(&self) -> &ObjectMeta {
        match self {
            Document::Namespace(doc) => &doc.metadata,
            Document::ServiceAccount(doc) => &doc.metadata,
            Document::ConfigMap(doc) => &doc.metadata,
            Document::Secret(doc) => &doc.metadata,
            Document::Deployment(doc) => &doc.metadata,
            Document::Service(doc) => &doc.metadata,
            Document::Ingress(doc) => &doc.metadata,
            Document::ResourceQuota(doc) => &doc.metadata,
            Document::VerticalPodAutoscaler(doc) => &doc.metadata,
        }
    }

    /// `metadata.name`; builders always set it.
    pub fn name(&self) -> &str {
        self.metadata().name.as_deref().unwrap_or_default()
    }

    pub fn namespace(&self) -> Option<&str> {
        self.metadata().namespace.as_deref()
    }
}
