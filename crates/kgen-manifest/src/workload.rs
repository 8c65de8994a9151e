//! Names and labels shared by every document of one context
//!
//! Builders never format resource names themselves. They ask the
//! [`Workload`], so cross-references (Service selector, VPA target, env-from
//! refs) always agree with the objects they point at.

use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kgen_meta::Configuration;

use crate::document::{Labels, ResourceKind};
use crate::environment::EnvironmentContext;

pub const LABEL_NAME: &str = "app.kubernetes.io/name";
pub const LABEL_INSTANCE: &str = "app.kubernetes.io/instance";
pub const LABEL_MANAGED_BY: &str = "app.kubernetes.io/managed-by";
pub const LABEL_TIER: &str = "tier";
pub const LABEL_LAYER: &str = "layer";

const MANAGED_BY: &str = "kgen";
const TIER: &str = "backend";
const LAYER: &str = "application";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workload {
    app: String,
    instance: String,
    namespace: Option<String>,
    service_account: String,
}

impl Workload {
    pub fn new(config: &Configuration, context: &EnvironmentContext) -> Self {
        let app = config.app_name().to_string();
        let instance = match context.environment {
            Some(env) => format!("{}-{}", app, env),
            None => app.clone(),
        };
        Self {
            app,
            instance,
            namespace: context.namespace.clone(),
            service_account: config.service_account_name().to_string(),
        }
    }

    pub fn app(&self) -> &str {
        &self.app
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Selector labels: Deployment selector, pod template and Service
    /// selector all use exactly this map.
    pub fn selector_labels(&self) -> Labels {
        Labels::from([
            (LABEL_NAME.to_string(), self.app.clone()),
            (LABEL_INSTANCE.to_string(), self.instance.clone()),
            (LABEL_TIER.to_string(), TIER.to_string()),
            (LABEL_LAYER.to_string(), LAYER.to_string()),
        ])
    }

    /// Object labels: the selector labels plus `managed-by`.
    pub fn labels(&self) -> Labels {
        let mut labels = self.selector_labels();
        labels.insert(LABEL_MANAGED_BY.to_string(), MANAGED_BY.to_string());
        labels
    }

    pub fn deployment_name(&self) -> String {
        format!("{}-node", self.app)
    }

    pub fn container_name(&self) -> String {
        self.deployment_name()
    }

    pub fn service_name(&self) -> String {
        self.app.clone()
    }

    pub fn ingress_name(&self) -> String {
        self.app.clone()
    }

    pub fn config_map_name(&self) -> String {
        format!("{}-config", self.app)
    }

    pub fn secret_name(&self) -> String {
        format!("{}-secret", self.app)
    }

    pub fn quota_name(&self) -> String {
        format!("{}-quota", self.app)
    }

    pub fn vpa_name(&self) -> String {
        format!("{}-vpa", self.app)
    }

    pub fn service_account_name(&self) -> &str {
        &self.service_account
    }

    /// Metadata for a document of `kind` named `name`.
    ///
    /// Cluster-scoped kinds never get a namespace.
    pub fn metadata(&self, kind: ResourceKind, name: impl Into<String>) -> ObjectMeta {
        ObjectMeta {
            name: Some(name.into()),
            namespace: if kind.is_namespaced() {
                self.namespace.clone()
            } else {
                None
            },
            labels: Some(self.labels()),
            ..Default::default()
        }
    }
}
