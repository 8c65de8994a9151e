//! Resource builders, one per kind
//!
//! Each builder is a pure function of a [`BuildContext`]. The assembler asks
//! [`ResourceBuilder::applies`] first and only calls
//! [`ResourceBuilder::build`] when the document belongs in the set.

mod config;
mod deployment;
mod ingress;
mod namespace;
mod quota;
mod service;
mod service_account;
mod vpa;

pub use config::{ConfigMapBuilder, SecretBuilder};
pub use deployment::DeploymentBuilder;
pub use ingress::IngressBuilder;
pub use namespace::NamespaceBuilder;
pub use quota::ResourceQuotaBuilder;
pub use service::ServiceBuilder;
pub use service_account::ServiceAccountBuilder;
pub use vpa::VerticalPodAutoscalerBuilder;

use kgen_meta::Configuration;

use crate::document::{Document, ResourceKind};
use crate::environment::EnvironmentContext;
use crate::workload::Workload;

/// Everything a builder may read.
#[derive(Debug, Clone)]
pub struct BuildContext<'a> {
    pub config: &'a Configuration,
    pub environment: &'a EnvironmentContext,
    pub workload: Workload,
}

impl<'a> BuildContext<'a> {
    pub fn new(config: &'a Configuration, environment: &'a EnvironmentContext) -> Self {
        Self {
            config,
            environment,
            workload: Workload::new(config, environment),
        }
    }

    /// True when the context is a named deployment environment, which is
    /// what gates the ConfigMap and Secret (and the Deployment's env-from).
    pub fn has_environment_config(&self) -> bool {
        self.environment.environment.is_some()
    }
}

/// Trait for resource builders.
pub trait ResourceBuilder: Send + Sync {
    /// Kind of document this builder produces.
    fn kind(&self) -> ResourceKind;

    /// Whether the document belongs in the set for this context.
    fn applies(&self, ctx: &BuildContext<'_>) -> bool;

    /// Build the document. Only called when [`applies`](Self::applies) is
    /// true.
    fn build(&self, ctx: &BuildContext<'_>) -> Document;
}

/// Registry holding one builder per resource kind.
#[derive(Debug, Default)]
pub struct BuilderRegistry {
    namespace: NamespaceBuilder,
    service_account: ServiceAccountBuilder,
    config_map: ConfigMapBuilder,
    secret: SecretBuilder,
    deployment: DeploymentBuilder,
    service: ServiceBuilder,
    ingress: IngressBuilder,
    quota: ResourceQuotaBuilder,
    vpa: VerticalPodAutoscalerBuilder,
}

impl BuilderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the builder for a resource kind.
    pub fn get(&self, kind: ResourceKind) -> &dyn ResourceBuilder {
        match kind {
            ResourceKind::Namespace => &self.namespace,
            ResourceKind::ServiceAccount => &self.service_account,
            ResourceKind::ConfigMap => &self.config_map,
            ResourceKind::Secret => &self.secret,
            ResourceKind::Deployment => &self.deployment,
            ResourceKind::Service => &self.service,
            ResourceKind::Ingress => &self.ingress,
            ResourceKind::ResourceQuota => &self.quota,
            ResourceKind::VerticalPodAutoscaler => &self.vpa,
        }
    }

    /// Builders in emission order.
    pub fn in_order(&self) -> impl Iterator<Item = &dyn ResourceBuilder> {
        ResourceKind::ALL.into_iter().map(|kind| self.get(kind))
    }
}
