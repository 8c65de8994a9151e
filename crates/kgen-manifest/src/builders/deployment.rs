//! Deployment with its single application container

use std::collections::BTreeMap;

use k8s_openapi::api::apps::v1::{Deployment, DeploymentSpec};
use k8s_openapi::api::core::v1::{
    Capabilities, ConfigMapEnvSource, Container, ContainerPort, EnvFromSource,
    LocalObjectReference, PodSpec, PodTemplateSpec, ResourceRequirements, SecretEnvSource,
    SecurityContext,
};
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{LabelSelector, ObjectMeta};
use kgen_meta::ResourceSettings;

use crate::document::{Document, ResourceKind};

use super::{BuildContext, ResourceBuilder};

/// Name of the container port; the Service targets it by name.
pub const HTTP_PORT_NAME: &str = "http";

const PULL_POLICY: &str = "IfNotPresent";

#[derive(Debug, Default, Clone, Copy)]
pub struct DeploymentBuilder;

impl ResourceBuilder for DeploymentBuilder {
    fn kind(&self) -> ResourceKind {
        ResourceKind::Deployment
    }

    fn applies(&self, _ctx: &BuildContext<'_>) -> bool {
        true
    }

    fn build(&self, ctx: &BuildContext<'_>) -> Document {
        let workload = &ctx.workload;
        let config = ctx.config;
        let labels = workload.selector_labels();

        let container = Container {
            name: workload.container_name(),
            image: Some(format!(
                "{}:{}",
                config.image_repository(),
                ctx.environment.image_tag
            )),
            image_pull_policy: Some(PULL_POLICY.to_string()),
            ports: Some(vec![ContainerPort {
                name: Some(HTTP_PORT_NAME.to_string()),
                container_port: i32::from(config.container_port()),
                protocol: Some("TCP".to_string()),
                ..Default::default()
            }]),
            env_from: env_from(ctx),
            resources: resource_requirements(config.resources()),
            security_context: Some(restricted_security_context()),
            ..Default::default()
        };

        let service_account_name = (config.create_service_account()
            || config.service_account_override().is_some())
        .then(|| workload.service_account_name().to_string());

        let image_pull_secrets: Vec<LocalObjectReference> = config
            .image_pull_secrets()
            .iter()
            .map(|name| LocalObjectReference { name: name.clone() })
            .collect();

        Document::Deployment(Deployment {
            metadata: workload.metadata(self.kind(), workload.deployment_name()),
            spec: Some(DeploymentSpec {
                // Validation caps replicas at i32::MAX.
                replicas: Some(i32::try_from(config.replicas()).unwrap_or(i32::MAX)),
                selector: LabelSelector {
                    match_labels: Some(labels.clone()),
                    ..Default::default()
                },
                template: PodTemplateSpec {
                    metadata: Some(ObjectMeta {
                        labels: Some(labels),
                        ..Default::default()
                    }),
                    spec: Some(PodSpec {
                        service_account_name,
                        image_pull_secrets: (!image_pull_secrets.is_empty())
                            .then_some(image_pull_secrets),
                        containers: vec![container],
                        ..Default::default()
                    }),
                },
                ..Default::default()
            }),
            ..Default::default()
        })
    }
}

fn env_from(ctx: &BuildContext<'_>) -> Option<Vec<EnvFromSource>> {
    if !ctx.has_environment_config() {
        return None;
    }
    Some(vec![
        EnvFromSource {
            config_map_ref: Some(ConfigMapEnvSource {
                name: ctx.workload.config_map_name(),
                ..Default::default()
            }),
            ..Default::default()
        },
        EnvFromSource {
            secret_ref: Some(SecretEnvSource {
                name: ctx.workload.secret_name(),
                ..Default::default()
            }),
            ..Default::default()
        },
    ])
}

/// Requests and limits holding only the provided quantities.
fn resource_requirements(settings: &ResourceSettings) -> Option<ResourceRequirements> {
    fn sparse(
        cpu: &Option<String>,
        memory: &Option<String>,
    ) -> Option<BTreeMap<String, Quantity>> {
        let quantities: BTreeMap<String, Quantity> = [("cpu", cpu), ("memory", memory)]
            .into_iter()
            .filter_map(|(key, value)| value.clone().map(|v| (key.to_string(), Quantity(v))))
            .collect();
        (!quantities.is_empty()).then_some(quantities)
    }

    let requests = sparse(&settings.requests_cpu, &settings.requests_memory);
    let limits = sparse(&settings.limits_cpu, &settings.limits_memory);
    if requests.is_none() && limits.is_none() {
        return None;
    }
    Some(ResourceRequirements {
        requests,
        limits,
        ..Default::default()
    })
}

fn restricted_security_context() -> SecurityContext {
    SecurityContext {
        allow_privilege_escalation: Some(false),
        privileged: Some(false),
        run_as_non_root: Some(true),
        capabilities: Some(Capabilities {
            drop: Some(vec!["ALL".to_string()]),
            ..Default::default()
        }),
        ..Default::default()
    }
}
